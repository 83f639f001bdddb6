#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![allow(private_bounds)]
#![doc = "aio-core: 成败二元结果容器与统一挂起协议的核心契约。"]
#![doc = ""]
#![doc = "== 模块总览 =="]
#![doc = "1. [`outcome`]：`Outcome<T, E>` 结果容器、`Failure<E>` 失败包装器与单子组合子；"]
#![doc = "2. [`suspend`]：`is_ready` / `suspend` / `resume` 三步挂起协议、编译期解析宏 [`get_operator!`] 与类型擦除的续体句柄；"]
#![doc = "3. [`error`]：容器自身的错误类型（访问错误、载荷转换错误）。"]
#![doc = ""]
#![doc = "== 错误通道 =="]
#![doc = "领域内的预期失败只作为 `Outcome` 的失败载荷流转；前置条件违例 panic；续体收到未处理的取消时记录错误并终止进程。"]
#![doc = ""]
#![doc = "== 内存分配依赖 =="]
#![doc = "本 crate 面向 `no_std + alloc`：续体句柄基于 `Rc`，因此始终需要分配器。关闭 `std` Feature 后 `Outcome::raise` 不可用，致命路径改为 panic。"]

extern crate alloc;

mod fatal;
mod sealed;

pub mod error;
pub mod outcome;
pub mod prelude;
pub mod suspend;

pub use error::{BadOutcomeAccess, ConversionError};
pub use outcome::{Failure, Outcome, fail, fail_from, success, success_void};
pub use suspend::{ContinuationHandle, Operator};
