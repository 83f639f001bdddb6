//! 统一挂起协议与续体句柄。
//!
//! ## 设计目标（Why）
//! - 任意“可挂起的值”经 [`get_operator!`](crate::get_operator) 解析为 [`Operator`]，驱动方只面对
//!   `is_ready` / `suspend` / `resume` 三种能力；
//! - 挂起中的计算以 [`ContinuationHandle`] 暴露给驱动方，驱动方无需知道其具体类型。
//!
//! ## 契约说明（What）
//! - 单线程协作式调度：挂起点是唯一交出控制权的位置，恢复同步发生，时机由驱动方决定；
//! - 取消是显式、局部的：计算要么声明取消处理，要么在收到未处理取消时终止进程；
//! - 本模块不含调度器；[`OperatorFuture`] 只是把协议接到 Rust `Future` 执行器上的胶水层。
//!
//! ## 集成指引（How）
//! - 为自有类型实现 [`IntoOperator`]（成员钩子）或直接实现 [`Operator`]；
//! - 为外部类型在自有登记表上实现 [`OperatorAdapter`]（自由钩子），解析时以 `adapters = R` 指定；
//! - 驱动上下文实现 [`AwaitTransform`] 以改写操作数，解析时以 `context = &mut cx` 传入；
//! - 在挂起点调用 [`await_operator`]，或经 [`into_future`] 在 `async` 代码中 `.await`。

pub(crate) mod continuation;
mod future;
mod operator;
mod point;
mod resolve;

pub use continuation::{ContinuationHandle, Resumable, TypedContinuation};
pub use future::{OperatorFuture, into_future};
pub use operator::{
    Operator, OperatorOf, OutputOf, Ready, SuspendAlways, SuspendDecision, SuspendNever,
    SuspendResult, ready,
};
pub use point::{Awaited, await_operator};
#[doc(hidden)]
pub use resolve::__private;
pub use resolve::{
    AwaitTransform, IntoOperator, NoAdapters, OperatorAdapter, resolve_operator,
};
