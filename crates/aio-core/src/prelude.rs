//! # aio-core Prelude
//!
//! ## 教案级说明（Why）
//! - 为调用方提供稳定、浅路径的导入入口：`use aio_core::prelude::*;` 即可获得结果容器、
//!   挂起协议 trait 与常用构造函数；
//! - 仅收录跨模块高频使用的条目，错误类型与内部探针仍需显式路径导入。
//!
//! ## 契约定义（What）
//! - 纯 re-export，不引入额外代码路径；
//! - 新增导出遵循 SemVer，可向后兼容；移除导出视为破坏性变更。

pub use crate::get_operator;
pub use crate::outcome::{Failure, Outcome, fail, fail_from, success, success_void};
pub use crate::suspend::{
    AwaitTransform, Awaited, ContinuationHandle, IntoOperator, Operator, OperatorAdapter,
    Resumable, SuspendDecision, await_operator, into_future, ready, resolve_operator,
};
