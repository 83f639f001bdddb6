//! 内部 sealed 模块用于控制外部扩展边界。
//!
//! # 设计背景（Why）
//! - 挂起步骤（`Operator::suspend`）的返回值只允许三种形态：`()`、`bool` 与续体句柄，
//!   外加显式的 [`SuspendDecision`](crate::suspend::SuspendDecision)。
//! - 通过私有的 `Sealed` 标记，调用方可以在签名中使用 [`SuspendResult`](crate::suspend::SuspendResult)，
//!   却无法为第四种类型实现它，从而保证驱动方只需处理固定的决策集合。
//!
//! # 契约说明（What）
//! - `Sealed` 仅对下列类型实现；新增实现等同于扩展挂起协议，必须同步更新
//!   [`SuspendDecision`](crate::suspend::SuspendDecision) 的文档。
use crate::suspend::{ContinuationHandle, SuspendDecision};

pub(crate) trait Sealed {}

impl Sealed for () {}
impl Sealed for bool {}
impl Sealed for ContinuationHandle {}
impl Sealed for SuspendDecision {}
