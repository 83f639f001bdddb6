//! 三步挂起协议：`is_ready` / `suspend` / `resume`。
//!
//! # 设计背景（Why）
//! - 任何可挂起的操作最终都被归一化为一个实现 [`Operator`] 的值，驱动方只面对这一种形状；
//! - `suspend` 的返回值限定为三种语义：真正挂起、立即取消挂起、对称转移到另一个续体。
//!   这三种语义统一收敛到 [`SuspendDecision`]，返回类型由密封 trait [`SuspendResult`] 约束。
//!
//! # 契约说明（What）
//! | `suspend` 返回类型 | 含义 |
//! | --- | --- |
//! | `()` | 真正挂起，由外部驱动方之后通过续体恢复 |
//! | `bool` | `true` 等同于 `()`；`false` 表示取消挂起，调用方同步取结果，不向外交出控制权 |
//! | [`ContinuationHandle`] | 对称转移：控制权直接交给该续体，而不是回到原驱动方 |
//! | [`SuspendDecision`] | 以上三者的显式写法 |

use super::continuation::ContinuationHandle;
use super::resolve::IntoOperator;
use crate::sealed::Sealed;

/// `suspend` 的归一化决策。
#[derive(Debug, Clone)]
pub enum SuspendDecision {
    /// 真正挂起。
    Suspended,
    /// 取消挂起，立即取结果。
    Resume,
    /// 对称转移到给定续体。
    Transfer(ContinuationHandle),
}

impl SuspendDecision {
    /// 本决策是否把控制权交还给外部。
    pub fn yields_control(&self) -> bool {
        !matches!(self, SuspendDecision::Resume)
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            SuspendDecision::Suspended => "suspended",
            SuspendDecision::Resume => "resume",
            SuspendDecision::Transfer(_) => "transfer",
        }
    }
}

/// `suspend` 允许的返回类型，仅对 `()`、`bool`、[`ContinuationHandle`] 与 [`SuspendDecision`] 实现。
pub trait SuspendResult: Sealed {
    /// 归一化为 [`SuspendDecision`]。
    fn into_decision(self) -> SuspendDecision;
}

impl SuspendResult for () {
    fn into_decision(self) -> SuspendDecision {
        SuspendDecision::Suspended
    }
}

impl SuspendResult for bool {
    fn into_decision(self) -> SuspendDecision {
        if self {
            SuspendDecision::Suspended
        } else {
            SuspendDecision::Resume
        }
    }
}

impl SuspendResult for ContinuationHandle {
    fn into_decision(self) -> SuspendDecision {
        SuspendDecision::Transfer(self)
    }
}

impl SuspendResult for SuspendDecision {
    fn into_decision(self) -> SuspendDecision {
        self
    }
}

/// 归一化后的可挂起操作。
///
/// # 教案式说明
/// - **意图 (Why)**：把“能否跳过挂起”“挂起时做什么”“恢复后产出什么”拆成三个独立能力，
///   驱动方据此实现统一的等待算法（见 [`await_operator`](super::await_operator)）。
/// - **契约 (What)**：
///   - `is_ready` 返回 `true` 时调用方跳过挂起，直接调用 `resume`；
///   - `suspend` 只在 `is_ready` 返回 `false` 后调用，至多一次；参数是等待方自身的续体；
///   - `resume` 消费操作，产出最终结果。
/// - **风险 (Trade-offs)**：`resume` 按值消费，意味着同一个操作不能被等待两次；需要重复等待的类型
///   应通过 [`IntoOperator`](super::IntoOperator) 每次产出新的操作。
pub trait Operator {
    /// 恢复后产出的值。
    type Output;
    /// `suspend` 的返回类型。
    type Suspend: SuspendResult;

    /// 是否可以跳过挂起。
    fn is_ready(&self) -> bool;

    /// 挂起发生时调用。
    fn suspend(&mut self, awaiting: ContinuationHandle) -> Self::Suspend;

    /// 产出结果。
    fn resume(self) -> Self::Output;
}

/// 产出类型为 `T` 的操作。
pub trait OperatorOf<T>: Operator<Output = T> {}

impl<O, T> OperatorOf<T> for O where O: Operator<Output = T> {}

/// 操作恢复后产出的类型。
pub type OutputOf<O> = <O as Operator>::Output;

/// 总是挂起的操作。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuspendAlways;

impl Operator for SuspendAlways {
    type Output = ();
    type Suspend = ();

    fn is_ready(&self) -> bool {
        false
    }

    fn suspend(&mut self, _awaiting: ContinuationHandle) {}

    fn resume(self) {}
}

/// 从不挂起的操作。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuspendNever;

impl Operator for SuspendNever {
    type Output = ();
    type Suspend = ();

    fn is_ready(&self) -> bool {
        true
    }

    fn suspend(&mut self, _awaiting: ContinuationHandle) {}

    fn resume(self) {}
}

/// 已经就绪的值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ready<T> {
    value: T,
}

/// 构造已就绪的操作。
pub fn ready<T>(value: T) -> Ready<T> {
    Ready { value }
}

impl<T> Operator for Ready<T> {
    type Output = T;
    type Suspend = bool;

    fn is_ready(&self) -> bool {
        true
    }

    fn suspend(&mut self, _awaiting: ContinuationHandle) -> bool {
        false
    }

    fn resume(self) -> T {
        self.value
    }
}

// 内置操作的成员钩子即自身，使其满足泛型代码中的 `IntoOperator` 约束。
impl IntoOperator for SuspendAlways {
    type Operator = Self;

    fn into_operator(self) -> Self {
        self
    }
}

impl IntoOperator for SuspendNever {
    type Operator = Self;

    fn into_operator(self) -> Self {
        self
    }
}

impl<T> IntoOperator for Ready<T> {
    type Operator = Self;

    fn into_operator(self) -> Self {
        self
    }
}
