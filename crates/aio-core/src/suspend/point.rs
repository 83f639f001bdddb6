//! 单个挂起点上的等待算法。

use super::{
    continuation::ContinuationHandle,
    operator::{Operator, SuspendDecision, SuspendResult},
    resolve::TARGET,
};

/// 在一个挂起点上等待操作的结果。
#[must_use]
pub enum Awaited<O: Operator> {
    /// 未向外交出控制权，结果已就绪：`is_ready` 为真，或 `suspend` 取消了挂起。
    Complete(O::Output),
    /// 真正挂起；续体被恢复后调用 `operator.resume()` 取结果。
    Suspended(O),
    /// 对称转移：调用方应当恢复 `next`，而不是把控制权交回驱动方。
    Transferred {
        /// 仍在等待的操作。
        operator: O,
        /// 接下来应当运行的续体。
        next: ContinuationHandle,
    },
}

impl<O: Operator> Awaited<O> {
    /// 是否已经得到结果。
    pub fn is_complete(&self) -> bool {
        matches!(self, Awaited::Complete(_))
    }

    /// 取出已就绪的结果；挂起或转移时返回 `None`。
    pub fn completed(self) -> Option<O::Output> {
        match self {
            Awaited::Complete(output) => Some(output),
            Awaited::Suspended(_) | Awaited::Transferred { .. } => None,
        }
    }
}

/// 对一个已解析的操作执行等待算法。
///
/// # 逻辑解析（How）
/// 1. `is_ready()` 为真：直接 `resume()`，不挂起；
/// 2. 否则以 `awaiting` 的副本调用 `suspend`，按 [`SuspendDecision`] 分派：
///    - `Suspended`：返回 [`Awaited::Suspended`]，等待外部恢复；
///    - `Resume`：同步 `resume()`，返回 [`Awaited::Complete`]；
///    - `Transfer(next)`：返回 [`Awaited::Transferred`]，由调用方恢复 `next`。
///
/// # 示例
/// ```rust
/// use aio_core::suspend::{Awaited, ContinuationHandle, await_operator, ready};
///
/// let me = ContinuationHandle::noop();
/// match await_operator(ready("done"), &me) {
///     Awaited::Complete(value) => assert_eq!(value, "done"),
///     _ => unreachable!(),
/// }
/// ```
pub fn await_operator<O: Operator>(mut operator: O, awaiting: &ContinuationHandle) -> Awaited<O> {
    if operator.is_ready() {
        tracing::trace!(target: TARGET, "operator ready; skipping suspension");
        return Awaited::Complete(operator.resume());
    }
    let decision = operator.suspend(awaiting.clone()).into_decision();
    tracing::trace!(target: TARGET, decision = decision.label(), "operator suspended");
    match decision {
        SuspendDecision::Suspended => Awaited::Suspended(operator),
        SuspendDecision::Resume => Awaited::Complete(operator.resume()),
        SuspendDecision::Transfer(next) => Awaited::Transferred { operator, next },
    }
}
