//! 不可恢复条件的统一出口。
//!
//! 这里的每个函数都表示逻辑缺陷而非可恢复错误：先以 `error` 级别记录结构化事件，
//! 再终止进程（`std`）或 panic（`no_std`，由目标平台的 panic handler 决定后续行为）。

use crate::suspend::continuation::TARGET;

/// 续体被要求处理取消，但其计算类型没有声明取消处理逻辑。
#[cold]
#[inline(never)]
pub(crate) fn abort_unhandled_stop(computation: &str) -> ! {
    tracing::error!(
        target: TARGET,
        computation,
        "unhandled cancellation: computation declares no stop handler; aborting"
    );
    #[cfg(feature = "std")]
    std::process::abort();
    #[cfg(not(feature = "std"))]
    panic!("unhandled cancellation for `{computation}`");
}
