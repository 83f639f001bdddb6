//! `Outcome<(), E>`：无成功载荷的特化。
//!
//! # 设计背景（Why）
//! - 只关心“是否失败”的操作没有可返回的成功值，读取它等价于确认没有失败；
//! - 若确认失败，存储的错误必须向外传递：[`check`](Outcome::check) 以 `Result` 返回，
//!   [`raise`](Outcome::raise) 以 panic 载荷抛出，后者是整个 crate 中唯一刻意使用异常风格信号的地方。

use super::{Outcome, storage::OutcomeStorage};
use crate::error::BadOutcomeAccess;

impl<E> Outcome<(), E> {
    /// 确认处于成功状态；失败时返回携带原始错误的 [`BadOutcomeAccess`]。
    ///
    /// # Errors
    /// 处于失败状态时返回 `Err(BadOutcomeAccess)`。
    ///
    /// # 示例
    /// ```rust
    /// use aio_core::{Outcome, fail, success_void};
    ///
    /// assert!(success_void::<&str>().check().is_ok());
    /// let failed: Outcome<(), &str> = fail("boom").into();
    /// assert_eq!(*failed.check().unwrap_err().error(), "boom");
    /// ```
    pub fn check(self) -> Result<(), BadOutcomeAccess<E>> {
        match self.storage {
            OutcomeStorage::Value(()) => Ok(()),
            OutcomeStorage::Error(error) => Err(BadOutcomeAccess::new(error)),
        }
    }

    /// 确认处于成功状态；失败时以 [`BadOutcomeAccess`] 为载荷 panic。
    ///
    /// # 契约说明（What）
    /// - 载荷经 `std::panic::panic_any` 抛出，可由 `catch_unwind` 捕获并
    ///   `downcast::<BadOutcomeAccess<E>>()` 取回原始错误；
    /// - 仅在 `std` Feature 下可用；`no_std` 调用方请使用 [`check`](Self::check)。
    ///
    /// # Panics
    /// 处于失败状态时 panic。
    #[cfg(feature = "std")]
    #[track_caller]
    pub fn raise(self)
    where
        E: Send + 'static,
    {
        if let Err(bad) = self.check() {
            std::panic::panic_any(bad);
        }
    }
}
