//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 领域错误一律作为 [`Outcome`](crate::Outcome) 的失败载荷流转，本模块只承载“容器自身”的错误：
//!   访问错误与载荷转换错误。
//! - 两类错误都派生 `thiserror::Error`，在 `no_std + alloc` 下同样可用（依赖 `core::error::Error`）。
//!
//! ## 设计要求（What）
//! - 错误类型保留原始载荷，调用方可以取回而不是只得到一段文字；
//! - 不引入 `Send + Sync` 之外的额外约束，泛型参数由调用场景决定。

use thiserror::Error;

/// 在失败状态下读取 `Outcome<(), E>` 的成功值时携带的错误。
///
/// # 教案式说明
/// - **意图 (Why)**：`Outcome<(), E>` 没有可返回的成功载荷，读取它本质上是“确认没有失败”。
///   若确认失败，存储的错误通过本类型向外传递，而不是被静默丢弃。
/// - **契约 (What)**：
///   - 由 [`Outcome::check`](crate::Outcome::check) 以 `Err` 形式返回；
///   - 由 [`Outcome::raise`](crate::Outcome::raise) 作为 panic 载荷抛出，可通过
///     `std::panic::catch_unwind` 捕获并 `downcast` 取回；
///   - `error()` / `into_error()` 取回原始错误。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("bad outcome access: the outcome holds a failure")]
pub struct BadOutcomeAccess<E> {
    error: E,
}

impl<E> BadOutcomeAccess<E> {
    /// 以存储的错误构造访问错误。
    pub fn new(error: E) -> Self {
        Self { error }
    }

    /// 借用原始错误。
    pub fn error(&self) -> &E {
        &self.error
    }

    /// 取回原始错误。
    pub fn into_error(self) -> E {
        self.error
    }
}

/// 转换式赋值或构造过程中，载荷转换（`TryFrom`）失败。
///
/// # 契约说明（What）
/// - `Value`：成功载荷 `U -> T` 转换失败，携带 `T::Error`；
/// - `Error`：失败载荷 `G -> E` 转换失败，携带 `E::Error`；
/// - 返回该错误时，目标 `Outcome` 保持调用前的状态（强保证），详见
///   [`Outcome::try_assign`](crate::Outcome::try_assign)。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError<VE, EE> {
    /// 成功载荷转换失败。
    #[error("success payload conversion failed")]
    Value(VE),
    /// 失败载荷转换失败。
    #[error("failure payload conversion failed")]
    Error(EE),
}

impl<VE, EE> ConversionError<VE, EE> {
    /// 是否为成功载荷一侧的转换失败。
    pub fn is_value_side(&self) -> bool {
        matches!(self, ConversionError::Value(_))
    }
}
