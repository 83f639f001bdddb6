//! 失败包装器 [`Failure`] 与配套的辅助构造函数。
//!
//! # 设计背景（Why）
//! - 当 `T` 与 `E` 恰好是同一类型（例如都为 `String`）时，仅凭一个裸值无法判断调用方想构造成功还是失败。
//! - `Failure<E>` 把“这是错误载荷”写进类型里，[`Outcome`](super::Outcome) 只从它构造失败状态。
//!
//! # 契约说明（What）
//! - `Failure<E>` 恰好持有一个 `E`，没有默认状态；
//! - 相等性完全委托给 `E`，并允许与 `Failure<E2>` 比较（只要 `E: PartialEq<E2>`）；
//! - `Failure` 本身不是 `Outcome`，需要经由 `From`/`Outcome::failure` 进入容器。

use core::mem;

/// 标记“错误载荷”的包装器。
#[derive(Debug, Clone, Copy, Eq, Hash)]
pub struct Failure<E> {
    error: E,
}

impl<E> Failure<E> {
    /// 以错误值构造。
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// 借用错误。
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// 可变借用错误。
    pub fn error_mut(&mut self) -> &mut E {
        &mut self.error
    }

    /// 取回错误。
    pub fn into_error(self) -> E {
        self.error
    }

    /// 与另一个包装器交换错误值。
    pub fn swap(&mut self, other: &mut Failure<E>) {
        mem::swap(&mut self.error, &mut other.error);
    }

    /// 将错误转换为另一种类型，保持“失败”语义不变。
    pub fn map<G>(self, f: impl FnOnce(E) -> G) -> Failure<G> {
        Failure::new(f(self.error))
    }
}

impl<E, E2> PartialEq<Failure<E2>> for Failure<E>
where
    E: PartialEq<E2>,
{
    fn eq(&self, other: &Failure<E2>) -> bool {
        self.error == other.error
    }
}

/// 构造失败包装器：`fail(e)` 等价于 `Failure::new(e)`。
///
/// # 示例
/// ```rust
/// use aio_core::{Outcome, fail};
///
/// let r: Outcome<i32, &str> = fail("boom").into();
/// assert!(!r.has_value());
/// assert_eq!(*r.error(), "boom");
/// ```
pub fn fail<E>(error: E) -> Failure<E> {
    Failure::new(error)
}

/// 由构造参数就地构造错误：`fail_from::<E, _>(args)` 等价于 `Failure::new(E::from(args))`。
///
/// 多参数构造可将参数打包为元组，并为 `E` 实现 `From<(A, B, ..)>`。
pub fn fail_from<E, A>(args: A) -> Failure<E>
where
    E: From<A>,
{
    Failure::new(E::from(args))
}
