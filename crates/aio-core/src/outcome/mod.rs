//! 成败二元结果容器 [`Outcome`] 的权威锚点模块。
//!
//! ## 设计目标（Why）
//! - **两条错误通道分离**：领域内“预期中的失败”只作为 `Outcome` 的失败载荷流转，
//!   从不以 panic 形式抛出；编程错误才走 panic/abort。
//! - **不与标准库冲突**：类型命名为 `Outcome`，crate 自身的可失败 API 继续使用 `core::result::Result`。
//!
//! ## 契约说明（What）
//! - `Outcome<T, E>` 任意时刻恰好持有一个存活载荷：成功载荷 `T` 或失败载荷 `E`；
//! - `Outcome<(), E>` 是“无成功载荷”的特化，额外提供 [`Outcome::check`] 与 [`Outcome::raise`]；
//! - 失败状态只能经由 [`Failure`] 构造，避免 `T == E` 时的二义性，也避免从裸值意外嵌套出
//!   `Outcome<Outcome<..>, _>`：本类型不提供 `From<T>`，成功状态只能显式经由 [`success`] 或
//!   [`Outcome::success`] 构造；
//! - 组合子（`and_then`/`or_else`/`transform`/`transform_error`）是失败传播的唯一推荐方式，
//!   每个都提供按值（消费）、按共享引用（`_ref`）与按可变引用（`_mut`）三种形态。
//!
//! ## 集成指引（How）
//! - 与标准库互转：`Outcome::from(result)` / `outcome.into_result()`，之后即可使用 `?`；
//! - 读取访问器前须先检查 [`Outcome::has_value`]，或改用 `value_or`/组合子。

mod combinators;
mod failure;
mod storage;
mod unit;

use core::fmt;

pub use failure::{Failure, fail, fail_from};
use storage::OutcomeStorage;

use crate::error::ConversionError;

/// 判别式成败容器。
///
/// # 契约维度速览
/// - **语义**：`Success(T)` 或 `Failure(E)` 二选一，由 [`has_value`](Self::has_value) 报告；
/// - **所有权**：独占其存活载荷，不共享、无反向引用；
/// - **并发**：纯值类型，内部无同步；遵循与普通值相同的跨线程规则（`Send`/`Sync` 随载荷推导）；
/// - **复制**：`T`、`E` 均为 `Copy` 时自身为 `Copy`，否则 `Clone` 的 `clone_from` 按四种情形赋值，
///   详见存储层文档。
///
/// # 示例
/// ```rust
/// use aio_core::{Outcome, fail, success};
///
/// let doubled: Outcome<i32, String> = success(21).transform(|x: i32| x * 2);
/// assert_eq!(*doubled.value(), 42);
///
/// let failed: Outcome<i32, String> = fail(String::from("boom")).into();
/// let untouched = failed.transform(|x: i32| x * 2);
/// assert_eq!(untouched.error(), "boom");
/// ```
#[must_use]
#[derive(Copy, PartialEq, Eq, Hash)]
pub struct Outcome<T, E> {
    storage: OutcomeStorage<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// 就地构造成功状态。
    pub fn success(value: T) -> Self {
        Self::from_storage(OutcomeStorage::construct_success(value))
    }

    /// 由 [`Failure`] 构造失败状态。
    pub fn failure(failure: Failure<E>) -> Self {
        Self::from_storage(OutcomeStorage::construct_failure(failure))
    }

    pub(crate) fn from_storage(storage: OutcomeStorage<T, E>) -> Self {
        Self { storage }
    }

    /// 由兼容的 `Outcome<U, G>` 转换构造，保持存活的一侧，只转换该侧载荷。
    ///
    /// `From` 对应无损的“隐式”转换；可能失败的转换请使用 [`try_convert_from`](Self::try_convert_from)。
    pub fn convert_from<U, G>(source: Outcome<U, G>) -> Self
    where
        T: From<U>,
        E: From<G>,
    {
        Self::from_storage(source.storage.map_parts(T::from, E::from))
    }

    /// 显式的可失败转换构造。
    ///
    /// # Errors
    /// 存活一侧的 `TryFrom` 失败时返回 [`ConversionError`]，并指明失败的一侧。
    #[allow(clippy::type_complexity)]
    pub fn try_convert_from<U, G>(
        source: Outcome<U, G>,
    ) -> Result<Self, ConversionError<<T as TryFrom<U>>::Error, <E as TryFrom<G>>::Error>>
    where
        T: TryFrom<U>,
        E: TryFrom<G>,
    {
        match source.storage {
            OutcomeStorage::Value(value) => T::try_from(value)
                .map(Self::success)
                .map_err(ConversionError::Value),
            OutcomeStorage::Error(error) => E::try_from(error)
                .map(|error| Self::failure(Failure::new(error)))
                .map_err(ConversionError::Error),
        }
    }

    /// 是否处于成功状态。
    pub fn has_value(&self) -> bool {
        self.storage.has_value()
    }

    /// 是否处于失败状态。
    pub fn is_failure(&self) -> bool {
        !self.storage.has_value()
    }

    /// 借用成功载荷。
    ///
    /// # Panics
    /// 处于失败状态时 panic：调用前须确认 [`has_value`](Self::has_value)。
    /// panic 信息不携带失败载荷；`Outcome<(), E>` 请改用 [`check`](Outcome::check) 取回错误，
    /// 或用 [`raise`](Outcome::raise) 以错误本身作为 panic 载荷。
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.storage.value() {
            Some(value) => value,
            None => panic!("called `Outcome::value()` on a failure outcome"),
        }
    }

    /// 可变借用成功载荷。
    ///
    /// # Panics
    /// 处于失败状态时 panic。
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self.storage.value_mut() {
            Some(value) => value,
            None => panic!("called `Outcome::value_mut()` on a failure outcome"),
        }
    }

    /// 取出成功载荷。
    ///
    /// # Panics
    /// 处于失败状态时 panic。
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.storage {
            OutcomeStorage::Value(value) => value,
            OutcomeStorage::Error(_) => panic!("called `Outcome::into_value()` on a failure outcome"),
        }
    }

    /// 借用失败载荷。
    ///
    /// # Panics
    /// 处于成功状态时 panic。
    #[track_caller]
    pub fn error(&self) -> &E {
        match self.storage.error() {
            Some(error) => error,
            None => panic!("called `Outcome::error()` on a success outcome"),
        }
    }

    /// 可变借用失败载荷。
    ///
    /// # Panics
    /// 处于成功状态时 panic。
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match self.storage.error_mut() {
            Some(error) => error,
            None => panic!("called `Outcome::error_mut()` on a success outcome"),
        }
    }

    /// 取出失败载荷。
    ///
    /// # Panics
    /// 处于成功状态时 panic。
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.storage {
            OutcomeStorage::Error(error) => error,
            OutcomeStorage::Value(_) => panic!("called `Outcome::into_error()` on a success outcome"),
        }
    }

    /// 以引用视图借出，状态不变。
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        Outcome::from_storage(match &self.storage {
            OutcomeStorage::Value(value) => OutcomeStorage::Value(value),
            OutcomeStorage::Error(error) => OutcomeStorage::Error(error),
        })
    }

    /// 以可变引用视图借出，状态不变。
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        Outcome::from_storage(match &mut self.storage {
            OutcomeStorage::Value(value) => OutcomeStorage::Value(value),
            OutcomeStorage::Error(error) => OutcomeStorage::Error(error),
        })
    }

    /// 返回成功载荷的副本，失败时返回调用方提供的回退值；从不 panic。
    pub fn value_or(&self, default: impl Into<T>) -> T
    where
        T: Clone,
    {
        match self.storage.value() {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// 消费自身，返回成功载荷或回退值。
    pub fn into_value_or(self, default: impl Into<T>) -> T {
        match self.storage {
            OutcomeStorage::Value(value) => value,
            OutcomeStorage::Error(_) => default.into(),
        }
    }

    /// 返回失败载荷的副本，成功时返回调用方提供的回退值；从不 panic。
    pub fn error_or(&self, default: impl Into<E>) -> E
    where
        E: Clone,
    {
        match self.storage.error() {
            Some(error) => error.clone(),
            None => default.into(),
        }
    }

    /// 消费自身，返回失败载荷或回退值。
    pub fn into_error_or(self, default: impl Into<E>) -> E {
        match self.storage {
            OutcomeStorage::Error(error) => error,
            OutcomeStorage::Value(_) => default.into(),
        }
    }

    /// 丢弃当前存活载荷，放入新的成功载荷并返回其引用。
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.storage.emplace(value)
    }

    /// 先由 `make` 构造新的成功载荷，再丢弃旧状态。
    ///
    /// 若 `make` panic，旧状态保持不变。
    pub fn emplace_with(&mut self, make: impl FnOnce() -> T) -> &mut T {
        let value = make();
        self.storage.emplace(value)
    }

    /// 以另一个同类型 `Outcome` 覆盖自身（移动赋值）。
    pub fn assign(&mut self, source: Self) {
        self.storage.assign(source.storage);
    }

    /// 以成功载荷覆盖自身。
    pub fn assign_value(&mut self, value: T) {
        self.storage.assign_value(value);
    }

    /// 以失败载荷覆盖自身，错误经 `Into` 转换。
    pub fn assign_failure<G>(&mut self, failure: Failure<G>)
    where
        G: Into<E>,
    {
        self.storage.assign_error(failure.into_error().into());
    }

    /// 由兼容的 `Outcome<U, G>` 做转换式赋值，具备强保证。
    ///
    /// # 执行步骤（How）
    /// 1. 在临时位置完成存活一侧的 `TryFrom` 转换；
    /// 2. 转换成功后才提交到自身，旧载荷此时才被丢弃。
    ///
    /// # Errors
    /// 转换失败时返回 [`ConversionError`]，自身保持调用前的状态。
    #[allow(clippy::type_complexity)]
    pub fn try_assign<U, G>(
        &mut self,
        source: Outcome<U, G>,
    ) -> Result<(), ConversionError<<T as TryFrom<U>>::Error, <E as TryFrom<G>>::Error>>
    where
        T: TryFrom<U>,
        E: TryFrom<G>,
    {
        self.storage
            .try_assign_with(source.storage, T::try_from, E::try_from)
    }

    /// 与另一个 `Outcome` 交换内容，适用于成功/失败的任意组合。
    ///
    /// 交换是自身的逆操作：`a.swap(&mut b); b.swap(&mut a);` 恢复两者原状。
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
    }

    /// 转为标准库 `Result`，便于使用 `?` 传播。
    pub fn into_result(self) -> Result<T, E> {
        self.storage.into_result()
    }

    /// 处于成功状态且载荷等于 `value`。
    pub fn value_eq<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.storage.value().is_some_and(|held| held == value)
    }

    /// 处于失败状态且错误等于 `error`。
    pub fn error_eq<G: ?Sized>(&self, error: &G) -> bool
    where
        E: PartialEq<G>,
    {
        self.storage.error().is_some_and(|held| held == error)
    }

    /// 与载荷类型不同的 `Outcome` 比较：状态相同且存活载荷相等。
    ///
    /// `==` 只比较同类型的 `Outcome`，`assert_eq!(r, success(3))` 这类写法才能推导出
    /// `success` 的类型参数；跨类型比较走本方法。
    ///
    /// # 示例
    /// ```rust
    /// use aio_core::{Outcome, fail, success};
    ///
    /// let owned: Outcome<u8, String> = fail(String::from("e")).into();
    /// let borrowed: Outcome<u8, &str> = fail("e").into();
    /// assert!(owned.outcome_eq(&borrowed));
    /// assert!(!owned.outcome_eq(&success::<u8, &str>(1)));
    /// ```
    pub fn outcome_eq<T2, E2>(&self, other: &Outcome<T2, E2>) -> bool
    where
        T: PartialEq<T2>,
        E: PartialEq<E2>,
    {
        match (&self.storage, &other.storage) {
            (OutcomeStorage::Value(lhs), OutcomeStorage::Value(rhs)) => lhs == rhs,
            (OutcomeStorage::Error(lhs), OutcomeStorage::Error(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<T: Default, E> Default for Outcome<T, E> {
    fn default() -> Self {
        Self::success(T::default())
    }
}

impl<T: Clone, E: Clone> Clone for Outcome<T, E> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            OutcomeStorage::Value(value) => f.debug_tuple("Success").field(value).finish(),
            OutcomeStorage::Error(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    fn from(failure: Failure<E>) -> Self {
        Self::failure(failure)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(Failure::new(error)),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E, E2> PartialEq<Failure<E2>> for Outcome<T, E>
where
    E: PartialEq<E2>,
{
    fn eq(&self, failure: &Failure<E2>) -> bool {
        self.error_eq(failure.error())
    }
}

/// 构造成功状态的 `Outcome`。
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::success(value)
}

/// 构造无成功载荷（`()`）的成功状态。
pub fn success_void<E>() -> Outcome<(), E> {
    Outcome::from_storage(OutcomeStorage::construct_void())
}
