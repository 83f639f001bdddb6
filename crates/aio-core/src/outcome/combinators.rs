//! Outcome 的单子组合子。
//!
//! # 契约说明（What）
//! - `and_then`：成功时返回 `f(载荷)`，其结果必须是错误类型相同的 `Outcome`；失败时短路，不调用 `f`；
//! - `or_else`：`and_then` 在失败一侧的对偶；
//! - `transform`：成功时把 `f(载荷)` 的返回值包装为新的成功载荷；失败时原样传播错误；
//! - `transform_error`：`transform` 在失败一侧的对偶。
//!
//! 每个组合子有三种形态：
//! - 按值（消费 `self`）：未被调用的一侧直接移动进结果；
//! - `_ref`（`&self`）：闭包收到 `&T`/`&E`，未被调用的一侧克隆进结果；
//! - `_mut`（`&mut self`）：闭包收到 `&mut T`/`&mut E`，可原地修改后再产出结果。

use super::{Failure, Outcome, storage::OutcomeStorage};

impl<T, E> Outcome<T, E> {
    /// 成功时继续执行 `f`，失败时短路。
    ///
    /// # 示例
    /// ```rust
    /// use aio_core::{Outcome, success};
    ///
    /// let r: Outcome<i32, String> = success(5);
    /// assert_eq!(r.and_then(|x| success(x + 1)), success(6));
    /// ```
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self.storage {
            OutcomeStorage::Value(value) => f(value),
            OutcomeStorage::Error(error) => Outcome::failure(Failure::new(error)),
        }
    }

    /// [`and_then`](Self::and_then) 的共享引用形态。
    pub fn and_then_ref<U>(&self, f: impl FnOnce(&T) -> Outcome<U, E>) -> Outcome<U, E>
    where
        E: Clone,
    {
        match &self.storage {
            OutcomeStorage::Value(value) => f(value),
            OutcomeStorage::Error(error) => Outcome::failure(Failure::new(error.clone())),
        }
    }

    /// [`and_then`](Self::and_then) 的可变引用形态。
    pub fn and_then_mut<U>(&mut self, f: impl FnOnce(&mut T) -> Outcome<U, E>) -> Outcome<U, E>
    where
        E: Clone,
    {
        match &mut self.storage {
            OutcomeStorage::Value(value) => f(value),
            OutcomeStorage::Error(error) => Outcome::failure(Failure::new(error.clone())),
        }
    }

    /// 失败时继续执行 `f`，成功时短路。
    pub fn or_else<G>(self, f: impl FnOnce(E) -> Outcome<T, G>) -> Outcome<T, G> {
        match self.storage {
            OutcomeStorage::Value(value) => Outcome::success(value),
            OutcomeStorage::Error(error) => f(error),
        }
    }

    /// [`or_else`](Self::or_else) 的共享引用形态。
    pub fn or_else_ref<G>(&self, f: impl FnOnce(&E) -> Outcome<T, G>) -> Outcome<T, G>
    where
        T: Clone,
    {
        match &self.storage {
            OutcomeStorage::Value(value) => Outcome::success(value.clone()),
            OutcomeStorage::Error(error) => f(error),
        }
    }

    /// [`or_else`](Self::or_else) 的可变引用形态。
    pub fn or_else_mut<G>(&mut self, f: impl FnOnce(&mut E) -> Outcome<T, G>) -> Outcome<T, G>
    where
        T: Clone,
    {
        match &mut self.storage {
            OutcomeStorage::Value(value) => Outcome::success(value.clone()),
            OutcomeStorage::Error(error) => f(error),
        }
    }

    /// 成功时以 `f` 的返回值作为新的成功载荷；失败时原样传播错误。
    pub fn transform<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        Outcome::from_storage(self.storage.map_parts(f, |error| error))
    }

    /// [`transform`](Self::transform) 的共享引用形态。
    pub fn transform_ref<U>(&self, f: impl FnOnce(&T) -> U) -> Outcome<U, E>
    where
        E: Clone,
    {
        match &self.storage {
            OutcomeStorage::Value(value) => Outcome::success(f(value)),
            OutcomeStorage::Error(error) => Outcome::failure(Failure::new(error.clone())),
        }
    }

    /// [`transform`](Self::transform) 的可变引用形态。
    pub fn transform_mut<U>(&mut self, f: impl FnOnce(&mut T) -> U) -> Outcome<U, E>
    where
        E: Clone,
    {
        match &mut self.storage {
            OutcomeStorage::Value(value) => Outcome::success(f(value)),
            OutcomeStorage::Error(error) => Outcome::failure(Failure::new(error.clone())),
        }
    }

    /// 失败时以 `f` 的返回值作为新的错误；成功时原样传播载荷。
    pub fn transform_error<G>(self, f: impl FnOnce(E) -> G) -> Outcome<T, G> {
        Outcome::from_storage(self.storage.map_parts(|value| value, f))
    }

    /// [`transform_error`](Self::transform_error) 的共享引用形态。
    pub fn transform_error_ref<G>(&self, f: impl FnOnce(&E) -> G) -> Outcome<T, G>
    where
        T: Clone,
    {
        match &self.storage {
            OutcomeStorage::Value(value) => Outcome::success(value.clone()),
            OutcomeStorage::Error(error) => Outcome::failure(Failure::new(f(error))),
        }
    }

    /// [`transform_error`](Self::transform_error) 的可变引用形态。
    pub fn transform_error_mut<G>(&mut self, f: impl FnOnce(&mut E) -> G) -> Outcome<T, G>
    where
        T: Clone,
    {
        match &mut self.storage {
            OutcomeStorage::Value(value) => Outcome::success(value.clone()),
            OutcomeStorage::Error(error) => Outcome::failure(Failure::new(f(error))),
        }
    }
}
