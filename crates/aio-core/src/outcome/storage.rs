//! Outcome 的底层存储：判别式与唯一存活载荷合为一个原生枚举。
//!
//! # 设计背景（Why）
//! - 存储层负责构造、复制、赋值与交换的全部状态迁移，公开类型 [`Outcome`](super::Outcome)
//!   只在其上叠加访问器与组合子。
//! - 以 `enum` 表达“二选一”，判别式与存活成员天然一致：任何代码路径都不可能观察或析构非存活成员，
//!   `Drop`/移动由语言规则自动完成；当 `T`、`E` 均为 `Copy` 时整个存储也是 `Copy`。
//!
//! # 逻辑解析（How）
//! - **复制赋值**（`clone_from`）与**移动赋值**（[`assign`](OutcomeStorage::assign)）按
//!   （源状态，目标状态）分四种情形：
//!   1. 双方成功：委托给 `T` 的赋值；
//!   2. 双方失败：委托给 `E` 的赋值；
//!   3. 目标成功、源失败：先在临时位置构造好新的 `E`，再整体替换目标；
//!   4. 目标失败、源成功：与 3 对称。
//! - 情形 3/4 中“先构造、后提交”保证：若构造过程 panic（例如 `Clone` 失败），目标仍完整持有原状态。
//! - **转换式赋值**（[`try_assign_with`](OutcomeStorage::try_assign_with)）把可能失败的构造步骤
//!   建模为 `Result`，转换失败时目标不变并返回 [`ConversionError`]。
//! - **交换**（[`swap`](OutcomeStorage::swap)）分三种情形：同为成功、同为失败、一成一败。
//!   载荷移动在 Rust 中不会失败，因此三种情形都必然完成，双方恰好互换原始内容。
//!
//! # 契约说明（What）
//! - 任意可观察时刻都恰有一个存活载荷；
//! - 返回 `Err` 或发生 panic 的操作都不会留下“半析构”的目标。

use core::mem;

use super::failure::Failure;
use crate::error::ConversionError;

const TARGET: &str = "aio_core::outcome";

#[derive(Copy, PartialEq, Eq, Hash)]
pub(crate) enum OutcomeStorage<T, E> {
    Value(T),
    Error(E),
}

impl<T, E> OutcomeStorage<T, E> {
    pub(crate) fn construct_success(value: T) -> Self {
        OutcomeStorage::Value(value)
    }

    pub(crate) fn construct_failure(failure: Failure<E>) -> Self {
        OutcomeStorage::Error(failure.into_error())
    }

    pub(crate) fn has_value(&self) -> bool {
        matches!(self, OutcomeStorage::Value(_))
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            OutcomeStorage::Value(value) => Some(value),
            OutcomeStorage::Error(_) => None,
        }
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            OutcomeStorage::Value(value) => Some(value),
            OutcomeStorage::Error(_) => None,
        }
    }

    pub(crate) fn error(&self) -> Option<&E> {
        match self {
            OutcomeStorage::Value(_) => None,
            OutcomeStorage::Error(error) => Some(error),
        }
    }

    pub(crate) fn error_mut(&mut self) -> Option<&mut E> {
        match self {
            OutcomeStorage::Value(_) => None,
            OutcomeStorage::Error(error) => Some(error),
        }
    }

    pub(crate) fn into_result(self) -> Result<T, E> {
        match self {
            OutcomeStorage::Value(value) => Ok(value),
            OutcomeStorage::Error(error) => Err(error),
        }
    }

    /// 移动赋值，四种情形见模块文档。
    pub(crate) fn assign(&mut self, source: Self) {
        match source {
            OutcomeStorage::Value(value) => self.assign_value(value),
            OutcomeStorage::Error(error) => self.assign_error(error),
        }
    }

    pub(crate) fn assign_value(&mut self, value: T) {
        match self {
            OutcomeStorage::Value(dst) => *dst = value,
            // 新载荷已构造完毕，替换只析构旧成员再放入新成员。
            OutcomeStorage::Error(_) => *self = OutcomeStorage::Value(value),
        }
    }

    pub(crate) fn assign_error(&mut self, error: E) {
        match self {
            OutcomeStorage::Error(dst) => *dst = error,
            OutcomeStorage::Value(_) => *self = OutcomeStorage::Error(error),
        }
    }

    /// 析构当前存活成员并放入新的成功载荷，返回其可变引用。
    ///
    /// 新载荷由调用方先行构造完成，因此不存在“旧成员已析构、新成员尚未就位”的窗口。
    pub(crate) fn emplace(&mut self, value: T) -> &mut T {
        *self = OutcomeStorage::Value(value);
        match self {
            OutcomeStorage::Value(value) => value,
            OutcomeStorage::Error(_) => unreachable!("emplace just stored a success payload"),
        }
    }

    /// 转换式赋值：先转换（暂存），全部成功后再提交。
    pub(crate) fn try_assign_with<U, G, VE, EE>(
        &mut self,
        source: OutcomeStorage<U, G>,
        convert_value: impl FnOnce(U) -> Result<T, VE>,
        convert_error: impl FnOnce(G) -> Result<E, EE>,
    ) -> Result<(), ConversionError<VE, EE>> {
        let staged = match source {
            OutcomeStorage::Value(value) => convert_value(value)
                .map(OutcomeStorage::Value)
                .map_err(ConversionError::Value),
            OutcomeStorage::Error(error) => convert_error(error)
                .map(OutcomeStorage::Error)
                .map_err(ConversionError::Error),
        };
        match staged {
            Ok(staged) => {
                self.assign(staged);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    target: TARGET,
                    value_side = err.is_value_side(),
                    destination_has_value = self.has_value(),
                    "converting assignment rejected; destination left unchanged"
                );
                Err(err)
            }
        }
    }

    /// 交换两个存储，三种情形见模块文档。
    pub(crate) fn swap(&mut self, other: &mut Self) {
        match (&mut *self, &mut *other) {
            (OutcomeStorage::Value(a), OutcomeStorage::Value(b)) => mem::swap(a, b),
            (OutcomeStorage::Error(a), OutcomeStorage::Error(b)) => mem::swap(a, b),
            // 一成一败：整体交换即完成双向搬移，不存在重复析构。
            (a, b) => mem::swap(a, b),
        }
    }

    pub(crate) fn map_parts<U, G>(
        self,
        on_value: impl FnOnce(T) -> U,
        on_error: impl FnOnce(E) -> G,
    ) -> OutcomeStorage<U, G> {
        match self {
            OutcomeStorage::Value(value) => OutcomeStorage::Value(on_value(value)),
            OutcomeStorage::Error(error) => OutcomeStorage::Error(on_error(error)),
        }
    }
}

impl<E> OutcomeStorage<(), E> {
    pub(crate) fn construct_void() -> Self {
        OutcomeStorage::Value(())
    }
}

impl<T: Clone, E: Clone> Clone for OutcomeStorage<T, E> {
    fn clone(&self) -> Self {
        match self {
            OutcomeStorage::Value(value) => OutcomeStorage::Value(value.clone()),
            OutcomeStorage::Error(error) => OutcomeStorage::Error(error.clone()),
        }
    }

    /// 复制赋值，四种情形见模块文档。
    fn clone_from(&mut self, source: &Self) {
        match source {
            OutcomeStorage::Value(src) => match self {
                OutcomeStorage::Value(dst) => dst.clone_from(src),
                OutcomeStorage::Error(_) => {
                    let staged = src.clone();
                    *self = OutcomeStorage::Value(staged);
                }
            },
            OutcomeStorage::Error(src) => match self {
                OutcomeStorage::Error(dst) => dst.clone_from(src),
                OutcomeStorage::Value(_) => {
                    let staged = src.clone();
                    *self = OutcomeStorage::Error(staged);
                }
            },
        }
    }
}
