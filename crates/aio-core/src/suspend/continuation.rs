//! 续体句柄：挂起计算的控制块引用。
//!
//! # 设计背景（Why）
//! - 外部驱动方（调度器、事件循环）只需要“恢复它”与“它被取消了怎么办”两种能力，
//!   不需要知道挂起计算的具体类型，因此以 trait 对象 [`Resumable`] 做类型擦除；
//! - 需要访问计算内部状态的一方（通常是计算自身的实现）持有静态类型形态 [`TypedContinuation`]。
//!
//! # 逻辑解析（How）
//! - 两种形态共享同一个 `Rc` 控制块：擦除只是把 `Rc<P>` 强制转换为 `Rc<dyn Resumable>`，
//!   地址保持不变；
//! - 擦除是单向的：[`ContinuationHandle`] 不提供向下转换，想要静态类型就必须保留原始的
//!   [`TypedContinuation`]；
//! - 未覆写 [`Resumable::unhandled_stopped`] 的计算类型继承默认实现：记录错误并终止进程。
//!
//! # 契约说明（What）
//! - 单线程协作式模型：句柄基于 `Rc`，既不 `Send` 也不 `Sync`；
//! - `resume` 同步执行，时机完全由持有句柄的驱动方决定；
//! - 取消处理缺失属于编程错误，不提供恢复路径。

use alloc::rc::Rc;
use core::{any, fmt};

pub(crate) const TARGET: &str = "aio_core::continuation";

/// 可被续体句柄恢复的挂起计算。
///
/// # 契约说明（What）
/// - `resume`：驱动方在挂起条件满足后调用，计算从挂起点继续执行；
/// - `unhandled_stopped`：计算在挂起期间被取消且上游未处理时调用，返回接下来应当恢复的续体。
///   默认实现视其为逻辑缺陷并终止进程，支持取消的计算类型必须覆写它。
///
/// # 示例
/// ```rust
/// use std::{cell::Cell, rc::Rc};
/// use aio_core::suspend::{ContinuationHandle, Resumable};
///
/// struct Counter(Cell<u32>);
///
/// impl Resumable for Counter {
///     fn resume(&self) {
///         self.0.set(self.0.get() + 1);
///     }
/// }
///
/// let counter = Rc::new(Counter(Cell::new(0)));
/// let handle = ContinuationHandle::new(Rc::clone(&counter));
/// handle.resume();
/// handle.clone().resume();
/// assert_eq!(counter.0.get(), 2);
/// ```
pub trait Resumable: 'static {
    /// 从挂起点继续执行。
    fn resume(&self);

    /// 处理未被上游接住的取消，返回接下来应当恢复的续体。
    fn unhandled_stopped(&self) -> ContinuationHandle {
        crate::fatal::abort_unhandled_stop(any::type_name::<Self>())
    }
}

/// 类型擦除的续体句柄。
#[derive(Clone)]
pub struct ContinuationHandle {
    computation: Rc<dyn Resumable>,
}

impl ContinuationHandle {
    /// 由具体计算构造擦除句柄。
    pub fn new<P: Resumable>(computation: Rc<P>) -> Self {
        Self { computation }
    }

    /// 不做任何事的续体，恢复它立即返回。
    pub fn noop() -> Self {
        Self::new(Rc::new(NoopComputation))
    }

    /// 擦除形态下的控制块引用。
    pub fn handle(&self) -> &Rc<dyn Resumable> {
        &self.computation
    }

    /// 控制块的不透明地址，与对应 [`TypedContinuation::address`] 相同。
    pub fn address(&self) -> *const () {
        Rc::as_ptr(&self.computation).cast::<()>()
    }

    /// 恢复挂起的计算。
    pub fn resume(&self) {
        tracing::trace!(target: TARGET, address = ?self.address(), "resuming continuation");
        self.computation.resume();
    }

    /// 通知计算发生了未被处理的取消。
    ///
    /// 计算未声明取消处理时，本调用不会返回。
    pub fn unhandled_stopped(&self) -> ContinuationHandle {
        tracing::trace!(target: TARGET, address = ?self.address(), "forwarding unhandled cancellation");
        self.computation.unhandled_stopped()
    }

    /// 两个句柄是否指向同一个控制块。
    pub fn ptr_eq(&self, other: &ContinuationHandle) -> bool {
        core::ptr::eq(self.address(), other.address())
    }
}

impl fmt::Debug for ContinuationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContinuationHandle")
            .field(&self.address())
            .finish()
    }
}

/// 静态类型形态的续体，可直接访问计算本身。
pub struct TypedContinuation<P> {
    computation: Rc<P>,
}

impl<P: Resumable> TypedContinuation<P> {
    /// 为计算分配控制块。
    pub fn new(computation: P) -> Self {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// 复用已有的控制块。
    pub fn from_rc(computation: Rc<P>) -> Self {
        Self { computation }
    }

    /// 静态类型形态下的控制块引用。
    pub fn handle(&self) -> &Rc<P> {
        &self.computation
    }

    /// 借用计算本身。
    pub fn computation(&self) -> &P {
        &self.computation
    }

    /// 控制块的不透明地址。
    pub fn address(&self) -> *const () {
        Rc::as_ptr(&self.computation).cast::<()>()
    }

    /// 恢复挂起的计算。
    pub fn resume(&self) {
        self.computation.resume();
    }

    /// 降级为擦除句柄，原句柄保持可用。
    pub fn erase(&self) -> ContinuationHandle {
        ContinuationHandle::new(Rc::clone(&self.computation))
    }
}

impl<P> Clone for TypedContinuation<P> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<P: Resumable> From<TypedContinuation<P>> for ContinuationHandle {
    fn from(typed: TypedContinuation<P>) -> Self {
        ContinuationHandle::new(typed.computation)
    }
}

impl<P> fmt::Debug for TypedContinuation<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedContinuation")
            .field("computation", &any::type_name::<P>())
            .field("address", &Rc::as_ptr(&self.computation))
            .finish()
    }
}

struct NoopComputation;

impl Resumable for NoopComputation {
    fn resume(&self) {}
}
