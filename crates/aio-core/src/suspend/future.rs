//! 把 [`Operator`] 桥接为 Rust `Future`，以便在 `async` 代码中直接 `.await`。
//!
//! # 设计背景（Why）
//! - 挂起协议本身不含调度器；在 Rust 生态中，最常见的外部驱动方就是 `Future` 执行器；
//! - 桥接层为每次等待分配一个续体，恢复它即唤醒任务的 `Waker`，执行器随后重新 `poll`。
//!
//! # 逻辑解析（How）
//! - 首次 `poll`：构造续体并执行 [`await_operator`]；
//!   - `Complete`：直接 `Ready`；
//!   - `Suspended`：保存操作，返回 `Pending`；
//!   - `Transferred`：先恢复 `next`；若它同步恢复了本续体则立即取结果，否则返回 `Pending`。
//! - 之后的 `poll`：续体已被恢复则取结果，否则刷新 `Waker` 并继续 `Pending`。
//!
//! # 契约说明（What）
//! - 单线程：返回的 Future 不是 `Send`；
//! - 完成后再次 `poll` 属于调用方错误，会 panic；
//! - 桥接层不处理取消：续体沿用 [`Resumable`] 的默认取消行为。

use alloc::rc::Rc;
use core::{
    cell::{Cell, RefCell},
    future::Future,
    mem,
    pin::Pin,
    task::{Context, Poll, Waker},
};

use super::{
    continuation::{ContinuationHandle, Resumable},
    operator::Operator,
    point::{Awaited, await_operator},
    resolve::TARGET,
};

/// 可 `.await` 的操作包装。
#[must_use = "futures do nothing unless polled"]
pub struct OperatorFuture<O: Operator> {
    state: State<O>,
}

enum State<O> {
    Init(O),
    Suspended { operator: O, signal: Rc<ResumeSignal> },
    Done,
}

/// 包装为 [`OperatorFuture`]。
///
/// # 示例
/// ```rust
/// use aio_core::suspend::{into_future, ready};
///
/// let value = futures::executor::block_on(into_future(ready(5)));
/// assert_eq!(value, 5);
/// ```
pub fn into_future<O: Operator>(operator: O) -> OperatorFuture<O> {
    OperatorFuture::new(operator)
}

impl<O: Operator> OperatorFuture<O> {
    /// 包装一个尚未等待的操作。
    pub fn new(operator: O) -> Self {
        Self {
            state: State::Init(operator),
        }
    }
}

impl<O> Future for OperatorFuture<O>
where
    O: Operator + Unpin,
{
    type Output = O::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match mem::replace(&mut this.state, State::Done) {
            State::Init(operator) => {
                let signal = Rc::new(ResumeSignal::new(cx.waker().clone()));
                let awaiting = ContinuationHandle::new(Rc::clone(&signal));
                match await_operator(operator, &awaiting) {
                    Awaited::Complete(output) => Poll::Ready(output),
                    Awaited::Suspended(operator) => {
                        this.state = State::Suspended { operator, signal };
                        Poll::Pending
                    }
                    Awaited::Transferred { operator, next } => {
                        next.resume();
                        if signal.is_resumed() {
                            tracing::trace!(target: TARGET, "transfer resumed the awaiting task");
                            return Poll::Ready(operator.resume());
                        }
                        this.state = State::Suspended { operator, signal };
                        Poll::Pending
                    }
                }
            }
            State::Suspended { operator, signal } => {
                if signal.is_resumed() {
                    tracing::trace!(target: TARGET, "awaiting task resumed");
                    Poll::Ready(operator.resume())
                } else {
                    signal.refresh(cx.waker());
                    this.state = State::Suspended { operator, signal };
                    Poll::Pending
                }
            }
            State::Done => panic!("`OperatorFuture` polled after completion"),
        }
    }
}

/// 桥接层的续体：恢复即唤醒任务。
struct ResumeSignal {
    waker: RefCell<Waker>,
    resumed: Cell<bool>,
}

impl ResumeSignal {
    fn new(waker: Waker) -> Self {
        Self {
            waker: RefCell::new(waker),
            resumed: Cell::new(false),
        }
    }

    fn is_resumed(&self) -> bool {
        self.resumed.get()
    }

    fn refresh(&self, waker: &Waker) {
        let mut current = self.waker.borrow_mut();
        if !current.will_wake(waker) {
            current.clone_from(waker);
        }
    }
}

impl Resumable for ResumeSignal {
    fn resume(&self) {
        self.resumed.set(true);
        self.waker.borrow().wake_by_ref();
    }
}
