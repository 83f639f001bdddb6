//! 挂起解析：把任意可挂起的值归一化为 [`Operator`]。
//!
//! # 设计背景（Why）
//! - 可挂起的值有三种来源：类型自带转换（成员钩子 [`IntoOperator`]）、外部登记的转换
//!   （自由钩子 [`OperatorAdapter`]）、以及本身已经是 [`Operator`]；
//! - 驱动上下文还可以在此之前通过 [`AwaitTransform`] 改写操作数，以覆盖类型自带的挂起行为。
//!
//! # 逻辑解析（How）
//! 解析顺序固定，由 [`get_operator!`](crate::get_operator) 在编译期完成：
//! 1. 上下文实现了 `AwaitTransform<A>` 时先改写操作数，后续步骤作用于改写结果；
//! 2. 值实现了 [`IntoOperator`]：使用成员钩子；
//! 3. 否则登记表 `R` 实现了 `OperatorAdapter<A>`：使用自由钩子；
//! 4. 否则值本身必须实现 [`Operator`]。
//!
//! 优先级借助“自动引用特化”（autoref specialization）实现：探针值被多层引用包裹，
//! 方法解析按引用层数由外向内逐层尝试，条件不满足的实现被跳过，最先匹配的一层胜出。
//! 全部在具体类型上静态决议，不需要运行期查表。
//!
//! # 契约说明（What）
//! - 成员钩子与 `Operator` 同时存在时，成员钩子胜出；
//! - 三者都不满足时编译失败（报告找不到 `route` 方法）；
//! - 钩子选择只看展开点可见的约束：泛型代码应以 `A: IntoOperator` 约束操作数，并经
//!   [`resolve_operator`] 或宏解析；内置操作对 [`IntoOperator`] 的实现即为自身。

use super::operator::Operator;

pub(crate) const TARGET: &str = "aio_core::suspend";

/// 成员钩子：类型自带的到 [`Operator`] 的转换。
///
/// # 示例
/// ```rust
/// use aio_core::get_operator;
/// use aio_core::suspend::{IntoOperator, Operator, Ready, ready};
///
/// struct Answer;
///
/// impl IntoOperator for Answer {
///     type Operator = Ready<u32>;
///
///     fn into_operator(self) -> Ready<u32> {
///         ready(42)
///     }
/// }
///
/// let op = get_operator!(Answer);
/// assert!(op.is_ready());
/// assert_eq!(op.resume(), 42);
/// ```
pub trait IntoOperator {
    /// 转换得到的操作类型。
    type Operator: Operator;

    /// 执行转换。
    fn into_operator(self) -> Self::Operator;
}

/// 自由钩子：为外部类型 `A` 登记的转换，实现在登记表类型上。
///
/// 孤儿规则不允许为外部类型实现外部 trait，因此转换挂在调用方自有的登记表类型 `R` 上，
/// 并在 [`get_operator!`](crate::get_operator) 中以 `adapters = R` 指定。
pub trait OperatorAdapter<A> {
    /// 转换得到的操作类型。
    type Operator: Operator;

    /// 执行转换。
    fn adapt(awaitable: A) -> Self::Operator;
}

/// 上下文钩子：驱动上下文在解析前改写操作数。
pub trait AwaitTransform<A> {
    /// 改写后的值，之后继续按成员钩子、自由钩子、恒等的顺序解析。
    type Output;

    /// 执行改写。
    fn await_transform(&mut self, awaitable: A) -> Self::Output;
}

/// 泛型代码的解析入口：只走成员钩子。
///
/// 内置操作（[`SuspendAlways`](super::SuspendAlways)、[`SuspendNever`](super::SuspendNever)、
/// [`Ready`](super::Ready)）的成员钩子返回自身，因此同样满足约束。
///
/// # 示例
/// ```rust
/// use aio_core::suspend::{IntoOperator, Operator, OutputOf, ready, resolve_operator};
///
/// fn drive<A: IntoOperator>(awaitable: A) -> OutputOf<A::Operator> {
///     resolve_operator(awaitable).resume()
/// }
///
/// assert_eq!(drive(ready(3_u8)), 3);
/// ```
pub fn resolve_operator<A: IntoOperator>(awaitable: A) -> A::Operator {
    __private::MemberHook.resolve(awaitable)
}

/// 空登记表，不登记任何自由钩子。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAdapters {}

/// 按固定顺序解析可挂起的值，得到 [`Operator`]。
///
/// # 用法
/// - `get_operator!(value)`：成员钩子，否则恒等；
/// - `get_operator!(value, adapters = Registry)`：成员钩子，否则 `Registry` 中的自由钩子，否则恒等；
/// - `get_operator!(value, context = &mut cx)`：先经 `cx` 的上下文钩子改写（若有）；
/// - `get_operator!(value, context = &mut cx, adapters = Registry)`：以上全部。
///
/// # 契约说明（What）
/// - 宏对 `value` 与 `cx` 各求值一次，按值消费 `value`；
/// - 展开结果的类型即解析得到的操作类型，完全静态决议。
///
/// # 泛型代码（Trade-offs）
/// 钩子按展开点可见的 trait 约束选择。泛型参数只声明了 `A: Operator` 时，即使实参类型
/// 另有 [`IntoOperator`] 实现，宏也只能看到恒等路径，不会报错。泛型代码请改为约束
/// `A: IntoOperator`（内置操作均满足），宏随之选择成员钩子；或直接调用 [`resolve_operator`]。
///
/// # 示例
/// ```rust
/// use aio_core::get_operator;
/// use aio_core::suspend::{AwaitTransform, Operator, SuspendNever, ready};
///
/// struct Doubling;
///
/// impl AwaitTransform<aio_core::suspend::Ready<u32>> for Doubling {
///     type Output = aio_core::suspend::Ready<u32>;
///
///     fn await_transform(&mut self, op: aio_core::suspend::Ready<u32>) -> Self::Output {
///         ready(op.resume() * 2)
///     }
/// }
///
/// let mut cx = Doubling;
/// assert_eq!(get_operator!(ready(21_u32), context = &mut cx).resume(), 42);
/// // 上下文未改写 `SuspendNever`，其余步骤照常解析。
/// assert!(get_operator!(SuspendNever, context = &mut cx).is_ready());
/// ```
#[macro_export]
macro_rules! get_operator {
    ($awaitable:expr $(,)?) => {
        $crate::get_operator!($awaitable, adapters = $crate::suspend::NoAdapters)
    };
    ($awaitable:expr, adapters = $registry:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::suspend::__private::{
            AdapterHookKind as _, IdentityKind as _, MemberHookKind as _,
        };
        let __aio_awaitable = $awaitable;
        let __aio_probe =
            $crate::suspend::__private::OperatorProbe::<_, $registry>::of(&__aio_awaitable);
        (&&&__aio_probe).route().resolve(__aio_awaitable)
    }};
    ($awaitable:expr, context = $context:expr $(,)?) => {
        $crate::get_operator!(
            $awaitable,
            context = $context,
            adapters = $crate::suspend::NoAdapters
        )
    };
    ($awaitable:expr, context = $context:expr, adapters = $registry:ty $(,)?) => {{
        let __aio_context = $context;
        let __aio_transformed = {
            #[allow(unused_imports)]
            use $crate::suspend::__private::{PassthroughKind as _, TransformKind as _};
            let __aio_awaitable = $awaitable;
            let __aio_probe =
                $crate::suspend::__private::TransformProbe::of(&*__aio_context, &__aio_awaitable);
            (&&__aio_probe)
                .transform_route()
                .apply(&mut *__aio_context, __aio_awaitable)
        };
        $crate::get_operator!(__aio_transformed, adapters = $registry)
    }};
}

/// 宏展开所需的内部探针，不属于公开 API。
#[doc(hidden)]
pub mod __private {
    use core::{any, marker::PhantomData};

    use super::{AwaitTransform, IntoOperator, Operator, OperatorAdapter, TARGET};

    pub struct OperatorProbe<A, R>(PhantomData<fn(A) -> R>);

    impl<A, R> OperatorProbe<A, R> {
        #[inline]
        pub fn of(_: &A) -> Self {
            OperatorProbe(PhantomData)
        }
    }

    pub struct MemberHook;

    impl MemberHook {
        #[inline]
        pub fn resolve<A: IntoOperator>(self, awaitable: A) -> A::Operator {
            tracing::trace!(
                target: TARGET,
                route = "member_hook",
                awaitable = any::type_name::<A>(),
                "resolved operator"
            );
            awaitable.into_operator()
        }
    }

    pub struct AdapterHook<R>(PhantomData<fn() -> R>);

    impl<R> AdapterHook<R> {
        #[inline]
        pub fn resolve<A>(self, awaitable: A) -> R::Operator
        where
            R: OperatorAdapter<A>,
        {
            tracing::trace!(
                target: TARGET,
                route = "adapter_hook",
                awaitable = any::type_name::<A>(),
                registry = any::type_name::<R>(),
                "resolved operator"
            );
            R::adapt(awaitable)
        }
    }

    pub struct Identity;

    impl Identity {
        #[inline]
        pub fn resolve<A: Operator>(self, awaitable: A) -> A {
            tracing::trace!(
                target: TARGET,
                route = "identity",
                awaitable = any::type_name::<A>(),
                "resolved operator"
            );
            awaitable
        }
    }

    pub trait MemberHookKind {
        #[inline]
        fn route(&self) -> MemberHook {
            MemberHook
        }
    }

    impl<A: IntoOperator, R> MemberHookKind for &&OperatorProbe<A, R> {}

    pub trait AdapterHookKind {
        type Registry;

        #[inline]
        fn route(&self) -> AdapterHook<Self::Registry> {
            AdapterHook(PhantomData)
        }
    }

    impl<A, R: OperatorAdapter<A>> AdapterHookKind for &OperatorProbe<A, R> {
        type Registry = R;
    }

    pub trait IdentityKind {
        #[inline]
        fn route(&self) -> Identity {
            Identity
        }
    }

    impl<A: Operator, R> IdentityKind for OperatorProbe<A, R> {}

    pub struct TransformProbe<C: ?Sized, A>(PhantomData<(fn(&mut C), fn(A))>);

    impl<C: ?Sized, A> TransformProbe<C, A> {
        #[inline]
        pub fn of(_: &C, _: &A) -> Self {
            TransformProbe(PhantomData)
        }
    }

    pub struct Transform;

    impl Transform {
        #[inline]
        pub fn apply<C, A>(self, context: &mut C, awaitable: A) -> C::Output
        where
            C: AwaitTransform<A> + ?Sized,
        {
            tracing::trace!(
                target: TARGET,
                route = "context_transform",
                context = any::type_name::<C>(),
                awaitable = any::type_name::<A>(),
                "context transformed awaitable"
            );
            context.await_transform(awaitable)
        }
    }

    pub struct Passthrough;

    impl Passthrough {
        #[inline]
        pub fn apply<C: ?Sized, A>(self, _context: &mut C, awaitable: A) -> A {
            awaitable
        }
    }

    pub trait TransformKind {
        #[inline]
        fn transform_route(&self) -> Transform {
            Transform
        }
    }

    impl<C: AwaitTransform<A> + ?Sized, A> TransformKind for &TransformProbe<C, A> {}

    pub trait PassthroughKind {
        #[inline]
        fn transform_route(&self) -> Passthrough {
            Passthrough
        }
    }

    impl<C: ?Sized, A> PassthroughKind for TransformProbe<C, A> {}
}
