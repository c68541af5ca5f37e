//! The arrow. One owned computation, typed `In -> Out`, plus the algebra to
//! chain it and lift it onto pairs.

use ::core::any::type_name;
use ::core::fmt;
use ::core::marker::PhantomData;
use ::core::ops::Shr;

use super::computation::Computation;
use crate::algebra::composition::{Compose, First, Identity, Second};

#[cfg(feature = "std")]
use super::shared::Shared;
#[cfg(feature = "tracing")]
use super::traced::Traced;

/// A composable unary computation from `In` to `Out`.
///
/// `F` is the concrete computation. It defaults to a function pointer, so
/// `Arrow<In, Out>` names the plain case; composed and lifted arrows carry
/// their combinator type instead and are resolved entirely at compile time.
///
/// Rules:
/// - Immutable. The computation is private and never replaced.
/// - Value semantics. `Clone`/`Copy` whenever `F` is.
/// - Self-sufficient. Every combinator consumes its operands, so a derived
///   arrow never borrows from the arrows it was built from.
pub struct Arrow<In, Out, F = fn(In) -> Out> {
    f: F,
    _types: PhantomData<fn(In) -> Out>,
}

/// Build an arrow from any compatible computation.
///
/// Every arrow in this crate, including the ones produced by `compose`,
/// `first` and `second`, comes out of here.
///
/// ```
/// use arrows::make;
///
/// let inc = make(|x: i32| x + 1);
/// assert_eq!(inc.apply(41), 42);
/// ```
#[inline(always)]
pub const fn make<In, F>(f: F) -> Arrow<In, F::Output, F>
where
    F: Computation<In>,
{
    Arrow {
        f,
        _types: PhantomData,
    }
}

/// The arrow that returns its input.
#[inline(always)]
pub const fn identity<T>() -> Arrow<T, T, Identity> {
    make(Identity)
}

impl<In, Out, F> Arrow<In, Out, F>
where
    F: Computation<In, Output = Out>,
{
    #[inline(always)]
    pub const fn new(f: F) -> Self {
        make(f)
    }

    /// Run the computation on `input`.
    #[inline(always)]
    pub fn apply(&self, input: In) -> Out {
        self.f.call(input)
    }

    /// `self` then `next`. Also spelled `self >> next`.
    ///
    /// ```
    /// use arrows::make;
    ///
    /// let inc = make(|x: i32| x + 1);
    /// let double = make(|x: i32| x * 2);
    /// assert_eq!(inc.compose(double).apply(5), 12);
    /// ```
    #[inline(always)]
    pub fn compose<Next, G>(self, next: Arrow<Out, Next, G>) -> Arrow<In, Next, Compose<F, G>>
    where
        G: Computation<Out, Output = Next>,
    {
        make(Compose::new(self.f, next.f))
    }

    /// Act on the first half of a pair. `B` rides along untouched.
    ///
    /// ```
    /// use arrows::make;
    ///
    /// let inc = make(|x: i32| x + 1);
    /// assert_eq!(inc.first().apply((5, "k")), (6, "k"));
    /// ```
    #[inline(always)]
    pub fn first<B>(self) -> Arrow<(In, B), (Out, B), First<F>> {
        make(First(self.f))
    }

    /// [`first`](Self::first) with the bypass type fixed to `In`.
    #[inline(always)]
    pub fn first_same_type(self) -> Arrow<(In, In), (Out, In), First<F>> {
        self.first::<In>()
    }

    /// Act on the second half of a pair. `B` rides along untouched.
    ///
    /// ```
    /// use arrows::make;
    ///
    /// let double = make(|x: i32| x * 2);
    /// assert_eq!(double.second().apply(("k", 5)), ("k", 10));
    /// ```
    #[inline(always)]
    pub fn second<B>(self) -> Arrow<(B, In), (B, Out), Second<F>> {
        make(Second(self.f))
    }

    /// [`second`](Self::second) with the bypass type fixed to `In`.
    #[inline(always)]
    pub fn second_same_type(self) -> Arrow<(In, In), (In, Out), Second<F>> {
        self.second::<In>()
    }

    /// Move the computation behind an `Arc`. Clones then share it.
    #[cfg(feature = "std")]
    pub fn shared(self) -> Arrow<In, Out, Shared<F>> {
        make(Shared::new(self.f))
    }

    /// Emit a `tracing` event every time this arrow is applied.
    #[cfg(feature = "tracing")]
    pub fn traced(self, name: &'static str) -> Arrow<In, Out, Traced<F>> {
        make(Traced::new(name, self.f))
    }
}

impl<T> Arrow<T, T, Identity> {
    #[inline(always)]
    pub const fn identity() -> Self {
        identity()
    }
}

impl<In, Out, F> Arrow<In, Out, F> {
    #[inline(always)]
    pub const fn computation(&self) -> &F {
        &self.f
    }

    #[inline(always)]
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<In, Out, F> Computation<In> for Arrow<In, Out, F>
where
    F: Computation<In, Output = Out>,
{
    type Output = Out;

    #[inline(always)]
    fn call(&self, input: In) -> Out {
        self.apply(input)
    }
}

impl<In, Out, Next, F, G> Shr<Arrow<Out, Next, G>> for Arrow<In, Out, F>
where
    F: Computation<In, Output = Out>,
    G: Computation<Out, Output = Next>,
{
    type Output = Arrow<In, Next, Compose<F, G>>;

    #[inline(always)]
    fn shr(self, next: Arrow<Out, Next, G>) -> Self::Output {
        self.compose(next)
    }
}

impl<In, Out, F: Clone> Clone for Arrow<In, Out, F> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _types: PhantomData,
        }
    }
}

impl<In, Out, F: Copy> Copy for Arrow<In, Out, F> {}

impl<In, Out, F> fmt::Debug for Arrow<In, Out, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arrow")
            .field("in", &type_name::<In>())
            .field("out", &type_name::<Out>())
            .finish_non_exhaustive()
    }
}
