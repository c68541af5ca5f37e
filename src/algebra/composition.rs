//! Arrow combinators. Each one is a plain value implementing `Computation`.
//!
//! No boxing, no closures captured by reference: a combinator owns its
//! operands, so a composed computation is exactly as `Clone`/`Copy`/`Send`
//! as the pieces it was built from.

use crate::core::computation::Computation;

/// `x ↦ x`. Unit of sequential composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T> Computation<T> for Identity {
    type Output = T;

    #[inline(always)]
    fn call(&self, input: T) -> T {
        input
    }
}

/// `x ↦ after(before(x))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Compose<F, G> {
    pub before: F,
    pub after: G,
}

impl<F, G> Compose<F, G> {
    #[inline(always)]
    pub const fn new(before: F, after: G) -> Self {
        Self { before, after }
    }
}

impl<In, F, G> Computation<In> for Compose<F, G>
where
    F: Computation<In>,
    G: Computation<F::Output>,
{
    type Output = G::Output;

    #[inline(always)]
    fn call(&self, input: In) -> G::Output {
        self.after.call(self.before.call(input))
    }
}

/// `(x, b) ↦ (f(x), b)`. The bypass value is moved through, never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct First<F>(pub F);

impl<In, B, F> Computation<(In, B)> for First<F>
where
    F: Computation<In>,
{
    type Output = (F::Output, B);

    #[inline(always)]
    fn call(&self, (input, bypass): (In, B)) -> (F::Output, B) {
        (self.0.call(input), bypass)
    }
}

/// `(b, x) ↦ (b, f(x))`. Mirror of [`First`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Second<F>(pub F);

impl<In, B, F> Computation<(B, In)> for Second<F>
where
    F: Computation<In>,
{
    type Output = (B, F::Output);

    #[inline(always)]
    fn call(&self, (bypass, input): (B, In)) -> (B, F::Output) {
        (bypass, self.0.call(input))
    }
}
