//! Shared computations. One immutable body, many holders.

use std::sync::Arc;

use super::computation::Computation;

/// A computation behind an `Arc`.
///
/// Cloning bumps a refcount instead of copying the body. The body lives as
/// long as the longest-lived holder.
#[derive(Debug)]
pub struct Shared<F>(Arc<F>);

impl<F> Shared<F> {
    pub fn new(f: F) -> Self {
        Self(Arc::new(f))
    }

    /// Number of live holders of this body.
    pub fn holders(this: &Self) -> usize {
        Arc::strong_count(&this.0)
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<F> Clone for Shared<F> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<In, F> Computation<In> for Shared<F>
where
    F: Computation<In>,
{
    type Output = F::Output;

    #[inline(always)]
    fn call(&self, input: In) -> F::Output {
        self.0.call(input)
    }
}
