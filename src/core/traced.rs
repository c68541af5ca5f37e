//! Traced computations. One `tracing` event per application.

use ::core::any::type_name;

use super::computation::Computation;

pub const TRACE_TARGET: &str = "arrows::apply";

/// Wraps a computation and reports each call at `TRACE` level.
///
/// Only type names are recorded, never values: `In`/`Out` need not be
/// `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Traced<F> {
    name: &'static str,
    inner: F,
}

impl<F> Traced<F> {
    #[inline(always)]
    pub const fn new(name: &'static str, inner: F) -> Self {
        Self { name, inner }
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<In, F> Computation<In> for Traced<F>
where
    F: Computation<In>,
{
    type Output = F::Output;

    fn call(&self, input: In) -> F::Output {
        let output = self.inner.call(input);
        tracing::trace!(
            target: TRACE_TARGET,
            arrow = self.name,
            input = type_name::<In>(),
            output = type_name::<F::Output>(),
            "arrow applied"
        );
        output
    }
}
