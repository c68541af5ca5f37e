//! Computation trait. Anything callable `In -> Out` through a shared reference.

/// The seam every arrow body goes through.
///
/// Rules:
/// - `call` takes `&self`. A computation is never mutated by being run.
/// - Closures and function pointers get this for free via the blanket impl.
/// - Combinators (`Compose`, `First`, `Second`, ...) implement it directly.
pub trait Computation<In> {
    type Output;

    fn call(&self, input: In) -> Self::Output;
}

impl<In, Out, F> Computation<In> for F
where
    F: Fn(In) -> Out,
{
    type Output = Out;

    #[inline(always)]
    fn call(&self, input: In) -> Out {
        self(input)
    }
}
