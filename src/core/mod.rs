//! The core. Computations and the arrow that wraps them.

pub mod arrow;
pub mod computation;

#[cfg(feature = "std")]
pub mod shared;

#[cfg(feature = "tracing")]
pub mod traced;

pub use arrow::{identity, make, Arrow};
pub use computation::Computation;

#[cfg(feature = "std")]
pub use shared::Shared;

#[cfg(feature = "tracing")]
pub use traced::Traced;
