//! Arrows: value-semantic unary computations you can chain with `>>` and
//! lift onto one half of a pair with `first`/`second`.
//!
//! ```
//! use arrows::make;
//!
//! let inc = make(|x: i32| x + 1);
//! let double = make(|x: i32| x * 2);
//!
//! assert_eq!((inc >> double).apply(5), 12);
//! assert_eq!(inc.first().apply((5, "k")), (6, "k"));
//! assert_eq!(double.second().apply(("k", 5)), ("k", 10));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod algebra;
pub mod core;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::algebra::{Compose, First, Identity, Law, LawReport, Second};
    pub use crate::core::{identity, make, Arrow, Computation};

    #[cfg(feature = "std")]
    pub use crate::core::Shared;

    #[cfg(feature = "tracing")]
    pub use crate::core::Traced;
}

// Re-export primary types at crate root for convenience.
pub use crate::algebra::{Compose, First, Identity, Second};
pub use crate::core::{identity, make, Arrow, Computation};

#[cfg(feature = "std")]
pub use crate::core::Shared;

#[cfg(feature = "tracing")]
pub use crate::core::Traced;
