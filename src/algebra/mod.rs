//! Arrow algebra. Combinators and the laws they obey.

pub mod composition;
pub mod proofs;

pub use composition::{Compose, First, Identity, Second};
pub use proofs::{
    AssociativityProof, BypassProof, BypassSide, CompositionProof, DefaultBypassProof,
    IdentityProof, IndependenceProof, Law, LawReport, UnitProof,
};
