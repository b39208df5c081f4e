//! Effective-visibility resolution.
//!
//! Computes the externally-observable visibility of declarations by reducing
//! declared modifiers, container chains and signature types through a small
//! visibility lattice, and flags declarations that expose less-visible types.

pub mod effective;
pub mod expose;
pub mod relation;
pub mod resolve;

pub use effective::EffectiveVisibility;
pub use expose::{ExposureChecker, ExposureDiagnostic, ExposureKind};
pub use relation::Relation;
pub use resolve::VisibilityResolver;
