//! # effvis-error
//!
//! Unified error handling for effvis.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., CyclicInheritance, MalformedSupertype)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use effvis_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::CyclicInheritance, "class inherits from itself")
//!         .with_operation("store::validate")
//!         .with_context("class", "Outer::Inner"))
//! }
//! ```
//!
//! ## Principles
//!
//! - Fallible store operations return `Result<T, effvis_error::Error>`
//! - The resolver core itself never errors: incomparable or missing inputs
//!   degrade through the visibility lattice instead of signaling
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using effvis Error
pub type Result<T> = std::result::Result<T, Error>;
