//! Derived-field recomputation for the Silt store.
//!
//! Registration constructors ([`computed`], [`computed_as`], and the
//! declaration-time [`GetterObject`]) return provider-carrying state
//! fragments; [`with_computed`] wraps a store factory so every mutation of
//! the produced store re-runs all registered providers and commits data and
//! derived fields as one consistent state; [`recompute`] is the underlying
//! pass, usable on its own against any [`silt_core::State`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod getters;
pub mod middleware;
pub mod recompute;
pub mod registry;

pub use getters::{GetterFn, GetterObject};
pub use middleware::with_computed;
pub use recompute::recompute;
pub use registry::{computed, computed_as};
