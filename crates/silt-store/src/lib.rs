//! Observable state store for the Silt workspace.
//!
//! [`Store`] implements the container contract the computed middleware
//! builds on: factory-based construction, merge-or-replace mutation through
//! an installable set-state slot, and listener subscriptions with RAII
//! [`Subscription`] guards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod store;
pub mod subscription;

pub use store::Store;
pub use subscription::{ListenerFn, Subscription};
