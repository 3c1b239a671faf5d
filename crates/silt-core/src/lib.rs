//! Core types for the Silt state container.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! state value model ([`Value`], [`FieldMap`]), the provider registry types
//! ([`ProviderKey`], [`ProviderEntry`], [`Providers`]), and the mutation
//! contract ([`State`], [`Update`], [`SetFn`], [`GetFn`]) shared by the
//! store and the computed middleware.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fields;
pub mod provider;
pub mod state;
pub mod value;

pub use fields::FieldMap;
pub use provider::{ProviderEntry, ProviderFn, ProviderKey, Providers};
pub use state::{GetFn, SetFn, State, Update};
pub use value::Value;
