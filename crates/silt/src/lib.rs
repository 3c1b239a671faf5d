//! Silt: an observable state container with automatically recomputed derived fields.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! Silt sub-crates. For most users, adding `silt` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use silt::prelude::*;
//!
//! // A factory returns the initial state: data fields plus any derived-field
//! // registrations, composed by merging fragments.
//! let store = Store::create(with_computed(|_set, _get, _api| {
//!     State::new().field("count", 1).merged(computed(|fields| {
//!         let count = fields.int("count").unwrap();
//!         FieldMap::from([("count_sq", count * count)])
//!     }))
//! }));
//!
//! // Derived fields exist before the first read and stay consistent after
//! // every mutation.
//! assert_eq!(store.get_state().fields.int("count_sq"), Some(1));
//! store.set_state(State::new().field("count", 4), false);
//! assert_eq!(store.get_state().fields.int("count_sq"), Some(16));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `silt-core` | `Value`, `FieldMap`, `State`, `Update`, provider registry types |
//! | [`store`] | `silt-store` | The observable `Store` and RAII `Subscription` guards |
//! | [`computed`] | `silt-computed` | Registration constructors, getter objects, recompute, middleware |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`silt-core`).
///
/// The state value model ([`types::Value`], [`types::FieldMap`]), the
/// provider registry ([`types::ProviderKey`], [`types::Providers`]), and the
/// mutation contract ([`types::State`], [`types::Update`]).
pub use silt_core as types;

/// The observable store (`silt-store`).
///
/// [`store::Store`] implements factory construction, merge-or-replace
/// mutation through an installable set-state slot, and listener
/// subscriptions with RAII [`store::Subscription`] guards.
pub use silt_store as store;

/// The derived-field engine (`silt-computed`).
///
/// Registration constructors ([`computed::computed`],
/// [`computed::computed_as`], [`computed::GetterObject`]), the
/// [`computed::recompute`] pass, and the [`computed::with_computed`]
/// middleware.
pub use silt_computed as computed;

/// Common imports for typical Silt usage.
///
/// ```rust
/// use silt::prelude::*;
/// ```
///
/// This imports the most frequently used types: the store, the state value
/// model, the registration constructors, and the middleware.
pub mod prelude {
    // State value model
    pub use silt_core::{FieldMap, State, Update, Value};

    // Provider registry
    pub use silt_core::{ProviderEntry, ProviderKey, Providers};

    // Store
    pub use silt_store::{Store, Subscription};

    // Derived-field engine
    pub use silt_computed::{computed, computed_as, recompute, with_computed, GetterObject};
}
