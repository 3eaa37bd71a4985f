//! Atomic rule builder.
//!
//! Expands a catalog of rule templates, filtered by a selection config, into
//! a selector → property → value [`BuildTree`](atomic_model::BuildTree),
//! optionally with responsive variants nested under media queries.
//!
//! ```text
//! templates, config ─▶ loaders ─▶ AtomicBuilder ─▶ driver ─▶ pattern / fraction / rule
//!                                                              │
//!                                     Build ◀─ fold ◀─ delta ◀─ RuleWriter
//! ```
//!
//! Loading validates everything once; [`AtomicBuilder::expand`] then walks the
//! catalog and returns an immutable [`Build`]. Loaders and the driver are
//! trait objects and can be swapped.
//!
//! Turning the build into CSS text is left to the caller.

mod accessor;
mod constants;
mod driver;
mod engine;
mod escape;
mod fraction;
mod loader;
mod pattern;
mod raw;
mod writer;

pub use accessor::Build;
pub use atomic_model::{AtomicError, AtomicResult, ErrorKind};
pub use constants::{Constants, END_TOKEN, START_TOKEN};
pub use driver::{auto_suffix, ExpansionDriver, TemplateExpander};
pub use engine::AtomicBuilder;
pub use escape::escape_selector;
pub use loader::{CatalogLoader, ConfigLoader, JsonCatalogLoader, JsonConfigLoader};
pub use pattern::{PatternFields, ValueSelection};
pub use writer::RuleWriter;
