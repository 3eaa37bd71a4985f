//! Data model for the atomic rule builder.
//!
//! Defines the types the builder consumes and produces:
//! - [`Template`] / [`Catalog`]: authored rule templates, a tagged union per `type`
//! - [`SelectionConfig`]: which templates and variants to emit, plus [`GlobalSettings`]
//! - [`MediaQueryTable`]: breakpoint name → media query, derived from the settings
//! - [`BuildTree`]: the selector → property → value output
//! - [`AtomicError`]: the shape/config error taxonomy
//!
//! Parsing happens once at the boundary; everything downstream works on
//! validated values.

mod build;
mod config;
mod error;
mod template;
mod value;

pub use build::{BuildTree, Declarations, StyleBlock};
pub use config::{
    AutoSuffixEntry, GlobalSettings, MediaQueryTable, PatternSelection, Selection,
    SelectionConfig, RECOGNIZED_BREAKPOINTS, SETTINGS_KEY,
};
pub use error::{AtomicError, AtomicResult, ErrorKind};
pub use template::{
    Catalog, FractionRule, PatternRule, PatternTemplate, RawRule, RuleTemplate, SuffixType,
    Template,
};
pub use value::CssValue;
