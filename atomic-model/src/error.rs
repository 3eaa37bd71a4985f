//! Error taxonomy shared by the model and the builder.
//!
//! Errors fall into three kinds. `Argument` and `Shape` both mean the catalog
//! or config is malformed; `Config` means it is well-formed but asks for
//! something a template or the breakpoint table refuses.

use thiserror::Error;

/// Result type for model and builder operations.
pub type AtomicResult<T> = Result<T, AtomicError>;

/// Coarse classification of an [`AtomicError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input was missing or empty.
    Argument,
    /// An input had the wrong type or structure.
    Shape,
    /// A well-formed request that the catalog or config does not allow.
    Config,
}

/// Errors raised while loading or expanding a catalog.
#[derive(Debug, Error)]
pub enum AtomicError {
    /// A required input was absent or empty.
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// Wrong type or structure in the catalog or config.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Two templates share an id.
    #[error("duplicate template id: {0}")]
    DuplicateTemplate(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `breakPoints` has none of the recognized names.
    #[error("breakPoints must define at least one of `sm`, `md` or `lg`")]
    NoRecognizedBreakpoint,

    /// A selection names a breakpoint the config does not define.
    #[error("unknown breakpoint: {0}")]
    UnknownBreakpoint(String),

    /// `custom` on a template without `allowCustom`.
    #[error("template '{0}' does not allow custom values")]
    CustomNotAllowed(String),

    /// `custom-auto-suffix` on a template without `allowCustomAutoSuffix`.
    #[error("template '{0}' does not allow custom values with automatic suffixes")]
    AutoSuffixNotAllowed(String),

    /// `fractions` on a template that declares none.
    #[error("template '{0}' does not declare any fractions")]
    FractionsNotAllowed(String),

    /// Object selection for a `rule` template.
    #[error("rule template '{0}' only accepts a boolean selection")]
    UnsupportedRuleSelection(String),
}

impl AtomicError {
    /// Builds an [`AtomicError::InvalidShape`] from anything printable.
    pub fn shape(detail: impl Into<String>) -> Self {
        Self::InvalidShape(detail.into())
    }

    /// Wraps a serde error with the location of the offending value.
    pub fn at(location: impl std::fmt::Display, err: serde_json::Error) -> Self {
        Self::InvalidShape(format!("{location}: {err}"))
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_) => ErrorKind::Argument,
            Self::InvalidShape(_) | Self::DuplicateTemplate(_) | Self::Serialization(_) => {
                ErrorKind::Shape
            }
            Self::NoRecognizedBreakpoint
            | Self::UnknownBreakpoint(_)
            | Self::CustomNotAllowed(_)
            | Self::AutoSuffixNotAllowed(_)
            | Self::FractionsNotAllowed(_)
            | Self::UnsupportedRuleSelection(_) => ErrorKind::Config,
        }
    }

    /// True for missing or malformed input.
    #[must_use]
    pub fn is_shape_violation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Argument | ErrorKind::Shape)
    }

    /// True for well-formed input that asks for a disallowed capability.
    #[must_use]
    pub fn is_config_violation(&self) -> bool {
        self.kind() == ErrorKind::Config
    }
}
