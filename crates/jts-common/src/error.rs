//! Error taxonomy for the transpiler core.
//!
//! Fatal conditions are [`TranspileError`] values: the first one aborts the
//! current compilation unit and no partial text is produced. Best-effort
//! fallbacks are recorded as [`Degradation`] values next to the output.

use crate::specifier::SpecifierError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type TranspileResult<T> = Result<T, TranspileError>;

/// Coarse classification used by the driver for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
    /// The configuration does not cover the input.
    Configuration,
    /// The input uses a construct that has no chosen mapping.
    Unsupported,
    /// The emitter reached a state its own passes should have ruled out.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Unsupported => "unsupported",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranspileError {
    #[error("no package map in module '{module}' covers package '{package}'")]
    MissingPackageMap { module: String, package: String },

    #[error("module '{module}' is not configured in moduleMaps")]
    UnknownModule { module: String },

    #[error("import '{name}' is not covered by any module map")]
    UnresolvedImport { name: String },

    #[error(transparent)]
    ReservedMarker(#[from] SpecifierError),

    #[error("unknown annotation(s) {} on '{member}'", .annotations.join(", "))]
    UnknownAnnotation {
        member: String,
        annotations: Vec<String>,
    },

    #[error("for-each loop declares {count} variables, expected exactly one")]
    MultiVariableForEach { count: usize },

    #[error("nullable type '{name}' has {count} type arguments, expected exactly one")]
    SentinelArity { name: String, count: usize },

    #[error("interface constant '{name}' has no TypeScript interface form")]
    InterfaceConstant { name: String },

    #[error("variable '{declarator}' rendered without a declared type")]
    MissingAmbientType { declarator: String },
}

impl TranspileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TranspileError::MissingPackageMap { .. }
            | TranspileError::UnknownModule { .. }
            | TranspileError::UnresolvedImport { .. }
            | TranspileError::ReservedMarker(_) => ErrorCategory::Configuration,
            TranspileError::UnknownAnnotation { .. }
            | TranspileError::MultiVariableForEach { .. }
            | TranspileError::SentinelArity { .. }
            | TranspileError::InterfaceConstant { .. } => ErrorCategory::Unsupported,
            TranspileError::MissingAmbientType { .. } => ErrorCategory::Internal,
        }
    }
}

/// A best-effort fallback taken while transpiling a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Degradation {
    /// No module map covered the import; it was kept as a namespace import.
    WildcardImport { name: String },
    /// No package map covered the source file; its relative path was kept.
    UnmappedOutputPath { path: String },
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::WildcardImport { name } => {
                write!(f, "unresolved import '{name}' kept as a namespace import")
            }
            Degradation::UnmappedOutputPath { path } => {
                write!(f, "no package map for '{path}', output keeps the source layout")
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/error.rs"]
mod tests;
