//! Common types and utilities for the jts Java-to-TypeScript transpiler.
//!
//! This crate provides the pieces shared by the tree model, the emitter and
//! the driver:
//! - Source spans (`Span`)
//! - The module specifier codec (`specifier::encode` / `specifier::decode`)
//! - The configuration model (`JtsConfig`, `ModuleMap`, `PackageMap`)
//! - The error taxonomy (`TranspileError`, `Degradation`)

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Reversible encoding of TypeScript module specifiers into dotted names
pub mod specifier;
pub use specifier::SpecifierError;

// Configuration model (loaded by the driver, immutable for a run)
pub mod config;
pub use config::{
    JtsConfig, ModuleMap, PackageMap, UnknownAnnotations, UnresolvedImports,
};

// Errors and best-effort degradations
pub mod error;
pub use error::{Degradation, ErrorCategory, TranspileError, TranspileResult};
