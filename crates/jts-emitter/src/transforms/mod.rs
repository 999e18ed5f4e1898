//! Transform passes.
//!
//! Each pass is an independent whole-tree rewrite implemented with
//! [`VisitMut`]. Passes never touch the import list; the selector in
//! [`crate::pass_registry`] owns it.

pub mod builtin_calls;
pub mod core_types;
pub mod delombok;
pub mod list_to_array;
pub mod lombok_slf4j;
pub mod optional;
pub mod streams;

use crate::pass_registry::PassId;
use jts_ast::{CompilationUnit, VisitMut};
use jts_common::JtsConfig;

pub use builtin_calls::BuiltinCalls;
pub use core_types::CoreTypes;
pub use delombok::{Delombok, delombok};
pub use list_to_array::ListToArray;
pub use lombok_slf4j::LombokSlf4j;
pub use optional::OptionalMarking;
pub use streams::{FileInputStreamPass, StringWriterPass};

/// Run one pass over the whole unit.
pub fn apply(pass: PassId, unit: &mut CompilationUnit, config: &JtsConfig) {
    tracing::trace!(pass = pass.name(), "running pass");
    match pass {
        PassId::CoreTypes => CoreTypes::new(config).visit_compilation_unit(unit),
        PassId::BuiltinCalls => BuiltinCalls.visit_compilation_unit(unit),
        PassId::Delombok => Delombok.visit_compilation_unit(unit),
        PassId::LombokSlf4j => LombokSlf4j.visit_compilation_unit(unit),
        PassId::ListToArray => ListToArray.visit_compilation_unit(unit),
        PassId::OptionalMarking => OptionalMarking.visit_compilation_unit(unit),
        PassId::FileInputStream => FileInputStreamPass.visit_compilation_unit(unit),
        PassId::StringWriter => StringWriterPass.visit_compilation_unit(unit),
    }
}

#[cfg(test)]
#[path = "../../tests/transforms.rs"]
mod tests;
