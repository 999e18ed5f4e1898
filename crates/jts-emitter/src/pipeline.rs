//! Per-unit pipeline: selection, transformation, printing.

use crate::pass_registry::plan_unit;
use crate::printer::{ConfigHooks, Printer};
use crate::resolver::Resolver;
use crate::transforms;
use jts_ast::CompilationUnit;
use jts_common::{Degradation, JtsConfig, TranspileResult};
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use tracing::debug;

/// Where a unit lives and what surrounds it.
#[derive(Debug, Clone, Default)]
pub struct UnitContext {
    /// Key of the unit's module in `moduleMaps`.
    pub module_name: String,
    /// Slash-separated path of the source file relative to the module's
    /// source root, e.g. `com/example/core/Foo.java`.
    pub source_path: String,
    /// Simple names of the types declared by other files in the same
    /// source directory.
    pub siblings: FxHashSet<String>,
}

impl UnitContext {
    pub fn new(module_name: impl Into<String>, source_path: impl Into<String>) -> Self {
        UnitContext {
            module_name: module_name.into(),
            source_path: source_path.into(),
            siblings: FxHashSet::default(),
        }
    }

    pub fn with_siblings<I, S>(mut self, siblings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.siblings.extend(siblings.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranspileOutput {
    pub code: String,
    pub output_path: PathBuf,
    pub degradations: Vec<Degradation>,
}

/// Transpile one compilation unit.
///
/// The first fatal condition aborts the unit; no partial text is returned.
#[tracing::instrument(level = "debug", skip_all, fields(source = %ctx.source_path))]
pub fn transpile_unit(
    mut unit: CompilationUnit,
    ctx: &UnitContext,
    config: &JtsConfig,
) -> TranspileResult<TranspileOutput> {
    let (output_path, path_degradation) =
        Resolver::new(config).output_path(&ctx.module_name, &ctx.source_path)?;

    let plan = plan_unit(&mut unit, ctx, config)?;
    for &pass in &plan.passes {
        transforms::apply(pass, &mut unit, config);
    }

    let hooks = ConfigHooks::new(config);
    let mut printer = Printer::new(config, &hooks);
    printer.print_compilation_unit(&unit)?;
    let code = printer.finish();

    let mut degradations = plan.degradations;
    degradations.extend(path_degradation);
    debug!(
        output = %output_path.display(),
        bytes = code.len(),
        degradations = degradations.len(),
        "transpiled unit"
    );
    Ok(TranspileOutput {
        code,
        output_path,
        degradations,
    })
}

#[cfg(test)]
#[path = "../tests/pipeline.rs"]
mod tests;
