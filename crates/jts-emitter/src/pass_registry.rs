//! Transform Pass Registry & Selector
//!
//! Decides, per compilation unit, which transform passes run and what the
//! unit's TypeScript import list looks like. The decision is driven by the
//! unit's Java imports:
//!
//! | import                              | pass              | emitted imports                  |
//! |-------------------------------------|-------------------|----------------------------------|
//! | `lombok.*`                          | `Delombok`        |                                  |
//! | `lombok.extern.slf4j.Slf4j`         | `LombokSlf4j`     |                                  |
//! | `java.util.{List,ArrayList,LinkedList}` | `ListToArray` |                                  |
//! | `java.util.{Map,Set}`               | (native)          |                                  |
//! | `java.util.Optional`                | `OptionalMarking` |                                  |
//! | `java.io.FileInputStream`           | `FileInputStream` | `* as Fs from 'fs'`, `Readable`  |
//! | `java.io.InputStream`               | (native)          |                                  |
//! | `java.io.StringWriter`              | `StringWriter`    | `Writable from 'stream'`         |
//!
//! Imports that hit the table are consumed. Everything else goes through the
//! [`Resolver`]. Sibling classes referenced by simple name get a synthesized
//! `./Name` import.

use crate::pipeline::UnitContext;
use crate::resolver::Resolver;
use jts_ast::visit::{VisitMut, walk_class_type, walk_expr};
use jts_ast::{ClassType, CompilationUnit, Expr, ImportDeclaration, ImportOrigin};
use jts_common::specifier::encode_import;
use jts_common::{Degradation, JtsConfig, TranspileError, TranspileResult, UnresolvedImports};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// Identity of every transform pass. Closed: the registry can only name
/// passes that exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassId {
    CoreTypes,
    BuiltinCalls,
    Delombok,
    LombokSlf4j,
    ListToArray,
    OptionalMarking,
    FileInputStream,
    StringWriter,
}

impl PassId {
    pub fn name(self) -> &'static str {
        match self {
            PassId::CoreTypes => "core-types",
            PassId::BuiltinCalls => "builtin-calls",
            PassId::Delombok => "delombok",
            PassId::LombokSlf4j => "lombok-slf4j",
            PassId::ListToArray => "list-to-array",
            PassId::OptionalMarking => "optional-marking",
            PassId::FileInputStream => "file-input-stream",
            PassId::StringWriter => "string-writer",
        }
    }
}

/// Passes that run for every unit, in this order, before any triggered pass.
/// Built-in call rewriting is keyed on `java.lang`, which is never imported.
pub const MANDATORY_PASSES: &[PassId] = &[PassId::CoreTypes, PassId::BuiltinCalls];

/// A TypeScript import added when a pass is enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmittedImport {
    pub specifier: &'static str,
    pub binding: &'static str,
    pub is_asterisk: bool,
}

/// One row of the registration table. `class: None` matches any class of
/// the package (and wildcard imports of it); `pass: None` marks types that
/// are native to TypeScript and just drops the import.
#[derive(Debug, Clone, Copy)]
pub struct PassEntry {
    pub package: &'static str,
    pub class: Option<&'static str>,
    pub pass: Option<PassId>,
    pub imports: &'static [EmittedImport],
}

const fn entry(package: &'static str, class: &'static str, pass: Option<PassId>) -> PassEntry {
    PassEntry {
        package,
        class: Some(class),
        pass,
        imports: &[],
    }
}

/// Platform package whose classes need no TypeScript import.
const fn native_package(package: &'static str) -> PassEntry {
    PassEntry {
        package,
        class: None,
        pass: None,
        imports: &[],
    }
}

pub static PASS_REGISTRY: &[PassEntry] = &[
    PassEntry {
        package: "lombok",
        class: None,
        pass: Some(PassId::Delombok),
        imports: &[],
    },
    entry("lombok.extern.slf4j", "Slf4j", Some(PassId::LombokSlf4j)),
    entry("java.util", "List", Some(PassId::ListToArray)),
    entry("java.util", "ArrayList", Some(PassId::ListToArray)),
    entry("java.util", "LinkedList", Some(PassId::ListToArray)),
    entry("java.util", "Optional", Some(PassId::OptionalMarking)),
    PassEntry {
        package: "java.io",
        class: Some("FileInputStream"),
        pass: Some(PassId::FileInputStream),
        imports: &[
            EmittedImport {
                specifier: "fs",
                binding: "Fs",
                is_asterisk: true,
            },
            EmittedImport {
                specifier: "stream",
                binding: "Readable",
                is_asterisk: false,
            },
        ],
    },
    PassEntry {
        package: "java.io",
        class: Some("StringWriter"),
        pass: Some(PassId::StringWriter),
        imports: &[EmittedImport {
            specifier: "stream",
            binding: "Writable",
            is_asterisk: false,
        }],
    },
    native_package("java.util"),
    native_package("java.util.function"),
    native_package("java.io"),
];

/// Find the registry entry for a `(package, class)` import key. A class
/// entry is preferred over a package entry.
pub fn lookup(package: &str, class: Option<&str>) -> Option<&'static PassEntry> {
    if let Some(class) = class {
        let exact = PASS_REGISTRY
            .iter()
            .find(|e| e.package == package && e.class == Some(class));
        if exact.is_some() {
            return exact;
        }
    }
    PASS_REGISTRY
        .iter()
        .find(|e| e.package == package && e.class.is_none())
}

/// Outcome of selection: passes to run in order plus any fallbacks taken
/// while rewriting imports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassPlan {
    pub passes: Vec<PassId>,
    pub degradations: Vec<Degradation>,
}

/// Select the passes for `unit` and replace its import list with the
/// TypeScript one: rewritten imports, then pass-emitted imports, then
/// sibling imports. Exact duplicates are collapsed, first occurrence wins.
pub fn plan_unit(
    unit: &mut CompilationUnit,
    ctx: &UnitContext,
    config: &JtsConfig,
) -> TranspileResult<PassPlan> {
    let resolver = Resolver::new(config);
    let from_package = unit.package_name().to_string();
    let mut plan = PassPlan {
        passes: MANDATORY_PASSES.to_vec(),
        degradations: Vec::new(),
    };
    let mut rewritten = Vec::new();
    let mut emitted = Vec::new();

    for import in std::mem::take(&mut unit.imports) {
        if import.is_encoded() {
            rewritten.push(import);
            continue;
        }

        let (package, class) = trigger_key(&import);
        if let Some(entry) = lookup(package, class) {
            trace!(import = %import.name, pass = ?entry.pass, "registry hit");
            if let Some(pass) = entry.pass {
                if !plan.passes.contains(&pass) {
                    plan.passes.push(pass);
                    for extra in entry.imports {
                        let mut decl = ImportDeclaration::encoded(
                            encode_import(extra.specifier, extra.binding)?,
                            ImportOrigin::Emitted,
                        );
                        decl.is_asterisk = extra.is_asterisk;
                        emitted.push(decl);
                    }
                }
            }
            continue;
        }

        rewritten.push(resolve_import(import, &resolver, ctx, &from_package, config, &mut plan)?);
    }

    let bound: FxHashSet<String> = rewritten
        .iter()
        .chain(&emitted)
        .map(|import| import.simple_name().to_string())
        .collect();
    let mut siblings = Vec::new();
    for name in referenced_siblings(unit, &ctx.siblings) {
        if bound.contains(&name) {
            continue;
        }
        siblings.push(ImportDeclaration::encoded(
            encode_import(&format!("./{name}"), &name)?,
            ImportOrigin::Synthesized,
        ));
    }

    let mut seen = FxHashSet::default();
    unit.imports = rewritten
        .into_iter()
        .chain(emitted)
        .chain(siblings)
        .filter(|import| seen.insert((import.name.clone(), import.is_static, import.is_asterisk)))
        .collect();

    debug!(
        package = %from_package,
        passes = ?plan.passes.iter().map(|p| p.name()).collect::<Vec<_>>(),
        imports = unit.imports.len(),
        "selected passes"
    );
    Ok(plan)
}

/// Registry key of an import. Static imports are keyed on their class.
fn trigger_key(import: &ImportDeclaration) -> (&str, Option<&str>) {
    if import.is_static && !import.is_asterisk {
        let class_name = parent_name(&import.name);
        return split_last(class_name);
    }
    import.package_and_class()
}

fn resolve_import(
    mut import: ImportDeclaration,
    resolver: &Resolver<'_>,
    ctx: &UnitContext,
    from_package: &str,
    config: &JtsConfig,
    plan: &mut PassPlan,
) -> TranspileResult<ImportDeclaration> {
    // `import static a.B.m` resolves `a.B` and binds `m`.
    let target = if import.is_static && !import.is_asterisk {
        parent_name(&import.name)
    } else {
        import.name.as_str()
    };

    match resolver.resolve(target, &ctx.module_name, from_package)? {
        Some(specifier) => {
            import.name = encode_import(&specifier, import.simple_name())?;
            import.origin = ImportOrigin::Resolved;
            Ok(import)
        }
        None => match config.unresolved_imports {
            UnresolvedImports::Fail => Err(TranspileError::UnresolvedImport { name: import.name }),
            UnresolvedImports::Wildcard => {
                let degradation = Degradation::WildcardImport {
                    name: import.name.clone(),
                };
                warn!(source = %ctx.source_path, "{degradation}");
                plan.degradations.push(degradation);
                import.is_asterisk = true;
                Ok(import)
            }
        },
    }
}

fn parent_name(name: &str) -> &str {
    name.rfind('.').map_or(name, |idx| &name[..idx])
}

fn split_last(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], Some(&name[idx + 1..])),
        None => ("", Some(name)),
    }
}

/// Sibling classes referenced in the unit body, in name order. Types
/// declared by the unit itself are excluded.
pub fn referenced_siblings(
    unit: &mut CompilationUnit,
    siblings: &FxHashSet<String>,
) -> BTreeSet<String> {
    let mut collector = SiblingCollector {
        siblings,
        found: BTreeSet::new(),
    };
    collector.visit_compilation_unit(unit);
    for decl in &unit.types {
        collector.found.remove(&decl.name);
    }
    collector.found
}

struct SiblingCollector<'s> {
    siblings: &'s FxHashSet<String>,
    found: BTreeSet<String>,
}

impl SiblingCollector<'_> {
    fn note(&mut self, name: &str) {
        if self.siblings.contains(name) && !self.found.contains(name) {
            self.found.insert(name.to_string());
        }
    }
}

impl VisitMut for SiblingCollector<'_> {
    fn visit_class_type(&mut self, ty: &mut ClassType) {
        walk_class_type(self, ty);
        // Outer.Inner references the file that declares Outer.
        let mut root: &ClassType = ty;
        while let Some(outer) = &root.scope {
            root = outer;
        }
        self.note(&root.name);
    }

    fn visit_expr(&mut self, expr: &mut Expr) {
        walk_expr(self, expr);
        let scope = match expr {
            Expr::MethodCall {
                scope: Some(scope), ..
            }
            | Expr::FieldAccess { scope, .. }
            | Expr::MethodReference { scope, .. } => scope.as_name().map(str::to_string),
            _ => None,
        };
        if let Some(name) = scope {
            self.note(&name);
        }
    }
}

#[cfg(test)]
#[path = "../tests/pass_registry.rs"]
mod tests;
