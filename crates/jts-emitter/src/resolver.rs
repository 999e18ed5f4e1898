//! Module/Package Resolver
//!
//! Maps a fully-qualified Java name, seen from a unit in a given module and
//! package, to a TypeScript module specifier:
//!
//! - a target in the same module resolves to a directory-relative specifier
//!   (`./x/Foo`, `../core/Foo`);
//! - a target in another module resolves to `<destModule>/<dest path>`
//!   (`@scope/core/enums/Kind`).
//!
//! Module maps are searched in configuration order and, within a module, the
//! first package map whose prefix covers the name wins.

use jts_common::config::{join_path, set_extension};
use jts_common::specifier;
use jts_common::{Degradation, JtsConfig, ModuleMap, PackageMap, TranspileError, TranspileResult};
use std::path::PathBuf;
use tracing::{trace, warn};

/// Extension of generated files.
pub const TYPESCRIPT_EXTENSION: &str = "ts";

pub struct Resolver<'a> {
    config: &'a JtsConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a JtsConfig) -> Self {
        Resolver { config }
    }

    /// Resolve `qualified_name` (dotted) as seen from `from_package` (dotted)
    /// in module `from_module`.
    ///
    /// Returns `Ok(None)` when no module map covers the name.
    pub fn resolve(
        &self,
        qualified_name: &str,
        from_module: &str,
        from_package: &str,
    ) -> TranspileResult<Option<String>> {
        let from = self.module(from_module)?;
        let name_path = qualified_name.replace('.', "/");

        let Some((module_name, module, package_map)) = self.find_target(&name_path) else {
            trace!(name = qualified_name, "no module map covers import");
            return Ok(None);
        };
        let target = package_map.dest_path_for(&name_path);

        let resolved = if module_name == from_module {
            let from_path = from_package.replace('.', "/");
            let from_map = from.find_package_map(&from_path).ok_or_else(|| {
                TranspileError::MissingPackageMap {
                    module: from_module.to_string(),
                    package: from_package.to_string(),
                }
            })?;
            relative_specifier(&from_map.dest_path_for(&from_path), &target)
        } else {
            let qualified = join_path(module.destination_module(module_name), &target);
            // Scoped module names must survive the dotted encoding unchanged.
            specifier::decode(&specifier::encode(&qualified)?)
        };

        trace!(name = qualified_name, specifier = %resolved, "resolved import");
        Ok(Some(resolved))
    }

    /// Output file of a unit: `<outputDirectory>/<outputPath>/<destPath>/<rest>.ts`.
    ///
    /// `source_path` is the slash-separated path of the source file relative
    /// to the module's source root. When no package map covers it the source
    /// layout is kept and a degradation is returned.
    pub fn output_path(
        &self,
        module_name: &str,
        source_path: &str,
    ) -> TranspileResult<(PathBuf, Option<Degradation>)> {
        let module = self.module(module_name)?;
        let (relative, degradation) = match module.find_package_map(source_path) {
            Some(package_map) => (
                package_map.output_file_name(source_path, TYPESCRIPT_EXTENSION),
                None,
            ),
            None => {
                let degradation = Degradation::UnmappedOutputPath {
                    path: source_path.to_string(),
                };
                warn!(module = module_name, "{degradation}");
                (
                    set_extension(source_path, TYPESCRIPT_EXTENSION),
                    Some(degradation),
                )
            }
        };

        let mut path = self.config.output_directory.clone();
        if !module.output_path.is_empty() {
            path.push(&module.output_path);
        }
        path.extend(relative.split('/').filter(|segment| !segment.is_empty()));
        Ok((path, degradation))
    }

    fn module(&self, name: &str) -> TranspileResult<&'a ModuleMap> {
        self.config
            .module(name)
            .ok_or_else(|| TranspileError::UnknownModule {
                module: name.to_string(),
            })
    }

    fn find_target(&self, name_path: &str) -> Option<(&'a str, &'a ModuleMap, &'a PackageMap)> {
        self.config.module_maps.iter().find_map(|(name, module)| {
            module
                .find_package_map(name_path)
                .map(|package_map| (name.as_str(), module, package_map))
        })
    }
}

/// Specifier for `target` (a file path without extension) relative to the
/// directory `from_dir`. Both are slash-separated, relative to the same root.
pub fn relative_specifier(from_dir: &str, target: &str) -> String {
    let from: Vec<&str> = from_dir.split('/').filter(|s| !s.is_empty()).collect();
    let to: Vec<&str> = target.split('/').filter(|s| !s.is_empty()).collect();

    // The last target segment is the file and never part of the common prefix.
    let dirs = to.len().saturating_sub(1);
    let common = from
        .iter()
        .zip(&to[..dirs])
        .take_while(|(a, b)| a == b)
        .count();

    let ups = from.len() - common;
    let rest = to[common..].join("/");
    if ups == 0 {
        format!("./{rest}")
    } else {
        format!("{}{rest}", "../".repeat(ups))
    }
}

#[cfg(test)]
#[path = "../tests/resolver.rs"]
mod tests;
