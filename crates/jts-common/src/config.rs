//! Transpiler configuration.
//!
//! The configuration maps the Java module/package layout onto a TypeScript
//! source hierarchy and carries the global printing options. It is loaded
//! once by the driver (YAML or JSON, camelCase keys) and shared read-only by
//! every unit of a run.
//!
//! ```yaml
//! inputDirectory: ../java
//! outputDirectory: ../ts
//! indentation: 2
//! commentThrows: true
//! unknownAnnotations: comment
//! moduleMaps:
//!   core:
//!     srcRoot: src/main/java
//!     outputPath: packages/core/src
//!     destModule: "@shapetrees/core"
//!     packageMaps:
//!       - pkg: com.janeirodigital.shapetrees.core
//!         destPath: ""
//! ```

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do with method annotations that no pass consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownAnnotations {
    /// Abort the unit with an unknown-annotation error.
    #[default]
    Fail,
    /// Emit a single-line comment listing the annotations.
    Comment,
    /// Drop the annotations silently.
    Ignore,
}

/// What to do with imports that no module map covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedImports {
    /// Keep the import as a best-effort namespace import.
    #[default]
    Wildcard,
    /// Abort the unit with a configuration error.
    Fail,
}

fn default_indentation() -> usize {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JtsConfig {
    /// Root of the Java sources; modules live in `<inputDirectory>/<module>`.
    #[serde(default)]
    pub input_directory: PathBuf,
    /// Root of the generated TypeScript tree.
    #[serde(default)]
    pub output_directory: PathBuf,
    /// Java module name to module mapping, in configuration order.
    #[serde(default)]
    pub module_maps: IndexMap<String, ModuleMap>,
    /// Line emitted for a package declaration; `{package}` is substituted.
    #[serde(default)]
    pub package_template: Option<String>,
    /// Spaces per indentation level.
    #[serde(default = "default_indentation")]
    pub indentation: usize,
    /// Line emitted for an unresolved import; `{name}` and `{module}` are substituted.
    #[serde(default)]
    pub unknown_import_template: Option<String>,
    /// Render thrown-exception lists as `/* throws ... */` comments.
    #[serde(default)]
    pub comment_throws: bool,
    #[serde(default)]
    pub unknown_annotations: UnknownAnnotations,
    #[serde(default)]
    pub unresolved_imports: UnresolvedImports,
    /// Render `final` parameters as a `/*final*/` marker instead of dropping it.
    #[serde(default)]
    pub comment_final_parameters: bool,
    /// Extra Java type name to TypeScript type name mappings for the core
    /// types pass. Entries override the built-in table.
    #[serde(default)]
    pub scalar_types: IndexMap<String, String>,
}

impl Default for JtsConfig {
    fn default() -> Self {
        JtsConfig {
            input_directory: PathBuf::new(),
            output_directory: PathBuf::new(),
            module_maps: IndexMap::new(),
            package_template: None,
            indentation: default_indentation(),
            unknown_import_template: None,
            comment_throws: false,
            unknown_annotations: UnknownAnnotations::default(),
            unresolved_imports: UnresolvedImports::default(),
            comment_final_parameters: false,
            scalar_types: IndexMap::new(),
        }
    }
}

impl JtsConfig {
    /// Look up a module map by Java module name.
    pub fn module(&self, name: &str) -> Option<&ModuleMap> {
        self.module_maps.get(name)
    }

    /// Builder-style helper used by tests and embedders.
    pub fn with_module(mut self, name: impl Into<String>, module: ModuleMap) -> Self {
        self.module_maps.insert(name.into(), module);
        self
    }
}

/// Mapping of one Java module (e.g. a Maven module) to a TypeScript package.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMap {
    /// Output directory of the module, relative to `outputDirectory`.
    #[serde(default)]
    pub output_path: String,
    /// Java source root of the module, relative to the module directory.
    #[serde(default)]
    pub src_root: String,
    /// Module name other modules import this one by (e.g. `@scope/core`).
    /// Defaults to the module's key in `moduleMaps`.
    #[serde(default)]
    pub dest_module: Option<String>,
    /// Package prefixes, first match wins.
    #[serde(default)]
    pub package_maps: Vec<PackageMap>,
}

impl ModuleMap {
    pub fn new(output_path: impl Into<String>, src_root: impl Into<String>) -> Self {
        ModuleMap {
            output_path: output_path.into(),
            src_root: src_root.into(),
            dest_module: None,
            package_maps: Vec::new(),
        }
    }

    pub fn with_dest_module(mut self, dest_module: impl Into<String>) -> Self {
        self.dest_module = Some(dest_module.into());
        self
    }

    pub fn with_package(mut self, package_map: PackageMap) -> Self {
        self.package_maps.push(package_map);
        self
    }

    /// First package map whose prefix covers `slash_path`.
    pub fn find_package_map(&self, slash_path: &str) -> Option<&PackageMap> {
        self.package_maps.iter().find(|pm| pm.matches(slash_path))
    }

    /// Name used by other modules to import this one.
    pub fn destination_module<'a>(&'a self, key: &'a str) -> &'a str {
        self.dest_module.as_deref().unwrap_or(key)
    }
}

/// How one Java package prefix maps into the TypeScript source hierarchy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMap {
    /// Java package prefix, e.g. `com.example.core`.
    pub pkg: String,
    /// Destination sub-path replacing the prefix; `None` drops the prefix.
    #[serde(default)]
    pub dest_path: Option<String>,
    #[serde(skip)]
    pkg_path: OnceCell<String>,
}

impl PackageMap {
    pub fn new(pkg: impl Into<String>, dest_path: Option<&str>) -> Self {
        PackageMap {
            pkg: pkg.into(),
            dest_path: dest_path.map(str::to_string),
            pkg_path: OnceCell::new(),
        }
    }

    /// The package prefix as a slash path (`com/example/core`), computed once.
    pub fn pkg_path(&self) -> &str {
        self.pkg_path.get_or_init(|| self.pkg.replace('.', "/"))
    }

    /// Whether `slash_path` lies under this package prefix.
    ///
    /// The prefix must end on a path boundary, so `com/example` does not
    /// cover `com/examples/X`.
    pub fn matches(&self, slash_path: &str) -> bool {
        let prefix = self.pkg_path();
        if prefix.is_empty() || slash_path == prefix {
            return true;
        }
        slash_path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Destination path for a slash path under this prefix: the prefix is
    /// replaced by `destPath`. The result has no leading slash.
    pub fn dest_path_for(&self, slash_path: &str) -> String {
        let prefix = self.pkg_path();
        let rest = slash_path
            .strip_prefix(prefix)
            .unwrap_or(slash_path)
            .trim_start_matches('/');
        join_path(self.dest_path.as_deref().unwrap_or(""), rest)
    }

    /// Dotted destination package name for a slash path under this prefix.
    pub fn dest_package_name(&self, slash_path: &str) -> String {
        self.dest_path_for(slash_path).replace('/', ".")
    }

    /// Output file name for a source file (slash path relative to the source
    /// root), with its extension replaced by `extension`.
    pub fn output_file_name(&self, source_path: &str, extension: &str) -> String {
        set_extension(&self.dest_path_for(source_path), extension)
    }
}

/// Join two slash paths, skipping empty sides.
pub fn join_path(base: &str, rest: &str) -> String {
    let base = base.trim_end_matches('/');
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{rest}"),
    }
}

/// Replace the extension of the last path segment.
pub fn set_extension(path: &str, extension: &str) -> String {
    let segment_start = path.rfind('/').map_or(0, |idx| idx + 1);
    let stem_end = path[segment_start..]
        .find('.')
        .map_or(path.len(), |idx| segment_start + idx);
    format!("{}.{extension}", &path[..stem_end])
}

#[cfg(test)]
#[path = "../tests/config.rs"]
mod tests;
