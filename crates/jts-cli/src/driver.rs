//! Batch driver: module walking, sibling discovery, parallel transpilation
//! and output writing.
//!
//! Every configured module is read from
//! `<inputDirectory>/<module>/<srcRoot>`. Each `<Name>.java.json` file under
//! that root holds one serialized [`CompilationUnit`]. Files in the same
//! directory are siblings of each other.

use anyhow::{Context, Result, anyhow, bail};
use jts_ast::CompilationUnit;
use jts_common::{Degradation, ErrorCategory, JtsConfig, ModuleMap, TranspileError};
use jts_emitter::{TranspileOutput, UnitContext, transpile_unit};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Suffix of a serialized syntax tree file.
pub const TREE_SUFFIX: &str = ".java.json";

// =============================================================================
// Discovery
// =============================================================================

/// One serialized syntax tree found under a module's source root.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub module_name: String,
    /// Location of the `.java.json` file on disk.
    pub tree_path: PathBuf,
    /// Slash-separated Java source path relative to the source root, e.g.
    /// `com/example/Foo.java`.
    pub source_path: String,
    /// Class names declared by the files of the same directory.
    pub siblings: Arc<FxHashSet<String>>,
}

impl SourceFile {
    pub fn context(&self) -> UnitContext {
        UnitContext {
            module_name: self.module_name.clone(),
            source_path: self.source_path.clone(),
            siblings: (*self.siblings).clone(),
        }
    }
}

pub fn module_root(config: &JtsConfig, module_name: &str, module: &ModuleMap) -> PathBuf {
    let mut root = config.input_directory.join(module_name);
    root.extend(module.src_root.split('/').filter(|segment| !segment.is_empty()));
    root
}

/// Class name of a tree file: the file name up to its first dot.
pub fn class_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

fn slash_path(relative: &Path) -> Result<String> {
    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(
                segment
                    .to_str()
                    .ok_or_else(|| anyhow!("non UTF-8 path: {}", relative.display()))?,
            ),
            _ => bail!("unexpected path component in {}", relative.display()),
        }
    }
    Ok(segments.join("/"))
}

/// Find every syntax tree of every configured module, in module order and
/// file name order within a module.
pub fn discover_sources(config: &JtsConfig) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();

    for (module_name, module) in &config.module_maps {
        let root = module_root(config, module_name, module);
        if !root.is_dir() {
            bail!(
                "source root of module '{module_name}' not found: {}",
                root.display()
            );
        }

        // (directory, source path) per tree, directory keyed by slash path.
        let mut found: Vec<(String, PathBuf, String)> = Vec::new();
        let mut by_directory: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if !file_name.ends_with(TREE_SUFFIX) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&root)
                .with_context(|| format!("{} escapes {}", entry.path().display(), root.display()))?;
            let tree_path = slash_path(relative)?;
            let source_path = tree_path
                .strip_suffix(".json")
                .unwrap_or(&tree_path)
                .to_string();
            let directory = match source_path.rfind('/') {
                Some(idx) => source_path[..idx].to_string(),
                None => String::new(),
            };

            by_directory
                .entry(directory.clone())
                .or_default()
                .insert(class_name(file_name).to_string());
            found.push((directory, entry.into_path(), source_path));
        }

        let by_directory: FxHashMap<String, Arc<FxHashSet<String>>> = by_directory
            .into_iter()
            .map(|(directory, names)| (directory, Arc::new(names)))
            .collect();

        debug!(
            module = module_name.as_str(),
            root = %root.display(),
            files = found.len(),
            directories = by_directory.len(),
            "walked module"
        );

        for (directory, tree_path, source_path) in found {
            let siblings = by_directory
                .get(&directory)
                .cloned()
                .unwrap_or_default();
            sources.push(SourceFile {
                module_name: module_name.clone(),
                tree_path,
                source_path,
                siblings,
            });
        }
    }

    Ok(sources)
}

// =============================================================================
// Transpilation
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Worker threads; `None` or zero uses the rayon default.
    pub jobs: Option<usize>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct FileFailure {
    pub tree_path: PathBuf,
    pub error: anyhow::Error,
}

impl FileFailure {
    /// Category of the underlying transpile error, if the failure came from
    /// the transpiler rather than from I/O or deserialization.
    pub fn category(&self) -> Option<ErrorCategory> {
        self.error
            .downcast_ref::<TranspileError>()
            .map(TranspileError::category)
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    /// Output paths of the units that transpiled, in discovery order.
    pub outputs: Vec<PathBuf>,
    pub degradations: Vec<(PathBuf, Degradation)>,
    pub failures: Vec<FileFailure>,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.outputs.len() + self.failures.len()
    }
}

/// Read, transpile and (unless `dry_run`) write one file.
pub fn process_file(file: &SourceFile, config: &JtsConfig, dry_run: bool) -> Result<TranspileOutput> {
    let text = std::fs::read_to_string(&file.tree_path)
        .with_context(|| format!("failed to read {}", file.tree_path.display()))?;
    let unit: CompilationUnit = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse syntax tree {}", file.tree_path.display()))?;
    let output = transpile_unit(unit, &file.context(), config)
        .with_context(|| format!("failed to transpile {}", file.source_path))?;

    if !dry_run {
        write_output(&output)?;
    }
    Ok(output)
}

fn write_output(output: &TranspileOutput) -> Result<()> {
    if let Some(parent) = output.output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output.output_path, &output.code)
        .with_context(|| format!("failed to write {}", output.output_path.display()))
}

fn build_pool(jobs: Option<usize>) -> Result<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs.filter(|&jobs| jobs > 0) {
        builder = builder.num_threads(jobs);
    }
    builder.build().context("failed to start worker threads")
}

/// Transpile every discovered file. Per-file failures are collected in the
/// summary; only discovery and pool setup errors abort the run.
#[tracing::instrument(level = "info", skip_all, fields(dry_run = options.dry_run))]
pub fn run(config: &JtsConfig, options: &RunOptions) -> Result<RunSummary> {
    let files = discover_sources(config)?;
    info!(
        files = files.len(),
        modules = config.module_maps.len(),
        "discovered syntax trees"
    );

    let pool = build_pool(options.jobs)?;
    let results: Vec<(&SourceFile, Result<TranspileOutput>)> = pool.install(|| {
        files
            .par_iter()
            .map(|file| (file, process_file(file, config, options.dry_run)))
            .collect()
    });

    let mut summary = RunSummary {
        dry_run: options.dry_run,
        ..Default::default()
    };
    for (file, result) in results {
        match result {
            Ok(output) => {
                summary.degradations.extend(
                    output
                        .degradations
                        .into_iter()
                        .map(|degradation| (file.tree_path.clone(), degradation)),
                );
                summary.outputs.push(output.output_path);
            }
            Err(error) => {
                warn!(file = %file.tree_path.display(), "{error:#}");
                summary.failures.push(FileFailure {
                    tree_path: file.tree_path.clone(),
                    error,
                });
            }
        }
    }

    info!(
        transpiled = summary.outputs.len(),
        failed = summary.failures.len(),
        degradations = summary.degradations.len(),
        "run finished"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../tests/driver.rs"]
mod tests;
