//! Log subscriber setup for the `jts` binary.
//!
//! Logging stays off unless `JTS_LOG` or `RUST_LOG` holds a filter, for
//! example `JTS_LOG="jts_emitter::pass_registry=debug,jts_cli=info"`.
//! `JTS_LOG_FORMAT=tree` nests each unit's events under its `transpile_unit`
//! span; `JTS_LOG_FORMAT=json` writes one object per line. Everything goes
//! to stderr, leaving stdout to the run summary.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown names fall back to plain text.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directives from `JTS_LOG`, else `RUST_LOG`.
fn env_filter() -> Option<EnvFilter> {
    match std::env::var("JTS_LOG") {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var_os("RUST_LOG").is_some() => Some(EnvFilter::from_default_env()),
        Err(_) => None,
    }
}

pub fn init_tracing() {
    let Some(filter) = env_filter() else {
        return;
    };
    let format = LogFormat::parse(&std::env::var("JTS_LOG_FORMAT").unwrap_or_default());

    match format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config.rs"]
mod tests;
