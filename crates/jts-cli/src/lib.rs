//! Driver for the jts transpiler.
//!
//! The binary loads a configuration file, discovers serialized Java trees
//! (`<Name>.java.json`) under every configured module, transpiles them in
//! parallel and writes the TypeScript output. A failing unit is reported and
//! skipped; it never aborts the rest of the batch.

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod tracing_config;
