//! Import resolution, transform passes and the TypeScript printer.
//!
//! # Architecture
//!
//! Each compilation unit goes through three phases:
//!
//! 1. **Selection** ([`pass_registry`]): the unit's imports are matched
//!    against a static registration table. Hits enqueue transform passes and
//!    may emit TypeScript imports; misses are resolved through the
//!    [`resolver`] into relative or module-qualified specifiers. Sibling
//!    classes referenced in the body get a synthesized `./Name` import.
//! 2. **Transformation** ([`transforms`]): the enqueued passes rewrite the
//!    tree in enqueue order, each exactly once.
//! 3. **Printing** ([`printer`]): a recursive renderer writes TypeScript,
//!    delegating package lines, imports, thrown types and leftover method
//!    annotations to [`printer::EmitHooks`].
//!
//! [`pipeline::transpile_unit`] chains the three phases and computes the
//! output path of the unit.

pub mod pass_registry;
pub mod pipeline;
pub mod printer;
pub mod resolver;
pub mod transforms;

pub use pass_registry::{PassId, PassPlan};
pub use pipeline::{TranspileOutput, UnitContext, transpile_unit};
pub use printer::{ConfigHooks, EmitHooks, Printer};
pub use resolver::Resolver;
