//! TypeScript printer.
//!
//! A recursive renderer over the Java tree. Declarations, statements,
//! expressions and types live in their own files as `impl Printer` blocks;
//! decisions that depend on configuration go through [`EmitHooks`].
//!
//! Printer state is limited to the current ambient declaration type (depth
//! one), the indent level, whether a method body is being printed and whether
//! the enclosing class has an `extends` clause. Nothing survives across units:
//! a printer is built per unit and consumed by [`Printer::finish`].

mod comments;
mod declarations;
mod expressions;
mod hooks;
mod modifiers;
mod source_writer;
mod statements;
mod types;

pub use hooks::{ConfigHooks, EmitHooks};
pub use modifiers::{FinalSpelling, render_modifiers};
pub use source_writer::SourceWriter;

use comments::OrphanComments;
use jts_ast::{CompilationUnit, Type};
use jts_common::{JtsConfig, TranspileResult};

pub struct Printer<'a> {
    writer: SourceWriter,
    config: &'a JtsConfig,
    hooks: &'a dyn EmitHooks,
    /// Declared type of the field or local whose declarators are printed.
    ambient_type: Option<Type>,
    in_method: bool,
    derived_class: bool,
}

impl<'a> Printer<'a> {
    pub fn new(config: &'a JtsConfig, hooks: &'a dyn EmitHooks) -> Self {
        Printer {
            writer: SourceWriter::new(config.indentation),
            config,
            hooks,
            ambient_type: None,
            in_method: false,
            derived_class: false,
        }
    }

    pub fn finish(self) -> String {
        self.writer.finish()
    }

    /// Print a whole unit: leading comment, package line, imports, then the
    /// type declarations separated by blank lines.
    pub fn print_compilation_unit(&mut self, unit: &CompilationUnit) -> TranspileResult<()> {
        let mut orphans = OrphanComments::new(&unit.orphan_comments);

        if let Some(comment) = &unit.comment {
            self.print_comment(comment);
        }
        if let Some(package) = &unit.package {
            self.print_orphans_before(&mut orphans, package.span);
            self.hooks.package(&mut self.writer, &package.name);
        }

        for import in &unit.imports {
            self.print_orphans_before(&mut orphans, import.span);
            if let Some(comment) = &import.comment {
                self.print_comment(comment);
            }
            self.hooks.import(&mut self.writer, import);
        }
        if !unit.imports.is_empty() {
            self.write_line();
        }

        for (idx, decl) in unit.types.iter().enumerate() {
            if idx > 0 {
                self.write_line();
            }
            self.print_orphans_before(&mut orphans, decl.span);
            self.print_type_declaration(decl)?;
        }
        self.print_remaining_orphans(&mut orphans);
        self.writer.ensure_line_start();
        Ok(())
    }

    // =========================================================================
    // Output helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    /// Write `text` and end the line.
    pub(super) fn write_str_line(&mut self, text: &str) {
        self.writer.write_str_line(text);
    }

    pub(super) fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    pub(super) fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }

    /// Print `items` separated by `", "`.
    pub(super) fn print_comma_separated<T>(
        &mut self,
        items: &[T],
        mut print: impl FnMut(&mut Self, &T) -> TranspileResult<()>,
    ) -> TranspileResult<()> {
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.write(", ");
            }
            print(self, item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/printer.rs"]
mod tests;
