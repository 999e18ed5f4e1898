//! Injectable output hooks.
//!
//! The printer hands four decisions to an [`EmitHooks`] implementation:
//! the package line, each import line, the thrown-type list of a signature
//! and the method annotations it did not consume itself. [`ConfigHooks`]
//! implements them from the configuration.

use super::source_writer::SourceWriter;
use jts_ast::ImportDeclaration;
use jts_common::specifier::decode_import;
use jts_common::{JtsConfig, TranspileError, TranspileResult, UnknownAnnotations};

pub trait EmitHooks {
    /// Called once for a unit with a package declaration.
    fn package(&self, out: &mut SourceWriter, package: &str);

    /// Called for each import, in order. Writes whole lines.
    fn import(&self, out: &mut SourceWriter, import: &ImportDeclaration);

    /// Called after a signature's closing parenthesis (and return type) with
    /// the rendered thrown types. Writes inline text.
    fn throws(&self, out: &mut SourceWriter, thrown: &[String]);

    /// Called before a method with the source text of its remaining
    /// annotations. Writes whole lines.
    fn method_annotations(
        &self,
        out: &mut SourceWriter,
        method: &str,
        annotations: &[String],
    ) -> TranspileResult<()>;
}

/// Default hooks driven by [`JtsConfig`].
pub struct ConfigHooks<'a> {
    config: &'a JtsConfig,
}

impl<'a> ConfigHooks<'a> {
    pub fn new(config: &'a JtsConfig) -> Self {
        ConfigHooks { config }
    }
}

const DEFAULT_UNKNOWN_IMPORT: &str = "import * as {name} from '{module}';";

impl EmitHooks for ConfigHooks<'_> {
    fn package(&self, out: &mut SourceWriter, package: &str) {
        if let Some(template) = &self.config.package_template {
            out.write_str_line(&template.replace("{package}", package));
        }
    }

    fn import(&self, out: &mut SourceWriter, import: &ImportDeclaration) {
        if import.is_encoded() {
            let (module, binding) = decode_import(&import.name);
            let line = if import.is_asterisk {
                format!("import * as {binding} from '{module}';")
            } else {
                format!("import {{ {binding} }} from '{module}';")
            };
            out.write_str_line(&line);
            return;
        }

        let template = self
            .config
            .unknown_import_template
            .as_deref()
            .unwrap_or(DEFAULT_UNKNOWN_IMPORT);
        let line = template
            .replace("{name}", import.simple_name())
            .replace("{module}", &import.name);
        out.write_str_line(&line);
    }

    fn throws(&self, out: &mut SourceWriter, thrown: &[String]) {
        if self.config.comment_throws && !thrown.is_empty() {
            out.write(&format!(" /* throws {} */", thrown.join(", ")));
        }
    }

    fn method_annotations(
        &self,
        out: &mut SourceWriter,
        method: &str,
        annotations: &[String],
    ) -> TranspileResult<()> {
        match self.config.unknown_annotations {
            UnknownAnnotations::Fail => Err(TranspileError::UnknownAnnotation {
                member: method.to_string(),
                annotations: annotations.to_vec(),
            }),
            UnknownAnnotations::Comment => {
                out.write_str_line(&format!("// {}", annotations.join(", ")));
                Ok(())
            }
            UnknownAnnotations::Ignore => Ok(()),
        }
    }
}
