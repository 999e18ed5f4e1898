// Type rendering.

use super::Printer;
use jts_ast::{ClassType, Type, TypeParameter};
use jts_common::{TranspileError, TranspileResult};

impl<'a> Printer<'a> {
    /// TypeScript text of a type reference.
    pub(super) fn type_text(&self, ty: &Type) -> TranspileResult<String> {
        Ok(match ty {
            Type::Class(class) => self.class_type_text(class)?,
            // A primitive the scalar table left alone keeps its Java keyword.
            Type::Primitive(primitive) => primitive.keyword().to_string(),
            Type::Array(component) => {
                let inner = self.type_text(component)?;
                if needs_parens_in_array(component) {
                    format!("({inner})[]")
                } else {
                    format!("{inner}[]")
                }
            }
            Type::Union(alternatives) => {
                let parts = alternatives
                    .iter()
                    .map(|alt| self.type_text(alt))
                    .collect::<TranspileResult<Vec<_>>>()?;
                parts.join(" | ")
            }
            Type::Void => "void".to_string(),
            Type::Wildcard(Some(bound)) => self.type_text(bound)?,
            Type::Wildcard(None) | Type::Unknown => "any".to_string(),
        })
    }

    pub(super) fn class_type_text(&self, class: &ClassType) -> TranspileResult<String> {
        if class.is_nullable() {
            return match class.type_args.as_deref() {
                Some([inner]) => Ok(format!("{} | null", self.type_text(inner)?)),
                other => Err(TranspileError::SentinelArity {
                    name: class.qualified_name(),
                    count: other.map_or(0, <[Type]>::len),
                }),
            };
        }

        let mut text = class.qualified_name();
        if let Some(args) = class.type_args.as_deref().filter(|args| !args.is_empty()) {
            text.push('<');
            for (idx, arg) in args.iter().enumerate() {
                if idx > 0 {
                    text.push_str(", ");
                }
                text.push_str(&self.type_text(arg)?);
            }
            text.push('>');
        }
        Ok(text)
    }

    /// Name used on the right of `instanceof` and for class literals: type
    /// arguments are erased at runtime.
    pub(super) fn runtime_type_name(&self, ty: &Type) -> TranspileResult<String> {
        match ty {
            Type::Class(class) if !class.is_nullable() => Ok(class.qualified_name()),
            Type::Array(_) => Ok("Array".to_string()),
            other => self.type_text(other),
        }
    }

    /// `<T, U extends Bound>` or nothing.
    pub(super) fn type_parameters_text(
        &self,
        parameters: &[TypeParameter],
    ) -> TranspileResult<String> {
        if parameters.is_empty() {
            return Ok(String::new());
        }
        let mut text = String::from("<");
        for (idx, param) in parameters.iter().enumerate() {
            if idx > 0 {
                text.push_str(", ");
            }
            text.push_str(&param.name);
            if !param.bounds.is_empty() {
                let bounds = param
                    .bounds
                    .iter()
                    .map(|bound| self.type_text(bound))
                    .collect::<TranspileResult<Vec<_>>>()?;
                text.push_str(" extends ");
                text.push_str(&bounds.join(" & "));
            }
        }
        text.push('>');
        Ok(text)
    }

    /// `: T` annotation, omitted for implicitly typed declarations.
    pub(super) fn type_annotation(&self, ty: &Type) -> TranspileResult<String> {
        if matches!(ty, Type::Unknown) {
            return Ok(String::new());
        }
        Ok(format!(": {}", self.type_text(ty)?))
    }
}

fn needs_parens_in_array(component: &Type) -> bool {
    match component {
        Type::Union(_) => true,
        Type::Class(class) => class.is_nullable(),
        _ => false,
    }
}
