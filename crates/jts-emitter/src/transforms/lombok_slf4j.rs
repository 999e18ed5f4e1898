//! Drop `@Slf4j`; the generated `log` field has no TypeScript counterpart.

use jts_ast::TypeDeclaration;
use jts_ast::visit::{VisitMut, walk_type_declaration};

pub struct LombokSlf4j;

impl VisitMut for LombokSlf4j {
    fn visit_type_declaration(&mut self, decl: &mut TypeDeclaration) {
        decl.annotations.retain(|a| !a.is("Slf4j"));
        walk_type_declaration(self, decl);
    }
}
