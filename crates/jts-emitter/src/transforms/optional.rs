//! `Optional<T>` handling.
//!
//! The type is tagged nullable (the printer renders `T | null`), and the
//! factory calls collapse: `Optional.empty()` to `null`,
//! `Optional.of(x)` and `Optional.ofNullable(x)` to `x`.

use jts_ast::visit::{VisitMut, walk_class_type, walk_expr};
use jts_ast::{ClassType, Expr, TypeMarker};

const OPTIONAL: &str = "Optional";

pub struct OptionalMarking;

impl VisitMut for OptionalMarking {
    fn visit_class_type(&mut self, ty: &mut ClassType) {
        walk_class_type(self, ty);
        if ty.scope.is_none() && ty.name == OPTIONAL {
            ty.marker = Some(TypeMarker::Nullable);
        }
    }

    fn visit_expr(&mut self, expr: &mut Expr) {
        walk_expr(self, expr);
        let Expr::MethodCall {
            scope: Some(scope),
            name,
            arguments,
        } = expr
        else {
            return;
        };
        if scope.as_name() != Some(OPTIONAL) {
            return;
        }
        let replacement = match (name.as_str(), arguments.len()) {
            ("empty", 0) => Expr::null(),
            ("of" | "ofNullable", 1) => arguments.remove(0),
            _ => return,
        };
        *expr = replacement;
    }
}
