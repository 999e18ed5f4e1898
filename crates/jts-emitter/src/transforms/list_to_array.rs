//! `List`, `ArrayList` and `LinkedList` become `Array`.

use jts_ast::ClassType;
use jts_ast::visit::{VisitMut, walk_class_type};

const LIST_TYPES: &[&str] = &["List", "ArrayList", "LinkedList"];

pub struct ListToArray;

impl VisitMut for ListToArray {
    fn visit_class_type(&mut self, ty: &mut ClassType) {
        walk_class_type(self, ty);
        if ty.scope.is_none() && LIST_TYPES.contains(&ty.name.as_str()) {
            ty.name = "Array".to_string();
        }
    }
}
