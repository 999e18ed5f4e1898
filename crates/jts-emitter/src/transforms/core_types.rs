//! Java scalar and boxed types to TypeScript scalars.

use jts_ast::visit::{VisitMut, walk_class_type, walk_type};
use jts_ast::{ClassType, Type};
use jts_common::JtsConfig;
use rustc_hash::FxHashMap;

/// Built-in mapping; `scalarTypes` in the configuration extends and
/// overrides it.
pub const DEFAULT_SCALAR_TYPES: &[(&str, &str)] = &[
    ("boolean", "boolean"),
    ("byte", "number"),
    ("char", "string"),
    ("short", "number"),
    ("int", "number"),
    ("long", "number"),
    ("float", "number"),
    ("double", "number"),
    ("String", "string"),
    ("CharSequence", "string"),
    ("Character", "string"),
    ("Boolean", "boolean"),
    ("Byte", "number"),
    ("Short", "number"),
    ("Integer", "number"),
    ("Long", "number"),
    ("Float", "number"),
    ("Double", "number"),
    ("Number", "number"),
];

pub struct CoreTypes {
    table: FxHashMap<String, String>,
}

impl CoreTypes {
    pub fn new(config: &JtsConfig) -> Self {
        let mut table: FxHashMap<String, String> = DEFAULT_SCALAR_TYPES
            .iter()
            .map(|(java, ts)| ((*java).to_string(), (*ts).to_string()))
            .collect();
        for (java, ts) in &config.scalar_types {
            table.insert(java.clone(), ts.clone());
        }
        CoreTypes { table }
    }
}

impl VisitMut for CoreTypes {
    fn visit_type(&mut self, ty: &mut Type) {
        if let Type::Primitive(primitive) = ty {
            if let Some(mapped) = self.table.get(primitive.keyword()) {
                *ty = Type::class(mapped.clone());
            }
            return;
        }
        walk_type(self, ty);
    }

    fn visit_class_type(&mut self, ty: &mut ClassType) {
        walk_class_type(self, ty);
        if ty.scope.is_some() || ty.type_args.is_some() {
            return;
        }
        if let Some(mapped) = self.table.get(&ty.name) {
            ty.name = mapped.clone();
        }
    }
}
