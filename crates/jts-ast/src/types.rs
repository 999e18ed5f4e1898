//! Type references.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }
}

/// Tag placed on a class type by a pass and consumed by the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeMarker {
    /// Was `Optional<T>`; renders as `T | null`.
    Nullable,
}

/// A named, possibly scoped and generic, class or interface type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassType {
    pub scope: Option<Box<ClassType>>,
    pub name: String,
    /// `None` for a raw type, `Some(vec![])` for the diamond `<>`.
    pub type_args: Option<Vec<Type>>,
    pub marker: Option<TypeMarker>,
}

impl ClassType {
    pub fn new(name: impl Into<String>) -> Self {
        ClassType {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_args(mut self, args: Vec<Type>) -> Self {
        self.type_args = Some(args);
        self
    }

    pub fn with_scope(mut self, scope: ClassType) -> Self {
        self.scope = Some(Box::new(scope));
        self
    }

    /// Dotted name including the scope, without type arguments.
    pub fn qualified_name(&self) -> String {
        match &self.scope {
            Some(scope) => format!("{}.{}", scope.qualified_name(), self.name),
            None => self.name.clone(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.marker == Some(TypeMarker::Nullable)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Class(ClassType),
    Primitive(PrimitiveType),
    Array(Box<Type>),
    /// Alternatives of a multi-catch parameter, in source order.
    Union(Vec<Type>),
    Void,
    /// `?`, `? extends B` or `? super B`.
    Wildcard(Option<Box<Type>>),
    /// Implicitly typed lambda parameter.
    #[default]
    Unknown,
}

impl Type {
    pub fn class(name: impl Into<String>) -> Self {
        Type::Class(ClassType::new(name))
    }

    pub fn generic(name: impl Into<String>, args: Vec<Type>) -> Self {
        Type::Class(ClassType::new(name).with_args(args))
    }

    pub fn array(component: Type) -> Self {
        Type::Array(Box::new(component))
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            Type::Class(ct) => Some(ct),
            _ => None,
        }
    }

    /// Whether this is an unscoped class type named `name`.
    pub fn is_named(&self, name: &str) -> bool {
        matches!(self, Type::Class(ct) if ct.scope.is_none() && ct.name == name)
    }

    /// Alternatives of a union type, or the type itself.
    pub fn alternatives(&self) -> &[Type] {
        match self {
            Type::Union(types) => types,
            other => std::slice::from_ref(other),
        }
    }
}
