//! Type declarations, members, modifiers and annotations.

use crate::stmt::Block;
use crate::types::Type;
use crate::unit::Comment;
use crate::expr::Expr;
use jts_common::Span;
use serde::{Deserialize, Serialize};

// =============================================================================
// Modifiers and annotations
// =============================================================================

/// Java declaration modifiers.
///
/// The first six have a TypeScript spelling; the rest are Java-only and are
/// dropped by the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Default,
}

impl Modifier {
    /// Java keyword spelling.
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
            Modifier::Default => "default",
        }
    }
}

/// An annotation use such as `@Getter` or `@SuppressWarnings("unchecked")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    /// Name as written, possibly qualified (`lombok.Getter`).
    pub name: String,
    /// Source text between the parentheses, if any.
    pub arguments: Option<String>,
    pub span: Span,
}

impl Annotation {
    pub fn marker(name: impl Into<String>) -> Self {
        Annotation {
            name: name.into(),
            arguments: None,
            span: Span::synthetic(),
        }
    }

    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn is(&self, simple_name: &str) -> bool {
        self.simple_name() == simple_name
    }

    /// Java source text of the annotation, e.g. `@Foo(1)`.
    pub fn to_source(&self) -> String {
        match &self.arguments {
            Some(args) => format!("@{}({args})", self.name),
            None => format!("@{}", self.name),
        }
    }
}

pub(crate) fn has_modifier(modifiers: &[Modifier], modifier: Modifier) -> bool {
    modifiers.contains(&modifier)
}

// =============================================================================
// Type declarations
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeParameter {
    pub name: String,
    pub bounds: Vec<Type>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumConstant {
    pub name: String,
    pub arguments: Vec<Expr>,
    pub comment: Option<Comment>,
    pub span: Span,
}

/// A class, interface or enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Vec<Type>,
    pub implements: Vec<Type>,
    pub enum_constants: Vec<EnumConstant>,
    pub members: Vec<Member>,
    pub comment: Option<Comment>,
    pub orphan_comments: Vec<Comment>,
    pub span: Span,
}

impl TypeDeclaration {
    pub fn class(name: impl Into<String>) -> Self {
        TypeDeclaration {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        TypeDeclaration {
            kind: TypeKind::Interface,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn extending(mut self, ty: Type) -> Self {
        self.extends.push(ty);
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        has_modifier(&self.modifiers, modifier)
    }

    /// A class with an `extends` clause (interfaces extend other interfaces,
    /// which does not make them derived classes).
    pub fn is_derived_class(&self) -> bool {
        self.kind == TypeKind::Class && !self.extends.is_empty()
    }
}

// =============================================================================
// Members
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Initializer(InitializerDecl),
    Type(Box<TypeDeclaration>),
}

impl Member {
    pub fn span(&self) -> Span {
        match self {
            Member::Field(f) => f.span,
            Member::Method(m) => m.span,
            Member::Constructor(c) => c.span,
            Member::Initializer(i) => i.span,
            Member::Type(t) => t.span,
        }
    }

    pub fn comment(&self) -> Option<&Comment> {
        match self {
            Member::Field(f) => f.comment.as_ref(),
            Member::Method(m) => m.comment.as_ref(),
            Member::Constructor(c) => c.comment.as_ref(),
            Member::Initializer(i) => i.comment.as_ref(),
            Member::Type(t) => t.comment.as_ref(),
        }
    }
}

impl From<FieldDecl> for Member {
    fn from(field: FieldDecl) -> Self {
        Member::Field(field)
    }
}

impl From<MethodDecl> for Member {
    fn from(method: MethodDecl) -> Self {
        Member::Method(method)
    }
}

impl From<ConstructorDecl> for Member {
    fn from(ctor: ConstructorDecl) -> Self {
        Member::Constructor(ctor)
    }
}

impl From<TypeDeclaration> for Member {
    fn from(decl: TypeDeclaration) -> Self {
        Member::Type(Box::new(decl))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableDeclarator {
    pub name: String,
    pub init: Option<Expr>,
    pub span: Span,
}

impl VariableDeclarator {
    pub fn new(name: impl Into<String>, init: Option<Expr>) -> Self {
        VariableDeclarator {
            name: name.into(),
            init,
            span: Span::synthetic(),
        }
    }
}

/// A field declaration; Java allows several co-declared variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub ty: Type,
    pub variables: Vec<VariableDeclarator>,
    pub comment: Option<Comment>,
    pub span: Span,
}

impl FieldDecl {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        FieldDecl {
            ty,
            variables: vec![VariableDeclarator::new(name, None)],
            ..Default::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, init: Option<Expr>) -> Self {
        self.variables.push(VariableDeclarator::new(name, init));
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        has_modifier(&self.modifiers, modifier)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub ty: Type,
    pub name: String,
    pub varargs: bool,
    pub span: Span,
}

impl Parameter {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Parameter {
            ty,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        has_modifier(&self.modifiers, modifier)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub type_parameters: Vec<TypeParameter>,
    pub return_type: Type,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<Type>,
    /// `None` for abstract and interface methods.
    pub body: Option<Block>,
    pub comment: Option<Comment>,
    pub span: Span,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, return_type: Type) -> Self {
        MethodDecl {
            name: name.into(),
            return_type,
            ..Default::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_throws(mut self, ty: Type) -> Self {
        self.throws.push(ty);
        self
    }

    pub fn with_body(mut self, body: Block) -> Self {
        self.body = Some(body);
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        has_modifier(&self.modifiers, modifier)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructorDecl {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub type_parameters: Vec<TypeParameter>,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<Type>,
    pub body: Block,
    pub comment: Option<Comment>,
    pub span: Span,
}

impl ConstructorDecl {
    pub fn new(name: impl Into<String>) -> Self {
        ConstructorDecl {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_body(mut self, body: Block) -> Self {
        self.body = body;
        self
    }
}

/// `static { ... }` or an instance initializer block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitializerDecl {
    pub is_static: bool,
    pub body: Block,
    pub comment: Option<Comment>,
    pub span: Span,
}
