//! Java syntax tree for the jts transpiler.
//!
//! The tree is produced by an external Java front end and handed over as
//! JSON. Transform passes mutate it in place through [`visit::VisitMut`];
//! the printer then reads it without further changes.
//!
//! Nodes synthesized by passes use [`Span::synthetic`] and are skipped when
//! orphan comments are positioned.

pub use jts_common::Span;

// Compilation unit, imports, comments
pub mod unit;
pub use unit::{
    Comment, CommentKind, CompilationUnit, ImportDeclaration, ImportOrigin, PackageDeclaration,
};

// Type declarations and members
pub mod decl;
pub use decl::{
    Annotation, ConstructorDecl, EnumConstant, FieldDecl, InitializerDecl, Member, MethodDecl,
    Modifier, Parameter, TypeDeclaration, TypeKind, TypeParameter, VariableDeclarator,
};

// Type references
pub mod types;
pub use types::{ClassType, PrimitiveType, Type, TypeMarker};

// Statements
pub mod stmt;
pub use stmt::{Block, CatchClause, Statement, StatementKind, SwitchEntry};

// Expressions
pub mod expr;
pub use expr::{
    AssignOp, BinaryOp, Expr, LambdaBody, Literal, UnaryOp, VariableDeclarationExpr,
};

// Mutable traversal used by transform passes
pub mod visit;
pub use visit::VisitMut;
