//! Expressions.

use crate::decl::{Annotation, Modifier, Parameter, VariableDeclarator};
use crate::stmt::Block;
use crate::types::{ClassType, Type};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Integer or floating point literal as written, suffix included (`10L`).
    Number(String),
    /// String literal content, escapes as written.
    String(String),
    /// Char literal content, escapes as written.
    Char(String),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitAnd,
    Xor,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
}

impl BinaryOp {
    /// Java operator token.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitAnd => "&",
            BinaryOp::Xor => "^",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEquals => "<=",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::LeftShift => "<<",
            BinaryOp::SignedRightShift => ">>",
            BinaryOp::UnsignedRightShift => ">>>",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Remainder => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::PreIncrement | UnaryOp::PostIncrement => "++",
            UnaryOp::PreDecrement | UnaryOp::PostDecrement => "--",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::PostIncrement | UnaryOp::PostDecrement)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignOp {
    #[default]
    Assign,
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
    BitAnd,
    BitOr,
    Xor,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Plus => "+=",
            AssignOp::Minus => "-=",
            AssignOp::Multiply => "*=",
            AssignOp::Divide => "/=",
            AssignOp::Remainder => "%=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitOr => "|=",
            AssignOp::Xor => "^=",
            AssignOp::LeftShift => "<<=",
            AssignOp::SignedRightShift => ">>=",
            AssignOp::UnsignedRightShift => ">>>=",
        }
    }
}

/// A local variable declaration used as an expression (statement, `for`
/// init, for-each variable, try resource).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableDeclarationExpr {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<Annotation>,
    pub ty: Type,
    pub variables: Vec<VariableDeclarator>,
}

impl VariableDeclarationExpr {
    pub fn single(ty: Type, name: impl Into<String>, init: Option<Expr>) -> Self {
        VariableDeclarationExpr {
            ty,
            variables: vec![VariableDeclarator::new(name, init)],
            ..Default::default()
        }
    }

    pub fn is_final(&self) -> bool {
        self.modifiers.contains(&Modifier::Final)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LambdaBody {
    Expr(Box<Expr>),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Name(String),
    Literal(Literal),
    FieldAccess {
        scope: Box<Expr>,
        name: String,
    },
    MethodCall {
        scope: Option<Box<Expr>>,
        name: String,
        arguments: Vec<Expr>,
    },
    ObjectCreation {
        ty: ClassType,
        arguments: Vec<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Assign {
        target: Box<Expr>,
        op: AssignOp,
        value: Box<Expr>,
    },
    Conditional {
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    Cast {
        ty: Type,
        expr: Box<Expr>,
    },
    InstanceOf {
        expr: Box<Expr>,
        ty: Type,
    },
    This,
    Super,
    ArrayAccess {
        array: Box<Expr>,
        index: Box<Expr>,
    },
    ArrayCreation {
        component: Type,
        dimensions: Vec<Expr>,
        initializer: Option<Vec<Expr>>,
    },
    ArrayInitializer(Vec<Expr>),
    Lambda {
        parameters: Vec<Parameter>,
        body: LambdaBody,
    },
    MethodReference {
        scope: Box<Expr>,
        name: String,
    },
    Enclosed(Box<Expr>),
    VariableDeclaration(VariableDeclarationExpr),
    ClassLiteral(Type),
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn number(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::Number(value.into()))
    }

    pub fn null() -> Self {
        Expr::Literal(Literal::Null)
    }

    pub fn field(scope: Expr, name: impl Into<String>) -> Self {
        Expr::FieldAccess {
            scope: Box::new(scope),
            name: name.into(),
        }
    }

    pub fn call(scope: Option<Expr>, name: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Expr::MethodCall {
            scope: scope.map(Box::new),
            name: name.into(),
            arguments,
        }
    }

    pub fn new_object(ty: ClassType, arguments: Vec<Expr>) -> Self {
        Expr::ObjectCreation { ty, arguments }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assign {
            target: Box::new(target),
            op: AssignOp::Assign,
            value: Box::new(value),
        }
    }

    /// Simple name if this is a bare name expression.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Expr::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this is `<scope>.<field>` with a bare name scope, e.g. `System.out`.
    pub fn is_static_field(&self, scope_name: &str, field: &str) -> bool {
        matches!(
            self,
            Expr::FieldAccess { scope, name } if name == field && scope.as_name() == Some(scope_name)
        )
    }
}
