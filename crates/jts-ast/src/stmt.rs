//! Statements and blocks.

use crate::decl::{Parameter, TypeDeclaration};
use crate::expr::{Expr, VariableDeclarationExpr};
use crate::unit::Comment;
use jts_common::Span;
use serde::{Deserialize, Serialize};

/// `{ ... }` with the comments that fell between its statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub orphan_comments: Vec<Comment>,
    pub span: Span,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Block {
            statements,
            ..Default::default()
        }
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statement {
    pub kind: StatementKind,
    pub comment: Option<Comment>,
    pub span: Span,
}

impl Statement {
    pub fn new(kind: StatementKind) -> Self {
        Statement {
            kind,
            comment: None,
            span: Span::synthetic(),
        }
    }

    pub fn expr(expr: Expr) -> Self {
        Statement::new(StatementKind::Expression(expr))
    }

    pub fn ret(expr: Option<Expr>) -> Self {
        Statement::new(StatementKind::Return(expr))
    }

    pub fn block(statements: Vec<Statement>) -> Self {
        Statement::new(StatementKind::Block(Block::new(statements)))
    }

    /// `super(args);`
    pub fn super_call(arguments: Vec<Expr>) -> Self {
        Statement::new(StatementKind::ExplicitConstructorInvocation {
            is_this: false,
            arguments,
        })
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    Block(Block),
    Expression(Expr),
    If {
        condition: Expr,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
    },
    While {
        condition: Expr,
        body: Box<Statement>,
    },
    Do {
        body: Box<Statement>,
        condition: Expr,
    },
    For {
        init: Vec<Expr>,
        condition: Option<Expr>,
        update: Vec<Expr>,
        body: Box<Statement>,
    },
    ForEach {
        variable: VariableDeclarationExpr,
        iterable: Expr,
        body: Box<Statement>,
    },
    Return(Option<Expr>),
    Throw(Expr),
    Break(Option<String>),
    Continue(Option<String>),
    Try {
        /// try-with-resources declarations or expressions.
        resources: Vec<Expr>,
        block: Block,
        catches: Vec<CatchClause>,
        finally: Option<Block>,
    },
    Switch {
        selector: Expr,
        entries: Vec<SwitchEntry>,
    },
    Labeled {
        label: String,
        body: Box<Statement>,
    },
    Synchronized {
        lock: Expr,
        body: Block,
    },
    /// `this(...)` or `super(...)` as the first constructor statement.
    ExplicitConstructorInvocation {
        is_this: bool,
        arguments: Vec<Expr>,
    },
    LocalType(Box<TypeDeclaration>),
    #[default]
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchClause {
    /// Its type is a [`crate::Type::Union`] for multi-catch.
    pub parameter: Parameter,
    pub body: Block,
    pub span: Span,
}

/// One `case` group of a switch; no labels means `default`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchEntry {
    pub labels: Vec<Expr>,
    pub statements: Vec<Statement>,
}
