//! Mutable tree traversal.
//!
//! Implement [`VisitMut`] and override the methods for the nodes a pass
//! cares about; call the matching `walk_*` function to keep descending.
//! Import declarations are never visited: the pass selector owns them.
//!
//! ```rust,ignore
//! struct RenameType;
//!
//! impl VisitMut for RenameType {
//!     fn visit_class_type(&mut self, ty: &mut ClassType) {
//!         walk_class_type(self, ty);
//!         if ty.name == "ArrayList" {
//!             ty.name = "Array".to_string();
//!         }
//!     }
//! }
//! ```

use crate::decl::{ConstructorDecl, FieldDecl, Member, MethodDecl, Parameter, TypeDeclaration};
use crate::expr::{Expr, LambdaBody, VariableDeclarationExpr};
use crate::stmt::{Block, Statement, StatementKind};
use crate::types::{ClassType, Type};
use crate::unit::CompilationUnit;

pub trait VisitMut {
    fn visit_compilation_unit(&mut self, unit: &mut CompilationUnit) {
        walk_compilation_unit(self, unit);
    }

    fn visit_type_declaration(&mut self, decl: &mut TypeDeclaration) {
        walk_type_declaration(self, decl);
    }

    fn visit_member(&mut self, member: &mut Member) {
        walk_member(self, member);
    }

    fn visit_field(&mut self, field: &mut FieldDecl) {
        walk_field(self, field);
    }

    fn visit_method(&mut self, method: &mut MethodDecl) {
        walk_method(self, method);
    }

    fn visit_constructor(&mut self, ctor: &mut ConstructorDecl) {
        walk_constructor(self, ctor);
    }

    fn visit_parameter(&mut self, param: &mut Parameter) {
        walk_parameter(self, param);
    }

    fn visit_block(&mut self, block: &mut Block) {
        walk_block(self, block);
    }

    fn visit_statement(&mut self, stmt: &mut Statement) {
        walk_statement(self, stmt);
    }

    fn visit_variable_declaration(&mut self, decl: &mut VariableDeclarationExpr) {
        walk_variable_declaration(self, decl);
    }

    fn visit_expr(&mut self, expr: &mut Expr) {
        walk_expr(self, expr);
    }

    fn visit_type(&mut self, ty: &mut Type) {
        walk_type(self, ty);
    }

    fn visit_class_type(&mut self, ty: &mut ClassType) {
        walk_class_type(self, ty);
    }
}

pub fn walk_compilation_unit<V: VisitMut + ?Sized>(v: &mut V, unit: &mut CompilationUnit) {
    for decl in &mut unit.types {
        v.visit_type_declaration(decl);
    }
}

pub fn walk_type_declaration<V: VisitMut + ?Sized>(v: &mut V, decl: &mut TypeDeclaration) {
    for tp in &mut decl.type_parameters {
        for bound in &mut tp.bounds {
            v.visit_type(bound);
        }
    }
    for ty in decl.extends.iter_mut().chain(decl.implements.iter_mut()) {
        v.visit_type(ty);
    }
    for constant in &mut decl.enum_constants {
        for arg in &mut constant.arguments {
            v.visit_expr(arg);
        }
    }
    for member in &mut decl.members {
        v.visit_member(member);
    }
}

pub fn walk_member<V: VisitMut + ?Sized>(v: &mut V, member: &mut Member) {
    match member {
        Member::Field(field) => v.visit_field(field),
        Member::Method(method) => v.visit_method(method),
        Member::Constructor(ctor) => v.visit_constructor(ctor),
        Member::Initializer(init) => v.visit_block(&mut init.body),
        Member::Type(decl) => v.visit_type_declaration(decl),
    }
}

pub fn walk_field<V: VisitMut + ?Sized>(v: &mut V, field: &mut FieldDecl) {
    v.visit_type(&mut field.ty);
    for var in &mut field.variables {
        if let Some(init) = &mut var.init {
            v.visit_expr(init);
        }
    }
}

pub fn walk_method<V: VisitMut + ?Sized>(v: &mut V, method: &mut MethodDecl) {
    for tp in &mut method.type_parameters {
        for bound in &mut tp.bounds {
            v.visit_type(bound);
        }
    }
    v.visit_type(&mut method.return_type);
    for param in &mut method.parameters {
        v.visit_parameter(param);
    }
    for ty in &mut method.throws {
        v.visit_type(ty);
    }
    if let Some(body) = &mut method.body {
        v.visit_block(body);
    }
}

pub fn walk_constructor<V: VisitMut + ?Sized>(v: &mut V, ctor: &mut ConstructorDecl) {
    for param in &mut ctor.parameters {
        v.visit_parameter(param);
    }
    for ty in &mut ctor.throws {
        v.visit_type(ty);
    }
    v.visit_block(&mut ctor.body);
}

pub fn walk_parameter<V: VisitMut + ?Sized>(v: &mut V, param: &mut Parameter) {
    v.visit_type(&mut param.ty);
}

pub fn walk_block<V: VisitMut + ?Sized>(v: &mut V, block: &mut Block) {
    for stmt in &mut block.statements {
        v.visit_statement(stmt);
    }
}

pub fn walk_statement<V: VisitMut + ?Sized>(v: &mut V, stmt: &mut Statement) {
    match &mut stmt.kind {
        StatementKind::Block(block) => v.visit_block(block),
        StatementKind::Expression(expr) | StatementKind::Throw(expr) => v.visit_expr(expr),
        StatementKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            v.visit_expr(condition);
            v.visit_statement(then_branch);
            if let Some(else_branch) = else_branch {
                v.visit_statement(else_branch);
            }
        }
        StatementKind::While { condition, body } | StatementKind::Do { body, condition } => {
            v.visit_expr(condition);
            v.visit_statement(body);
        }
        StatementKind::For {
            init,
            condition,
            update,
            body,
        } => {
            for expr in init.iter_mut() {
                v.visit_expr(expr);
            }
            if let Some(condition) = condition {
                v.visit_expr(condition);
            }
            for expr in update.iter_mut() {
                v.visit_expr(expr);
            }
            v.visit_statement(body);
        }
        StatementKind::ForEach {
            variable,
            iterable,
            body,
        } => {
            v.visit_variable_declaration(variable);
            v.visit_expr(iterable);
            v.visit_statement(body);
        }
        StatementKind::Return(expr) => {
            if let Some(expr) = expr {
                v.visit_expr(expr);
            }
        }
        StatementKind::Try {
            resources,
            block,
            catches,
            finally,
        } => {
            for resource in resources.iter_mut() {
                v.visit_expr(resource);
            }
            v.visit_block(block);
            for clause in catches.iter_mut() {
                v.visit_parameter(&mut clause.parameter);
                v.visit_block(&mut clause.body);
            }
            if let Some(finally) = finally {
                v.visit_block(finally);
            }
        }
        StatementKind::Switch { selector, entries } => {
            v.visit_expr(selector);
            for entry in entries.iter_mut() {
                for label in &mut entry.labels {
                    v.visit_expr(label);
                }
                for stmt in &mut entry.statements {
                    v.visit_statement(stmt);
                }
            }
        }
        StatementKind::Labeled { body, .. } => v.visit_statement(body),
        StatementKind::Synchronized { lock, body } => {
            v.visit_expr(lock);
            v.visit_block(body);
        }
        StatementKind::ExplicitConstructorInvocation { arguments, .. } => {
            for arg in arguments.iter_mut() {
                v.visit_expr(arg);
            }
        }
        StatementKind::LocalType(decl) => v.visit_type_declaration(decl),
        StatementKind::Break(_) | StatementKind::Continue(_) | StatementKind::Empty => {}
    }
}

pub fn walk_variable_declaration<V: VisitMut + ?Sized>(
    v: &mut V,
    decl: &mut VariableDeclarationExpr,
) {
    v.visit_type(&mut decl.ty);
    for var in &mut decl.variables {
        if let Some(init) = &mut var.init {
            v.visit_expr(init);
        }
    }
}

pub fn walk_expr<V: VisitMut + ?Sized>(v: &mut V, expr: &mut Expr) {
    match expr {
        Expr::Name(_) | Expr::Literal(_) | Expr::This | Expr::Super => {}
        Expr::FieldAccess { scope, .. } => v.visit_expr(scope),
        Expr::MethodCall {
            scope, arguments, ..
        } => {
            if let Some(scope) = scope {
                v.visit_expr(scope);
            }
            for arg in arguments.iter_mut() {
                v.visit_expr(arg);
            }
        }
        Expr::ObjectCreation { ty, arguments } => {
            v.visit_class_type(ty);
            for arg in arguments.iter_mut() {
                v.visit_expr(arg);
            }
        }
        Expr::Binary { left, right, .. } => {
            v.visit_expr(left);
            v.visit_expr(right);
        }
        Expr::Unary { operand, .. } => v.visit_expr(operand),
        Expr::Assign { target, value, .. } => {
            v.visit_expr(target);
            v.visit_expr(value);
        }
        Expr::Conditional {
            condition,
            then_expr,
            else_expr,
        } => {
            v.visit_expr(condition);
            v.visit_expr(then_expr);
            v.visit_expr(else_expr);
        }
        Expr::Cast { ty, expr } => {
            v.visit_type(ty);
            v.visit_expr(expr);
        }
        Expr::InstanceOf { expr, ty } => {
            v.visit_expr(expr);
            v.visit_type(ty);
        }
        Expr::ArrayAccess { array, index } => {
            v.visit_expr(array);
            v.visit_expr(index);
        }
        Expr::ArrayCreation {
            component,
            dimensions,
            initializer,
        } => {
            v.visit_type(component);
            for dim in dimensions.iter_mut() {
                v.visit_expr(dim);
            }
            if let Some(values) = initializer {
                for value in values.iter_mut() {
                    v.visit_expr(value);
                }
            }
        }
        Expr::ArrayInitializer(values) => {
            for value in values.iter_mut() {
                v.visit_expr(value);
            }
        }
        Expr::Lambda { parameters, body } => {
            for param in parameters.iter_mut() {
                v.visit_parameter(param);
            }
            match body {
                LambdaBody::Expr(expr) => v.visit_expr(expr),
                LambdaBody::Block(block) => v.visit_block(block),
            }
        }
        Expr::MethodReference { scope, .. } => v.visit_expr(scope),
        Expr::Enclosed(inner) => v.visit_expr(inner),
        Expr::VariableDeclaration(decl) => v.visit_variable_declaration(decl),
        Expr::ClassLiteral(ty) => v.visit_type(ty),
    }
}

pub fn walk_type<V: VisitMut + ?Sized>(v: &mut V, ty: &mut Type) {
    match ty {
        Type::Class(ct) => v.visit_class_type(ct),
        Type::Array(component) => v.visit_type(component),
        Type::Union(types) => {
            for ty in types.iter_mut() {
                v.visit_type(ty);
            }
        }
        Type::Wildcard(Some(bound)) => v.visit_type(bound),
        Type::Wildcard(None) | Type::Primitive(_) | Type::Void | Type::Unknown => {}
    }
}

pub fn walk_class_type<V: VisitMut + ?Sized>(v: &mut V, ty: &mut ClassType) {
    if let Some(scope) = &mut ty.scope {
        v.visit_class_type(scope);
    }
    if let Some(args) = &mut ty.type_args {
        for arg in args.iter_mut() {
            v.visit_type(arg);
        }
    }
}

#[cfg(test)]
#[path = "../tests/visit.rs"]
mod tests;
