// Expression emission.

use super::Printer;
use jts_ast::{
    BinaryOp, Expr, LambdaBody, Literal, Parameter, Type, UnaryOp, VariableDeclarationExpr,
};
use jts_common::{TranspileError, TranspileResult};

impl<'a> Printer<'a> {
    pub(super) fn print_expr(&mut self, expr: &Expr) -> TranspileResult<()> {
        match expr {
            Expr::Name(name) => self.write(name),
            Expr::Literal(literal) => self.print_literal(literal),
            Expr::FieldAccess { scope, name } => {
                self.print_scope(scope)?;
                self.write(".");
                self.write(name);
            }
            Expr::MethodCall {
                scope,
                name,
                arguments,
            } => {
                if let Some(scope) = scope {
                    self.print_scope(scope)?;
                    self.write(".");
                }
                self.write(name);
                self.print_arguments(arguments)?;
            }
            Expr::ObjectCreation { ty, arguments } => {
                let ty = self.class_type_text(ty)?;
                self.write("new ");
                self.write(&ty);
                self.print_arguments(arguments)?;
            }
            Expr::Binary { left, op, right } => {
                let prec = binary_precedence(*op);
                self.print_operand(left, |child| child < prec)?;
                self.write(" ");
                self.write(binary_operator(*op));
                self.write(" ");
                self.print_operand(right, |child| child <= prec)?;
            }
            Expr::Unary { op, operand } => {
                let wrap = needs_parens_as_operand(operand);
                if !op.is_postfix() {
                    self.write(op.as_str());
                    if !wrap && fuses_with_prefix(*op, operand) {
                        self.write(" ");
                    }
                }
                self.print_maybe_parenthesized(operand, wrap)?;
                if op.is_postfix() {
                    self.write(op.as_str());
                }
            }
            Expr::Assign { target, op, value } => {
                self.print_expr(target)?;
                self.write(" ");
                self.write(op.as_str());
                self.write(" ");
                self.print_expr(value)?;
            }
            Expr::Conditional {
                condition,
                then_expr,
                else_expr,
            } => {
                let wrap = matches!(**condition, Expr::Conditional { .. } | Expr::Assign { .. });
                self.print_maybe_parenthesized(condition, wrap)?;
                self.write(" ? ");
                self.print_expr(then_expr)?;
                self.write(" : ");
                self.print_expr(else_expr)?;
            }
            Expr::Cast { ty, expr } => {
                let ty = self.type_text(ty)?;
                self.write("(");
                self.print_expr(expr)?;
                self.write(" as ");
                self.write(&ty);
                self.write(")");
            }
            Expr::InstanceOf { expr, ty } => {
                let ty = self.runtime_type_name(ty)?;
                self.print_maybe_parenthesized(expr, needs_parens_as_operand(expr))?;
                self.write(" instanceof ");
                self.write(&ty);
            }
            Expr::This => self.write("this"),
            Expr::Super => self.write("super"),
            Expr::ArrayAccess { array, index } => {
                self.print_scope(array)?;
                self.write("[");
                self.print_expr(index)?;
                self.write("]");
            }
            Expr::ArrayCreation {
                component,
                dimensions,
                initializer,
            } => self.print_array_creation(component, dimensions, initializer.as_deref())?,
            Expr::ArrayInitializer(values) => self.print_array_literal(values)?,
            Expr::Lambda { parameters, body } => self.print_lambda(parameters, body)?,
            Expr::MethodReference { scope, name } => {
                if name == "new" {
                    // Constructor references become a forwarding arrow.
                    self.write("(...args) => new ");
                    self.print_scope(scope)?;
                    self.write("(...args)");
                } else {
                    self.print_scope(scope)?;
                    self.write(".");
                    self.write(name);
                }
            }
            Expr::Enclosed(inner) => {
                self.write("(");
                self.print_expr(inner)?;
                self.write(")");
            }
            Expr::VariableDeclaration(decl) => self.print_variable_declaration(decl)?,
            Expr::ClassLiteral(ty) => {
                let ty = self.runtime_type_name(ty)?;
                self.write(&ty);
            }
        }
        Ok(())
    }

    fn print_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Number(text) => self.write(strip_numeric_suffix(text)),
            Literal::String(text) => {
                self.write("\"");
                self.write(text);
                self.write("\"");
            }
            Literal::Char(text) => {
                let text = char_as_string_content(text);
                self.write("\"");
                self.write(&text);
                self.write("\"");
            }
            Literal::Boolean(value) => self.write(if *value { "true" } else { "false" }),
            Literal::Null => self.write("null"),
        }
    }

    pub(super) fn print_arguments(&mut self, arguments: &[Expr]) -> TranspileResult<()> {
        self.write("(");
        self.print_comma_separated(arguments, |p, arg| p.print_expr(arg))?;
        self.write(")");
        Ok(())
    }

    /// Print the scope of a member access, parenthesizing anything that
    /// binds looser than `.`.
    fn print_scope(&mut self, scope: &Expr) -> TranspileResult<()> {
        let wrap = needs_parens_as_operand(scope)
            || matches!(scope, Expr::Unary { .. } | Expr::ObjectCreation { .. });
        self.print_maybe_parenthesized(scope, wrap)
    }

    fn print_operand(
        &mut self,
        operand: &Expr,
        wrap_binary: impl Fn(u8) -> bool,
    ) -> TranspileResult<()> {
        let wrap = match operand {
            Expr::Binary { op, .. } => wrap_binary(binary_precedence(*op)),
            Expr::Conditional { .. } | Expr::Assign { .. } | Expr::Lambda { .. } => true,
            _ => false,
        };
        self.print_maybe_parenthesized(operand, wrap)
    }

    fn print_maybe_parenthesized(&mut self, expr: &Expr, wrap: bool) -> TranspileResult<()> {
        if wrap {
            self.write("(");
        }
        self.print_expr(expr)?;
        if wrap {
            self.write(")");
        }
        Ok(())
    }

    fn print_array_creation(
        &mut self,
        component: &Type,
        dimensions: &[Expr],
        initializer: Option<&[Expr]>,
    ) -> TranspileResult<()> {
        if let Some(values) = initializer {
            return self.print_array_literal(values);
        }
        let Some((first, rest)) = dimensions.split_first() else {
            self.write("[]");
            return Ok(());
        };
        // Only the outer dimension is allocated.
        let mut element = component.clone();
        for _ in rest {
            element = Type::array(element);
        }
        let element = self.type_text(&element)?;
        self.write("new Array<");
        self.write(&element);
        self.write(">(");
        self.print_expr(first)?;
        self.write(")");
        Ok(())
    }

    fn print_array_literal(&mut self, values: &[Expr]) -> TranspileResult<()> {
        self.write("[");
        self.print_comma_separated(values, |p, value| p.print_expr(value))?;
        self.write("]");
        Ok(())
    }

    fn print_lambda(&mut self, parameters: &[Parameter], body: &LambdaBody) -> TranspileResult<()> {
        self.write("(");
        self.print_comma_separated(parameters, |p, param| p.print_parameter(param))?;
        self.write(") => ");
        match body {
            LambdaBody::Expr(expr) => self.print_expr(expr)?,
            LambdaBody::Block(block) => {
                let was_in_method = std::mem::replace(&mut self.in_method, true);
                let result = self.print_block(block);
                self.in_method = was_in_method;
                result?;
            }
        }
        Ok(())
    }

    /// `let a: T = 1, b: T` or `const ...` for a final declaration. Every
    /// declarator shares the one keyword.
    pub(super) fn print_variable_declaration(
        &mut self,
        decl: &VariableDeclarationExpr,
    ) -> TranspileResult<()> {
        self.write(if decl.is_final() { "const " } else { "let " });

        let previous = self.ambient_type.replace(decl.ty.clone());
        let result = self.print_comma_separated(&decl.variables, |p, var| {
            p.print_declarator(&var.name, var.init.as_ref())
        });
        self.ambient_type = previous;
        result
    }

    /// `name: T = init` using the ambient declaration type.
    pub(super) fn print_declarator(
        &mut self,
        name: &str,
        init: Option<&Expr>,
    ) -> TranspileResult<()> {
        let Some(ty) = self.ambient_type.as_ref() else {
            return Err(TranspileError::MissingAmbientType {
                declarator: name.to_string(),
            });
        };
        let annotation = self.type_annotation(ty)?;
        self.write(name);
        self.write(&annotation);
        if let Some(init) = init {
            self.write(" = ");
            self.print_expr(init)?;
        }
        Ok(())
    }
}

/// TypeScript spelling of a binary operator: equality is strict.
fn binary_operator(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Equals => "===",
        BinaryOp::NotEquals => "!==",
        other => other.as_str(),
    }
}

fn binary_precedence(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Or => 1,
        BinaryOp::And => 2,
        BinaryOp::BitOr => 3,
        BinaryOp::Xor => 4,
        BinaryOp::BitAnd => 5,
        BinaryOp::Equals | BinaryOp::NotEquals => 6,
        BinaryOp::Less | BinaryOp::Greater | BinaryOp::LessEquals | BinaryOp::GreaterEquals => 7,
        BinaryOp::LeftShift | BinaryOp::SignedRightShift | BinaryOp::UnsignedRightShift => 8,
        BinaryOp::Plus | BinaryOp::Minus => 9,
        BinaryOp::Multiply | BinaryOp::Divide | BinaryOp::Remainder => 10,
    }
}

/// Whether `expr` binds looser than a unary operator.
fn needs_parens_as_operand(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Binary { .. }
            | Expr::Conditional { .. }
            | Expr::Assign { .. }
            | Expr::Lambda { .. }
            | Expr::InstanceOf { .. }
    )
}

/// `-` followed by a prefix `-` or `--` operand would lex as `--`; the same
/// holds for `+`.
fn fuses_with_prefix(op: UnaryOp, operand: &Expr) -> bool {
    let Expr::Unary { op: inner, .. } = operand else {
        return false;
    };
    if inner.is_postfix() {
        return false;
    }
    match (op.as_str().chars().last(), inner.as_str().chars().next()) {
        (Some(outer), Some(first)) => outer == first && matches!(outer, '+' | '-'),
        _ => false,
    }
}

/// Drop Java's `L`/`F`/`D` suffixes. Hex literals only carry `L`, since `F`
/// and `D` are digits there.
pub(super) fn strip_numeric_suffix(text: &str) -> &str {
    let is_hex = text.starts_with("0x") || text.starts_with("0X");
    let suffixes: &[char] = if is_hex {
        &['l', 'L']
    } else {
        &['l', 'L', 'f', 'F', 'd', 'D']
    };
    text.strip_suffix(suffixes).unwrap_or(text)
}

/// Content of a char literal as the content of a double-quoted string.
pub(super) fn char_as_string_content(text: &str) -> String {
    match text {
        "\\'" => "'".to_string(),
        "\"" => "\\\"".to_string(),
        other => other.to_string(),
    }
}
