//! Built-in call rewriting.
//!
//! - `a.equals(b)` becomes `a === b`
//! - `System.out.println(x)` / `System.err.println(x)` become
//!   `console.log(x)` / `console.error(x)`
//! - `System.out.print(x)` / `System.err.print(x)` become
//!   `process.stdout.write(x)` / `process.stderr.write(x)`

use jts_ast::visit::{VisitMut, walk_expr};
use jts_ast::{BinaryOp, Expr};

pub struct BuiltinCalls;

impl VisitMut for BuiltinCalls {
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

        if name == "equals" && arguments.len() == 1 {
            let left = std::mem::replace(scope.as_mut(), Expr::This);
            let right = arguments.remove(0);
            *expr = Expr::binary(left, BinaryOp::Equals, right);
            return;
        }

        let stream = if scope.is_static_field("System", "out") {
            Stream::Out
        } else if scope.is_static_field("System", "err") {
            Stream::Err
        } else {
            return;
        };

        let (target, method) = match name.as_str() {
            "println" => (Expr::name("console"), stream.console_method()),
            "print" => (
                Expr::field(Expr::name("process"), stream.process_field()),
                "write",
            ),
            _ => return,
        };
        **scope = target;
        *name = method.to_string();
    }
}

#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

impl Stream {
    fn console_method(self) -> &'static str {
        match self {
            Stream::Out => "log",
            Stream::Err => "error",
        }
    }

    fn process_field(self) -> &'static str {
        match self {
            Stream::Out => "stdout",
            Stream::Err => "stderr",
        }
    }
}
