// Statement and block emission.

use super::Printer;
use super::comments::OrphanComments;
use jts_ast::{Block, CatchClause, Expr, Statement, StatementKind, SwitchEntry};
use jts_common::{TranspileError, TranspileResult};

impl<'a> Printer<'a> {
    /// `{ ... }`, leaving the cursor after the closing brace.
    pub(super) fn print_block(&mut self, block: &Block) -> TranspileResult<()> {
        if block.statements.is_empty() && block.orphan_comments.is_empty() {
            self.write("{}");
            return Ok(());
        }
        self.write_str_line("{");
        self.increase_indent();
        self.print_statements(&block.statements, &block.orphan_comments)?;
        self.decrease_indent();
        self.write("}");
        Ok(())
    }

    fn print_statements(
        &mut self,
        statements: &[Statement],
        orphan_comments: &[jts_ast::Comment],
    ) -> TranspileResult<()> {
        let mut orphans = OrphanComments::new(orphan_comments);
        for stmt in statements {
            self.print_orphans_before(&mut orphans, stmt.span);
            self.print_statement(stmt)?;
        }
        self.print_remaining_orphans(&mut orphans);
        Ok(())
    }

    /// Print one statement, ending at the start of a fresh line.
    pub(super) fn print_statement(&mut self, stmt: &Statement) -> TranspileResult<()> {
        if let Some(comment) = &stmt.comment {
            self.print_comment(comment);
        }
        self.print_statement_kind(&stmt.kind)?;
        self.writer.ensure_line_start();
        Ok(())
    }

    fn print_statement_kind(&mut self, kind: &StatementKind) -> TranspileResult<()> {
        match kind {
            StatementKind::Block(block) => self.print_block(block)?,
            StatementKind::Expression(expr) => {
                self.print_expr(expr)?;
                self.write(";");
            }
            StatementKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.write("if (");
                self.print_expr(condition)?;
                self.write(")");
                self.print_body(then_branch)?;
                if let Some(else_branch) = else_branch {
                    if is_block(then_branch) {
                        self.write(" else");
                    } else {
                        self.write("else");
                    }
                    if matches!(else_branch.kind, StatementKind::If { .. }) {
                        self.write(" ");
                        self.print_statement_kind(&else_branch.kind)?;
                    } else {
                        self.print_body(else_branch)?;
                    }
                }
            }
            StatementKind::While { condition, body } => {
                self.write("while (");
                self.print_expr(condition)?;
                self.write(")");
                self.print_body(body)?;
            }
            StatementKind::Do { body, condition } => {
                self.write("do");
                self.print_body(body)?;
                self.write(if is_block(body) { " while (" } else { "while (" });
                self.print_expr(condition)?;
                self.write(");");
            }
            StatementKind::For {
                init,
                condition,
                update,
                body,
            } => {
                self.write("for (");
                self.print_comma_separated(init, |p, e| p.print_expr(e))?;
                self.write(";");
                if let Some(condition) = condition {
                    self.write(" ");
                    self.print_expr(condition)?;
                }
                self.write(";");
                if !update.is_empty() {
                    self.write(" ");
                    self.print_comma_separated(update, |p, e| p.print_expr(e))?;
                }
                self.write(")");
                self.print_body(body)?;
            }
            StatementKind::ForEach {
                variable,
                iterable,
                body,
            } => {
                let [declarator] = variable.variables.as_slice() else {
                    return Err(TranspileError::MultiVariableForEach {
                        count: variable.variables.len(),
                    });
                };
                self.write("for (const ");
                self.write(&declarator.name);
                self.write(" of ");
                self.print_expr(iterable)?;
                self.write(")");
                self.print_body(body)?;
            }
            StatementKind::Return(value) => {
                self.write("return");
                if let Some(value) = value {
                    self.write(" ");
                    self.print_expr(value)?;
                }
                self.write(";");
            }
            StatementKind::Throw(value) => {
                self.write("throw ");
                self.print_expr(value)?;
                self.write(";");
            }
            StatementKind::Break(label) => self.print_jump("break", label.as_deref()),
            StatementKind::Continue(label) => self.print_jump("continue", label.as_deref()),
            StatementKind::Try {
                resources,
                block,
                catches,
                finally,
            } => self.print_try(resources, block, catches, finally.as_ref())?,
            StatementKind::Switch { selector, entries } => self.print_switch(selector, entries)?,
            StatementKind::Labeled { label, body } => {
                self.write(label);
                self.write(": ");
                self.print_statement_kind(&body.kind)?;
            }
            // No monitors in JavaScript: only the body remains.
            StatementKind::Synchronized { body, .. } => self.print_block(body)?,
            StatementKind::ExplicitConstructorInvocation { is_this, arguments } => {
                self.write(if *is_this { "this" } else { "super" });
                self.print_arguments(arguments)?;
                self.write(";");
            }
            StatementKind::LocalType(decl) => self.print_type_declaration(decl)?,
            StatementKind::Empty => self.write(";"),
        }
        Ok(())
    }

    /// Body of a compound statement: a block stays on the header line, any
    /// other statement goes on its own indented line.
    fn print_body(&mut self, body: &Statement) -> TranspileResult<()> {
        if let StatementKind::Block(block) = &body.kind {
            if let Some(comment) = &body.comment {
                self.write_line();
                self.print_comment(comment);
            } else {
                self.write(" ");
            }
            return self.print_block(block);
        }
        self.write_line();
        self.increase_indent();
        let result = self.print_statement(body);
        self.decrease_indent();
        result
    }

    fn print_jump(&mut self, keyword: &str, label: Option<&str>) {
        self.write(keyword);
        if let Some(label) = label {
            self.write(" ");
            self.write(label);
        }
        self.write(";");
    }

    /// Try-with-resources resources become `const` declarations in a block
    /// wrapped around the `try`. Catch clauses collapse into one `catch`
    /// whose binding is tested with `instanceof` per caught type.
    fn print_try(
        &mut self,
        resources: &[Expr],
        block: &Block,
        catches: &[CatchClause],
        finally: Option<&Block>,
    ) -> TranspileResult<()> {
        if !resources.is_empty() {
            self.write_str_line("{");
            self.increase_indent();
            for resource in resources {
                match resource {
                    Expr::VariableDeclaration(decl) => {
                        let mut decl = decl.clone();
                        if !decl.is_final() {
                            decl.modifiers.push(jts_ast::Modifier::Final);
                        }
                        self.print_variable_declaration(&decl)?;
                    }
                    other => self.print_expr(other)?,
                }
                self.write_str_line(";");
            }
        }

        self.write("try ");
        self.print_block(block)?;
        if let Some(first) = catches.first() {
            let binding = first.parameter.name.clone();
            self.write(" catch (");
            self.write(&binding);
            self.write_str_line(") {");
            self.increase_indent();
            self.print_catch_chain(&binding, catches)?;
            self.decrease_indent();
            self.write("}");
        }
        if let Some(finally) = finally {
            self.write(" finally ");
            self.print_block(finally)?;
        }

        if !resources.is_empty() {
            self.write_line();
            self.decrease_indent();
            self.write("}");
        }
        Ok(())
    }

    fn print_catch_chain(&mut self, binding: &str, catches: &[CatchClause]) -> TranspileResult<()> {
        let mut first_branch = true;
        for clause in catches {
            for alternative in clause.parameter.ty.alternatives() {
                let ty = self.runtime_type_name(alternative)?;
                if !first_branch {
                    self.write(" else ");
                }
                first_branch = false;
                self.write(&format!("if ({binding} instanceof {ty}) "));
                self.write_str_line("{");
                self.increase_indent();
                if clause.parameter.name != binding {
                    self.write_str_line(&format!("const {} = {binding};", clause.parameter.name));
                }
                self.print_statements(&clause.body.statements, &clause.body.orphan_comments)?;
                self.decrease_indent();
                self.write("}");
            }
        }
        self.write_str_line(" else {");
        self.increase_indent();
        self.write_str_line(&format!("throw {binding};"));
        self.decrease_indent();
        self.write_str_line("}");
        Ok(())
    }

    fn print_switch(&mut self, selector: &Expr, entries: &[SwitchEntry]) -> TranspileResult<()> {
        self.write("switch (");
        self.print_expr(selector)?;
        self.write_str_line(") {");
        self.increase_indent();
        for entry in entries {
            if entry.labels.is_empty() {
                self.write_str_line("default:");
            }
            for label in &entry.labels {
                self.write("case ");
                self.print_expr(label)?;
                self.write_str_line(":");
            }
            self.increase_indent();
            for stmt in &entry.statements {
                self.print_statement(stmt)?;
            }
            self.decrease_indent();
        }
        self.decrease_indent();
        self.write("}");
        Ok(())
    }
}

fn is_block(stmt: &Statement) -> bool {
    matches!(stmt.kind, StatementKind::Block(_))
}
