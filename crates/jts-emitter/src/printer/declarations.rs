// Type declarations and class members.

use super::Printer;
use super::comments::OrphanComments;
use super::modifiers::{FinalSpelling, render_modifiers};
use jts_ast::{
    Annotation, ConstructorDecl, EnumConstant, FieldDecl, InitializerDecl, Member, MethodDecl,
    Modifier, Parameter, Type, TypeDeclaration, TypeKind,
};
use jts_common::{TranspileError, TranspileResult};

const OVERRIDE: &str = "Override";

impl<'a> Printer<'a> {
    // =========================================================================
    // Type declarations
    // =========================================================================

    /// Print a class, interface or enum. Member types are hoisted after the
    /// enclosing declaration, since TypeScript classes cannot nest them.
    pub(super) fn print_type_declaration(&mut self, decl: &TypeDeclaration) -> TranspileResult<()> {
        let was_derived = std::mem::replace(&mut self.derived_class, decl.is_derived_class());
        let result = self.print_type_declaration_inner(decl);
        self.derived_class = was_derived;
        result?;

        for member in &decl.members {
            if let Member::Type(nested) = member {
                self.write_line();
                self.print_type_declaration(nested)?;
            }
        }
        Ok(())
    }

    fn print_type_declaration_inner(&mut self, decl: &TypeDeclaration) -> TranspileResult<()> {
        tracing::trace!(name = %decl.name, kind = ?decl.kind, "printing type declaration");
        if let Some(comment) = &decl.comment {
            self.print_comment(comment);
        }
        self.print_decorators(&decl.annotations);
        self.print_type_modifiers(&decl.modifiers);

        if decl.kind == TypeKind::Enum && is_plain_enum(decl) {
            return self.print_plain_enum(decl);
        }

        self.write(if decl.is_interface() { "interface " } else { "class " });
        self.write(&decl.name);
        let type_params = self.type_parameters_text(&decl.type_parameters)?;
        self.write(&type_params);
        self.print_heritage(" extends ", &decl.extends)?;
        self.print_heritage(" implements ", &decl.implements)?;
        self.write_str_line(" {");
        self.increase_indent();

        let mut orphans = OrphanComments::new(&decl.orphan_comments);
        let mut previous_was_field = None;
        if !decl.enum_constants.is_empty() {
            for constant in &decl.enum_constants {
                self.print_orphans_before(&mut orphans, constant.span);
                self.print_enum_constant_field(&decl.name, constant)?;
            }
            previous_was_field = Some(true);
        }

        for member in &decl.members {
            if matches!(member, Member::Type(_)) {
                continue;
            }
            let is_field = matches!(member, Member::Field(_));
            if let Some(previous) = previous_was_field {
                if !(previous && is_field) {
                    self.write_line();
                }
            }
            previous_was_field = Some(is_field);

            self.print_orphans_before(&mut orphans, member.span());
            self.print_member(member, decl.is_interface())?;
        }
        self.print_remaining_orphans(&mut orphans);

        self.decrease_indent();
        self.write_str_line("}");
        Ok(())
    }

    /// `public` becomes `export` outside method bodies; other access and
    /// `static` modifiers have no meaning on a hoisted type.
    fn print_type_modifiers(&mut self, modifiers: &[Modifier]) {
        if !self.in_method && modifiers.contains(&Modifier::Public) {
            self.write("export ");
        }
        let kept: Vec<Modifier> = modifiers
            .iter()
            .copied()
            .filter(|m| matches!(m, Modifier::Abstract | Modifier::Final))
            .collect();
        let text = render_modifiers(&kept, FinalSpelling::Const);
        self.write(&text);
    }

    fn print_heritage(&mut self, keyword: &str, types: &[Type]) -> TranspileResult<()> {
        if types.is_empty() {
            return Ok(());
        }
        let names = types
            .iter()
            .map(|ty| self.type_text(ty))
            .collect::<TranspileResult<Vec<_>>>()?;
        self.write(keyword);
        self.write(&names.join(", "));
        Ok(())
    }

    /// An enum with no constructor arguments and no members maps onto a
    /// TypeScript `enum`.
    fn print_plain_enum(&mut self, decl: &TypeDeclaration) -> TranspileResult<()> {
        self.write("enum ");
        self.write(&decl.name);
        self.write_str_line(" {");
        self.increase_indent();
        let mut orphans = OrphanComments::new(&decl.orphan_comments);
        for constant in &decl.enum_constants {
            self.print_orphans_before(&mut orphans, constant.span);
            if let Some(comment) = &constant.comment {
                self.print_comment(comment);
            }
            self.write(&constant.name);
            self.write_str_line(",");
        }
        self.print_remaining_orphans(&mut orphans);
        self.decrease_indent();
        self.write_str_line("}");
        Ok(())
    }

    fn print_enum_constant_field(
        &mut self,
        enum_name: &str,
        constant: &EnumConstant,
    ) -> TranspileResult<()> {
        if let Some(comment) = &constant.comment {
            self.print_comment(comment);
        }
        self.write(&format!(
            "static readonly {}: {enum_name} = new {enum_name}",
            constant.name
        ));
        self.print_arguments(&constant.arguments)?;
        self.write_str_line(";");
        Ok(())
    }

    /// Type and field annotations are kept as decorators.
    fn print_decorators(&mut self, annotations: &[Annotation]) {
        for annotation in annotations {
            self.write_str_line(&annotation.to_source());
        }
    }

    // =========================================================================
    // Members
    // =========================================================================

    fn print_member(&mut self, member: &Member, in_interface: bool) -> TranspileResult<()> {
        match member {
            Member::Field(field) if in_interface => Err(TranspileError::InterfaceConstant {
                name: field
                    .variables
                    .first()
                    .map(|var| var.name.clone())
                    .unwrap_or_default(),
            }),
            Member::Field(field) => self.print_field(field),
            Member::Method(method) => self.print_method(method, in_interface),
            Member::Constructor(ctor) => self.print_constructor(ctor),
            Member::Initializer(init) => self.print_initializer(init),
            // Hoisted by print_type_declaration.
            Member::Type(_) => Ok(()),
        }
    }

    /// Every co-declared variable gets its own line with the full modifier
    /// list.
    pub(super) fn print_field(&mut self, field: &FieldDecl) -> TranspileResult<()> {
        if let Some(comment) = &field.comment {
            self.print_comment(comment);
        }
        self.print_decorators(&field.annotations);
        let modifiers = render_modifiers(&field.modifiers, FinalSpelling::Readonly);

        let previous = self.ambient_type.replace(field.ty.clone());
        let mut result = Ok(());
        for var in &field.variables {
            self.write(&modifiers);
            result = self.print_declarator(&var.name, var.init.as_ref());
            if result.is_err() {
                break;
            }
            self.write_str_line(";");
        }
        self.ambient_type = previous;
        result
    }

    pub(super) fn print_method(
        &mut self,
        method: &MethodDecl,
        in_interface: bool,
    ) -> TranspileResult<()> {
        if let Some(comment) = &method.comment {
            self.print_comment(comment);
        }
        let is_override = method.annotations.iter().any(|a| a.is(OVERRIDE));
        let remaining: Vec<String> = method
            .annotations
            .iter()
            .filter(|a| !a.is(OVERRIDE))
            .map(Annotation::to_source)
            .collect();
        if !remaining.is_empty() {
            self.hooks
                .method_annotations(&mut self.writer, &method.name, &remaining)?;
        }

        if !in_interface {
            let modifiers = render_modifiers(&method.modifiers, FinalSpelling::Drop);
            self.write(&modifiers);
            if is_override && self.derived_class {
                self.write("override ");
            }
        }
        self.write(&method.name);
        let type_params = self.type_parameters_text(&method.type_parameters)?;
        self.write(&type_params);
        self.print_parameters(&method.parameters)?;
        let return_type = self.type_text(&method.return_type)?;
        self.write(": ");
        self.write(&return_type);
        self.print_throws(&method.throws)?;

        match (&method.body, in_interface) {
            (Some(body), false) => {
                self.write(" ");
                self.print_method_body(|p| p.print_block(body))?;
                self.write_line();
            }
            _ => self.write_str_line(";"),
        }
        Ok(())
    }

    pub(super) fn print_constructor(&mut self, ctor: &ConstructorDecl) -> TranspileResult<()> {
        if let Some(comment) = &ctor.comment {
            self.print_comment(comment);
        }
        let remaining: Vec<String> = ctor.annotations.iter().map(Annotation::to_source).collect();
        if !remaining.is_empty() {
            self.hooks
                .method_annotations(&mut self.writer, &ctor.name, &remaining)?;
        }

        let modifiers = render_modifiers(&ctor.modifiers, FinalSpelling::Drop);
        self.write(&modifiers);
        self.write("constructor");
        self.print_parameters(&ctor.parameters)?;
        self.print_throws(&ctor.throws)?;
        self.write(" ");
        self.print_method_body(|p| p.print_block(&ctor.body))?;
        self.write_line();
        Ok(())
    }

    /// Static initializers map onto class `static` blocks; an instance
    /// initializer keeps its block as written.
    fn print_initializer(&mut self, init: &InitializerDecl) -> TranspileResult<()> {
        if let Some(comment) = &init.comment {
            self.print_comment(comment);
        }
        if init.is_static {
            self.write("static ");
        }
        self.print_method_body(|p| p.print_block(&init.body))?;
        self.write_line();
        Ok(())
    }

    fn print_method_body(
        &mut self,
        print: impl FnOnce(&mut Self) -> TranspileResult<()>,
    ) -> TranspileResult<()> {
        let was_in_method = std::mem::replace(&mut self.in_method, true);
        let result = print(self);
        self.in_method = was_in_method;
        result
    }

    fn print_parameters(&mut self, parameters: &[Parameter]) -> TranspileResult<()> {
        self.write("(");
        self.print_comma_separated(parameters, |p, param| p.print_parameter(param))?;
        self.write(")");
        Ok(())
    }

    pub(super) fn print_parameter(&mut self, param: &Parameter) -> TranspileResult<()> {
        if param.has_modifier(Modifier::Final) {
            let spelling = if self.config.comment_final_parameters {
                FinalSpelling::Comment
            } else {
                FinalSpelling::Drop
            };
            let text = render_modifiers(&[Modifier::Final], spelling);
            self.write(&text);
        }
        if param.varargs {
            self.write("...");
        }
        self.write(&param.name);
        let annotation = if param.varargs {
            self.type_annotation(&Type::array(param.ty.clone()))?
        } else {
            self.type_annotation(&param.ty)?
        };
        self.write(&annotation);
        Ok(())
    }

    fn print_throws(&mut self, throws: &[Type]) -> TranspileResult<()> {
        if throws.is_empty() {
            return Ok(());
        }
        let thrown = throws
            .iter()
            .map(|ty| self.type_text(ty))
            .collect::<TranspileResult<Vec<_>>>()?;
        self.hooks.throws(&mut self.writer, &thrown);
        Ok(())
    }
}

fn is_plain_enum(decl: &TypeDeclaration) -> bool {
    decl.members.iter().all(|m| matches!(m, Member::Type(_)))
        && decl.enum_constants.iter().all(|c| c.arguments.is_empty())
        && decl.implements.is_empty()
}
