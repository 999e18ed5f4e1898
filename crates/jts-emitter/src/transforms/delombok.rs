//! Delombok: materialize the members Lombok class annotations would generate.
//!
//! `@NoArgsConstructor`, `@AllArgsConstructor`, `@Setter` and `@Getter` on a
//! class are removed and replaced by explicit members appended in that
//! order. Each type declaration is rewritten by a pure function over a
//! summary extracted up front, so nested and sibling declarations never share
//! state.

use jts_ast::visit::{VisitMut, walk_type_declaration};
use jts_ast::{
    Block, ConstructorDecl, Expr, Member, MethodDecl, Modifier, Parameter, Statement,
    TypeDeclaration, Type,
};

const GETTER: &str = "Getter";
const SETTER: &str = "Setter";
const NO_ARGS_CONSTRUCTOR: &str = "NoArgsConstructor";
const ALL_ARGS_CONSTRUCTOR: &str = "AllArgsConstructor";

pub struct Delombok;

impl VisitMut for Delombok {
    fn visit_type_declaration(&mut self, decl: &mut TypeDeclaration) {
        *decl = delombok(std::mem::take(decl));
        walk_type_declaration(self, decl);
    }
}

/// What the Lombok annotations of one class ask for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LombokSummary {
    pub getters: bool,
    pub setters: bool,
    pub no_args_constructor: bool,
    pub all_args_constructor: bool,
    pub derived: bool,
    /// Instance fields in declaration order.
    pub fields: Vec<FieldSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    pub name: String,
    pub ty: Type,
    pub is_final: bool,
}

impl LombokSummary {
    pub fn of(decl: &TypeDeclaration) -> Self {
        let mut summary = LombokSummary {
            derived: decl.is_derived_class(),
            ..Default::default()
        };
        for annotation in &decl.annotations {
            match annotation.simple_name() {
                GETTER => summary.getters = true,
                SETTER => summary.setters = true,
                NO_ARGS_CONSTRUCTOR => summary.no_args_constructor = true,
                ALL_ARGS_CONSTRUCTOR => summary.all_args_constructor = true,
                _ => {}
            }
        }
        for member in &decl.members {
            let Member::Field(field) = member else {
                continue;
            };
            if field.has_modifier(Modifier::Static) {
                continue;
            }
            let is_final = field.has_modifier(Modifier::Final);
            summary
                .fields
                .extend(field.variables.iter().map(|var| FieldSummary {
                    name: var.name.clone(),
                    ty: field.ty.clone(),
                    is_final,
                }));
        }
        summary
    }

    pub fn is_empty(&self) -> bool {
        !(self.getters || self.setters || self.no_args_constructor || self.all_args_constructor)
    }
}

/// Rewrite one type declaration. Nested declarations are left alone.
pub fn delombok(mut decl: TypeDeclaration) -> TypeDeclaration {
    let summary = LombokSummary::of(&decl);
    if summary.is_empty() {
        return decl;
    }
    tracing::trace!(class = %decl.name, ?summary, "delombok");

    decl.annotations.retain(|a| {
        !matches!(
            a.simple_name(),
            GETTER | SETTER | NO_ARGS_CONSTRUCTOR | ALL_ARGS_CONSTRUCTOR
        )
    });

    if summary.no_args_constructor {
        let ctor = ConstructorDecl::new(decl.name.clone())
            .with_modifiers([Modifier::Public])
            .with_body(Block::new(constructor_prologue(&summary)));
        decl.members.push(ctor.into());
    }

    if summary.all_args_constructor {
        let mut statements = constructor_prologue(&summary);
        statements.extend(summary.fields.iter().map(assign_field));
        let ctor = summary.fields.iter().fold(
            ConstructorDecl::new(decl.name.clone()).with_modifiers([Modifier::Public]),
            |ctor, field| ctor.with_parameter(Parameter::new(field.ty.clone(), &field.name)),
        );
        decl.members.push(ctor.with_body(Block::new(statements)).into());
    }

    if summary.setters {
        for field in summary.fields.iter().filter(|f| !f.is_final) {
            let setter = MethodDecl::new(format!("set{}", capitalize(&field.name)), Type::Void)
                .with_modifiers([Modifier::Public])
                .with_parameter(Parameter::new(field.ty.clone(), &field.name))
                .with_body(Block::new(vec![assign_field(field)]));
            decl.members.push(setter.into());
        }
    }

    if summary.getters {
        for field in &summary.fields {
            let getter = MethodDecl::new(format!("get{}", capitalize(&field.name)), field.ty.clone())
                .with_modifiers([Modifier::Public])
                .with_body(Block::new(vec![Statement::ret(Some(this_field(field)))]));
            decl.members.push(getter.into());
        }
    }

    decl
}

fn constructor_prologue(summary: &LombokSummary) -> Vec<Statement> {
    if summary.derived {
        vec![Statement::super_call(Vec::new())]
    } else {
        Vec::new()
    }
}

fn this_field(field: &FieldSummary) -> Expr {
    Expr::field(Expr::This, &field.name)
}

/// `this.name = name;`
fn assign_field(field: &FieldSummary) -> Statement {
    Statement::expr(Expr::assign(this_field(field), Expr::name(&field.name)))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
