use super::*;
use crate::{
    Block, ClassType, CompilationUnit, Expr, FieldDecl, ImportDeclaration, MethodDecl, Parameter,
    Statement, StatementKind, Type, TypeDeclaration, VariableDeclarationExpr,
};

struct RenameList;

impl VisitMut for RenameList {
    fn visit_class_type(&mut self, ty: &mut ClassType) {
        walk_class_type(self, ty);
        if ty.name == "List" {
            ty.name = "Array".to_string();
        }
    }
}

#[derive(Default)]
struct CountNames(usize);

impl VisitMut for CountNames {
    fn visit_expr(&mut self, expr: &mut Expr) {
        walk_expr(self, expr);
        if matches!(expr, Expr::Name(_)) {
            self.0 += 1;
        }
    }
}

fn list_of(name: &str) -> Type {
    Type::generic("List", vec![Type::class(name)])
}

fn sample_unit() -> CompilationUnit {
    let local = VariableDeclarationExpr::single(list_of("Bar"), "xs", Some(Expr::name("ys")));
    let body = Block::new(vec![
        Statement::expr(Expr::VariableDeclaration(local)),
        Statement::new(StatementKind::If {
            condition: Expr::name("flag"),
            then_branch: Box::new(Statement::ret(Some(Expr::name("xs")))),
            else_branch: None,
        }),
    ]);
    let method = MethodDecl::new("run", list_of("Foo"))
        .with_parameter(Parameter::new(Type::generic("Map", vec![list_of("A"), list_of("B")]), "m"))
        .with_body(body);
    CompilationUnit {
        imports: vec![ImportDeclaration::new("java.util.List")],
        types: vec![
            TypeDeclaration::class("Foo")
                .with_member(FieldDecl::new(Type::array(list_of("Baz")), "items"))
                .with_member(method),
        ],
        ..Default::default()
    }
}

#[test]
fn class_types_are_rewritten_everywhere() {
    let mut unit = sample_unit();
    RenameList.visit_compilation_unit(&mut unit);

    let text = format!("{:?}", unit.types);
    assert!(!text.contains("\"List\""), "all List types renamed: {text}");
    assert!(text.contains("\"Array\""));
}

#[test]
fn imports_are_not_visited() {
    struct TouchEverything;
    impl VisitMut for TouchEverything {
        fn visit_class_type(&mut self, ty: &mut ClassType) {
            ty.name.push('!');
        }
    }
    let mut unit = sample_unit();
    TouchEverything.visit_compilation_unit(&mut unit);
    assert_eq!(unit.imports[0].name, "java.util.List");
}

#[test]
fn expressions_inside_statements_are_reached() {
    let mut unit = sample_unit();
    let mut counter = CountNames::default();
    counter.visit_compilation_unit(&mut unit);
    // ys, flag, xs
    assert_eq!(counter.0, 3);
}
