use super::*;
use jts_ast::{
    Annotation, BinaryOp, Block, CatchClause, ClassType, Comment, CompilationUnit, EnumConstant,
    Expr, FieldDecl, ImportDeclaration, ImportOrigin, LambdaBody, Literal, MethodDecl, Modifier,
    PackageDeclaration, Parameter, Statement, StatementKind, Type, TypeDeclaration, TypeKind,
    TypeMarker, UnaryOp, VariableDeclarationExpr,
};
use jts_common::specifier::encode_import;
use jts_common::{Span, TranspileError, UnknownAnnotations};

// =============================================================================
// Helpers
// =============================================================================

fn print_unit_with(config: &JtsConfig, unit: &CompilationUnit) -> TranspileResult<String> {
    let hooks = ConfigHooks::new(config);
    let mut printer = Printer::new(config, &hooks);
    printer.print_compilation_unit(unit)?;
    Ok(printer.finish())
}

fn print_types(types: Vec<TypeDeclaration>) -> String {
    let unit = CompilationUnit {
        types,
        ..Default::default()
    };
    print_unit_with(&JtsConfig::default(), &unit).expect("unit prints")
}

fn emit_with<F>(config: &JtsConfig, print: F) -> TranspileResult<String>
where
    F: FnOnce(&mut Printer<'_>) -> TranspileResult<()>,
{
    let hooks = ConfigHooks::new(config);
    let mut printer = Printer::new(config, &hooks);
    print(&mut printer)?;
    Ok(printer.finish())
}

fn emit_expr(expr: &Expr) -> String {
    emit_with(&JtsConfig::default(), |p| p.print_expr(expr)).expect("expression prints")
}

fn emit_stmt(stmt: &Statement) -> TranspileResult<String> {
    emit_with(&JtsConfig::default(), |p| p.print_statement(stmt))
}

fn emit_type(ty: &Type) -> TranspileResult<String> {
    let config = JtsConfig::default();
    let hooks = ConfigHooks::new(&config);
    let printer = Printer::new(&config, &hooks);
    printer.type_text(ty)
}

fn nullable(args: Vec<Type>) -> Type {
    Type::Class(ClassType {
        marker: Some(TypeMarker::Nullable),
        ..ClassType::new("Optional").with_args(args)
    })
}

fn number() -> Type {
    Type::class("number")
}

fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::call(None, name, args)
}

// =============================================================================
// Modifiers and declarations
// =============================================================================

#[test]
fn modifiers_render_in_slot_order() {
    let modifiers = [
        Modifier::Final,
        Modifier::Static,
        Modifier::Transient,
        Modifier::Private,
    ];
    assert_eq!(
        render_modifiers(&modifiers, FinalSpelling::Readonly),
        "private static readonly "
    );
    assert_eq!(render_modifiers(&modifiers, FinalSpelling::Drop), "private static ");
    assert_eq!(render_modifiers(&[Modifier::Volatile, Modifier::Native], FinalSpelling::Const), "");
}

#[test]
fn public_final_class_exports_const() {
    let decl = TypeDeclaration::class("Foo").with_modifiers([Modifier::Public, Modifier::Final]);
    assert_eq!(print_types(vec![decl]), "export const class Foo {\n}\n");
}

#[test]
fn final_field_is_readonly_and_each_variable_gets_a_line() {
    let count = FieldDecl {
        variables: vec![jts_ast::VariableDeclarator::new(
            "count",
            Some(Expr::number("0")),
        )],
        ..FieldDecl::new(number(), "unused")
    }
    .with_modifiers([Modifier::Private, Modifier::Final]);
    let names = FieldDecl::new(Type::class("string"), "a")
        .with_variable("b", None)
        .with_modifiers([Modifier::Static]);
    let decl = TypeDeclaration::class("Foo")
        .with_member(count)
        .with_member(names);

    assert_eq!(
        print_types(vec![decl]),
        "class Foo {\n  \
           private readonly count: number = 0;\n  \
           static a: string;\n  \
           static b: string;\n\
         }\n"
    );
}

#[test]
fn final_local_is_const_and_declarators_share_keyword() {
    let mut constant = VariableDeclarationExpr::single(number(), "x", Some(Expr::number("1")));
    constant.modifiers.push(Modifier::Final);
    let stmt = Statement::expr(Expr::VariableDeclaration(constant));
    assert_eq!(emit_stmt(&stmt).unwrap(), "const x: number = 1;\n");

    let mut pair = VariableDeclarationExpr::single(number(), "a", Some(Expr::number("1")));
    pair.variables.push(jts_ast::VariableDeclarator::new("b", None));
    let stmt = Statement::expr(Expr::VariableDeclaration(pair));
    assert_eq!(emit_stmt(&stmt).unwrap(), "let a: number = 1, b: number;\n");
}

#[test]
fn final_parameter_is_dropped_or_commented() {
    let param = Parameter::new(number(), "x").with_modifiers([Modifier::Final]);

    let config = JtsConfig::default();
    let out = emit_with(&config, |p| p.print_parameter(&param)).unwrap();
    assert_eq!(out, "x: number");

    let config = JtsConfig {
        comment_final_parameters: true,
        ..Default::default()
    };
    let out = emit_with(&config, |p| p.print_parameter(&param)).unwrap();
    assert_eq!(out, "/*final*/ x: number");
}

#[test]
fn varargs_and_untyped_parameters() {
    let rest = Parameter {
        varargs: true,
        ..Parameter::new(Type::class("string"), "parts")
    };
    let untyped = Parameter::new(Type::Unknown, "x");
    let config = JtsConfig::default();
    assert_eq!(
        emit_with(&config, |p| p.print_parameter(&rest)).unwrap(),
        "...parts: string[]"
    );
    assert_eq!(emit_with(&config, |p| p.print_parameter(&untyped)).unwrap(), "x");
}

#[test]
fn override_only_inside_derived_classes() {
    let method = || {
        MethodDecl::new("toString", Type::class("string"))
            .with_modifiers([Modifier::Public])
            .with_annotation(Annotation::marker("Override"))
            .with_body(Block::new(vec![Statement::ret(Some(Expr::string("b")))]))
    };

    let derived = TypeDeclaration::class("B")
        .extending(Type::class("A"))
        .with_member(method());
    assert_eq!(
        print_types(vec![derived]),
        "class B extends A {\n  \
           public override toString(): string {\n    \
             return \"b\";\n  \
           }\n\
         }\n"
    );

    let base = TypeDeclaration::class("A").with_member(method());
    let out = print_types(vec![base]);
    assert!(out.contains("  public toString(): string {\n"), "{out}");
    assert!(!out.contains("override"), "{out}");
}

#[test]
fn unknown_method_annotations_follow_policy() {
    let decl = TypeDeclaration::class("Foo").with_member(
        MethodDecl::new("run", Type::Void)
            .with_annotation(Annotation::marker("Deprecated"))
            .with_body(Block::default()),
    );
    let unit = CompilationUnit {
        types: vec![decl],
        ..Default::default()
    };

    let err = print_unit_with(&JtsConfig::default(), &unit).unwrap_err();
    assert_eq!(
        err,
        TranspileError::UnknownAnnotation {
            member: "run".to_string(),
            annotations: vec!["@Deprecated".to_string()],
        }
    );

    let config = JtsConfig {
        unknown_annotations: UnknownAnnotations::Comment,
        ..Default::default()
    };
    let out = print_unit_with(&config, &unit).unwrap();
    assert_eq!(out, "class Foo {\n  // @Deprecated\n  run(): void {}\n}\n");

    let config = JtsConfig {
        unknown_annotations: UnknownAnnotations::Ignore,
        ..Default::default()
    };
    let out = print_unit_with(&config, &unit).unwrap();
    assert_eq!(out, "class Foo {\n  run(): void {}\n}\n");
}

#[test]
fn throws_go_through_the_hook() {
    let method = MethodDecl::new("read", Type::Void)
        .with_throws(Type::class("IOException"))
        .with_throws(Type::class("SQLException"))
        .with_body(Block::default());

    let config = JtsConfig::default();
    let out = emit_with(&config, |p| p.print_method(&method, false)).unwrap();
    assert_eq!(out, "read(): void {}\n");

    let config = JtsConfig {
        comment_throws: true,
        ..Default::default()
    };
    let out = emit_with(&config, |p| p.print_method(&method, false)).unwrap();
    assert_eq!(out, "read(): void /* throws IOException, SQLException */ {}\n");
}

#[test]
fn interface_methods_are_signatures() {
    let decl = TypeDeclaration::interface("Shape")
        .with_modifiers([Modifier::Public])
        .with_member(
            MethodDecl::new("area", number()).with_modifiers([Modifier::Public, Modifier::Abstract]),
        );
    assert_eq!(
        print_types(vec![decl]),
        "export interface Shape {\n  area(): number;\n}\n"
    );
}

#[test]
fn interface_constants_are_rejected() {
    let decl = TypeDeclaration::interface("Limits").with_member(
        FieldDecl {
            ty: number(),
            ..Default::default()
        }
        .with_modifiers([Modifier::Public, Modifier::Static, Modifier::Final])
        .with_variable("MAX", Some(Expr::number("1"))),
    );
    let unit = CompilationUnit {
        types: vec![decl],
        ..Default::default()
    };
    let err = print_unit_with(&JtsConfig::default(), &unit).unwrap_err();
    assert_eq!(err, TranspileError::InterfaceConstant { name: "MAX".into() });
    assert_eq!(err.category(), jts_common::ErrorCategory::Unsupported);
}

#[test]
fn member_types_are_hoisted() {
    let inner = TypeDeclaration::class("Inner").with_modifiers([Modifier::Public, Modifier::Static]);
    let outer = TypeDeclaration::class("Outer").with_member(inner);
    assert_eq!(
        print_types(vec![outer]),
        "class Outer {\n}\n\nexport class Inner {\n}\n"
    );
}

#[test]
fn plain_enum_and_enum_with_arguments() {
    let plain = TypeDeclaration {
        kind: TypeKind::Enum,
        enum_constants: vec![
            EnumConstant {
                name: "RED".into(),
                ..Default::default()
            },
            EnumConstant {
                name: "GREEN".into(),
                ..Default::default()
            },
        ],
        ..TypeDeclaration::class("Color")
    }
    .with_modifiers([Modifier::Public]);
    assert_eq!(
        print_types(vec![plain]),
        "export enum Color {\n  RED,\n  GREEN,\n}\n"
    );

    let planet = TypeDeclaration {
        kind: TypeKind::Enum,
        enum_constants: vec![EnumConstant {
            name: "EARTH".into(),
            arguments: vec![Expr::number("5.97e24")],
            ..Default::default()
        }],
        ..TypeDeclaration::class("Planet")
    }
    .with_member(FieldDecl::new(number(), "mass").with_modifiers([Modifier::Private]));
    assert_eq!(
        print_types(vec![planet]),
        "class Planet {\n  \
           static readonly EARTH: Planet = new Planet(5.97e24);\n  \
           private mass: number;\n\
         }\n"
    );
}

// =============================================================================
// Unit layout, imports and comments
// =============================================================================

#[test]
fn unit_layout_with_package_and_imports() {
    let config = JtsConfig {
        package_template: Some("// package {package}".to_string()),
        ..Default::default()
    };
    let unit = CompilationUnit {
        package: Some(PackageDeclaration {
            name: "com.example".into(),
            span: Span::new(0, 20),
        }),
        imports: vec![
            ImportDeclaration::encoded(
                encode_import("./Sibling", "Sibling").unwrap(),
                ImportOrigin::Synthesized,
            ),
            ImportDeclaration::encoded(encode_import("fs", "Fs").unwrap(), ImportOrigin::Emitted)
                .asterisk(),
            ImportDeclaration::new("org.other.Thing"),
        ],
        types: vec![TypeDeclaration::class("A"), TypeDeclaration::class("B")],
        ..Default::default()
    };

    assert_eq!(
        print_unit_with(&config, &unit).unwrap(),
        "// package com.example\n\
         import { Sibling } from './Sibling';\n\
         import * as Fs from 'fs';\n\
         import * as Thing from 'org.other.Thing';\n\
         \n\
         class A {\n}\n\
         \n\
         class B {\n}\n"
    );
}

#[test]
fn unknown_import_template_placeholders() {
    let config = JtsConfig {
        unknown_import_template: Some("import {name} from 'java:{module}';".to_string()),
        ..Default::default()
    };
    let unit = CompilationUnit {
        imports: vec![ImportDeclaration::new("org.other.Thing")],
        ..Default::default()
    };
    assert_eq!(
        print_unit_with(&config, &unit).unwrap(),
        "import Thing from 'java:org.other.Thing';\n\n"
    );
}

#[test]
fn orphan_comments_fill_gaps_in_position_order() {
    let block = Block {
        statements: vec![
            Statement::expr(call("a", vec![])).at(Span::new(10, 20)),
            Statement::expr(call("b", vec![])).at(Span::new(30, 40)),
        ],
        orphan_comments: vec![
            Comment::line(" trailing").at(Span::new(50, 60)),
            Comment::line(" first").at(Span::new(5, 8)),
            Comment::line(" between").at(Span::new(25, 28)),
        ],
        span: Span::new(0, 70),
    };
    let out = emit_stmt(&Statement::new(StatementKind::Block(block))).unwrap();
    assert_eq!(
        out,
        "{\n  // first\n  a();\n  // between\n  b();\n  // trailing\n}\n"
    );
}

#[test]
fn javadoc_is_reindented() {
    let method = MethodDecl {
        comment: Some(Comment::javadoc("\n     * Runs.\n     ")),
        ..MethodDecl::new("run", Type::Void).with_body(Block::default())
    };
    let decl = TypeDeclaration::class("Job").with_member(method);
    assert_eq!(
        print_types(vec![decl]),
        "class Job {\n  /**\n   * Runs.\n   */\n  run(): void {}\n}\n"
    );
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn multi_catch_becomes_instanceof_chain() {
    let io_or_sql = Parameter::new(
        Type::Union(vec![Type::class("IOException"), Type::class("SQLException")]),
        "e",
    );
    let runtime = Parameter::new(Type::class("RuntimeException"), "re");
    let stmt = Statement::new(StatementKind::Try {
        resources: vec![],
        block: Block::new(vec![Statement::expr(call("work", vec![]))]),
        catches: vec![
            CatchClause {
                parameter: io_or_sql,
                body: Block::new(vec![Statement::expr(call("log", vec![Expr::name("e")]))]),
                span: Span::synthetic(),
            },
            CatchClause {
                parameter: runtime,
                body: Block::new(vec![Statement::new(StatementKind::Throw(Expr::name("re")))]),
                span: Span::synthetic(),
            },
        ],
        finally: Some(Block::new(vec![Statement::expr(call("done", vec![]))])),
    });

    assert_eq!(
        emit_stmt(&stmt).unwrap(),
        "try {\n  \
           work();\n\
         } catch (e) {\n  \
           if (e instanceof IOException) {\n    \
             log(e);\n  \
           } else if (e instanceof SQLException) {\n    \
             log(e);\n  \
           } else if (e instanceof RuntimeException) {\n    \
             const re = e;\n    \
             throw re;\n  \
           } else {\n    \
             throw e;\n  \
           }\n\
         } finally {\n  \
           done();\n\
         }\n"
    );
}

#[test]
fn try_with_resources_declares_consts_in_enclosing_block() {
    let resource = VariableDeclarationExpr::single(
        Type::class("Reader"),
        "reader",
        Some(call("open", vec![])),
    );
    let stmt = Statement::new(StatementKind::Try {
        resources: vec![Expr::VariableDeclaration(resource)],
        block: Block::new(vec![Statement::expr(call("read", vec![Expr::name("reader")]))]),
        catches: vec![],
        finally: None,
    });
    assert_eq!(
        emit_stmt(&stmt).unwrap(),
        "{\n  const reader: Reader = open();\n  try {\n    read(reader);\n  }\n}\n"
    );
}

#[test]
fn for_each_uses_const_of() {
    let stmt = Statement::new(StatementKind::ForEach {
        variable: VariableDeclarationExpr::single(Type::class("string"), "item", None),
        iterable: Expr::name("items"),
        body: Box::new(Statement::block(vec![Statement::expr(call(
            "use",
            vec![Expr::name("item")],
        ))])),
    });
    assert_eq!(
        emit_stmt(&stmt).unwrap(),
        "for (const item of items) {\n  use(item);\n}\n"
    );
}

#[test]
fn for_each_with_two_variables_is_rejected() {
    let mut variable = VariableDeclarationExpr::single(Type::class("string"), "a", None);
    variable.variables.push(jts_ast::VariableDeclarator::new("b", None));
    let stmt = Statement::new(StatementKind::ForEach {
        variable,
        iterable: Expr::name("items"),
        body: Box::new(Statement::block(vec![])),
    });
    assert_eq!(
        emit_stmt(&stmt).unwrap_err(),
        TranspileError::MultiVariableForEach { count: 2 }
    );
}

#[test]
fn if_else_chain_and_unbraced_bodies() {
    let stmt = Statement::new(StatementKind::If {
        condition: Expr::name("a"),
        then_branch: Box::new(Statement::block(vec![Statement::expr(call("x", vec![]))])),
        else_branch: Some(Box::new(Statement::new(StatementKind::If {
            condition: Expr::name("b"),
            then_branch: Box::new(Statement::expr(call("y", vec![]))),
            else_branch: Some(Box::new(Statement::expr(call("z", vec![])))),
        }))),
    });
    assert_eq!(
        emit_stmt(&stmt).unwrap(),
        "if (a) {\n  x();\n} else if (b)\n  y();\nelse\n  z();\n"
    );
}

#[test]
fn classic_for_and_switch() {
    let init = VariableDeclarationExpr::single(number(), "i", Some(Expr::number("0")));
    let stmt = Statement::new(StatementKind::For {
        init: vec![Expr::VariableDeclaration(init)],
        condition: Some(Expr::binary(Expr::name("i"), BinaryOp::Less, Expr::name("n"))),
        update: vec![Expr::Unary {
            op: UnaryOp::PostIncrement,
            operand: Box::new(Expr::name("i")),
        }],
        body: Box::new(Statement::block(vec![])),
    });
    assert_eq!(
        emit_stmt(&stmt).unwrap(),
        "for (let i: number = 0; i < n; i++) {}\n"
    );

    let switch = Statement::new(StatementKind::Switch {
        selector: Expr::name("k"),
        entries: vec![
            jts_ast::SwitchEntry {
                labels: vec![Expr::number("1"), Expr::number("2")],
                statements: vec![Statement::new(StatementKind::Break(None))],
            },
            jts_ast::SwitchEntry {
                labels: vec![],
                statements: vec![Statement::ret(None)],
            },
        ],
    });
    assert_eq!(
        emit_stmt(&switch).unwrap(),
        "switch (k) {\n  case 1:\n  case 2:\n    break;\n  default:\n    return;\n}\n"
    );
}

#[test]
fn declarator_without_ambient_type_is_an_error() {
    let err = emit_with(&JtsConfig::default(), |p| p.print_declarator("orphan", None)).unwrap_err();
    assert_eq!(
        err,
        TranspileError::MissingAmbientType {
            declarator: "orphan".to_string()
        }
    );
}

// =============================================================================
// Types
// =============================================================================

#[test]
fn nullable_type_renders_union_with_null() {
    assert_eq!(emit_type(&nullable(vec![Type::class("string")])).unwrap(), "string | null");
    assert_eq!(
        emit_type(&Type::array(nullable(vec![Type::class("string")]))).unwrap(),
        "(string | null)[]"
    );
    assert_eq!(
        emit_type(&Type::generic("Array", vec![nullable(vec![number()])])).unwrap(),
        "Array<number | null>"
    );
}

#[test]
fn nullable_tag_requires_one_argument() {
    assert_eq!(
        emit_type(&nullable(vec![])).unwrap_err(),
        TranspileError::SentinelArity {
            name: "Optional".to_string(),
            count: 0
        }
    );
    assert_eq!(
        emit_type(&nullable(vec![number(), number()])).unwrap_err(),
        TranspileError::SentinelArity {
            name: "Optional".to_string(),
            count: 2
        }
    );
}

#[test]
fn other_type_shapes() {
    let scoped = Type::Class(ClassType::new("Entry").with_scope(ClassType::new("Map")));
    assert_eq!(emit_type(&scoped).unwrap(), "Map.Entry");
    assert_eq!(
        emit_type(&Type::Class(ClassType::new("Box").with_args(vec![]))).unwrap(),
        "Box"
    );
    assert_eq!(emit_type(&Type::Wildcard(None)).unwrap(), "any");
    assert_eq!(
        emit_type(&Type::Wildcard(Some(Box::new(number())))).unwrap(),
        "number"
    );
    assert_eq!(
        emit_type(&Type::Primitive(jts_ast::PrimitiveType::Long)).unwrap(),
        "long"
    );
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn equality_is_strict_and_parenthesized_under_unary() {
    let eq = Expr::binary(Expr::name("a"), BinaryOp::Equals, Expr::name("b"));
    assert_eq!(emit_expr(&eq), "a === b");

    let not = Expr::Unary {
        op: UnaryOp::Not,
        operand: Box::new(eq),
    };
    assert_eq!(emit_expr(&not), "!(a === b)");

    let ne = Expr::binary(Expr::name("a"), BinaryOp::NotEquals, Expr::null());
    assert_eq!(emit_expr(&ne), "a !== null");
}

fn unary(op: UnaryOp, operand: Expr) -> Expr {
    Expr::Unary {
        op,
        operand: Box::new(operand),
    }
}

#[test]
fn nested_sign_operators_stay_separate() {
    let x = || Expr::name("x");
    assert_eq!(emit_expr(&unary(UnaryOp::Minus, unary(UnaryOp::Minus, x()))), "- -x");
    assert_eq!(emit_expr(&unary(UnaryOp::Minus, unary(UnaryOp::PreDecrement, x()))), "- --x");
    assert_eq!(emit_expr(&unary(UnaryOp::Plus, unary(UnaryOp::Plus, x()))), "+ +x");
    assert_eq!(emit_expr(&unary(UnaryOp::Plus, unary(UnaryOp::PreIncrement, x()))), "+ ++x");

    assert_eq!(emit_expr(&unary(UnaryOp::Minus, unary(UnaryOp::Plus, x()))), "-+x");
    assert_eq!(emit_expr(&unary(UnaryOp::Minus, unary(UnaryOp::PostDecrement, x()))), "-x--");
    assert_eq!(emit_expr(&unary(UnaryOp::Not, unary(UnaryOp::Not, x()))), "!!x");
}

#[test]
fn binary_precedence_keeps_grouping() {
    let sum = Expr::binary(Expr::name("a"), BinaryOp::Plus, Expr::name("b"));
    let product = Expr::binary(sum.clone(), BinaryOp::Multiply, Expr::name("c"));
    assert_eq!(emit_expr(&product), "(a + b) * c");

    let right = Expr::binary(Expr::name("x"), BinaryOp::Minus, sum);
    assert_eq!(emit_expr(&right), "x - (a + b)");
}

#[test]
fn literals() {
    assert_eq!(emit_expr(&Expr::number("10L")), "10");
    assert_eq!(emit_expr(&Expr::number("1.5f")), "1.5");
    assert_eq!(emit_expr(&Expr::number("0xFFL")), "0xFF");
    assert_eq!(emit_expr(&Expr::number("0xDD")), "0xDD");
    assert_eq!(emit_expr(&Expr::Literal(Literal::Char("a".into()))), "\"a\"");
    assert_eq!(emit_expr(&Expr::Literal(Literal::Char("\\'".into()))), "\"'\"");
    assert_eq!(emit_expr(&Expr::Literal(Literal::Char("\"".into()))), "\"\\\"\"");
    assert_eq!(emit_expr(&Expr::string("hi")), "\"hi\"");
}

#[test]
fn casts_lambdas_and_references() {
    let cast = Expr::Cast {
        ty: number(),
        expr: Box::new(Expr::name("x")),
    };
    assert_eq!(emit_expr(&cast), "(x as number)");

    let lambda = Expr::Lambda {
        parameters: vec![Parameter::new(Type::Unknown, "x")],
        body: LambdaBody::Expr(Box::new(Expr::binary(
            Expr::name("x"),
            BinaryOp::Multiply,
            Expr::number("2"),
        ))),
    };
    assert_eq!(emit_expr(&lambda), "(x) => x * 2");

    let reference = Expr::MethodReference {
        scope: Box::new(Expr::This),
        name: "handle".into(),
    };
    assert_eq!(emit_expr(&reference), "this.handle");

    assert_eq!(
        emit_expr(&Expr::ClassLiteral(Type::generic("List", vec![number()]))),
        "List"
    );
    let check = Expr::InstanceOf {
        expr: Box::new(Expr::name("o")),
        ty: Type::generic("Box", vec![number()]),
    };
    assert_eq!(emit_expr(&check), "o instanceof Box");
}

#[test]
fn array_creation_forms() {
    let sized = Expr::ArrayCreation {
        component: number(),
        dimensions: vec![Expr::name("n")],
        initializer: None,
    };
    assert_eq!(emit_expr(&sized), "new Array<number>(n)");

    let nested = Expr::ArrayCreation {
        component: number(),
        dimensions: vec![Expr::number("2"), Expr::number("3")],
        initializer: None,
    };
    assert_eq!(emit_expr(&nested), "new Array<number[]>(2)");

    let literal = Expr::ArrayCreation {
        component: number(),
        dimensions: vec![],
        initializer: Some(vec![Expr::number("1"), Expr::number("2")]),
    };
    assert_eq!(emit_expr(&literal), "[1, 2]");
}

#[test]
fn object_creation_and_calls() {
    let create = Expr::new_object(
        ClassType::new("Map").with_args(vec![Type::class("string"), number()]),
        vec![],
    );
    assert_eq!(emit_expr(&create), "new Map<string, number>()");

    let chained = Expr::call(Some(create), "size", vec![]);
    assert_eq!(emit_expr(&chained), "(new Map<string, number>()).size()");
}
