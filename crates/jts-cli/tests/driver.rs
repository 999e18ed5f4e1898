use super::*;
use jts_ast::{
    Annotation, Block, FieldDecl, MethodDecl, Modifier, PackageDeclaration, Type,
    TypeDeclaration,
};
use jts_common::PackageMap;
use tempfile::TempDir;

const SRC_ROOT: &str = "src/main/java";

fn unit(package: &str, decl: TypeDeclaration) -> CompilationUnit {
    CompilationUnit {
        package: Some(PackageDeclaration {
            name: package.into(),
            ..Default::default()
        }),
        types: vec![decl],
        ..Default::default()
    }
}

fn write_tree(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn write_unit(root: &Path, relative: &str, unit: &CompilationUnit) {
    write_tree(root, relative, &serde_json::to_string_pretty(unit).unwrap());
}

/// A project with two good units, one malformed tree and one unit that
/// fails to transpile.
fn project() -> (TempDir, JtsConfig) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("java").join("app").join(SRC_ROOT);

    let user = TypeDeclaration::class("User")
        .with_modifiers([Modifier::Public])
        .with_member(FieldDecl::new(Type::class("Address"), "home").with_modifiers([Modifier::Private]));
    write_unit(&root, "com/example/model/User.java.json", &unit("com.example.model", user));
    write_unit(
        &root,
        "com/example/model/Address.java.json",
        &unit("com.example.model", TypeDeclaration::class("Address")),
    );

    let page = TypeDeclaration::class("Page").with_member(
        MethodDecl::new("save", Type::Void)
            .with_annotation(Annotation::marker("Transactional"))
            .with_body(Block::default()),
    );
    write_unit(&root, "com/example/web/Page.java.json", &unit("com.example.web", page));
    write_tree(&root, "com/example/web/Broken.java.json", "{ \"types\": [");
    write_tree(&root, "com/example/web/notes.txt", "not a tree");

    let config = JtsConfig {
        input_directory: dir.path().join("java"),
        output_directory: dir.path().join("out"),
        ..Default::default()
    }
    .with_module(
        "app",
        ModuleMap::new("app", SRC_ROOT).with_package(PackageMap::new("com.example", None)),
    );
    (dir, config)
}

#[test]
fn class_name_stops_at_first_dot() {
    assert_eq!(class_name("User.java.json"), "User");
    assert_eq!(class_name("Plain"), "Plain");
}

#[test]
fn discovery_finds_trees_and_directory_siblings() {
    let (_dir, config) = project();
    let sources = discover_sources(&config).unwrap();

    let paths: Vec<_> = sources.iter().map(|s| s.source_path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "com/example/model/Address.java",
            "com/example/model/User.java",
            "com/example/web/Broken.java",
            "com/example/web/Page.java",
        ]
    );

    let user = &sources[1];
    assert_eq!(user.module_name, "app");
    assert!(user.tree_path.ends_with("com/example/model/User.java.json"));
    let mut siblings: Vec<_> = user.siblings.iter().cloned().collect();
    siblings.sort();
    assert_eq!(siblings, vec!["Address", "User"]);

    let page = &sources[3];
    assert!(page.siblings.contains("Broken"));
    assert!(!page.siblings.contains("User"));
}

#[test]
fn missing_source_root_is_an_error() {
    let (_dir, config) = project();
    let config = config.with_module("other", ModuleMap::new("other", SRC_ROOT));
    let err = discover_sources(&config).unwrap_err();
    assert!(err.to_string().contains("module 'other'"), "{err}");
}

#[test]
fn run_writes_outputs_and_isolates_failures() {
    let (dir, config) = project();
    let summary = run(
        &config,
        &RunOptions {
            jobs: Some(2),
            dry_run: false,
        },
    )
    .unwrap();

    assert!(!summary.is_success());
    assert_eq!(summary.total(), 4);
    assert_eq!(
        summary.outputs,
        vec![
            dir.path().join("out/app/model/Address.ts"),
            dir.path().join("out/app/model/User.ts"),
        ]
    );

    let user = std::fs::read_to_string(dir.path().join("out/app/model/User.ts")).unwrap();
    assert_eq!(
        user,
        "import { Address } from './Address';\n\
         \n\
         export class User {\n  \
           private home: Address;\n\
         }\n"
    );

    assert_eq!(summary.failures.len(), 2);
    let broken = &summary.failures[0];
    assert!(broken.tree_path.ends_with("Broken.java.json"));
    assert_eq!(broken.category(), None);
    assert!(format!("{:#}", broken.error).contains("failed to parse syntax tree"));

    let page = &summary.failures[1];
    assert!(page.tree_path.ends_with("Page.java.json"));
    assert_eq!(page.category(), Some(ErrorCategory::Unsupported));
    assert!(format!("{:#}", page.error).contains("@Transactional"));
    assert!(!dir.path().join("out/app/web").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let (dir, config) = project();
    let summary = run(
        &config,
        &RunOptions {
            jobs: None,
            dry_run: true,
        },
    )
    .unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.outputs.len(), 2);
    assert!(!dir.path().join("out").exists());
}

#[test]
fn unmapped_packages_are_reported_as_degradations() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("java").join("app").join(SRC_ROOT);
    write_unit(
        &root,
        "org/other/Thing.java.json",
        &unit("org.other", TypeDeclaration::class("Thing")),
    );
    let config = JtsConfig {
        input_directory: dir.path().join("java"),
        output_directory: dir.path().join("out"),
        ..Default::default()
    }
    .with_module(
        "app",
        ModuleMap::new("app", SRC_ROOT).with_package(PackageMap::new("com.example", None)),
    );

    let summary = run(&config, &RunOptions::default()).unwrap();
    assert!(summary.is_success());
    assert_eq!(summary.outputs, vec![dir.path().join("out/app/org/other/Thing.ts")]);
    assert_eq!(summary.degradations.len(), 1);
    assert_eq!(
        summary.degradations[0].1,
        Degradation::UnmappedOutputPath {
            path: "org/other/Thing.java".into()
        }
    );
}
