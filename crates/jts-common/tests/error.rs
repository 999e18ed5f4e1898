use super::*;

#[test]
fn categories_cover_every_variant() {
    let configuration = [
        TranspileError::MissingPackageMap {
            module: "core".into(),
            package: "com.other".into(),
        },
        TranspileError::UnknownModule { module: "x".into() },
        TranspileError::UnresolvedImport {
            name: "org.acme.Thing".into(),
        },
        TranspileError::from(SpecifierError::ReservedMarker {
            specifier: "./DOT_DOT".into(),
            marker: "DOT_DOT",
        }),
    ];
    for err in &configuration {
        assert_eq!(err.category(), ErrorCategory::Configuration, "{err}");
    }

    let unsupported = [
        TranspileError::UnknownAnnotation {
            member: "run".into(),
            annotations: vec!["@Transactional".into()],
        },
        TranspileError::MultiVariableForEach { count: 2 },
        TranspileError::SentinelArity {
            name: "Optional".into(),
            count: 0,
        },
        TranspileError::InterfaceConstant { name: "MAX".into() },
    ];
    for err in &unsupported {
        assert_eq!(err.category(), ErrorCategory::Unsupported, "{err}");
    }

    let internal = TranspileError::MissingAmbientType {
        declarator: "x".into(),
    };
    assert_eq!(internal.category(), ErrorCategory::Internal);
}

#[test]
fn unknown_annotation_message_names_annotations() {
    let err = TranspileError::UnknownAnnotation {
        member: "handle".into(),
        annotations: vec!["@Foo".into(), "@Bar(1)".into()],
    };
    assert_eq!(
        err.to_string(),
        "unknown annotation(s) @Foo, @Bar(1) on 'handle'"
    );
}

#[test]
fn reserved_marker_is_transparent() {
    let err: TranspileError = SpecifierError::ReservedMarker {
        specifier: "@AT_SIGN/x".into(),
        marker: "AT_SIGN",
    }
    .into();
    assert!(err.to_string().contains("reserved marker 'AT_SIGN'"));
}

#[test]
fn degradations_display() {
    let d = Degradation::WildcardImport {
        name: "org.acme.Thing".into(),
    };
    assert!(d.to_string().contains("org.acme.Thing"));
    assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
}
