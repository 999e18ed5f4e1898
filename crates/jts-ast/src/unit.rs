//! Compilation units, package/import declarations and comments.

use crate::decl::TypeDeclaration;
use jts_common::Span;
use serde::{Deserialize, Serialize};

/// The whole-file tree for one Java source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilationUnit {
    pub package: Option<PackageDeclaration>,
    pub imports: Vec<ImportDeclaration>,
    pub types: Vec<TypeDeclaration>,
    /// Comment preceding the first declaration of the file.
    pub comment: Option<Comment>,
    /// Comments the front end could not attach to any child node.
    pub orphan_comments: Vec<Comment>,
    pub span: Span,
}

impl CompilationUnit {
    /// Dotted package name, empty for the default package.
    pub fn package_name(&self) -> &str {
        self.package.as_ref().map_or("", |p| p.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageDeclaration {
    pub name: String,
    pub span: Span,
}

/// Where the dotted name of an import came from.
///
/// Anything other than `Source` holds an encoded module specifier
/// (`<encoded specifier>.<binding>`) that the printer decodes exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportOrigin {
    /// As written in the Java source (or left unresolved).
    #[default]
    Source,
    /// Rewritten by the module/package resolver.
    Resolved,
    /// Same-directory sibling import added by the selector.
    Synthesized,
    /// Added by a registered pass (e.g. `stream.Writable`).
    Emitted,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportDeclaration {
    pub name: String,
    pub is_static: bool,
    pub is_asterisk: bool,
    pub origin: ImportOrigin,
    pub comment: Option<Comment>,
    pub span: Span,
}

impl ImportDeclaration {
    /// A source import of `name`.
    pub fn new(name: impl Into<String>) -> Self {
        ImportDeclaration {
            name: name.into(),
            ..Default::default()
        }
    }

    /// An import whose name already holds an encoded specifier.
    pub fn encoded(name: impl Into<String>, origin: ImportOrigin) -> Self {
        ImportDeclaration {
            name: name.into(),
            origin,
            ..Default::default()
        }
    }

    pub fn asterisk(mut self) -> Self {
        self.is_asterisk = true;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Whether the name holds an encoded specifier rather than a Java name.
    pub fn is_encoded(&self) -> bool {
        self.origin != ImportOrigin::Source
    }

    /// `(package, class)` split of a Java import name. A wildcard import is
    /// all package.
    pub fn package_and_class(&self) -> (&str, Option<&str>) {
        if self.is_asterisk {
            return (&self.name, None);
        }
        match self.name.rfind('.') {
            Some(idx) => (&self.name[..idx], Some(&self.name[idx + 1..])),
            None => ("", Some(&self.name)),
        }
    }

    /// Last segment of the dotted name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// `// ...`
    #[default]
    Line,
    /// `/* ... */`
    Block,
    /// `/** ... */`
    Javadoc,
}

/// A source comment. `content` excludes the delimiters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub kind: CommentKind,
    pub content: String,
    pub span: Span,
}

impl Comment {
    pub fn line(content: impl Into<String>) -> Self {
        Comment {
            kind: CommentKind::Line,
            content: content.into(),
            span: Span::synthetic(),
        }
    }

    pub fn block(content: impl Into<String>) -> Self {
        Comment {
            kind: CommentKind::Block,
            content: content.into(),
            span: Span::synthetic(),
        }
    }

    pub fn javadoc(content: impl Into<String>) -> Self {
        Comment {
            kind: CommentKind::Javadoc,
            content: content.into(),
            span: Span::synthetic(),
        }
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

#[cfg(test)]
#[path = "../tests/unit.rs"]
mod tests;
