//! Module Specifier Codec
//!
//! Java import declarations only hold dotted names (`a.b.C`), but the
//! transpiler needs to park TypeScript module specifiers (`./x`, `../x`,
//! `@scope/pkg`) in that slot between import rewriting and printing. This
//! module encodes a specifier into a dotted string and decodes it back.
//!
//! | specifier         | encoded                    |
//! |-------------------|----------------------------|
//! | `./core/Foo`      | `DOT_SLASH.core.Foo`       |
//! | `@scope/pkg/Foo`  | `AT_SIGN.scope.pkg.Foo`    |
//! | `../../core/Foo`  | `DOT_DOT.DOT_DOT.core.Foo` |
//! | `stream`          | `stream`                   |
//!
//! `decode(encode(s)) == s` holds for every specifier whose path segments are
//! free of `.` (other than leading `..` segments) and free of marker tokens.
//! There is no escaping: a specifier that already contains a marker token is
//! rejected by [`encode`].

use thiserror::Error;

/// Marker for a leading `./`.
pub const DOT_SLASH: &str = "DOT_SLASH";
/// Marker for a leading `@` (scoped package).
pub const AT_SIGN: &str = "AT_SIGN";
/// Marker for each `..` parent segment.
pub const DOT_DOT: &str = "DOT_DOT";

const MARKERS: [&str; 3] = [DOT_SLASH, AT_SIGN, DOT_DOT];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecifierError {
    /// The specifier contains a marker token and could not be decoded faithfully.
    #[error("module specifier '{specifier}' contains the reserved marker '{marker}'")]
    ReservedMarker {
        specifier: String,
        marker: &'static str,
    },
}

/// Encode a module specifier into a dotted-identifier string.
pub fn encode(specifier: &str) -> Result<String, SpecifierError> {
    if let Some(marker) = MARKERS.iter().find(|m| specifier.contains(**m)) {
        return Err(SpecifierError::ReservedMarker {
            specifier: specifier.to_string(),
            marker: *marker,
        });
    }

    if let Some(rest) = specifier.strip_prefix("./") {
        Ok(format!("{DOT_SLASH}.{}", rest.replace('/', ".")))
    } else if let Some(rest) = specifier.strip_prefix('@') {
        Ok(format!("{AT_SIGN}.{}", rest.replace('/', ".")))
    } else {
        Ok(specifier.replace("..", DOT_DOT).replace('/', "."))
    }
}

/// Decode a dotted string produced by [`encode`] back into a specifier.
pub fn decode(dotted: &str) -> String {
    let slashed = dotted.replace('.', "/");
    if let Some(rest) = slashed.strip_prefix(AT_SIGN) {
        format!("@{}", rest.strip_prefix('/').unwrap_or(rest))
    } else if let Some(rest) = slashed.strip_prefix(DOT_SLASH) {
        format!("./{}", rest.strip_prefix('/').unwrap_or(rest))
    } else {
        slashed.replace(DOT_DOT, "..")
    }
}

/// Encode an import of `binding` from `specifier` into one dotted name:
/// `<encoded specifier>.<binding>`.
pub fn encode_import(specifier: &str, binding: &str) -> Result<String, SpecifierError> {
    let module = encode(specifier)?;
    Ok(format!("{module}.{binding}"))
}

/// Split a name built by [`encode_import`] into `(specifier, binding)`.
///
/// A name without any dot is a bare binding with an empty specifier.
pub fn decode_import(dotted: &str) -> (String, &str) {
    match dotted.rfind('.') {
        Some(idx) => (decode(&dotted[..idx]), &dotted[idx + 1..]),
        None => (String::new(), dotted),
    }
}

#[cfg(test)]
#[path = "../tests/specifier.rs"]
mod tests;
