//! Modifier layout.
//!
//! TypeScript modifiers are written in three ordered slots: access, then
//! `abstract`/`static`, then the spelling of Java `final`. The spelling of
//! `final` depends on what is being declared.

use jts_ast::Modifier;

/// How `final` is spelled for a kind of declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalSpelling {
    /// Type declarations and locals.
    Const,
    /// Fields.
    Readonly,
    /// Parameters with `commentFinalParameters`.
    Comment,
    /// Parameters, methods and constructors.
    Drop,
}

impl FinalSpelling {
    fn text(self) -> Option<&'static str> {
        match self {
            FinalSpelling::Const => Some("const"),
            FinalSpelling::Readonly => Some("readonly"),
            FinalSpelling::Comment => Some("/*final*/"),
            FinalSpelling::Drop => None,
        }
    }
}

/// Output slot of a modifier; `None` for modifiers TypeScript has no
/// spelling for.
pub fn modifier_slot(modifier: Modifier) -> Option<usize> {
    match modifier {
        Modifier::Public | Modifier::Protected | Modifier::Private => Some(0),
        Modifier::Abstract | Modifier::Static => Some(1),
        Modifier::Final => Some(2),
        Modifier::Transient
        | Modifier::Volatile
        | Modifier::Synchronized
        | Modifier::Native
        | Modifier::Strictfp
        | Modifier::Default => None,
    }
}

/// Render `modifiers` in slot order, each followed by a space.
///
/// `abstract` and `static` share a slot; the later one wins.
pub fn render_modifiers(modifiers: &[Modifier], final_spelling: FinalSpelling) -> String {
    let mut slots: [Option<&'static str>; 3] = [None; 3];
    for &modifier in modifiers {
        let Some(slot) = modifier_slot(modifier) else {
            continue;
        };
        slots[slot] = if modifier == Modifier::Final {
            final_spelling.text()
        } else {
            Some(modifier.keyword())
        };
    }

    let mut out = String::new();
    for text in slots.into_iter().flatten() {
        out.push_str(text);
        out.push(' ');
    }
    out
}
