//! The base language every program starts in.

use lisle_nanopass::{GrammarError, Language, Terminal};

/// Name of the base language.
pub const BASE_LANGUAGE: &str = "L0";

/// Terminal names and kinds of the base language.
pub const TERMINALS: [(&str, Terminal); 4] = [
    ("s", Terminal::Variable),
    ("pr", Terminal::Primitive),
    ("c", Terminal::Constant),
    ("d", Terminal::Datum),
];

/// Top-level clauses of the base language, in match order.
///
/// `quote` is registered separately because it is opaque.
const CLAUSES_BEFORE_QUOTE: [&str; 3] = ["pr", "s", "c"];

const QUOTE: &str = "('quote d)";

const CLAUSES_AFTER_QUOTE: [&str; 10] = [
    "('if ε ε)",
    "('if ε ε ε)",
    "('or ε ε+)",
    "('and ε ε+)",
    "('not ε)",
    "('do ε+)",
    "('let ([s ε]+) ε+)",
    "('fn ([s*]) ε+)",
    // application
    "(ε+)",
    "(s+)",
];

/// Build the base language.
pub fn base_language() -> Result<Language, GrammarError> {
    let mut language = Language::new(BASE_LANGUAGE);
    for (name, terminal) in TERMINALS {
        language = language.with_terminal(name, terminal);
    }
    for pattern in CLAUSES_BEFORE_QUOTE {
        language = language.with_clause(pattern)?;
    }
    language = language.with_opaque_clause(QUOTE)?;
    for pattern in CLAUSES_AFTER_QUOTE {
        language = language.with_clause(pattern)?;
    }
    Ok(language)
}
