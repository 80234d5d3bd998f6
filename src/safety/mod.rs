//! Query safety gate.
//!
//! Classifies raw SQL as permitted or denied before execution, using a
//! keyword deny-list scan. This is deliberately a substring check, not a
//! parser: it has false positives (a string literal containing "DELETE" is
//! also denied) and is a guard against accidental destructive statements
//! from the editor, not a security boundary against adversarial input.

/// Keywords that deny a statement wherever they appear in the text.
/// CREATE and INSERT are intentionally absent: they are permitted.
pub const DENIED_KEYWORDS: [&str; 7] = [
    "DROP", "DELETE", "TRUNCATE", "ALTER", "PRAGMA", "ATTACH", "DETACH",
];

/// Outcome of classifying a SQL string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyVerdict {
    /// Whether the statement may be executed.
    pub permitted: bool,
    /// The keyword that triggered denial, if any.
    pub matched_keyword: Option<&'static str>,
}

impl SafetyVerdict {
    fn permitted() -> Self {
        Self {
            permitted: true,
            matched_keyword: None,
        }
    }

    fn denied(keyword: &'static str) -> Self {
        Self {
            permitted: false,
            matched_keyword: Some(keyword),
        }
    }

    /// Human-readable denial message, suitable for history records.
    pub fn denial_message() -> &'static str {
        "Query contains disallowed dangerous operations \
         (e.g., DROP, DELETE, TRUNCATE, ALTER)."
    }
}

/// Classifies a SQL string against the deny-list.
///
/// The scan is case-insensitive and position-independent: a denied keyword
/// anywhere in the text, not just as the leading clause, denies it.
pub fn classify(sql: &str) -> SafetyVerdict {
    let upper = sql.trim().to_uppercase();

    for keyword in DENIED_KEYWORDS {
        if upper.contains(keyword) {
            return SafetyVerdict::denied(keyword);
        }
    }

    SafetyVerdict::permitted()
}
