//! Per-file naming and filtering strategies.
//!
//! Both are plain capabilities: given a file name, produce a namespace token
//! or an accept/reject decision. Closures implement them directly.

use regex::Regex;
use std::sync::LazyLock;

/// Turns a file name into the identifier fragment used for its symbols.
pub trait Namer: Send + Sync {
    fn namespace(&self, file_name: &str) -> String;
}

impl<F> Namer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn namespace(&self, file_name: &str) -> String {
        self(file_name)
    }
}

/// Decides whether a file gets a header at all.
pub trait Filter: Send + Sync {
    fn accept(&self, file_name: &str) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn accept(&self, file_name: &str) -> bool {
        self(file_name)
    }
}

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("static regex"));

/// Default namer: `my-file.HTML` → `my_file_html`, `1 a-b.c` → `_1_a_b_c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitize;

impl Namer for Sanitize {
    fn namespace(&self, file_name: &str) -> String {
        let mut token = NON_WORD.replace_all(file_name, "_").into_owned();
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            token.insert(0, '_');
        }
        token.to_ascii_lowercase()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Filter for AcceptAll {
    fn accept(&self, _file_name: &str) -> bool {
        true
    }
}

/// Regex based filter used by the config file and the command line.
///
/// A name is accepted when it matches `include` (if set) and does not
/// match `exclude` (if set).
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    pub include: Option<Regex>,
    pub exclude: Option<Regex>,
}

impl Filter for PatternFilter {
    fn accept(&self, file_name: &str) -> bool {
        let included = self
            .include
            .as_ref()
            .is_none_or(|re| re.is_match(file_name));
        let excluded = self
            .exclude
            .as_ref()
            .is_some_and(|re| re.is_match(file_name));
        included && !excluded
    }
}
