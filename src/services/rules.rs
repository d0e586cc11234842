//! Rule-name extraction from rewrite definitions and Alethe proof traces.

use once_cell::sync::Lazy;
use regex::Regex;

/// Definition forms, most specific first.
pub const DEFINE_FORMS: [&str; 4] = [
    "define-cond-rule*",
    "define-cond-rule",
    "define-rule*",
    "define-rule",
];

// First space-preceded run of name characters that ends on a word boundary.
static DEFINITION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ([A-Za-z0-9\-]+)\b").expect("definition pattern compiles"));

// The trailing space is required: `(evaluate)` has no arguments and names no rule.
static TRACE_RULE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":rule all_simplify :args \(([A-Za-z0-9\-]+) ").expect("trace pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    Definition,
    ProofTrace,
}

pub fn extract_rule_name(line: &str, mode: ExtractMode) -> Option<&str> {
    match mode {
        ExtractMode::Definition => definition_rule_name(line),
        ExtractMode::ProofTrace => trace_rule_name(line),
    }
}

pub fn is_rule_definition(line: &str) -> bool {
    line.strip_prefix('(')
        .is_some_and(|rest| DEFINE_FORMS.iter().any(|form| rest.starts_with(form)))
}

fn definition_rule_name(line: &str) -> Option<&str> {
    if !is_rule_definition(line) {
        return None;
    }
    DEFINITION_NAME
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn trace_rule_name(line: &str) -> Option<&str> {
    TRACE_RULE_NAME
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Rule names defined in a rewrite source, in file order.
pub fn read_rules<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| extract_rule_name(line.trim_end(), ExtractMode::Definition))
        .map(ToOwned::to_owned)
        .collect()
}
