//! stage/debracketize.rs – **Parenthesised asides**
//!
//! Two rules, picked by the shape of the trimmed text:
//! * first char `(` and last char `)`: the text is treated as wrapped and the
//!   outermost parentheses (repeated ones included) are unwrapped per line:
//!   `(( I am wrapped ))` → `I am wrapped`. Balance is **not** checked, only
//!   the first and last characters.
//! * otherwise every `(…)` span is deleted, non-greedily, with runs of
//!   opening/closing parens consumed as one unit: `I (really) smell` →
//!   `I smell`. The result is trimmed and runs of spaces collapsed.
use crate::{
    context::Context,
    stage::Stage,
    unicode::{has_edge_whitespace, has_run_of, squeeze, trim_ascii_ws, trim_cow},
};
use regex::{Captures, Regex};
use std::{borrow::Cow, sync::LazyLock};

static WRAPPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\(+(.+?)\)+$").expect("valid regex"));
static BRACKETED_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(+.+?\)+").expect("valid regex"));

pub struct Debracketize;

#[inline(always)]
fn is_wrapped(trimmed: &str) -> bool {
    trimmed.starts_with('(') && trimmed.ends_with(')')
}

impl Stage for Debracketize {
    fn name(&self) -> &'static str {
        "debracketize"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        if has_edge_whitespace(text) {
            return true;
        }
        if is_wrapped(text) {
            return WRAPPED.is_match(text);
        }
        (memchr::memchr(b'(', text.as_bytes()).is_some() && BRACKETED_SPAN.is_match(text))
            || has_run_of(text, b' ')
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let text = trim_cow(text);

        if is_wrapped(&text) {
            let unwrapped = match WRAPPED.replace_all(&text, |caps: &Captures<'_>| {
                trim_ascii_ws(&caps[1]).to_owned()
            }) {
                Cow::Borrowed(_) => None,
                Cow::Owned(s) => Some(s),
            };
            return match unwrapped {
                Some(s) => Cow::Owned(s),
                None => text,
            };
        }

        let stripped = match BRACKETED_SPAN.replace_all(&text, "") {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        let text = match stripped {
            Some(s) => trim_cow(Cow::Owned(s)),
            None => text,
        };
        squeeze(text, b' ')
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Debracketize {
    fn samples() -> &'static [&'static str] {
        &["  My (big) shoes", "(( wrapped ))", "no brackets", "open ( only", "()", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("  My (big) shoes", "My shoes"),
            ("(( wrapped ))", "wrapped"),
            ("I (really) smell", "I smell"),
            ("a ((b)) c (d) e", "a c e"),
            ("the shoe%^s (crap)", "the shoe%^s"),
            ("x (y", "x (y"),
        ]
    }
}
