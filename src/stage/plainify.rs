use crate::{
    context::Context,
    stage::Stage,
    unicode::{has_edge_whitespace, has_run_of, squeeze, trim_cow},
};
use std::borrow::Cow;

/// Keeps only ASCII letters, digits, space, hyphen and underscore, then trims
/// and collapses runs of spaces.
///
/// `"3 sheets! & They're to the wind!"` → `"3 sheets Theyre to the wind"`
pub struct Plainify;

#[inline(always)]
fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_')
}

impl Stage for Plainify {
    fn name(&self) -> &'static str {
        "plainify"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.chars().all(is_plain) || has_edge_whitespace(text) || has_run_of(text, b' ')
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let text = if text.chars().all(is_plain) {
            text
        } else {
            Cow::Owned(text.chars().filter(|&c| is_plain(c)).collect())
        };
        squeeze(trim_cow(text), b' ')
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Plainify {
    fn samples() -> &'static [&'static str] {
        &["I am! I (am!) ", "snake_case-and-kebab", "tab\there", " x ", "déjà vu", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("3 sheets! & They're to the wind!", "3 sheets Theyre to the wind"),
            ("I am! I (am!) ", "I am I am"),
            ("a\tb\nc", "abc"),
            ("!! wow !!", "wow"),
        ]
    }
}
