//! stage/decommafy.rs – **Comma inversion**
//! * `Beatles, The` → `The Beatles`
//! * Greedy: with several `", "` on one line, the split is at the *last* one
//! * Always trims and collapses runs of spaces
use crate::{
    context::Context,
    stage::Stage,
    unicode::{has_edge_whitespace, has_run_of, squeeze, trim_cow},
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static COMMA_INVERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+), (.+)").expect("valid regex"));

pub struct Decommafy;

impl Stage for Decommafy {
    fn name(&self) -> &'static str {
        "decommafy"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        has_edge_whitespace(text)
            || has_run_of(text, b' ')
            || (memchr::memmem::find(text.as_bytes(), b", ").is_some()
                && COMMA_INVERSION.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let swapped = match COMMA_INVERSION.replace_all(&text, "${2} ${1}") {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        let text = match swapped {
            Some(s) => Cow::Owned(s),
            None => text,
        };
        squeeze(trim_cow(text), b' ')
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Decommafy {
    fn samples() -> &'static [&'static str] {
        &["Beatles, The", "  Rolling   Stones ", "a,b", "one, two, three", "x, ", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Beatles, The", "The Beatles"),
            ("one, two, three", "three one, two"),
            ("  Who,  The  ", "The Who"),
            ("no comma here ", "no comma here"),
            ("a,b", "a,b"),
        ]
    }

    fn skip_idempotency_test() -> bool {
        true
    }
}
