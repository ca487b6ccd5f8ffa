use crate::{context::Context, stage::Stage, unicode::is_ascii_whitespace_char};
use std::borrow::Cow;

/// Drops everything except `a-z`, `0-9` and ASCII whitespace.
///
/// Uppercase letters are dropped too, so this is meant to run after
/// [`LowerCase`](crate::stage::lower_case::LowerCase). Whitespace is kept
/// verbatim: no trimming, no collapsing.
pub struct KeepWordChars;

#[inline(always)]
fn keep(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || is_ascii_whitespace_char(c)
}

impl Stage for KeepWordChars {
    fn name(&self) -> &'static str {
        "keep_word_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.chars().all(keep)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(text.chars().filter(|&c| keep(c)).collect())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for KeepWordChars {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (",c.-al{l +9}-`1#{1", "call 911"),
            ("they're\tout!", "theyre\tout"),
            ("ABC abc", " abc"),
        ]
    }
}
