use crate::{
    context::Context,
    stage::Stage,
    unicode::{has_edge_whitespace, has_run_of, squeeze, trim_cow},
};
use std::borrow::Cow;

/// Trims, turns space, `/`, `_` and `~` into `-`, then collapses runs of `-`.
///
/// `"The_long__way_home/blah!"` → `"The-long-way-home-blah!"`. Other
/// characters, including inner tabs and punctuation, are left as they are.
pub struct Dashify;

#[inline(always)]
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'/' | b'_' | b'~')
}

impl Stage for Dashify {
    fn name(&self) -> &'static str {
        "dashify"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        has_edge_whitespace(text) || text.bytes().any(is_separator) || has_run_of(text, b'-')
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let text = trim_cow(text);
        let text = if text.bytes().any(is_separator) {
            Cow::Owned(
                text.chars()
                    .map(|c| if c.is_ascii() && is_separator(c as u8) { '-' } else { c })
                    .collect(),
            )
        } else {
            text
        };
        squeeze(text, b'-')
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Dashify {
    fn samples() -> &'static [&'static str] {
        &["one two/three~~four_five six ", "a--b", "-lead and trail-", "x\ty", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("one two/three~~four_five six ", "one-two-three-four-five-six"),
            ("The_long__way_home/blah!", "The-long-way-home-blah!"),
            (" sankt tropez", "sankt-tropez"),
            ("a - b", "a-b"),
        ]
    }
}
