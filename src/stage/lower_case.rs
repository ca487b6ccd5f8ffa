use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Unicode-aware lowercasing (full `char::to_lowercase` mappings, not
/// byte-wise ASCII). Zero-copy when nothing changes.
pub struct LowerCase;

#[inline(always)]
fn lowers(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(lowers)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(text.to_lowercase())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for LowerCase {
    fn samples() -> &'static [&'static str] {
        &["HELLO World", "ÀÉÎÖÜ", "ǅ", "Σ ΣΑΣ", "straße", "123 !@#", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("ShOe%^s", "shoe%^s"), ("ÄÖÜ", "äöü"), ("MÄẞIG", "mäßig")]
    }
}
