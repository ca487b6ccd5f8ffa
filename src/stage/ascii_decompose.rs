//! src/stage/ascii_decompose.rs
//!
//! Canonical decomposition followed by an ASCII filter.

use crate::{context::Context, stage::Stage};
use icu_normalizer::{DecomposingNormalizer, DecomposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};

static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfd);

/// Reduces text to its closest pure-ASCII approximation.
///
/// # Normalization Form
///
/// Uses **NFD (Canonical Decomposition)** and then keeps only codepoints that
/// encode to a single UTF-8 byte:
/// - Precomposed letters keep their base: `é` → `e`, `ǟ` → `a`
/// - Combining marks are dropped
/// - Characters without a canonical ASCII base are dropped: `ß`, `ʩ`, `´`,
///   Cyrillic, CJK
///
/// Compatibility forms are *not* expanded (`ﬁ` and `½` are dropped, not
/// rewritten), which keeps the transliteration conservative. Nothing here can
/// fail; anything unmappable simply disappears.
pub struct AsciiDecompose;

impl Stage for AsciiDecompose {
    fn name(&self) -> &'static str {
        "ascii_decompose"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.is_ascii()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }
        let decomposed = ICU4X_NFD.normalize(&text);
        Cow::Owned(decomposed.chars().filter(char::is_ascii).collect())
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for AsciiDecompose {
    fn samples() -> &'static [&'static str] {
        &["café", "naïve", "e\u{0301}", "ﬁle", "Ǟǟ", "Straße", "русский", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("ÌËǟ", "IEa"),
            ("Öxleschloß", "Oxleschlo"),
            ("Łódź", "odz"),
            ("sanKt-troPéz", "sanKt-troPez"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(AsciiDecompose);
    }

    #[test]
    fn output_is_always_ascii() {
        let ctx = Context::default();
        for input in ["日本語 テキスト", "Ελληνικά", "ḩ ṩ ǖ", "👍🏽 ok", "\u{0301}\u{0308}"] {
            let out = AsciiDecompose.apply(Cow::Borrowed(input), &ctx);
            assert!(out.is_ascii(), "{input:?} -> {out:?}");
        }
    }

    #[test]
    fn punctuation_and_spacing_survive() {
        let ctx = Context::default();
        let out = AsciiDecompose.apply(Cow::Borrowed(",ċ.-Ąl{l +9}-´`1#{1"), &ctx);
        assert_eq!(out, ",c.-Al{l +9}-`1#{1");
    }

    #[test]
    fn ascii_is_zero_copy() {
        let ctx = Context::default();
        let input = "already ascii";
        let out = AsciiDecompose.apply(Cow::Borrowed(input), &ctx);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
