//! stage/pre_replace.rs – **Literal pre-ASCII substitutions**
//! * Runs the context's [`ReplacementMap`](crate::replacements::ReplacementMap) in order
//! * `Öxleschloß` → `Oexleschloss` with the German defaults
//! * Zero-copy when no key occurs in the text
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Public stage – zero-sized, reads its rules from the [`Context`].
pub struct PreReplace;

impl Stage for PreReplace {
    fn name(&self) -> &'static str {
        "pre_replace"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.replacements().matches(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        ctx.replacements().apply(text)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for PreReplace {
    fn samples() -> &'static [&'static str] {
        &["Öxleschloß", "Straße", "ÄÖÜ äöü", "déjà-vu", "Hello", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Öxleschloß", "Oexleschloss"),
            ("ö-Ö-ü-Ü-ä-Ä-ß", "oe-Oe-ue-Ue-ae-Ae-ss"),
            ("Café", "Café"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_stage_contract, replacements::ReplacementMap};

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(PreReplace);
    }

    #[test]
    fn empty_map_is_a_no_op() {
        let ctx = Context::with_replacements(ReplacementMap::new());
        assert!(!PreReplace.needs_apply("Öxleschloß", &ctx));
        assert_eq!(PreReplace.apply(Cow::Borrowed("Öxleschloß"), &ctx), "Öxleschloß");
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let ctx = Context::with_replacements(ReplacementMap::from([("a", "b"), ("b", "c")]));
        assert_eq!(PreReplace.apply(Cow::Borrowed("ab"), &ctx), "cc");
    }

    #[test]
    fn multi_codepoint_keys() {
        let ctx = Context::with_replacements(ReplacementMap::from([("e\u{0301}", "E")]));
        assert_eq!(PreReplace.apply(Cow::Borrowed("cafe\u{0301}"), &ctx), "cafE");
    }
}
