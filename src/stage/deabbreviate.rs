//! stage/deabbreviate.rs – **Word-boundary abbreviation expansion**
//! * `St. Gallen`, `St Gallen`, `Skt-Gallen`, `saint gallen` → `sankt Gallen`
//! * Case-insensitive match, fixed-case replacement
//! * A form only expands when it starts a word and is followed by at least one
//!   separator (dot, hyphen, ASCII whitespace or a stray backspace `\x08`);
//!   a trailing bare `st` stays
use crate::{context::Context, slugger::SlugError, stage::Stage};
use regex::{NoExpand, Regex};
use std::{
    borrow::Cow,
    sync::{Arc, LazyLock},
};

/// Surface forms that all mean `sankt`.
pub const SANKT_FORMS: &[&str] = &["st", "skt", "saint", "snt"];

/// Groups of surface forms, each group mapping to one canonical expansion.
///
/// Ships with a single `sankt` entry but is open for more:
///
/// ```
/// use slugy::stage::deabbreviate::AbbreviationTable;
///
/// let stage = AbbreviationTable::default()
///     .entry(["mt", "mnt"], "mount")
///     .compile()
///     .unwrap();
/// # let _ = stage;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationTable {
    entries: Vec<(Vec<String>, String)>,
}

impl Default for AbbreviationTable {
    fn default() -> Self {
        Self::new().entry(SANKT_FORMS.iter().copied(), "sankt")
    }
}

impl AbbreviationTable {
    /// A table without entries; its compiled stage never changes text.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entry<I, F>(mut self, forms: I, expansion: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.entries
            .push((forms.into_iter().map(Into::into).collect(), expansion.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[String], &str)> {
        self.entries.iter().map(|(f, e)| (f.as_slice(), e.as_str()))
    }

    /// Build the matching stage. Fails on an empty form or expansion.
    pub fn compile(&self) -> Result<Deabbreviate, SlugError> {
        let mut rules = Vec::new();
        for (forms, expansion) in &self.entries {
            if expansion.is_empty() {
                return Err(SlugError::InvalidArgument(
                    "abbreviation expansion must not be empty".into(),
                ));
            }
            let replacement = format!("{expansion} ");
            for form in forms {
                if form.is_empty() {
                    return Err(SlugError::InvalidArgument(format!(
                        "empty abbreviation form for `{expansion}`"
                    )));
                }
                let pattern = format!(r"(?i)\b{}[-.\t\n\x0B\x0C\r \x08]+", regex::escape(form));
                let pattern = Regex::new(&pattern)
                    .map_err(|e| SlugError::InvalidArgument(e.to_string()))?;
                rules.push(Rule {
                    pattern,
                    replacement: replacement.clone(),
                });
            }
        }
        Ok(Deabbreviate {
            rules: rules.into(),
        })
    }
}

#[derive(Debug)]
struct Rule {
    pattern: Regex,
    replacement: String,
}

static DEFAULT_RULES: LazyLock<Arc<[Rule]>> = LazyLock::new(|| {
    AbbreviationTable::default()
        .compile()
        .expect("built-in abbreviation table is valid – this is a bug")
        .rules
});

/// Public stage. Cheap to clone: compiled rules are shared.
#[derive(Debug, Clone)]
pub struct Deabbreviate {
    rules: Arc<[Rule]>,
}

impl Default for Deabbreviate {
    fn default() -> Self {
        Self {
            rules: Arc::clone(&DEFAULT_RULES),
        }
    }
}

impl Stage for Deabbreviate {
    fn name(&self) -> &'static str {
        "deabbreviate"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        self.rules.iter().any(|r| r.pattern.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let mut text = text;
        for rule in self.rules.iter() {
            let replaced = match rule
                .pattern
                .replace_all(&text, NoExpand(&rule.replacement))
            {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            text = Cow::Owned(replaced);
        }
        text
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Deabbreviate {
    fn samples() -> &'static [&'static str] {
        &["St. Gallen", "main st", "stone street", "east st. louis", "", "TEST"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("saint-tropez", "sankt tropez"),
            ("St. tropez", "sankt tropez"),
            ("Skt.  Tropez", "sankt Tropez"),
            ("snt-tropez", "sankt tropez"),
            ("sankt-tropez", "sankt-tropez"),
            ("st. st. x", "sankt sankt x"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Deabbreviate::default());
    }

    #[test]
    fn only_whole_word_prefixes() {
        let ctx = Context::default();
        let stage = Deabbreviate::default();
        for untouched in ["best tropez", "stone", "first-class", "main st", "saints row"] {
            assert!(!stage.needs_apply(untouched, &ctx), "{untouched}");
            assert_eq!(stage.apply(Cow::Borrowed(untouched), &ctx), untouched);
        }
    }

    #[test]
    fn backspace_counts_as_separator() {
        let ctx = Context::default();
        let stage = Deabbreviate::default();
        assert!(stage.needs_apply("st\u{8}x", &ctx));
        assert_eq!(stage.apply(Cow::Borrowed("st\u{8}x"), &ctx), "sankt x");
        assert_eq!(stage.apply(Cow::Borrowed("Skt.\u{8} Gallen"), &ctx), "sankt Gallen");
    }

    #[test]
    fn table_lists_its_entries() {
        let table = AbbreviationTable::default().entry(["mt"], "mount");
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, SANKT_FORMS);
        assert_eq!(entries[0].1, "sankt");
        assert_eq!(entries[1], (&["mt".to_string()][..], "mount"));
        assert_eq!(AbbreviationTable::new().iter().count(), 0);
    }

    #[test]
    fn custom_entries_extend_the_table() {
        let ctx = Context::default();
        let stage = AbbreviationTable::default()
            .entry(["mt", "mnt"], "mount")
            .compile()
            .unwrap();
        assert_eq!(
            stage.apply(Cow::Borrowed("Mt. Everest near St-Moritz"), &ctx),
            "mount Everest near sankt Moritz"
        );
    }

    #[test]
    fn replacement_text_is_literal() {
        let ctx = Context::default();
        let stage = AbbreviationTable::new().entry(["x"], "$1").compile().unwrap();
        assert_eq!(stage.apply(Cow::Borrowed("x y"), &ctx), "$1 y");
    }

    #[test]
    fn invalid_tables_are_rejected() {
        assert!(matches!(
            AbbreviationTable::new().entry([""], "x").compile(),
            Err(SlugError::InvalidArgument(_))
        ));
        assert!(matches!(
            AbbreviationTable::new().entry(["x"], "").compile(),
            Err(SlugError::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_table_never_applies() {
        let ctx = Context::default();
        let stage = AbbreviationTable::new().compile().unwrap();
        assert!(!stage.needs_apply("st. gallen", &ctx));
    }
}
