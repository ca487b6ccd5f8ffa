use crate::{
    context::Context,
    profile::preset,
    replacements::ReplacementMap,
    stage::{
        Stage,
        dashify::Dashify,
        deabbreviate::{AbbreviationTable, Deabbreviate},
        debracketize::Debracketize,
        decommafy::Decommafy,
        lower_case::LowerCase,
        plainify::Plainify,
    },
    unicode::is_blank,
};
use std::{borrow::Cow, sync::Arc};

static NO_REPLACEMENTS: ReplacementMap = ReplacementMap::new();
use thiserror::Error;

/// The only failure in the crate: a malformed configuration value.
/// Text processing itself never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A configured slug pipeline.
///
/// Without explicit replacements every call reads a fresh snapshot of the
/// process-wide [`ReplacementTable`](crate::ReplacementTable); with them the
/// slugger is fully self-contained and unaffected by global changes.
#[derive(Debug, Clone, Default)]
pub struct Slugger {
    replacements: Option<Arc<ReplacementMap>>,
    abbreviations: Deabbreviate,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SluggerBuilder {
        SluggerBuilder::default()
    }

    fn context(&self) -> Context<'static> {
        match &self.replacements {
            Some(map) => Context::with_shared(Arc::clone(map)),
            None => Context::default(),
        }
    }

    /// See [`preset::asciify`].
    pub fn asciify<'a>(&self, text: &'a str) -> Cow<'a, str> {
        preset::asciify().run(Cow::Borrowed(text), &self.context())
    }

    /// See [`preset::flattenize`].
    pub fn flattenize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        preset::flattenize().run(Cow::Borrowed(text), &self.context())
    }

    pub fn deabbreviate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        run_stage(&self.abbreviations, text)
    }

    /// Full slug. Blank input (empty or whitespace only) yields `None`; any
    /// other input yields `Some`, possibly empty if nothing survives.
    pub fn normalize<'a>(&self, text: &'a str) -> Option<Cow<'a, str>> {
        if is_blank(text) {
            return None;
        }
        let profile = preset::slug_with(self.abbreviations.clone());
        Some(profile.run(Cow::Borrowed(text), &self.context()))
    }
}

#[derive(Default)]
pub struct SluggerBuilder {
    replacements: Option<ReplacementMap>,
    abbreviations: Option<AbbreviationTable>,
}

impl SluggerBuilder {
    /// Pin the replacement map. An empty map disables substitutions.
    pub fn replacements(mut self, map: ReplacementMap) -> Self {
        self.replacements = Some(map);
        self
    }

    pub fn abbreviations(mut self, table: AbbreviationTable) -> Self {
        self.abbreviations = Some(table);
        self
    }

    pub fn build(self) -> Result<Slugger, SlugError> {
        let abbreviations = match self.abbreviations {
            Some(table) => table.compile()?,
            None => Deabbreviate::default(),
        };
        Ok(Slugger {
            replacements: self.replacements.map(Arc::new),
            abbreviations,
        })
    }
}

#[inline]
fn run_stage<'a, S: Stage>(stage: &S, text: &'a str) -> Cow<'a, str> {
    let ctx = Context::borrowed(&NO_REPLACEMENTS);
    if stage.needs_apply(text, &ctx) {
        stage.apply(Cow::Borrowed(text), &ctx)
    } else {
        Cow::Borrowed(text)
    }
}

// ── Free functions ───────────────────────────────────────────────────────────

/// ASCII approximation using the process-wide replacement table.
///
/// ```
/// assert_eq!(slugy::asciify("ÌËǟ"), "IEa");
/// ```
pub fn asciify(text: &str) -> Cow<'_, str> {
    Slugger::new().asciify(text)
}

/// ASCII approximation using `replacements` instead of the global table.
/// The map is borrowed for the call, never copied.
pub fn asciify_with<'a>(text: &'a str, replacements: &ReplacementMap) -> Cow<'a, str> {
    preset::asciify().run(Cow::Borrowed(text), &Context::borrowed(replacements))
}

pub fn flattenize(text: &str) -> Cow<'_, str> {
    Slugger::new().flattenize(text)
}

pub fn flattenize_with<'a>(text: &'a str, replacements: &ReplacementMap) -> Cow<'a, str> {
    preset::flattenize().run(Cow::Borrowed(text), &Context::borrowed(replacements))
}

/// Unicode-aware lowercasing.
pub fn downcase(text: &str) -> Cow<'_, str> {
    run_stage(&LowerCase, text)
}

pub fn deabbreviate(text: &str) -> Cow<'_, str> {
    run_stage(&Deabbreviate::default(), text)
}

/// ```
/// assert_eq!(slugy::decommafy("Beatles, The"), "The Beatles");
/// ```
pub fn decommafy(text: &str) -> Cow<'_, str> {
    run_stage(&Decommafy, text)
}

pub fn debracketize(text: &str) -> Cow<'_, str> {
    run_stage(&Debracketize, text)
}

pub fn plainify(text: &str) -> Cow<'_, str> {
    run_stage(&Plainify, text)
}

pub fn dashify(text: &str) -> Cow<'_, str> {
    run_stage(&Dashify, text)
}

/// Full slug using the global table; `None` for blank input.
///
/// ```
/// assert_eq!(slugy::normalize("ShÖ%^s (crap), The").as_deref(), Some("the-shoes"));
/// assert_eq!(slugy::normalize("   "), None);
/// ```
pub fn normalize(text: &str) -> Option<Cow<'_, str>> {
    Slugger::new().normalize(text)
}
