//! Method-call sugar over `str`.
//!
//! ```
//! use slugy::SlugExt;
//!
//! assert_eq!("Öxleschloß".asciify(), "Oexleschloss");
//! assert_eq!("  My (big) shoes".debracketize().dashify(), "My-shoes");
//! ```

use crate::{replacements::ReplacementMap, slugger};
use std::borrow::Cow;

pub trait SlugExt {
    fn asciify(&self) -> Cow<'_, str>;
    fn asciify_with(&self, replacements: &ReplacementMap) -> Cow<'_, str>;
    fn flattenize(&self) -> Cow<'_, str>;
    fn flattenize_with(&self, replacements: &ReplacementMap) -> Cow<'_, str>;
    fn downcase(&self) -> Cow<'_, str>;
    fn deabbreviate(&self) -> Cow<'_, str>;
    fn decommafy(&self) -> Cow<'_, str>;
    fn debracketize(&self) -> Cow<'_, str>;
    fn plainify(&self) -> Cow<'_, str>;
    fn dashify(&self) -> Cow<'_, str>;
    fn normalize(&self) -> Option<Cow<'_, str>>;
}

impl SlugExt for str {
    #[inline]
    fn asciify(&self) -> Cow<'_, str> {
        slugger::asciify(self)
    }

    #[inline]
    fn asciify_with(&self, replacements: &ReplacementMap) -> Cow<'_, str> {
        slugger::asciify_with(self, replacements)
    }

    #[inline]
    fn flattenize(&self) -> Cow<'_, str> {
        slugger::flattenize(self)
    }

    #[inline]
    fn flattenize_with(&self, replacements: &ReplacementMap) -> Cow<'_, str> {
        slugger::flattenize_with(self, replacements)
    }

    #[inline]
    fn downcase(&self) -> Cow<'_, str> {
        slugger::downcase(self)
    }

    #[inline]
    fn deabbreviate(&self) -> Cow<'_, str> {
        slugger::deabbreviate(self)
    }

    #[inline]
    fn decommafy(&self) -> Cow<'_, str> {
        slugger::decommafy(self)
    }

    #[inline]
    fn debracketize(&self) -> Cow<'_, str> {
        slugger::debracketize(self)
    }

    #[inline]
    fn plainify(&self) -> Cow<'_, str> {
        slugger::plainify(self)
    }

    #[inline]
    fn dashify(&self) -> Cow<'_, str> {
        slugger::dashify(self)
    }

    #[inline]
    fn normalize(&self) -> Option<Cow<'_, str>> {
        slugger::normalize(self)
    }
}
