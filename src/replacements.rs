//! Pre-ASCII replacement rules.
//!
//! A [`ReplacementMap`] holds literal `from → to` substitutions that run
//! *before* canonical decomposition. They exist for characters whose NFD form
//! is a poor ASCII approximation (`ä` decomposes to `a`, but German readers
//! expect `ae`) and for characters with no decomposition at all (`ß`).
//!
//! The process-wide [`ReplacementTable`] is what every call without an
//! explicit map reads. It is a single `RwLock` around an `Arc` snapshot:
//! readers clone the `Arc`, writers swap it.

use crate::slugger::SlugError;
use std::{
    borrow::Cow,
    str::FromStr,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};
use tracing::debug;

/// German defaults, applied in this order.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("ß", "ss"),
    ("ä", "ae"),
    ("Ä", "Ae"),
    ("ö", "oe"),
    ("Ö", "Oe"),
    ("Ü", "Ue"),
    ("ü", "ue"),
];

/// Ordered literal substitutions.
///
/// Entries are applied in insertion order and each one sees the output of the
/// previous ones, so `{"Öxle" => "Hasen", "schlo" => "Scharte", "ß" => "n"}`
/// turns `Öxleschloß` into `HasenScharten`. Re-inserting an existing key
/// overwrites its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: Vec<(String, String)>,
}

impl ReplacementMap {
    /// An empty map: no substitutions at all, decomposition still runs.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in German map.
    pub fn german() -> Self {
        DEFAULT_REPLACEMENTS.iter().copied().collect()
    }

    /// Validating constructor. Empty keys are rejected because a literal
    /// empty pattern would match between every character.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, SlugError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (from, to) in pairs {
            let from = from.into();
            if from.is_empty() {
                return Err(SlugError::InvalidArgument(
                    "a mapping is required: replacement keys must not be empty".into(),
                ));
            }
            map.insert(from, to);
        }
        Ok(map)
    }

    /// Insert or overwrite. Returns the previous value for `from`, if any.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) -> Option<String> {
        let from = from.into();
        let to = to.into();
        match self.entries.iter_mut().find(|(k, _)| *k == from) {
            Some((_, v)) => Some(std::mem::replace(v, to)),
            None => {
                self.entries.push((from, to));
                None
            }
        }
    }

    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == from)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, from: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == from)?;
        Some(self.entries.remove(idx).1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when at least one (non-empty) key occurs in `text`.
    ///
    /// Later keys can only appear after an earlier key was replaced, so this
    /// is exactly the condition under which [`apply`](Self::apply) does work.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.iter().any(|(from, _)| !from.is_empty() && text.contains(from))
    }

    /// Replace every literal occurrence of every key, in order.
    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut text = text;
        for (from, to) in self.iter() {
            if from.is_empty() || !text.contains(from) {
                continue;
            }
            text = Cow::Owned(text.replace(from, to));
        }
        text
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (from, to) in iter {
            map.insert(from, to);
        }
        map
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ReplacementMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Parses one `from=to` pair per line. Blank lines and `#` comments are
/// skipped. Only the first `=` splits: keys cannot contain `=`, values can
/// (`a==b` maps `a` to `=b`).
impl FromStr for ReplacementMap {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for (lineno, line) in s.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let (from, to) = line.split_once('=').ok_or_else(|| {
                SlugError::InvalidArgument(format!(
                    "a mapping is required: line {} has no `=`",
                    lineno + 1
                ))
            })?;
            pairs.push((from, to));
        }
        Self::try_from_pairs(pairs)
    }
}

static ACTIVE: LazyLock<RwLock<Arc<ReplacementMap>>> =
    LazyLock::new(|| RwLock::new(Arc::new(ReplacementMap::german())));

/// The process-wide replacement map.
///
/// Every `asciify`/`flattenize`/`normalize` call that is not given an explicit
/// map reads a snapshot of this table. Setting `None` restores the German
/// defaults; it never means "no replacements" (use an empty
/// [`ReplacementMap`] for that).
pub struct ReplacementTable;

impl ReplacementTable {
    /// Snapshot of the active map.
    pub fn get() -> Arc<ReplacementMap> {
        ACTIVE
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the active map wholesale, or reset it with `None`.
    pub fn set(map: Option<ReplacementMap>) -> Arc<ReplacementMap> {
        let next = Arc::new(match map {
            Some(map) => {
                debug!(entries = map.len(), "replacement table replaced");
                map
            }
            None => {
                debug!("replacement table reset to defaults");
                ReplacementMap::german()
            }
        });
        *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&next);
        next
    }

    #[inline]
    pub fn reset() -> Arc<ReplacementMap> {
        Self::set(None)
    }

    /// Parse a textual map (see [`ReplacementMap::from_str`]) and install it.
    /// The active map is left untouched on error.
    pub fn set_from_str(text: &str) -> Result<Arc<ReplacementMap>, SlugError> {
        let map = text.parse()?;
        Ok(Self::set(Some(map)))
    }

    /// Edit a copy of the active map and install it once `f` returns.
    ///
    /// The write lock is held throughout, so concurrent updates do not lose
    /// each other's edits. If `f` panics, the table keeps its previous map.
    /// Snapshots already handed out keep their old contents either way.
    pub fn update<R>(f: impl FnOnce(&mut ReplacementMap) -> R) -> R {
        let mut guard = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = ReplacementMap::clone(&guard);
        let out = f(&mut next);
        debug!(entries = next.len(), "replacement table updated");
        *guard = Arc::new(next);
        out
    }
}

/// Serializes tests that read or write the process-wide table.
#[cfg(test)]
pub(crate) static GLOBAL_TABLE_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn lock_global_table() -> std::sync::MutexGuard<'static, ()> {
    GLOBAL_TABLE_GUARD
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_defaults_in_order() {
        let map = ReplacementMap::german();
        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["ß", "ä", "Ä", "ö", "Ö", "Ü", "ü"]);
        assert_eq!(map.get("ß"), Some("ss"));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut map = ReplacementMap::from([("a", "1"), ("b", "2")]);
        assert_eq!(map.insert("a", "3"), Some("1".to_string()));
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, [("a", "3"), ("b", "2")]);
        assert_eq!(map.remove("a"), Some("3".to_string()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn apply_chains_in_order() {
        let map = ReplacementMap::from([("Öxle", "Hasen"), ("schlo", "Scharte"), ("ß", "n")]);
        assert_eq!(map.apply(Cow::Borrowed("Öxleschloß")), "HasenScharten");
    }

    #[test]
    fn apply_is_zero_copy_without_hits() {
        let map = ReplacementMap::german();
        let input = "plain ascii";
        let out = map.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        assert!(!map.matches(input));
    }

    #[test]
    fn empty_keys_are_inert_and_rejected_by_validation() {
        let map = ReplacementMap::from([("", "x")]);
        assert_eq!(map.apply(Cow::Borrowed("abc")), "abc");
        assert!(!map.matches("abc"));
        assert!(matches!(
            ReplacementMap::try_from_pairs([("", "x")]),
            Err(SlugError::InvalidArgument(_))
        ));
    }

    #[test]
    fn parse_textual_map() {
        let map: ReplacementMap = "# comment\nß=ss\n\nó=bonjour\n{=l\na==b".parse().unwrap();
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(
            pairs,
            [("ß", "ss"), ("ó", "bonjour"), ("{", "l"), ("a", "=b")]
        );
    }

    #[test]
    fn parse_rejects_non_mappings() {
        let err = "ß=ss\nnot a pair".parse::<ReplacementMap>().unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!("=x".parse::<ReplacementMap>().is_err());
    }

    #[test]
    fn global_table_set_update_reset() {
        let _guard = lock_global_table();
        ReplacementTable::set(Some(ReplacementMap::from([("ó", "bonjour")])));
        assert_eq!(*ReplacementTable::get(), ReplacementMap::from([("ó", "bonjour")]));

        let snapshot = ReplacementTable::get();
        ReplacementTable::update(|m| m.insert("\u{02A9}", "fn"));
        assert_eq!(ReplacementTable::get().get("\u{02A9}"), Some("fn"));
        assert_eq!(snapshot.len(), 1, "snapshots are not mutated");

        assert!(ReplacementTable::set_from_str("broken").is_err());
        assert_eq!(ReplacementTable::get().len(), 2, "failed parse keeps the table");

        ReplacementTable::set(None);
        assert_eq!(*ReplacementTable::get(), ReplacementMap::german());
        ReplacementTable::set(Some(ReplacementMap::new()));
        assert!(ReplacementTable::get().is_empty());
        ReplacementTable::reset();
        assert_eq!(*ReplacementTable::get(), ReplacementMap::german());
    }

    #[test]
    fn panicking_update_leaves_table_untouched() {
        let _guard = lock_global_table();
        ReplacementTable::set(Some(ReplacementMap::from([("ó", "bonjour")])));
        let before = ReplacementTable::get();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            ReplacementTable::update(|m| {
                m.insert("ó", "half-done");
                m.insert("x", "y");
                panic!("edit aborted");
            })
        }));
        assert!(result.is_err());

        // The lock may be poisoned now; readers and writers recover.
        assert_eq!(*ReplacementTable::get(), *before);
        assert_eq!(ReplacementTable::get().get("x"), None);
        ReplacementTable::update(|m| m.insert("x", "z"));
        assert_eq!(ReplacementTable::get().get("x"), Some("z"));
        ReplacementTable::reset();
    }
}
