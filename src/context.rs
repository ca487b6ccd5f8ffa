// src/context.rs
// Runtime configuration handed to every stage. Holds either a shared snapshot
// or a borrowed map, so building one never copies replacement entries.

use crate::replacements::{ReplacementMap, ReplacementTable};
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Replacements<'r> {
    Shared(Arc<ReplacementMap>),
    Borrowed(&'r ReplacementMap),
}

/// Runtime context passed to every normalization stage.
///
/// Contains the effective pre-ASCII replacement map. A context built with
/// [`Context::default`] snapshots the process-wide [`ReplacementTable`] at
/// construction time; later table changes do not affect it.
#[derive(Debug, Clone)]
pub struct Context<'r> {
    replacements: Replacements<'r>,
}

impl Default for Context<'_> {
    #[inline]
    fn default() -> Self {
        Self::with_shared(ReplacementTable::get())
    }
}

impl Context<'static> {
    /// Use `map` instead of the process-wide table. An empty map disables
    /// substitutions entirely.
    #[inline]
    pub fn with_replacements(map: ReplacementMap) -> Self {
        Self::with_shared(Arc::new(map))
    }
}

impl<'r> Context<'r> {
    #[inline]
    pub fn with_shared(replacements: Arc<ReplacementMap>) -> Self {
        Self {
            replacements: Replacements::Shared(replacements),
        }
    }

    /// Borrow `map` for the lifetime of the context.
    #[inline]
    pub const fn borrowed(map: &'r ReplacementMap) -> Self {
        Self {
            replacements: Replacements::Borrowed(map),
        }
    }

    /// Explicit map when given, process-wide table otherwise.
    #[inline]
    pub fn resolve(replacements: Option<&'r ReplacementMap>) -> Self {
        match replacements {
            Some(map) => Self::borrowed(map),
            None => Self::default(),
        }
    }

    #[inline]
    pub fn replacements(&self) -> &ReplacementMap {
        match &self.replacements {
            Replacements::Shared(map) => map,
            Replacements::Borrowed(map) => map,
        }
    }
}
