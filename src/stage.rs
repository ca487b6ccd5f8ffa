//! Core normalization stage abstraction.
//!
//! Every step of the slug pipeline is a [`Stage`]: a named, stateless-per-call
//! transformation over `Cow<str>`. Stages are **total**: unmappable input is
//! dropped, never reported, so `apply` has no error channel.
//!
//! `needs_apply` is a cheap pre-check. When it returns `false` the pipeline
//! skips the stage and the borrowed input flows through untouched, which is
//! what keeps already-canonical text zero-copy.

pub mod ascii_decompose;
pub mod dashify;
pub mod deabbreviate;
pub mod debracketize;
pub mod decommafy;
pub mod keep_word_chars;
pub mod lower_case;
pub mod plainify;
pub mod pre_replace;

use crate::context::Context;
use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used for tracing.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Returns the input unchanged (and
    /// borrowed, if it was borrowed) when there is nothing to do.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}
