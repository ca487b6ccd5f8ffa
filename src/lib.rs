//! Lossy, never-failing normalization of human-written names into ASCII slugs.
//!
//! ```
//! assert_eq!(slugy::normalize("Skt. Tropez").as_deref(), Some("sankt-tropez"));
//! ```
pub mod context;
pub mod ext;
pub mod process;
pub mod profile;
pub mod replacements;
pub mod slugger;
pub mod stage;
pub mod unicode;

pub use context::Context;
pub use ext::SlugExt;
pub use replacements::{DEFAULT_REPLACEMENTS, ReplacementMap, ReplacementTable};
pub use slugger::{
    SlugError, Slugger, SluggerBuilder, asciify, asciify_with, dashify, deabbreviate,
    debracketize, decommafy, downcase, flattenize, flattenize_with, normalize, plainify,
};
pub use stage::ascii_decompose::AsciiDecompose;
pub use stage::dashify::Dashify;
pub use stage::deabbreviate::{AbbreviationTable, Deabbreviate};
pub use stage::debracketize::Debracketize;
pub use stage::decommafy::Decommafy;
pub use stage::keep_word_chars::KeepWordChars;
pub use stage::lower_case::LowerCase;
pub use stage::plainify::Plainify;
pub use stage::pre_replace::PreReplace;
