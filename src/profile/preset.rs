use crate::{
    AsciiDecompose, Dashify, Debracketize, Decommafy, KeepWordChars, LowerCase, Plainify,
    PreReplace, process::Process, profile::Profile, stage::deabbreviate::Deabbreviate,
};

/// Closest pure-ASCII approximation: pre-replacements, then NFD with
/// everything non-ASCII dropped. Punctuation and case are preserved.
pub fn asciify() -> Profile<impl Process> {
    Profile::builder("asciify")
        .add_stage(PreReplace)
        .add_stage(AsciiDecompose)
        .build()
}

/// `asciify`, lowercased, reduced to `a-z`, `0-9` and whitespace.
pub fn flattenize() -> Profile<impl Process> {
    Profile::builder("flattenize")
        .add_stage(PreReplace)
        .add_stage(AsciiDecompose)
        .add_stage(LowerCase)
        .add_stage(KeepWordChars)
        .build()
}

/// The full slug pipeline with the built-in abbreviation table.
pub fn slug() -> Profile<impl Process> {
    slug_with(Deabbreviate::default())
}

/// The full slug pipeline with a caller-supplied abbreviation stage.
///
/// asciify → lowercase → deabbreviate → decommafy → debracketize → plainify
/// → dashify
pub fn slug_with(abbreviations: Deabbreviate) -> Profile<impl Process> {
    Profile::builder("slug")
        .add_stage(PreReplace)
        .add_stage(AsciiDecompose)
        .add_stage(LowerCase)
        .add_stage(abbreviations)
        .add_stage(Decommafy)
        .add_stage(Debracketize)
        .add_stage(Plainify)
        .add_stage(Dashify)
        .build()
}
