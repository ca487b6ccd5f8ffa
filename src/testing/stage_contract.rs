use crate::{context::Context, replacements::ReplacementMap, stage::Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must come back unchanged *and* borrowed.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", ""]
    }

    /// Input/output pairs that pin down the transformation.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Stages whose second application can still change text (comma
    /// inversion rotates around the last comma each time) opt out.
    fn skip_idempotency_test() -> bool {
        false
    }

    /// Fixed German map so contract runs never race with tests that mutate
    /// the process-wide table.
    fn context() -> Context<'static> {
        Context::with_replacements(ReplacementMap::german())
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes`: no allocation when input == output
/// 2. `stage_is_idempotent`: applying twice yields the same result (unless opted out)
/// 3. `needs_apply_is_accurate`: predicts exactly whether apply() changes text
/// 4. `handles_empty_string_and_ascii`: graceful on edge cases
/// 5. `no_panic_on_mixed_scripts`: survives non-Latin input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx) {
        stage.apply(text, ctx)
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();

    for &input in S::samples() {
        let text = run(stage, Cow::Borrowed(input), &ctx);
        if !stage.needs_apply(input, &ctx) {
            assert_eq!(
                input as *const str,
                text.as_ref() as *const str,
                "stage `{}` moved a sample it claimed not to touch: `{input}`",
                stage.name()
            );
        }

        if S::skip_idempotency_test() {
            continue;
        }
        // Second pass on canonical output must never allocate again.
        let old_ptr = text.as_ref() as *const str;
        let text = run(stage, text, &ctx);
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second pass of `{}` (input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let text = run(stage, Cow::Borrowed(pass_through), &ctx);
        assert_eq!(text.as_ref(), pass_through);
        assert!(
            matches!(text, Cow::Borrowed(s) if s.as_ptr() == pass_through.as_ptr()),
            "zero-copy violated on pass-through sample of `{}`: `{pass_through}`",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let text = run(stage, Cow::Borrowed(input), &ctx);
        assert_eq!(text.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    if S::skip_idempotency_test() {
        return;
    }
    let ctx = S::context();
    let inputs = S::samples()
        .iter()
        .copied()
        .chain(S::should_transform().iter().map(|&(i, _)| i));
    for input in inputs {
        let once = stage.apply(Cow::Borrowed(input), &ctx);
        let twice = stage.apply(once.clone(), &ctx);
        assert_eq!(
            once,
            twice,
            "apply() of `{}` not idempotent on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();
    let inputs = S::samples()
        .iter()
        .copied()
        .chain(S::should_pass_through().iter().copied())
        .chain(S::should_transform().iter().map(|&(i, _)| i))
        .chain(["", "hello", "world123"]);
    for input in inputs {
        check_accuracy(stage, input, &ctx);
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx);
    // Owned input so that stages which always allocate are not penalised.
    let output = stage.apply(Cow::Owned(input.to_owned()), ctx);
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();
    assert_eq!(stage.apply(Cow::Borrowed(""), &ctx), "");
    // A bare lowercase word is canonical for every stage.
    assert_eq!(stage.apply(Cow::Borrowed("hello"), &ctx), "hello");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let ctx = S::context();
    let _ = stage.apply(
        Cow::Borrowed("Hello 世界 русский (Türkçe), العربية ~ 简体中文"),
        &ctx,
    );
}
