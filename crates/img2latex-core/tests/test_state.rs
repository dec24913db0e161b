mod common;

use img2latex_core::consts::{
    DROPZONE_PLACEHOLDER, ERROR_MESSAGE, NO_OUTPUT_MESSAGE, OUTPUT_PLACEHOLDER, SUBMIT_BUSY_LABEL,
    SUBMIT_LABEL,
};
use img2latex_core::state::{ConverterState, Transition};

use common::png_image;

// ---------------------------------------------------------------------------
// Initial snapshot
// ---------------------------------------------------------------------------

#[test]
fn test_initial_state_is_empty() {
    let state = ConverterState::new();
    assert!(!state.has_file());
    assert!(!state.is_submitting());
    assert_eq!(state.result_text(), "");
    assert_eq!(state.output_text(), OUTPUT_PLACEHOLDER);
    assert_eq!(state.dropzone_text(), DROPZONE_PLACEHOLDER);
}

// ---------------------------------------------------------------------------
// Acquisition
// ---------------------------------------------------------------------------

#[test]
fn test_acquire_sets_selection_and_dropzone_name() {
    let state = ConverterState::new().apply(Transition::Acquire(png_image("eq.png")));
    assert!(state.has_file());
    assert_eq!(state.dropzone_text(), "eq.png");
}

#[test]
fn test_acquire_last_write_wins() {
    let state = ConverterState::new()
        .apply(Transition::Acquire(png_image("first.png")))
        .apply(Transition::Acquire(png_image("second.png")));
    assert_eq!(state.selected().unwrap().name(), "second.png");
}

#[test]
fn test_acquire_keeps_previous_result_text() {
    let state = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart)
        .apply(Transition::SubmitSuccess(Some("x^2".into())))
        .apply(Transition::Acquire(png_image("b.png")));
    assert_eq!(state.result_text(), "x^2");
}

#[test]
fn test_apply_leaves_previous_snapshot_untouched() {
    let before = ConverterState::new();
    let after = before.apply(Transition::Acquire(png_image("a.png")));
    assert!(!before.has_file());
    assert!(after.has_file());
}

// ---------------------------------------------------------------------------
// Submission lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_submit_start_without_file_is_noop() {
    let state = ConverterState::new();
    assert_eq!(state.apply(Transition::SubmitStart), state);
    assert!(state.begin_submission().is_none());
}

#[test]
fn test_submit_start_clears_result_and_sets_flag() {
    let state = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart)
        .apply(Transition::SubmitFailure)
        .apply(Transition::SubmitStart);
    assert!(state.is_submitting());
    assert_eq!(state.result_text(), "");
    assert_eq!(state.output_text(), OUTPUT_PLACEHOLDER);
}

#[test]
fn test_submit_start_while_submitting_is_noop() {
    let busy = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart);
    assert_eq!(busy.apply(Transition::SubmitStart), busy);
    assert!(busy.begin_submission().is_none());
}

#[test]
fn test_begin_submission_returns_job_for_held_file() {
    let state = ConverterState::new().apply(Transition::Acquire(png_image("a.png")));
    let (next, job) = state.begin_submission().unwrap();
    assert!(next.is_submitting());
    assert_eq!(job.image.name(), "a.png");
    assert!(job.image.shares_payload(state.selected().unwrap()));
}

#[test]
fn test_success_shows_latex_exactly() {
    let state = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart)
        .apply(Transition::SubmitSuccess(Some("x^2".into())));
    assert!(!state.is_submitting());
    assert_eq!(state.output_text(), "x^2");
}

#[test]
fn test_success_with_missing_latex_shows_fallback() {
    let state = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart)
        .apply(Transition::SubmitSuccess(None));
    assert_eq!(state.output_text(), NO_OUTPUT_MESSAGE);
}

#[test]
fn test_success_with_empty_latex_shows_fallback() {
    let state = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart)
        .apply(Transition::SubmitSuccess(Some(String::new())));
    assert_eq!(state.output_text(), NO_OUTPUT_MESSAGE);
}

#[test]
fn test_failure_shows_generic_error_and_clears_flag() {
    let state = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart)
        .apply(Transition::SubmitFailure);
    assert!(!state.is_submitting());
    assert_eq!(state.output_text(), ERROR_MESSAGE);
}

#[test]
fn test_selection_kept_after_completion() {
    let state = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart)
        .apply(Transition::SubmitFailure);
    assert_eq!(state.selected().unwrap().name(), "a.png");
    assert!(state.can_submit());
}

#[test]
fn test_completion_without_submission_is_ignored() {
    let state = ConverterState::new().apply(Transition::Acquire(png_image("a.png")));
    assert_eq!(state.apply(Transition::SubmitSuccess(Some("y".into()))), state);
    assert_eq!(state.apply(Transition::SubmitFailure), state);
}

#[test]
fn test_acquire_during_submission_keeps_flag() {
    let state = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart)
        .apply(Transition::Acquire(png_image("b.png")));
    assert!(state.is_submitting());
    assert_eq!(state.dropzone_text(), "b.png");
}

// ---------------------------------------------------------------------------
// Control gating table
// ---------------------------------------------------------------------------

#[test]
fn test_controls_no_file_idle() {
    let c = ConverterState::new().controls();
    assert!(c.browse_enabled);
    assert!(!c.submit_enabled);
    assert_eq!(c.submit_label, SUBMIT_LABEL);
}

#[test]
fn test_controls_file_idle() {
    let c = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .controls();
    assert!(c.browse_enabled);
    assert!(c.submit_enabled);
}

#[test]
fn test_controls_while_submitting() {
    let c = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart)
        .controls();
    assert!(c.browse_enabled);
    assert!(!c.submit_enabled);
    assert_eq!(c.submit_label, SUBMIT_BUSY_LABEL);
}

#[test]
fn test_controls_return_to_enabled_after_completion() {
    let base = ConverterState::new()
        .apply(Transition::Acquire(png_image("a.png")))
        .apply(Transition::SubmitStart);
    for done in [
        base.apply(Transition::SubmitSuccess(Some("x".into()))),
        base.apply(Transition::SubmitFailure),
    ] {
        let c = done.controls();
        assert!(c.submit_enabled);
        assert_eq!(c.submit_label, SUBMIT_LABEL);
    }
}
