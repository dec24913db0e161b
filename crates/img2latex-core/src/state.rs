use crate::consts::{
    BROWSE_LABEL, DROPZONE_PLACEHOLDER, ERROR_MESSAGE, NO_OUTPUT_MESSAGE, OUTPUT_PLACEHOLDER,
    SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
};
use crate::selection::SelectedImage;

/// Events that move the converter from one snapshot to the next.
#[derive(Clone, Debug)]
pub enum Transition {
    /// A drop, paste or browse produced a new image (last write wins).
    Acquire(SelectedImage),
    SubmitStart,
    /// Service answered; `None` or an empty string means no LaTeX came back.
    SubmitSuccess(Option<String>),
    SubmitFailure,
}

/// Immutable snapshot of the converter view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConverterState {
    selected: Option<SelectedImage>,
    result_text: String,
    is_submitting: bool,
}

/// Enabled flags and labels for the two interactive controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub browse_enabled: bool,
    pub browse_label: &'static str,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

/// Work handed to whoever performs the upload.
#[derive(Clone, Debug)]
pub struct SubmissionJob {
    pub image: SelectedImage,
}

impl ConverterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn has_file(&self) -> bool {
        self.selected.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.has_file() && !self.is_submitting
    }

    /// Apply one transition, returning the next snapshot.
    ///
    /// `SubmitStart` without a held file or while already submitting is a
    /// no-op, as are completions that arrive when nothing is in flight.
    pub fn apply(&self, transition: Transition) -> ConverterState {
        match transition {
            Transition::Acquire(image) => ConverterState {
                selected: Some(image),
                ..self.clone()
            },
            Transition::SubmitStart => {
                if !self.can_submit() {
                    return self.clone();
                }
                ConverterState {
                    selected: self.selected.clone(),
                    result_text: String::new(),
                    is_submitting: true,
                }
            }
            Transition::SubmitSuccess(latex) => {
                if !self.is_submitting {
                    return self.clone();
                }
                let text = latex
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| NO_OUTPUT_MESSAGE.to_string());
                ConverterState {
                    selected: self.selected.clone(),
                    result_text: text,
                    is_submitting: false,
                }
            }
            Transition::SubmitFailure => {
                if !self.is_submitting {
                    return self.clone();
                }
                ConverterState {
                    selected: self.selected.clone(),
                    result_text: ERROR_MESSAGE.to_string(),
                    is_submitting: false,
                }
            }
        }
    }

    /// Start a submission if permitted.
    ///
    /// Returns the in-flight snapshot together with the job to run, or
    /// `None` when there is nothing to send.
    pub fn begin_submission(&self) -> Option<(ConverterState, SubmissionJob)> {
        let image = self.selected.clone().filter(|_| self.can_submit())?;
        Some((self.apply(Transition::SubmitStart), SubmissionJob { image }))
    }

    pub fn controls(&self) -> Controls {
        Controls {
            browse_enabled: true,
            browse_label: BROWSE_LABEL,
            submit_enabled: self.can_submit(),
            submit_label: if self.is_submitting {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_LABEL
            },
        }
    }

    /// Text for the read-only output surface.
    pub fn output_text(&self) -> &str {
        if self.result_text.is_empty() {
            OUTPUT_PLACEHOLDER
        } else {
            &self.result_text
        }
    }

    /// Text for the dropzone: the held file's name or the instructions.
    pub fn dropzone_text(&self) -> &str {
        match &self.selected {
            Some(image) => image.name(),
            None => DROPZONE_PLACEHOLDER,
        }
    }
}
