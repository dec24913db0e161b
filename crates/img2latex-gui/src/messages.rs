use img2latex_core::acquire::AcquisitionSource;
use img2latex_core::selection::SelectedImage;
use img2latex_core::state::SubmissionJob;
use img2latex_core::submit::SubmissionOutcome;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Upload the job's image and report exactly one outcome.
    Convert { job: SubmissionJob },
}

/// Results sent back to the UI thread (from the worker, the file picker
/// thread, or the paste listener).
pub enum WorkerResult {
    /// A new image was acquired; it replaces the current selection.
    Acquired {
        source: AcquisitionSource,
        image: SelectedImage,
    },

    /// The file picker closed, with or without a selection.
    BrowseClosed,

    /// The in-flight conversion settled.
    ConvertComplete { outcome: SubmissionOutcome },

    Log {
        message: String,
    },
}
