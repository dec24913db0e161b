use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::client::LatexService;
use crate::state::{SubmissionJob, Transition};

/// Result of running one submission job.
#[derive(Clone, Debug)]
pub struct SubmissionOutcome {
    /// Completion transition to feed back into the state.
    pub transition: Transition,
    pub elapsed: Duration,
}

impl SubmissionOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.transition, Transition::SubmitSuccess(_))
    }
}

/// Run the upload and map its result onto exactly one completion transition.
///
/// A panic inside the service is caught and reported as a failure so the
/// in-flight flag is always cleared.
pub fn execute(service: &dyn LatexService, job: &SubmissionJob) -> SubmissionOutcome {
    let start = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| service.convert(&job.image)));
    let elapsed = start.elapsed();

    let transition = match result {
        Ok(Ok(latex)) => {
            info!(
                "Converted {} in {:.0}ms",
                job.image.name(),
                elapsed.as_secs_f64() * 1000.0
            );
            Transition::SubmitSuccess(latex)
        }
        Ok(Err(e)) => {
            error!("Conversion of {} failed: {e}", job.image.name());
            Transition::SubmitFailure
        }
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!("Conversion of {} panicked: {detail}", job.image.name());
            Transition::SubmitFailure
        }
    };

    SubmissionOutcome {
        transition,
        elapsed,
    }
}
