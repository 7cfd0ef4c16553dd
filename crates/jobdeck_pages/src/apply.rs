#![forbid(unsafe_code)]

use jobdeck_contracts::application::{Application, ApplicationInput};
use jobdeck_contracts::job::JobId;
use jobdeck_contracts::Validate;
use jobdeck_engines::escape::escape_markup_str;
use jobdeck_storage::store::{KeyValueStore, APPLY_JOB_ID_KEY};
use jobdeck_storage::{ApplicationRepo, JobBoard, JobRepo, StorageError};

use crate::Navigation;

pub const APPLY_CONFIRMATION: &str = "Application submitted successfully!";

/// What the apply page shows above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyPrompt {
    Selected { job_id: JobId, summary: String },
    NoSelection { notice: String },
}

/// Apply page: reads the staged job id left by the listing page, shows the
/// summary (or a fallback when nothing is selected), and records the
/// application. The flow proceeds either way; a missing selection is stored
/// as a null job id, never an error.
pub struct ApplyPage<'a, S> {
    board: &'a mut JobBoard<S>,
}

impl<'a, S: KeyValueStore> ApplyPage<'a, S> {
    pub fn new(board: &'a mut JobBoard<S>) -> Self {
        Self { board }
    }

    pub fn load(&mut self) -> Result<ApplyPrompt, StorageError> {
        if let Some(job_id) = self.staged_job_id()? {
            if let Some(job) = self.board.find_by_id(job_id)? {
                return Ok(ApplyPrompt::Selected {
                    job_id,
                    summary: format!(
                        "Applying for: {} at {} • {}",
                        escape_markup_str(&job.title),
                        escape_markup_str(&job.company),
                        escape_markup_str(&job.location)
                    ),
                });
            }
        }
        Ok(ApplyPrompt::NoSelection {
            notice: "Applying for: (No job selected) — open the job listings and click Apply."
                .to_string(),
        })
    }

    pub fn submit(
        &mut self,
        input: ApplicationInput,
    ) -> Result<(Application, Navigation), StorageError> {
        let job_id = self.staged_job_id()?;
        let app = self.board.create_application(input, job_id)?;
        self.board.store_mut().remove_raw(APPLY_JOB_ID_KEY)?;
        Ok((app, Navigation::ToListing))
    }

    /// The staged marker is a bare integer string. Absent or unparsable
    /// content counts as "no selection", same recovery class as a corrupt
    /// collection.
    fn staged_job_id(&mut self) -> Result<Option<JobId>, StorageError> {
        let Some(raw) = self.board.store().read_raw(APPLY_JOB_ID_KEY)? else {
            return Ok(None);
        };
        Ok(raw
            .trim()
            .parse::<u64>()
            .ok()
            .map(JobId)
            .filter(|id| id.validate().is_ok()))
    }
}
