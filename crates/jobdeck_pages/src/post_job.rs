#![forbid(unsafe_code)]

use jobdeck_contracts::job::{JobPosting, JobPostingInput};
use jobdeck_storage::store::KeyValueStore;
use jobdeck_storage::{JobBoard, JobRepo, StorageError};

use crate::Navigation;

/// Post-job page: the submit handler creates the posting and sends the
/// visitor back to the listing.
pub struct PostJobPage<'a, S> {
    board: &'a mut JobBoard<S>,
}

impl<'a, S: KeyValueStore> PostJobPage<'a, S> {
    pub fn new(board: &'a mut JobBoard<S>) -> Self {
        Self { board }
    }

    pub fn submit(
        &mut self,
        input: JobPostingInput,
    ) -> Result<(JobPosting, Navigation), StorageError> {
        let posting = self.board.create_job(input)?;
        Ok((posting, Navigation::ToListing))
    }
}
