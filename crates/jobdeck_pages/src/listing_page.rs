#![forbid(unsafe_code)]

use jobdeck_contracts::job::JobId;
use jobdeck_engines::listing::{filter_jobs, wishlist_label, Listing, ListingRenderer, TypeFacet};
use jobdeck_storage::store::{KeyValueStore, APPLY_JOB_ID_KEY};
use jobdeck_storage::{JobBoard, JobRepo, StorageError, WishlistRepo, WishlistState};

use crate::Navigation;

/// Listing page: initial render, search/facet filtering, and the Apply/Save
/// card actions. Every render pass fully replaces the previous one.
pub struct ListingPage<'a, S> {
    board: &'a mut JobBoard<S>,
    renderer: ListingRenderer,
}

impl<'a, S: KeyValueStore> ListingPage<'a, S> {
    pub fn new(board: &'a mut JobBoard<S>, renderer: ListingRenderer) -> Self {
        Self { board, renderer }
    }

    pub fn load(&mut self) -> Result<Listing, StorageError> {
        let jobs = self.board.list_all()?;
        let saved = self.board.saved_ids()?;
        Ok(self.renderer.render(&jobs, &saved))
    }

    pub fn search(&mut self, query: &str, facet: &TypeFacet) -> Result<Listing, StorageError> {
        let jobs = self.board.list_all()?;
        let saved = self.board.saved_ids()?;
        let filtered = filter_jobs(&jobs, query, facet);
        Ok(self.renderer.render(&filtered, &saved))
    }

    /// Clearing the filters re-renders the full collection; resetting the
    /// input widgets is the caller's concern.
    pub fn clear_filters(&mut self) -> Result<Listing, StorageError> {
        self.load()
    }

    /// Stages the selected job id for the apply page, then navigates there.
    pub fn apply_clicked(&mut self, job_id: JobId) -> Result<Navigation, StorageError> {
        self.board
            .store_mut()
            .write_raw(APPLY_JOB_ID_KEY, &job_id.0.to_string())?;
        Ok(Navigation::ToApply)
    }

    /// Toggles wishlist membership and returns the new button label for an
    /// in-place update; no re-render happens.
    pub fn save_clicked(&mut self, job_id: JobId) -> Result<&'static str, StorageError> {
        let state = self.board.toggle_saved(job_id)?;
        Ok(wishlist_label(state == WishlistState::Saved))
    }
}
