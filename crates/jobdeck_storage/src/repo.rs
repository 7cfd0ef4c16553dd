#![forbid(unsafe_code)]

use jobdeck_contracts::application::{Application, ApplicationId, ApplicationInput};
use jobdeck_contracts::job::{JobId, JobPosting, JobPostingInput};

use crate::collections::{get_collection, set_collection};
use crate::ids::IdAllocator;
use crate::store::{
    KeyValueStore, StorageError, APPLICATIONS_KEY, JOBS_KEY, SAVED_JOBS_KEY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistState {
    Saved,
    Unsaved,
}

/// Job-posting persistence. Postings are never mutated or deleted; the only
/// writes are the first-run seed and `create`.
pub trait JobRepo {
    /// Full newest-first collection. On first-ever access (decoded collection
    /// empty) seeds the sample postings and persists them before returning.
    fn list_all(&mut self) -> Result<Vec<JobPosting>, StorageError>;
    fn create_job(&mut self, input: JobPostingInput) -> Result<JobPosting, StorageError>;
    /// Linear scan by numeric id. Does not seed.
    fn find_by_id(&mut self, id: JobId) -> Result<Option<JobPosting>, StorageError>;
}

/// Append-only application persistence.
pub trait ApplicationRepo {
    fn create_application(
        &mut self,
        input: ApplicationInput,
        job_id: Option<JobId>,
    ) -> Result<Application, StorageError>;
    fn applications(&mut self) -> Result<Vec<Application>, StorageError>;
}

/// Saved-job set. Membership is checked before insert, so the set never
/// holds duplicates; consumers rely on no particular order.
pub trait WishlistRepo {
    fn toggle_saved(&mut self, job_id: JobId) -> Result<WishlistState, StorageError>;
    fn saved_ids(&mut self) -> Result<Vec<JobId>, StorageError>;
}

/// The one concrete store behind all three repositories. Owns the injected
/// key-value backend plus the id allocator shared by jobs and applications.
#[derive(Debug)]
pub struct JobBoard<S> {
    store: S,
    ids: IdAllocator,
}

impl<S: KeyValueStore> JobBoard<S> {
    pub fn new(store: S) -> Self {
        Self::with_allocator(store, IdAllocator::from_clock())
    }

    pub fn with_allocator(store: S, ids: IdAllocator) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn jobs(&mut self) -> Result<Vec<JobPosting>, StorageError> {
        get_collection(&mut self.store, JOBS_KEY)
    }

    fn seed_jobs(&mut self) -> Result<Vec<JobPosting>, StorageError> {
        let sample = sample_postings(&mut self.ids);
        set_collection(&mut self.store, JOBS_KEY, &sample)?;
        Ok(sample)
    }
}

impl<S: KeyValueStore> JobRepo for JobBoard<S> {
    fn list_all(&mut self) -> Result<Vec<JobPosting>, StorageError> {
        let jobs = self.jobs()?;
        if jobs.is_empty() {
            return self.seed_jobs();
        }
        Ok(jobs)
    }

    fn create_job(&mut self, input: JobPostingInput) -> Result<JobPosting, StorageError> {
        let mut jobs = self.jobs()?;
        let floor = jobs.iter().map(|job| job.id.0).max().unwrap_or(0);
        let posting = input.finish(JobId(self.ids.next_after(floor)));
        jobs.insert(0, posting.clone());
        set_collection(&mut self.store, JOBS_KEY, &jobs)?;
        Ok(posting)
    }

    fn find_by_id(&mut self, id: JobId) -> Result<Option<JobPosting>, StorageError> {
        Ok(self.jobs()?.into_iter().find(|job| job.id == id))
    }
}

impl<S: KeyValueStore> ApplicationRepo for JobBoard<S> {
    fn create_application(
        &mut self,
        input: ApplicationInput,
        job_id: Option<JobId>,
    ) -> Result<Application, StorageError> {
        let mut apps = self.applications()?;
        let floor = apps.iter().map(|app| app.id.0).max().unwrap_or(0);
        let app = input.finish(ApplicationId(self.ids.next_after(floor)), job_id);
        apps.insert(0, app.clone());
        set_collection(&mut self.store, APPLICATIONS_KEY, &apps)?;
        Ok(app)
    }

    fn applications(&mut self) -> Result<Vec<Application>, StorageError> {
        get_collection(&mut self.store, APPLICATIONS_KEY)
    }
}

impl<S: KeyValueStore> WishlistRepo for JobBoard<S> {
    fn toggle_saved(&mut self, job_id: JobId) -> Result<WishlistState, StorageError> {
        let mut saved: Vec<u64> = get_collection(&mut self.store, SAVED_JOBS_KEY)?;
        let state = if saved.contains(&job_id.0) {
            saved.retain(|id| *id != job_id.0);
            WishlistState::Unsaved
        } else {
            saved.push(job_id.0);
            WishlistState::Saved
        };
        set_collection(&mut self.store, SAVED_JOBS_KEY, &saved)?;
        Ok(state)
    }

    fn saved_ids(&mut self) -> Result<Vec<JobId>, StorageError> {
        let saved: Vec<u64> = get_collection(&mut self.store, SAVED_JOBS_KEY)?;
        Ok(saved.into_iter().map(JobId).collect())
    }
}

fn sample_postings(ids: &mut IdAllocator) -> Vec<JobPosting> {
    let fixtures = [
        ("Frontend Developer", "Mindtree", "Bengaluru", "HTML, CSS, JavaScript", "Full-time"),
        ("UI/UX Designer", "Acme Co", "Remote", "Figma, UX, Prototyping", "Remote"),
        ("Intern - Web Dev", "StartupX", "Hyderabad", "HTML, JS, Git", "Internship"),
    ];
    fixtures
        .into_iter()
        .map(|(title, company, location, skills, job_type)| JobPosting {
            id: JobId(ids.next()),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            skills: skills.to_string(),
            job_type: job_type.to_string(),
            logo: String::new(),
        })
        .collect()
}
