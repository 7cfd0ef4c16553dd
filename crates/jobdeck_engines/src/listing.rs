#![forbid(unsafe_code)]

use jobdeck_contracts::job::{JobId, JobPosting};
use serde::Serialize;
use url::form_urlencoded;

use crate::escape::escape_markup_str;

/// Type facet selector. "all" is a sentinel that matches every posting;
/// anything else must equal the posting's `type` field exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFacet {
    All,
    Exact(String),
}

impl TypeFacet {
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            Self::All
        } else {
            Self::Exact(raw.to_string())
        }
    }

    fn matches(&self, job_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(wanted) => job_type == wanted,
        }
    }
}

/// Stateless free-text + facet filter. The query is trimmed and lower-cased;
/// a posting matches when the lower-cased concatenation of title, skills,
/// location and company contains it as a substring (empty query matches
/// everything). Both predicates must hold. Input order is preserved and the
/// input is never mutated, so the function composes over already-filtered
/// subsets.
pub fn filter_jobs(jobs: &[JobPosting], query: &str, facet: &TypeFacet) -> Vec<JobPosting> {
    let needle = query.trim().to_lowercase();
    jobs.iter()
        .filter(|job| {
            let haystack = format!(
                "{} {} {} {}",
                job.title, job.skills, job.location, job.company
            )
            .to_lowercase();
            haystack.contains(&needle) && facet.matches(&job.job_type)
        })
        .cloned()
        .collect()
}

pub fn wishlist_label(saved: bool) -> &'static str {
    if saved {
        "Saved ✓"
    } else {
        "Save"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub max_skill_chips: usize,
    pub placeholder_logo_base: String,
    pub fallback_logo_url: String,
}

impl ListingConfig {
    pub fn mvp_v1() -> Self {
        Self {
            max_skill_chips: 6,
            placeholder_logo_base: "https://via.placeholder.com/120x80".to_string(),
            fallback_logo_url: "https://via.placeholder.com/120x80?text=Logo".to_string(),
        }
    }
}

/// One fully-resolved display card. All text fields are already escaped;
/// whatever consumes the view model can embed them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobCard {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub skill_chips: Vec<String>,
    pub logo_url: String,
    /// Substituted client-side when `logo_url` fails to load.
    pub fallback_logo_url: String,
    pub saved: bool,
}

impl JobCard {
    pub fn wishlist_label(&self) -> &'static str {
        wishlist_label(self.saved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyNotice {
    pub message: String,
}

/// A complete render pass. An empty posting sequence yields a single
/// informational notice instead of an empty card list; each pass fully
/// replaces any prior output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Listing {
    Cards(Vec<JobCard>),
    Empty(EmptyNotice),
}

#[derive(Debug, Clone)]
pub struct ListingRenderer {
    config: ListingConfig,
}

impl ListingRenderer {
    pub fn new(config: ListingConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, jobs: &[JobPosting], saved_ids: &[JobId]) -> Listing {
        if jobs.is_empty() {
            return Listing::Empty(EmptyNotice {
                message: "No job postings yet. Employers can post a job.".to_string(),
            });
        }
        Listing::Cards(
            jobs.iter()
                .map(|job| self.render_card(job, saved_ids))
                .collect(),
        )
    }

    fn render_card(&self, job: &JobPosting, saved_ids: &[JobId]) -> JobCard {
        JobCard {
            job_id: job.id,
            title: escape_markup_str(&job.title),
            company: escape_markup_str(&job.company),
            location: escape_markup_str(&job.location),
            job_type: escape_markup_str(&job.job_type),
            skill_chips: self.skill_chips(&job.skills),
            logo_url: self.resolve_logo(job),
            fallback_logo_url: self.config.fallback_logo_url.clone(),
            saved: saved_ids.contains(&job.id),
        }
    }

    /// Splits on commas, keeps at most `max_skill_chips` fragments in order,
    /// then trims and escapes each. Extra tags are dropped from display only;
    /// storage keeps the full string.
    fn skill_chips(&self, skills: &str) -> Vec<String> {
        skills
            .split(',')
            .take(self.config.max_skill_chips)
            .map(|chip| escape_markup_str(chip.trim()))
            .collect()
    }

    fn resolve_logo(&self, job: &JobPosting) -> String {
        if !job.logo.is_empty() {
            return job.logo.clone();
        }
        let text = if job.company.is_empty() {
            "Logo"
        } else {
            job.company.as_str()
        };
        let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
        format!("{}?text={}", self.config.placeholder_logo_base, encoded)
    }
}
