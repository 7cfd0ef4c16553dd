#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::{ContractViolation, Validate};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl Validate for JobId {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.0 == 0 {
            return Err(ContractViolation::InvalidValue {
                field: "job_id",
                reason: "must be > 0",
            });
        }
        Ok(())
    }
}

/// One job listing as persisted under the `jobs` key. Field names on the wire
/// stay compatible with pre-existing stored data (`type` in particular).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub logo: String,
}

impl Validate for JobPosting {
    fn validate(&self) -> Result<(), ContractViolation> {
        self.id.validate()
    }
}

/// Submitted post-job form fields. Free text throughout; trimming is the only
/// normalization applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobPostingInput {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub skills: String,
    pub logo: String,
}

impl JobPostingInput {
    pub fn finish(self, id: JobId) -> JobPosting {
        JobPosting {
            id,
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            job_type: self.job_type.trim().to_string(),
            skills: self.skills.trim().to_string(),
            logo: self.logo.trim().to_string(),
        }
    }
}
