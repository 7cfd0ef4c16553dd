#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::job::JobId;
use crate::{ContractViolation, Validate};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ApplicationId(pub u64);

impl Validate for ApplicationId {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.0 == 0 {
            return Err(ContractViolation::InvalidValue {
                field: "application_id",
                reason: "must be > 0",
            });
        }
        Ok(())
    }
}

/// One submitted application, persisted under the `applications` key.
/// `job_id` is null on the wire when no job was selected at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    #[serde(rename = "jobId")]
    pub job_id: Option<JobId>,
    pub name: String,
    pub email: String,
    pub resume: String,
    #[serde(rename = "coverLetter")]
    pub cover_letter: String,
}

impl Validate for Application {
    fn validate(&self) -> Result<(), ContractViolation> {
        self.id.validate()?;
        if let Some(job_id) = self.job_id {
            job_id.validate()?;
        }
        Ok(())
    }
}

/// Apply-form fields. No format validation beyond trimming, by contract.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationInput {
    pub name: String,
    pub email: String,
    pub resume: String,
    pub cover_letter: String,
}

impl ApplicationInput {
    pub fn finish(self, id: ApplicationId, job_id: Option<JobId>) -> Application {
        Application {
            id,
            job_id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            resume: self.resume.trim().to_string(),
            cover_letter: self.cover_letter.trim().to_string(),
        }
    }
}
