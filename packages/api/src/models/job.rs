use serde::{Deserialize, Serialize};

use store::Session;

use super::{id_from_any, opt_id_from_any};

/// Categories listings are sorted into when the backend does not send one,
/// alternating by position.
pub const LISTING_CATEGORIES: [&str; 2] = ["Software", "Design"];

/// A job posting. Owned by the backend; the client only reads and creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(alias = "_id", deserialize_with = "id_from_any")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "opt_id_from_any")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Job {
    /// The category shown on the card, empty if none was assigned.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Who posted the job, for display.
    pub fn poster(&self) -> &str {
        self.created_by.as_deref().unwrap_or("Unknown")
    }

    /// Whether `session` posted this job. The backend records either the
    /// account id or the display name in `createdBy`.
    pub fn is_posted_by(&self, session: &Session) -> bool {
        match self.created_by.as_deref() {
            Some(owner) => owner == session.id || owner == session.username,
            None => false,
        }
    }
}

/// Fill in listing presentation fields: a category for listings the backend
/// left uncategorised (even positions `Software`, odd positions `Design`), and
/// the featured flag on the first listing.
pub fn decorate_listings(jobs: Vec<Job>) -> Vec<Job> {
    jobs.into_iter()
        .enumerate()
        .map(|(index, mut job)| {
            let blank = job.category.as_deref().map_or(true, |c| c.trim().is_empty());
            if blank {
                job.category = Some(LISTING_CATEGORIES[index % 2].to_string());
            }
            job.is_featured = job.is_featured || index == 0;
            job
        })
        .collect()
}

/// Body of `POST /jobs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
}
