use serde::{Deserialize, Serialize};

use super::id_from_any;

/// An applicant's application to a job, as listed by `GET /applications/:userId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(alias = "_id", deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub status: String,
}

/// Body of `POST /applications`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_id: String,
}
