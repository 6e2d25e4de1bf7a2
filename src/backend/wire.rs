//! Request and response bodies of the git refs API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /repos/{repo}/git/refs`.
#[derive(Debug, Serialize)]
pub(super) struct CreateRefRequest<'a> {
    #[serde(rename = "ref")]
    pub reference: &'a str,
    pub sha: &'a str,
}

/// Body of `GET /repos/{repo}/git/ref/{ref}`. Only the target is kept.
#[derive(Debug, Deserialize)]
pub(super) struct RefResponse {
    pub object: RefObject,
}

#[derive(Debug, Deserialize)]
pub(super) struct RefObject {
    pub sha: String,
}

/// Body of `GET /repos/{repo}/git/commits/{sha}`.
#[derive(Debug, Deserialize)]
pub(super) struct CommitResponse {
    pub committer: CommitSignature,
}

#[derive(Debug, Deserialize)]
pub(super) struct CommitSignature {
    pub date: DateTime<Utc>,
}
