//! Git refs API client (GitHub REST v3 and compatible servers).

use super::error::{BackendError, BackendResult};
use super::types::{LockAge, is_url_path_safe, lock_ref, lock_ref_path};
use super::wire::{CommitResponse, CreateRefRequest, RefResponse};
use super::LockBackend;
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use ureq::{Agent, RequestBuilder};

const API_VERSION: &str = "2022-11-28";
const ACCEPT: &str = "application/vnd.github+json";

/// Status and body of a completed HTTP exchange.
struct Reply {
    status: u16,
    body: String,
}

/// Lock backend that stores locks as refs in a hosted git repository.
pub struct GitRefBackend {
    agent: Agent,
    base_url: String,
    repository: String,
    token: String,
}

impl GitRefBackend {
    /// Public GitHub API address.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Client-side timeout for every request.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a backend for `repository` (`owner/name`) at `base_url`.
    pub fn new(base_url: &str, repository: &str, token: &str) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Self::REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build();

        Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.trim_end_matches('/').to_string(),
            repository: repository.to_string(),
            token: token.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}", self.base_url, self.repository, path)
    }

    /// URL of the lock ref under `endpoint` (`git/ref` or `git/refs`).
    fn ref_url(&self, endpoint: &str, lock_name: &str) -> BackendResult<String> {
        check_lock_name(lock_name)?;
        Ok(self.url(&format!("{}/{}", endpoint, lock_ref_path(lock_name))))
    }

    fn authorize<B>(&self, request: RequestBuilder<B>) -> RequestBuilder<B> {
        request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    fn post_json(&self, url: &str, body: String) -> BackendResult<Reply> {
        let outcome = self
            .authorize(self.agent.post(url))
            .header("Content-Type", "application/json")
            .send(body);
        finish("POST", url, outcome)
    }

    fn delete_request(&self, url: &str) -> BackendResult<Reply> {
        let outcome = self.authorize(self.agent.delete(url)).call();
        finish("DELETE", url, outcome)
    }

    fn get(&self, url: &str) -> BackendResult<Reply> {
        let outcome = self.authorize(self.agent.get(url)).call();
        finish("GET", url, outcome)
    }

    /// Resolve the lock ref to the commit SHA it points at.
    ///
    /// `Ok(None)` means the ref does not exist.
    fn resolve_ref(&self, lock_name: &str) -> BackendResult<Option<String>> {
        let url = self.ref_url("git/ref", lock_name)?;
        let reply = self.get(&url)?;

        match reply.status {
            200 => {
                let parsed: RefResponse = decode(&url, &reply.body)?;
                Ok(Some(parsed.object.sha))
            }
            404 => Ok(None),
            status => Err(BackendError::UnexpectedStatus {
                status,
                body: reply.body,
            }),
        }
    }

    fn commit_date(&self, sha: &str) -> BackendResult<chrono::DateTime<Utc>> {
        let url = self.url(&format!("git/commits/{}", sha));
        let reply = self.get(&url)?;

        if reply.status != 200 {
            return Err(BackendError::UnexpectedStatus {
                status: reply.status,
                body: reply.body,
            });
        }

        let parsed: CommitResponse = decode(&url, &reply.body)?;
        Ok(parsed.committer.date)
    }
}

impl LockBackend for GitRefBackend {
    fn try_create(&self, lock_name: &str, owner_marker: &str) -> BackendResult<bool> {
        // Names the ref URLs cannot address are refused by every operation.
        check_lock_name(lock_name)?;
        let reference = lock_ref(lock_name);
        let body = serde_json::to_string(&CreateRefRequest {
            reference: &reference,
            sha: owner_marker,
        })?;

        let reply = self.post_json(&self.url("git/refs"), body)?;
        debug!(lock = lock_name, status = reply.status, "create ref");

        match reply.status {
            201 => Ok(true),
            // 422 = ref already exists (lock held)
            422 => Ok(false),
            status => Err(BackendError::UnexpectedStatus {
                status,
                body: reply.body,
            }),
        }
    }

    fn delete(&self, lock_name: &str) -> BackendResult<()> {
        let url = self.ref_url("git/refs", lock_name)?;
        let reply = self.delete_request(&url)?;
        debug!(lock = lock_name, status = reply.status, "delete ref");

        match reply.status {
            204 | 404 => Ok(()),
            status => Err(BackendError::UnexpectedStatus {
                status,
                body: reply.body,
            }),
        }
    }

    fn read_age(&self, lock_name: &str) -> BackendResult<LockAge> {
        let Some(sha) = self.resolve_ref(lock_name)? else {
            return Ok(LockAge::Absent);
        };

        let committed_at =
            self.commit_date(&sha)
                .map_err(|source| BackendError::InconsistentRead {
                    reference: lock_ref(lock_name),
                    sha: sha.clone(),
                    source: Box::new(source),
                })?;

        Ok(LockAge::since(committed_at, Utc::now()))
    }
}

fn check_lock_name(lock_name: &str) -> BackendResult<()> {
    if is_url_path_safe(lock_name) {
        Ok(())
    } else {
        Err(BackendError::InvalidLockName {
            name: lock_name.to_string(),
        })
    }
}

/// Turn a ureq outcome into a [`Reply`], reading the whole body.
fn finish(
    method: &'static str,
    url: &str,
    outcome: Result<ureq::http::Response<ureq::Body>, ureq::Error>,
) -> BackendResult<Reply> {
    let mut response = outcome.map_err(|e| BackendError::Transport {
        method,
        url: url.to_string(),
        source: Box::new(e),
    })?;

    let status = response.status().as_u16();
    // An unreadable error body should not hide the status.
    let body = match response.body_mut().read_to_string() {
        Ok(body) => body,
        Err(e) if (200..300).contains(&status) => {
            return Err(BackendError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            });
        }
        Err(_) => String::new(),
    };

    Ok(Reply { status, body })
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> BackendResult<T> {
    serde_json::from_str(body).map_err(|e| BackendError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
