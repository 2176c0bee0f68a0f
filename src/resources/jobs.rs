//! Read access to background jobs.
//!
//! Long-running work such as imports, publishes, and validations runs as
//! jobs on the server. Jobs cannot be created through the API; they are
//! spawned by other operations and observed here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Method, Request, StoreClient, StoreError};
use crate::template::{Params, Template};

const JOB_PATTERN: &str = "/jobs/{id}";
const SEARCH_PATTERN: &str = "/jobs{?merchantId,skip,take,state}";

/// A single background job.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Identifier of the catalog the job works on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<i64>,
    /// Display name of the catalog the job works on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    /// Time the job finished, successfully or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<DateTime<Utc>>,
    /// Time the job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Email address of the user that triggered the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Identifier of the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Kind is `store#job` for this entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Identifier of the merchant the job belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<i64>,
    /// Meplato classification code of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_mpcc: Option<String>,
    /// Display name of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    /// URL of this job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Time the job started running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<Utc>>,
    /// State of the job, e.g. `waiting`, `working`, `succeeded`, or `failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// What the job does, e.g. `import` or `publish`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// One page of job search results.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchJobsResponse {
    /// Jobs on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Job>,
    /// Kind is `store#jobs` for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// URL of the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
    /// URL of the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_link: Option<String>,
    /// URL of this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Total number of jobs matching the search.
    #[serde(default)]
    pub total_items: i64,
}

/// Access to the job operations of the Meplato Store API.
///
/// Obtained from [`StoreClient::jobs`](crate::clients::StoreClient::jobs).
#[derive(Debug, Clone, Copy)]
pub struct JobsService<'a> {
    client: &'a StoreClient,
}

impl<'a> JobsService<'a> {
    pub(crate) const fn new(client: &'a StoreClient) -> Self {
        Self { client }
    }

    /// Fetches a single job by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the job does not
    /// exist.
    pub async fn get(&self, id: &str) -> Result<Job, StoreError> {
        let params = Params::new().set("id", id);
        let path = Template::expand_pattern(JOB_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Get, path))
            .await?
            .decode()
    }

    /// Starts building a job search.
    #[must_use]
    pub fn search(&self) -> SearchJobsRequest<'a> {
        SearchJobsRequest::new(self.client)
    }
}

/// Builder for a job search.
#[derive(Debug)]
pub struct SearchJobsRequest<'a> {
    client: &'a StoreClient,
    merchant_id: Option<i64>,
    skip: Option<u64>,
    take: Option<u64>,
    state: Option<String>,
}

impl<'a> SearchJobsRequest<'a> {
    const fn new(client: &'a StoreClient) -> Self {
        Self {
            client,
            merchant_id: None,
            skip: None,
            take: None,
            state: None,
        }
    }

    /// Restricts results to the jobs of one merchant.
    #[must_use]
    pub const fn merchant_id(mut self, merchant_id: i64) -> Self {
        self.merchant_id = Some(merchant_id);
        self
    }

    /// Number of jobs to skip, for offset pagination.
    #[must_use]
    pub const fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Maximum number of jobs to return.
    #[must_use]
    pub const fn take(mut self, take: u64) -> Self {
        self.take = Some(take);
        self
    }

    /// State filter, e.g. `waiting,working,succeeded,failed`.
    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails.
    pub async fn send(self) -> Result<SearchJobsResponse, StoreError> {
        let params = Params::new()
            .set_opt("merchantId", self.merchant_id)
            .set_opt("skip", self.skip)
            .set_opt("take", self.take)
            .set_opt("state", self.state);
        let path = Template::expand_pattern(SEARCH_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Get, path))
            .await?
            .decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_templates_parse() {
        assert!(Template::parse(JOB_PATTERN).is_ok());
        assert!(Template::parse(SEARCH_PATTERN).is_ok());
    }

    #[test]
    fn test_job_deserializes_wire_names() {
        let json = r#"{
            "id": "58097dc3-b279-49b5-a5da-23eb1c77d840",
            "kind": "store#job",
            "topic": "publish",
            "state": "succeeded",
            "catalogId": 81,
            "catalogName": "Demo catalog",
            "merchantId": 4,
            "merchantMpcc": "meplato",
            "created": "2024-03-11T12:34:56Z",
            "started": "2024-03-11T12:35:02Z",
            "completed": "2024-03-11T12:36:40Z"
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(
            job.id.as_deref(),
            Some("58097dc3-b279-49b5-a5da-23eb1c77d840")
        );
        assert_eq!(job.state.as_deref(), Some("succeeded"));
        assert_eq!(job.catalog_id, Some(81));
        assert_eq!(job.merchant_mpcc.as_deref(), Some("meplato"));
        assert!(job.completed.is_some());
    }

    #[test]
    fn test_pending_job_has_no_timestamps() {
        let job: Job = serde_json::from_str(r#"{"id":"j1","state":"waiting"}"#).unwrap();
        assert!(job.started.is_none());
        assert!(job.completed.is_none());
    }

    #[test]
    fn test_search_response_defaults() {
        let response: SearchJobsResponse =
            serde_json::from_str(r#"{"kind":"store#jobs"}"#).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.total_items, 0);
    }
}
