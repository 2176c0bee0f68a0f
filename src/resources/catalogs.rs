//! Catalog management and the publish lifecycle.
//!
//! A catalog is a collection of products a merchant offers to a buying
//! organization. Catalogs are addressed by their PIN and carry two
//! product areas, work and live, which the publish operation reconciles.
//!
//! ```no_run
//! # async fn example() -> Result<(), meplato_store::StoreError> {
//! use meplato_store::{StoreClient, StoreConfig};
//!
//! let client = StoreClient::new(StoreConfig::default());
//! let catalogs = client.catalogs().search().take(10).send().await?;
//! for catalog in catalogs.items {
//!     println!("{:?} ({:?})", catalog.name, catalog.pin);
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Area;
use crate::clients::{Method, Request, StoreClient, StoreError};
use crate::template::{Params, Template};

const CATALOG_PATTERN: &str = "/catalogs/{pin}";
const CATALOGS_PATTERN: &str = "/catalogs";
const PUBLISH_PATTERN: &str = "/catalogs/{pin}/publish";
const PUBLISH_STATUS_PATTERN: &str = "/catalogs/{pin}/publish/status";
const PURGE_PATTERN: &str = "/catalogs/{pin}/{area}";
const SEARCH_PATTERN: &str = "/catalogs{?q,skip,take,sort}";

/// A catalog of products offered to a buying organization.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// 2-letter ISO country code the catalog is intended for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Creation time of the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// 3-letter ISO currency code all prices are quoted in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Description of the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Indicates whether the catalog passed its validity date.
    #[serde(default)]
    pub expired: bool,
    /// URL of the catalog on the Meplato Hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub_url: Option<String>,
    /// Numeric identifier of the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Indicates whether original blob data is retained on import.
    #[serde(default)]
    pub keep_original_blobs: bool,
    /// Kind is `store#catalog` for this entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 2-letter ISO language code of the catalog content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Time of the last import into the work area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_imported: Option<DateTime<Utc>>,
    /// Time of the last publish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_published: Option<DateTime<Utc>>,
    /// Indicates whether downloads of this catalog are locked.
    #[serde(default)]
    pub locked_for_download: bool,
    /// Identifier of the merchant owning the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<i64>,
    /// Meplato classification code of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_mpcc: Option<String>,
    /// Meplato supplier code of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_mpsc: Option<String>,
    /// Display name of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    /// Display name of the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of products currently published in the live area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_products_live: Option<i64>,
    /// Number of products currently in the work area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_products_work: Option<i64>,
    /// URL for OCI access to the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oci_url: Option<String>,
    /// PIN that addresses this catalog in the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// Identifier of the project the catalog belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    /// Meplato classification code of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_mpcc: Option<String>,
    /// Display name of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Version number assigned by the last publish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_version: Option<i64>,
    /// Sage contract reference of the buying organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sage_contract: Option<String>,
    /// Sage customer number of the buying organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sage_number: Option<String>,
    /// URL of this catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Lifecycle state, e.g. `new` or `published`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Target system the catalog is published to, e.g. `mall` or `ocicatalog`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Time of the last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// First day the catalog is valid, e.g. `2024-07-01`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    /// Last day the catalog is valid, e.g. `2024-12-31`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

/// Properties of a new catalog.
///
/// Only `name` is required. Optional fields that are `None` are left to
/// server-side defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatalog {
    /// 2-letter ISO country code the catalog is intended for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// 3-letter ISO currency code all prices are quoted in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Description of the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 2-letter ISO language code of the catalog content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Identifier of the merchant owning the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<i64>,
    /// Display name of the new catalog.
    pub name: String,
    /// Identifier of the project the catalog belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    /// Meplato classification code of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_mpcc: Option<String>,
    /// Sage contract reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sage_contract: Option<String>,
    /// Sage customer number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sage_number: Option<String>,
    /// Target system the catalog is published to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// First day the catalog is valid, e.g. `2024-07-01`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    /// Last day the catalog is valid, e.g. `2024-12-31`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

/// Acknowledgement that a publish has been scheduled.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    /// Kind is `store#catalogPublish` for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// URL of this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// URL to poll for the status of the publish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_link: Option<String>,
}

/// Progress of a running or finished publish.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishStatusResponse {
    /// Indicates whether a publish is currently running.
    #[serde(default)]
    pub busy: bool,
    /// Indicates whether the publish was canceled.
    #[serde(default)]
    pub canceled: bool,
    /// Step the publish is currently working on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step: Option<i64>,
    /// Indicates whether the publish has completed.
    #[serde(default)]
    pub done: bool,
    /// Kind is `store#catalogPublishStatus` for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Completion in percent, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<i64>,
    /// URL of this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Textual description of the current phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Total number of steps of this publish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_steps: Option<i64>,
}

/// Acknowledgement that an area has been purged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurgeResponse {
    /// Kind is `store#catalogPurge` for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// One page of catalog search results.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchCatalogsResponse {
    /// Catalogs on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Catalog>,
    /// Kind is `store#catalogs` for this response.
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
    /// Total number of catalogs matching the search.
    #[serde(default)]
    pub total_items: i64,
}

/// Access to the catalog operations of the Meplato Store API.
///
/// Obtained from [`StoreClient::catalogs`](crate::clients::StoreClient::catalogs).
#[derive(Debug, Clone, Copy)]
pub struct CatalogsService<'a> {
    client: &'a StoreClient,
}

impl<'a> CatalogsService<'a> {
    pub(crate) const fn new(client: &'a StoreClient) -> Self {
        Self { client }
    }

    /// Fetches a single catalog by its PIN.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the catalog does
    /// not exist.
    pub async fn get(&self, pin: &str) -> Result<Catalog, StoreError> {
        let params = Params::new().set("pin", pin);
        let path = Template::expand_pattern(CATALOG_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Get, path))
            .await?
            .decode()
    }

    /// Creates a new catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the payload cannot be encoded or the
    /// server rejects the catalog.
    pub async fn create(&self, catalog: &CreateCatalog) -> Result<Catalog, StoreError> {
        let body = serde_json::to_value(catalog).map_err(StoreError::Encode)?;
        self.client
            .execute(Request::new(Method::Post, CATALOGS_PATTERN).body(body))
            .await?
            .decode()
    }

    /// Schedules a publish of the catalog's work area into its live area.
    ///
    /// Publishing is asynchronous. Poll [`publish_status`](Self::publish_status)
    /// or follow the returned status link to observe progress.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or a publish cannot be
    /// scheduled.
    pub async fn publish(&self, pin: &str) -> Result<PublishResponse, StoreError> {
        let params = Params::new().set("pin", pin);
        let path = Template::expand_pattern(PUBLISH_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Post, path))
            .await?
            .decode()
    }

    /// Reports the status of the most recent publish of a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails.
    pub async fn publish_status(&self, pin: &str) -> Result<PublishStatusResponse, StoreError> {
        let params = Params::new().set("pin", pin);
        let path = Template::expand_pattern(PUBLISH_STATUS_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Get, path))
            .await?
            .decode()
    }

    /// Removes all products from one area of a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails.
    pub async fn purge(&self, pin: &str, area: Area) -> Result<PurgeResponse, StoreError> {
        let params = Params::new().set("pin", pin).set("area", area.as_str());
        let path = Template::expand_pattern(PURGE_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Delete, path))
            .await?
            .decode()
    }

    /// Starts building a catalog search.
    #[must_use]
    pub fn search(&self) -> SearchCatalogsRequest<'a> {
        SearchCatalogsRequest::new(self.client)
    }
}

/// Builder for a catalog search.
///
/// All parameters are optional. Without any, the first page of all
/// catalogs visible to the caller is returned.
#[derive(Debug)]
pub struct SearchCatalogsRequest<'a> {
    client: &'a StoreClient,
    q: Option<String>,
    skip: Option<u64>,
    take: Option<u64>,
    sort: Option<String>,
}

impl<'a> SearchCatalogsRequest<'a> {
    const fn new(client: &'a StoreClient) -> Self {
        Self {
            client,
            q: None,
            skip: None,
            take: None,
            sort: None,
        }
    }

    /// Full-text query string.
    #[must_use]
    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Number of catalogs to skip, for offset pagination.
    #[must_use]
    pub const fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Maximum number of catalogs to return.
    #[must_use]
    pub const fn take(mut self, take: u64) -> Self {
        self.take = Some(take);
        self
    }

    /// Sort order, e.g. `name` or `-created`.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails.
    pub async fn send(self) -> Result<SearchCatalogsResponse, StoreError> {
        let params = Params::new()
            .set_opt("q", self.q)
            .set_opt("skip", self.skip)
            .set_opt("take", self.take)
            .set_opt("sort", self.sort);
        let path = Template::expand_pattern(SEARCH_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Get, path))
            .await?
            .decode()
    }
}
