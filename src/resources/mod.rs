//! Resource services and entity models for the Meplato Store API.
//!
//! Each submodule pairs the wire-level entities of one resource with a
//! borrowing service type that issues the actual HTTP calls:
//!
//! - [`catalogs`] manages catalogs and their publish lifecycle
//! - [`products`] manages products within a catalog area, including
//!   search and scroll iteration
//! - [`jobs`] provides read access to background jobs
//! - [`availabilities`] manages per-location availability records
//! - [`me`] describes the authenticated merchant and user
//!
//! Services are obtained from [`StoreClient`](crate::clients::StoreClient)
//! accessors and borrow the client for their lifetime:
//!
//! ```no_run
//! # async fn example() -> Result<(), meplato_store::StoreError> {
//! use meplato_store::{StoreClient, StoreConfig};
//!
//! let client = StoreClient::new(StoreConfig::default());
//! let catalog = client.catalogs().get("5094310527").await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod availabilities;
pub mod catalogs;
pub mod jobs;
pub mod me;
pub mod products;

/// Catalog area that product operations act on.
///
/// Every catalog keeps two copies of its product data: the work area is
/// the staging copy that create, update, and delete operations modify,
/// while the live area holds the last published state that buyers see.
/// Publishing a catalog promotes the work area to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    /// Staging area where pending changes accumulate.
    Work,
    /// Published area visible to buyers.
    Live,
}

impl Area {
    /// Returns the path segment for this area.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
