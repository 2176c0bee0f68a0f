//! # Meplato Store API Rust Client
//!
//! A Rust client for the Meplato Store API, the catalog management
//! interface suppliers use to maintain catalogs, products, and
//! availability data on the Meplato Store.
//!
//! ## Overview
//!
//! This client provides:
//! - Type-safe configuration via [`StoreConfig`] and [`StoreConfigBuilder`]
//! - Validated newtypes for the base URL and API credentials
//! - Catalog management including publish and purge via [`resources::catalogs`]
//! - Product create, update, replace, upsert, and delete via [`resources::products`]
//! - Offset-based search and token-based scroll iteration over products
//! - Tri-state partial updates that distinguish "keep", "clear", and "set"
//! - Background job inspection via [`resources::jobs`]
//! - Per-location availability data via [`resources::availabilities`]
//!
//! ## Quick Start
//!
//! ```rust
//! use meplato_store::{Credentials, StoreClient, StoreConfig};
//!
//! // API tokens are sent as the user of HTTP Basic auth with an
//! // empty password.
//! let config = StoreConfig::builder()
//!     .credentials(Credentials::new("your-api-token", "").unwrap())
//!     .build();
//!
//! let client = StoreClient::new(config);
//! ```
//!
//! ## Searching Catalogs
//!
//! ```rust,ignore
//! let catalogs = client.catalogs().search().q("office").take(20).send().await?;
//! println!("{} catalogs match", catalogs.total_items);
//! for catalog in catalogs.items {
//!     println!("{:?}: {:?}", catalog.pin, catalog.name);
//! }
//! ```
//!
//! ## Partial Updates
//!
//! Product updates only touch the fields you mention. Each field of an
//! update payload is an [`UpdateField`]: leave it unset to keep the
//! current value, clear it to reset the field on the server, or set a
//! new value.
//!
//! ```rust
//! use meplato_store::UpdateField;
//! use meplato_store::resources::products::UpdateProduct;
//!
//! let update = UpdateProduct {
//!     price: UpdateField::Set(1099.0),
//!     description: UpdateField::Clear,
//!     ..Default::default()
//! };
//! // Sent as {"description":null,"price":1099.0}; everything else is
//! // left untouched on the server.
//! # let _ = serde_json::to_string(&update).unwrap();
//! ```
//!
//! ## Scrolling Through Products
//!
//! Bulk reads walk a consistent snapshot of a catalog area page by page:
//!
//! ```rust,ignore
//! use meplato_store::Area;
//!
//! let mut scroll = client.products().scroll("AD8CCDD5F9", Area::Work);
//! while let Some(page) = scroll.next_page().await? {
//!     for product in page.items {
//!         println!("{:?}", product.spn);
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! All request methods return [`StoreError`]. Server-side rejections
//! carry the decoded error envelope as a [`StatusError`] with the HTTP
//! status code, message, and raw body:
//!
//! ```rust,ignore
//! match client.catalogs().get("UNKNOWN").await {
//!     Ok(catalog) => println!("{:?}", catalog.name),
//!     Err(meplato_store::StoreError::Status(status)) => {
//!         eprintln!("server said {}: {}", status.code, status.message);
//!     }
//!     Err(err) => eprintln!("request failed: {err}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Honest partial updates**: Omitted, cleared, and set fields are
//!   distinct states, never conflated

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod scroll;
pub mod template;
pub mod update;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, Credentials, StoreConfig, StoreConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;

// Re-export HTTP client and error types
pub use clients::{
    DecodeError, Method, Request, Response, StatusError, StoreClient, StoreError, CLIENT_VERSION,
};

// Re-export the types most request paths touch
pub use resources::Area;
pub use scroll::{ScrollCursor, ScrollError};
pub use template::TemplateError;
pub use update::UpdateField;
