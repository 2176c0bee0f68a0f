//! HTTP client types for Meplato Store API communication.
//!
//! This module provides the transport layer every resource operation goes
//! through: request values, drained response snapshots, the runtime error
//! taxonomy, and the client that ties them together.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreClient`]: The async client owning the connection pool and
//!   default headers
//! - [`Request`]: A transport-ready request (method, expanded path,
//!   optional JSON body)
//! - [`Response`]: A fully-drained response (status code plus body text)
//! - [`Method`]: The HTTP methods the API uses
//! - [`StoreError`]: Unified error type for all call failures
//! - [`StatusError`]: A non-2xx response with the service's error envelope
//! - [`DecodeError`]: A 2xx response that did not match the expected shape
//!
//! # Request flow
//!
//! A resource operation expands its path template, builds a [`Request`],
//! hands it to [`StoreClient::execute`], and decodes the returned
//! [`Response`]. There are no retries; every failure surfaces once, as a
//! [`StoreError`].

pub mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{DecodeError, StatusError, StoreError};
pub use http_client::{StoreClient, CLIENT_VERSION};
pub use http_request::{Method, Request};
pub use http_response::Response;
