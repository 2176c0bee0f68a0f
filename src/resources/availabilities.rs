//! Per-location availability of products.
//!
//! Availability records describe where a product is in stock, keyed by
//! the product's SPN plus an optional region and zip code. They are
//! maintained independently of catalogs: changes become visible to
//! buyers without a publish.

use serde::{Deserialize, Serialize};

use crate::clients::{Method, Request, StoreClient, StoreError};
use crate::template::{Params, Template};

const AVAILABILITIES_PATTERN: &str = "/products/{spn}/availabilities{?region,zipCode}";
const UPSERT_PATTERN: &str = "/products/{spn}/availabilities";

/// Stock information for a product at one location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    /// Textual availability message, e.g. `in stock` or `out of stock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Meplato classification code the record applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpcc: Option<String>,
    /// Quantity in stock at this location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// 2-letter ISO code of the country/region the product is stored in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Supplier part number of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spn: Option<String>,
    /// When the record was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Zip code the product is stored in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Availability data to store for a product.
///
/// The SPN comes from the request path. Region and zip code identify the
/// location the record applies to; a record without them describes the
/// product's overall availability.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAvailability {
    /// Textual availability message, e.g. `in stock` or `out of stock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Meplato classification code the record applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpcc: Option<String>,
    /// Quantity in stock at this location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// 2-letter ISO code of the country/region the product is stored in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// When the availability was determined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Zip code the product is stored in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Availability records matching a get request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailabilitiesResponse {
    /// Matching availability records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<AvailabilityRecord>,
    /// Kind is `store#availability/getResponse` for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Acknowledgement of a stored availability record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAvailabilityResponse {
    /// Kind is `store#availability/upsertResponse` for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// URL of the product the record belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Acknowledgement of deleted availability records.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAvailabilityResponse {
    /// Kind is `store#availability/deleteResponse` for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Access to the availability operations of the Meplato Store API.
///
/// Obtained from
/// [`StoreClient::availabilities`](crate::clients::StoreClient::availabilities).
#[derive(Debug, Clone, Copy)]
pub struct AvailabilitiesService<'a> {
    client: &'a StoreClient,
}

impl<'a> AvailabilitiesService<'a> {
    pub(crate) const fn new(client: &'a StoreClient) -> Self {
        Self { client }
    }

    /// Starts building a read of the availability records of a product.
    #[must_use]
    pub fn get(&self, spn: &str) -> GetAvailabilitiesRequest<'a> {
        GetAvailabilitiesRequest::new(self.client, spn.to_string())
    }

    /// Creates or updates an availability record of a product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the payload cannot be encoded or the
    /// server rejects the record.
    pub async fn upsert(
        &self,
        spn: &str,
        availability: &UpsertAvailability,
    ) -> Result<UpsertAvailabilityResponse, StoreError> {
        let params = Params::new().set("spn", spn);
        let path = Template::expand_pattern(UPSERT_PATTERN, &params)?;
        let body = serde_json::to_value(availability).map_err(StoreError::Encode)?;
        self.client
            .execute(Request::new(Method::Post, path).body(body))
            .await?
            .decode()
    }

    /// Starts building a delete of the availability records of a product.
    #[must_use]
    pub fn delete(&self, spn: &str) -> DeleteAvailabilitiesRequest<'a> {
        DeleteAvailabilitiesRequest::new(self.client, spn.to_string())
    }
}

/// Builder for reading availability records.
///
/// Without region and zip code, all records of the product are returned.
#[derive(Debug)]
pub struct GetAvailabilitiesRequest<'a> {
    client: &'a StoreClient,
    spn: String,
    region: Option<String>,
    zip_code: Option<String>,
}

impl<'a> GetAvailabilitiesRequest<'a> {
    const fn new(client: &'a StoreClient, spn: String) -> Self {
        Self {
            client,
            spn,
            region: None,
            zip_code: None,
        }
    }

    /// Restricts results to one country/region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Restricts results to one zip code.
    #[must_use]
    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    /// Executes the read.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails.
    pub async fn send(self) -> Result<GetAvailabilitiesResponse, StoreError> {
        let params = Params::new()
            .set("spn", self.spn.as_str())
            .set_opt("region", self.region)
            .set_opt("zipCode", self.zip_code);
        let path = Template::expand_pattern(AVAILABILITIES_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Get, path))
            .await?
            .decode()
    }
}

/// Builder for deleting availability records.
///
/// Without region and zip code, all records of the product are deleted.
#[derive(Debug)]
pub struct DeleteAvailabilitiesRequest<'a> {
    client: &'a StoreClient,
    spn: String,
    region: Option<String>,
    zip_code: Option<String>,
}

impl<'a> DeleteAvailabilitiesRequest<'a> {
    const fn new(client: &'a StoreClient, spn: String) -> Self {
        Self {
            client,
            spn,
            region: None,
            zip_code: None,
        }
    }

    /// Restricts the delete to one country/region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Restricts the delete to one zip code.
    #[must_use]
    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    /// Executes the delete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails.
    pub async fn send(self) -> Result<DeleteAvailabilityResponse, StoreError> {
        let params = Params::new()
            .set("spn", self.spn.as_str())
            .set_opt("region", self.region)
            .set_opt("zipCode", self.zip_code);
        let path = Template::expand_pattern(AVAILABILITIES_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Delete, path))
            .await?
            .decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_templates_parse() {
        assert!(Template::parse(AVAILABILITIES_PATTERN).is_ok());
        assert!(Template::parse(UPSERT_PATTERN).is_ok());
    }

    #[test]
    fn test_availabilities_path_with_location() {
        let params = Params::new()
            .set("spn", "MBA11")
            .set("region", "DE")
            .set("zipCode", "50667");
        let path = Template::expand_pattern(AVAILABILITIES_PATTERN, &params).unwrap();
        assert_eq!(path, "/products/MBA11/availabilities?region=DE&zipCode=50667");
    }

    #[test]
    fn test_availabilities_path_without_location() {
        let params = Params::new().set("spn", "MBA11");
        let path = Template::expand_pattern(AVAILABILITIES_PATTERN, &params).unwrap();
        assert_eq!(path, "/products/MBA11/availabilities");
    }

    #[test]
    fn test_record_deserializes_wire_names() {
        let json = r#"{
            "spn": "MBA11",
            "region": "DE",
            "zipCode": "50667",
            "quantity": 310.0,
            "message": "in stock",
            "mpcc": "meplato",
            "updated": "Q1 2024"
        }"#;

        let record: AvailabilityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.spn.as_deref(), Some("MBA11"));
        assert_eq!(record.zip_code.as_deref(), Some("50667"));
        assert_eq!(record.quantity, Some(310.0));
    }

    #[test]
    fn test_upsert_payload_skips_absent_fields() {
        let upsert = UpsertAvailability {
            region: Some("DE".to_string()),
            quantity: Some(42.0),
            message: Some("in stock".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&upsert).unwrap();
        assert!(json.contains("\"region\":\"DE\""));
        assert!(json.contains("\"quantity\":42.0"));
        assert!(!json.contains("zipCode"));
        assert!(!json.contains("mpcc"));
    }

    #[test]
    fn test_get_response_defaults() {
        let response: GetAvailabilitiesResponse =
            serde_json::from_str(r#"{"kind":"store#availability/getResponse"}"#).unwrap();
        assert!(response.items.is_empty());
    }
}
