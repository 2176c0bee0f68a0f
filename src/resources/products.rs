//! Product management within a catalog area.
//!
//! Products live inside one [`Area`] of a catalog and are addressed by
//! their supplier part number (SPN). Mutations target the work area and
//! become visible to buyers when the catalog is published.
//!
//! Bulk reads use scroll iteration, which walks a consistent snapshot of
//! the catalog page by page:
//!
//! ```no_run
//! # async fn example() -> Result<(), meplato_store::StoreError> {
//! use meplato_store::{Area, StoreClient, StoreConfig};
//!
//! let client = StoreClient::new(StoreConfig::default());
//! let mut scroll = client.products().scroll("AD8CCDD5F9", Area::Work);
//! while let Some(page) = scroll.next_page().await? {
//!     for product in page.items {
//!         println!("{:?}: {:?}", product.spn, product.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Area;
use crate::clients::{Method, Request, StoreClient, StoreError};
use crate::scroll::ScrollCursor;
use crate::template::{Params, Template, TemplateError};
use crate::update::UpdateField;

const PRODUCT_PATTERN: &str = "/catalogs/{pin}/{area}/products/{spn}";
const PRODUCTS_PATTERN: &str = "/catalogs/{pin}/{area}/products";
const SCROLL_PATTERN: &str = "/catalogs/{pin}/{area}/products/scroll{?pageToken,mode,version}";
const SEARCH_PATTERN: &str = "/catalogs/{pin}/{area}/products{?q,skip,take,sort}";
const UPSERT_PATTERN: &str = "/catalogs/{pin}/{area}/products/upsert";

/// Scope of a scroll iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollMode {
    /// Every product in the area. This is the server default.
    Full,
    /// Only products changed since the given catalog version.
    Diff,
}

impl ScrollMode {
    /// Returns the query parameter value for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Diff => "diff",
        }
    }
}

impl fmt::Display for ScrollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock information for a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Textual availability message, e.g. `in stock` or `out of stock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Quantity the message refers to, e.g. the number of items in stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<f64>,
    /// When the availability message was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// External product data, e.g. an image or a datasheet.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// Type of blob, e.g. `image`, `thumbnail`, `datasheet`, or `safetysheet`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Language of the blob content.
    #[serde(rename = "lang", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// A (relative) file name in the media files or a URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Textual description of the blob.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// URL the blob is reachable under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Condition of a product, e.g. refurbished or used.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Kind of condition, e.g. `new`, `used`, or `refurbished`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Textual description of the condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Customer-specific name/value pair.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustField {
    /// Name of the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value of the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Assignment of a product to an eCl@ss category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Eclass {
    /// eCl@ss code, digits only, e.g. `19010203`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// eCl@ss version in major.minor format, e.g. `5.1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A price that depends on the ordered quantity.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScalePrice {
    /// Lower quantity bound from which this price applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lbound: Option<f64>,
    /// List price for the given lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    /// Meplato price for the given lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meplato_price: Option<f64>,
    /// Net price for the given lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Assignment of a product to a UNSPSC category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Unspsc {
    /// UNSPSC code, digits only, e.g. `43211503`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// UNSPSC version in major.minor format, e.g. `16.0901`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A product in a catalog area.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stock information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// External data such as images and datasheets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blobs: Vec<Blob>,
    /// Identifier of the catalog the product belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<i64>,
    /// Supplier-specific category names the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Conditions of the product, e.g. refurbished or used.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    /// Content unit, e.g. the unit inside an order unit.
    #[serde(rename = "cu", skip_serializing_if = "Option::is_none")]
    pub content_unit: Option<String>,
    /// Creation time of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Number of content units per order unit, e.g. 12 bottles per case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cu_per_ou: Option<f64>,
    /// 3-letter ISO currency code of the prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Customer-specific fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cust_fields: Vec<CustField>,
    /// Description of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// eCl@ss categories the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eclasses: Vec<Eclass>,
    /// Global trade item number (formerly EAN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// Internal identifier of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Image file name in the media files or an image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Resolved URL of the image.
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Aliases the product is found under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Kind is `store#product` for this entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Lead time in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadtime: Option<f64>,
    /// List price of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    /// Manufacturer code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufactcode: Option<String>,
    /// Name of the manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Meplato price of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meplato_price: Option<f64>,
    /// Identifier of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<i64>,
    /// Marks how a scrolled product changed, e.g. `created` or `deleted`.
    /// Only populated by diff scrolls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Manufacturer part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    /// Name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Order unit, e.g. `PCE` or `BOX`.
    #[serde(rename = "ou", skip_serializing_if = "Option::is_none")]
    pub order_unit: Option<String>,
    /// Indicates whether the product can be ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderable: Option<bool>,
    /// Net price per order unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Identifier of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    /// Allowed quantity interval when ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_interval: Option<f64>,
    /// Maximum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_max: Option<f64>,
    /// Minimum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_min: Option<f64>,
    /// Quantity-dependent prices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scale_prices: Vec<ScalePrice>,
    /// URL of this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Supplier part number, unique within the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spn: Option<String>,
    /// Tax rate between 0.0 and 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    /// Thumbnail file name in the media files or a thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// UNSPSC categories the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unspscs: Vec<Unspsc>,
    /// Time of the last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Indicates whether the product is visible to buyers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Properties of a new product.
///
/// `spn`, `name`, `price`, and `order_unit` are required. All other
/// fields are optional and fall back to server-side defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    /// Stock information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// External data such as images and datasheets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blobs: Vec<Blob>,
    /// Supplier-specific category names the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Conditions of the product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    /// Content unit.
    #[serde(rename = "cu", skip_serializing_if = "Option::is_none")]
    pub content_unit: Option<String>,
    /// Number of content units per order unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cu_per_ou: Option<f64>,
    /// 3-letter ISO currency code of the prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Customer-specific fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cust_fields: Vec<CustField>,
    /// Description of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// eCl@ss categories the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eclasses: Vec<Eclass>,
    /// Global trade item number (formerly EAN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// Image file name in the media files or an image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Aliases the product is found under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Lead time in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadtime: Option<f64>,
    /// List price of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    /// Manufacturer code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufactcode: Option<String>,
    /// Name of the manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Manufacturer part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    /// Name of the product.
    pub name: String,
    /// Order unit, e.g. `PCE` or `BOX`.
    #[serde(rename = "ou")]
    pub order_unit: String,
    /// Indicates whether the product can be ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderable: Option<bool>,
    /// Net price per order unit.
    pub price: f64,
    /// Allowed quantity interval when ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_interval: Option<f64>,
    /// Maximum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_max: Option<f64>,
    /// Minimum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_min: Option<f64>,
    /// Quantity-dependent prices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scale_prices: Vec<ScalePrice>,
    /// Supplier part number, unique within the merchant.
    pub spn: String,
    /// Tax rate between 0.0 and 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    /// Thumbnail file name in the media files or a thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// UNSPSC categories the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unspscs: Vec<Unspsc>,
    /// Indicates whether the product is visible to buyers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Full replacement state for an existing product.
///
/// Fields left at `None` are reset to their defaults on the server, not
/// preserved. Use [`UpdateProduct`] for partial changes. The SPN comes
/// from the request path and cannot be changed by a replace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceProduct {
    /// Stock information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// External data such as images and datasheets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blobs: Vec<Blob>,
    /// Supplier-specific category names the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Conditions of the product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    /// Content unit.
    #[serde(rename = "cu", skip_serializing_if = "Option::is_none")]
    pub content_unit: Option<String>,
    /// Number of content units per order unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cu_per_ou: Option<f64>,
    /// 3-letter ISO currency code of the prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Customer-specific fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cust_fields: Vec<CustField>,
    /// Description of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// eCl@ss categories the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eclasses: Vec<Eclass>,
    /// Global trade item number (formerly EAN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// Image file name in the media files or an image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Aliases the product is found under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Lead time in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadtime: Option<f64>,
    /// List price of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    /// Manufacturer code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufactcode: Option<String>,
    /// Name of the manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Manufacturer part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    /// Name of the product.
    pub name: String,
    /// Order unit, e.g. `PCE` or `BOX`.
    #[serde(rename = "ou")]
    pub order_unit: String,
    /// Indicates whether the product can be ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderable: Option<bool>,
    /// Net price per order unit.
    pub price: f64,
    /// Allowed quantity interval when ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_interval: Option<f64>,
    /// Maximum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_max: Option<f64>,
    /// Minimum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_min: Option<f64>,
    /// Quantity-dependent prices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scale_prices: Vec<ScalePrice>,
    /// Tax rate between 0.0 and 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    /// Thumbnail file name in the media files or a thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// UNSPSC categories the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unspscs: Vec<Unspsc>,
    /// Indicates whether the product is visible to buyers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Properties of a product to create or update, keyed by its SPN.
///
/// If a product with the given SPN exists in the area it is updated,
/// otherwise it is created.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProduct {
    /// Stock information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// External data such as images and datasheets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blobs: Vec<Blob>,
    /// Supplier-specific category names the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Conditions of the product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    /// Content unit.
    #[serde(rename = "cu", skip_serializing_if = "Option::is_none")]
    pub content_unit: Option<String>,
    /// Number of content units per order unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cu_per_ou: Option<f64>,
    /// 3-letter ISO currency code of the prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Customer-specific fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cust_fields: Vec<CustField>,
    /// Description of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// eCl@ss categories the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eclasses: Vec<Eclass>,
    /// Global trade item number (formerly EAN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// Image file name in the media files or an image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Aliases the product is found under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Lead time in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadtime: Option<f64>,
    /// List price of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    /// Manufacturer code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufactcode: Option<String>,
    /// Name of the manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Manufacturer part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    /// Name of the product.
    pub name: String,
    /// Order unit, e.g. `PCE` or `BOX`.
    #[serde(rename = "ou")]
    pub order_unit: String,
    /// Indicates whether the product can be ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderable: Option<bool>,
    /// Net price per order unit.
    pub price: f64,
    /// Allowed quantity interval when ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_interval: Option<f64>,
    /// Maximum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_max: Option<f64>,
    /// Minimum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_min: Option<f64>,
    /// Quantity-dependent prices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scale_prices: Vec<ScalePrice>,
    /// Supplier part number, unique within the merchant.
    pub spn: String,
    /// Tax rate between 0.0 and 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    /// Thumbnail file name in the media files or a thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// UNSPSC categories the product belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unspscs: Vec<Unspsc>,
    /// Indicates whether the product is visible to buyers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Partial changes to an existing product.
///
/// Each field is an [`UpdateField`] with three states: leaving it at
/// [`UpdateField::Unset`] keeps the current value, [`UpdateField::Clear`]
/// resets the field on the server, and [`UpdateField::Set`] assigns a new
/// value.
///
/// ```rust
/// use meplato_store::UpdateField;
/// use meplato_store::resources::products::UpdateProduct;
///
/// let update = UpdateProduct {
///     price: UpdateField::Set(179.0),
///     description: UpdateField::Clear,
///     ..Default::default()
/// };
/// let json = serde_json::to_string(&update).unwrap();
/// assert_eq!(json, r#"{"description":null,"price":179.0}"#);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    /// Stock information.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub availability: UpdateField<Availability>,
    /// External data such as images and datasheets.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub blobs: UpdateField<Vec<Blob>>,
    /// Supplier-specific category names the product belongs to.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub categories: UpdateField<Vec<String>>,
    /// Conditions of the product.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub conditions: UpdateField<Vec<Condition>>,
    /// Content unit.
    #[serde(rename = "cu", default, skip_serializing_if = "UpdateField::is_unset")]
    pub content_unit: UpdateField<String>,
    /// Number of content units per order unit.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub cu_per_ou: UpdateField<f64>,
    /// 3-letter ISO currency code of the prices.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub currency: UpdateField<String>,
    /// Customer-specific fields.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub cust_fields: UpdateField<Vec<CustField>>,
    /// Description of the product.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub description: UpdateField<String>,
    /// eCl@ss categories the product belongs to.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub eclasses: UpdateField<Vec<Eclass>>,
    /// Global trade item number (formerly EAN).
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub gtin: UpdateField<String>,
    /// Image file name in the media files or an image URL.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub image: UpdateField<String>,
    /// Aliases the product is found under.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub keywords: UpdateField<Vec<String>>,
    /// Lead time in days.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub leadtime: UpdateField<f64>,
    /// List price of the product.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub list_price: UpdateField<f64>,
    /// Manufacturer code.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub manufactcode: UpdateField<String>,
    /// Name of the manufacturer.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub manufacturer: UpdateField<String>,
    /// Manufacturer part number.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub mpn: UpdateField<String>,
    /// Name of the product.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub name: UpdateField<String>,
    /// Order unit, e.g. `PCE` or `BOX`.
    #[serde(rename = "ou", default, skip_serializing_if = "UpdateField::is_unset")]
    pub order_unit: UpdateField<String>,
    /// Indicates whether the product can be ordered.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub orderable: UpdateField<bool>,
    /// Net price per order unit.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub price: UpdateField<f64>,
    /// Allowed quantity interval when ordering.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub quantity_interval: UpdateField<f64>,
    /// Maximum order quantity.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub quantity_max: UpdateField<f64>,
    /// Minimum order quantity.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub quantity_min: UpdateField<f64>,
    /// Quantity-dependent prices.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub scale_prices: UpdateField<Vec<ScalePrice>>,
    /// Tax rate between 0.0 and 1.0.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub tax_rate: UpdateField<f64>,
    /// Thumbnail file name in the media files or a thumbnail URL.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub thumbnail: UpdateField<String>,
    /// UNSPSC categories the product belongs to.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub unspscs: UpdateField<Vec<Unspsc>>,
    /// Indicates whether the product is visible to buyers.
    #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
    pub visible: UpdateField<bool>,
}

/// Acknowledgement of a created product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    /// Kind describes this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// URL of the newly created product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Acknowledgement of an updated product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductResponse {
    /// Kind describes this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// URL of the updated product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Acknowledgement of a replaced product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceProductResponse {
    /// Kind describes this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// URL of the replaced product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Acknowledgement of an upserted product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProductResponse {
    /// Kind describes this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// URL of the upserted product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One page of product search results.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductsResponse {
    /// Products on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Product>,
    /// Kind is `store#products/search` for this response.
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
    /// Total number of products matching the search.
    #[serde(default)]
    pub total_items: i64,
}

/// One page of a scroll iteration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScrollProductsResponse {
    /// Products on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Product>,
    /// Kind is `store#products/scroll` for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// URL of the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
    /// Token for the next page. Empty when the iteration is exhausted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    /// URL of the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_link: Option<String>,
    /// URL of this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Total number of products in the iteration.
    #[serde(default)]
    pub total_items: i64,
}

/// Access to the product operations of the Meplato Store API.
///
/// Obtained from [`StoreClient::products`](crate::clients::StoreClient::products).
#[derive(Debug, Clone, Copy)]
pub struct ProductsService<'a> {
    client: &'a StoreClient,
}

impl<'a> ProductsService<'a> {
    pub(crate) const fn new(client: &'a StoreClient) -> Self {
        Self { client }
    }

    /// Fetches a single product by its SPN.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the product does
    /// not exist.
    pub async fn get(&self, pin: &str, area: Area, spn: &str) -> Result<Product, StoreError> {
        let path = Self::product_path(pin, area, spn)?;
        self.client
            .execute(Request::new(Method::Get, path))
            .await?
            .decode()
    }

    /// Creates a new product in the work area of a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the payload cannot be encoded or the
    /// server rejects the product, e.g. because the SPN already exists.
    pub async fn create(
        &self,
        pin: &str,
        area: Area,
        product: &CreateProduct,
    ) -> Result<CreateProductResponse, StoreError> {
        let params = Params::new().set("pin", pin).set("area", area.as_str());
        let path = Template::expand_pattern(PRODUCTS_PATTERN, &params)?;
        let body = serde_json::to_value(product).map_err(StoreError::Encode)?;
        self.client
            .execute(Request::new(Method::Post, path).body(body))
            .await?
            .decode()
    }

    /// Applies partial changes to an existing product.
    ///
    /// Only fields set or cleared in `product` are touched. The request
    /// is sent as a POST to the product resource.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the payload cannot be encoded or the
    /// server rejects the update.
    pub async fn update(
        &self,
        pin: &str,
        area: Area,
        spn: &str,
        product: &UpdateProduct,
    ) -> Result<UpdateProductResponse, StoreError> {
        let path = Self::product_path(pin, area, spn)?;
        let body = serde_json::to_value(product).map_err(StoreError::Encode)?;
        self.client
            .execute(Request::new(Method::Post, path).body(body))
            .await?
            .decode()
    }

    /// Replaces all fields of an existing product.
    ///
    /// Fields absent from `product` are reset to their server-side
    /// defaults, not preserved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the payload cannot be encoded or the
    /// server rejects the replacement.
    pub async fn replace(
        &self,
        pin: &str,
        area: Area,
        spn: &str,
        product: &ReplaceProduct,
    ) -> Result<ReplaceProductResponse, StoreError> {
        let path = Self::product_path(pin, area, spn)?;
        let body = serde_json::to_value(product).map_err(StoreError::Encode)?;
        self.client
            .execute(Request::new(Method::Put, path).body(body))
            .await?
            .decode()
    }

    /// Creates or updates a product, keyed by the SPN in the payload.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the payload cannot be encoded or the
    /// server rejects the product.
    pub async fn upsert(
        &self,
        pin: &str,
        area: Area,
        product: &UpsertProduct,
    ) -> Result<UpsertProductResponse, StoreError> {
        let params = Params::new().set("pin", pin).set("area", area.as_str());
        let path = Template::expand_pattern(UPSERT_PATTERN, &params)?;
        let body = serde_json::to_value(product).map_err(StoreError::Encode)?;
        self.client
            .execute(Request::new(Method::Post, path).body(body))
            .await?
            .decode()
    }

    /// Deletes a product from the work area of a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the product does
    /// not exist.
    pub async fn delete(&self, pin: &str, area: Area, spn: &str) -> Result<(), StoreError> {
        let path = Self::product_path(pin, area, spn)?;
        self.client
            .execute(Request::new(Method::Delete, path))
            .await?
            .ensure_success()
    }

    /// Starts building a product search in one catalog area.
    #[must_use]
    pub fn search(&self, pin: &str, area: Area) -> SearchProductsRequest<'a> {
        SearchProductsRequest::new(self.client, pin.to_string(), area)
    }

    /// Starts a scroll iteration over one catalog area.
    ///
    /// See [`ScrollProductsRequest`] for the iteration protocol.
    #[must_use]
    pub fn scroll(&self, pin: &str, area: Area) -> ScrollProductsRequest<'a> {
        ScrollProductsRequest::new(self.client, pin.to_string(), area)
    }

    fn product_path(pin: &str, area: Area, spn: &str) -> Result<String, TemplateError> {
        let params = Params::new()
            .set("pin", pin)
            .set("area", area.as_str())
            .set("spn", spn);
        Template::expand_pattern(PRODUCT_PATTERN, &params)
    }
}

/// Builder for a product search within one catalog area.
#[derive(Debug)]
pub struct SearchProductsRequest<'a> {
    client: &'a StoreClient,
    pin: String,
    area: Area,
    q: Option<String>,
    skip: Option<u64>,
    take: Option<u64>,
    sort: Option<String>,
}

impl<'a> SearchProductsRequest<'a> {
    const fn new(client: &'a StoreClient, pin: String, area: Area) -> Self {
        Self {
            client,
            pin,
            area,
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

    /// Number of products to skip, for offset pagination.
    #[must_use]
    pub const fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Maximum number of products to return.
    #[must_use]
    pub const fn take(mut self, take: u64) -> Self {
        self.take = Some(take);
        self
    }

    /// Sort order, e.g. `price` or `-created`.
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
    pub async fn send(self) -> Result<SearchProductsResponse, StoreError> {
        let params = Params::new()
            .set("pin", self.pin.as_str())
            .set("area", self.area.as_str())
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

/// Scroll iteration over the products of one catalog area.
///
/// Two styles of use are supported. [`next_page`](Self::next_page) keeps
/// the page token internally and guards against the server restarting an
/// expired iteration:
///
/// ```no_run
/// # async fn example() -> Result<(), meplato_store::StoreError> {
/// # use meplato_store::{Area, StoreClient, StoreConfig};
/// # let client = StoreClient::new(StoreConfig::default());
/// let mut scroll = client.products().scroll("AD8CCDD5F9", Area::Work);
/// while let Some(page) = scroll.next_page().await? {
///     println!("{} products", page.items.len());
/// }
/// # Ok(())
/// # }
/// ```
///
/// [`send`](Self::send) fetches a single page and leaves token handling
/// to the caller, mirroring the raw protocol: pass no token for the first
/// page, then the token of each response for the next, until a response
/// carries an empty token.
#[derive(Debug)]
pub struct ScrollProductsRequest<'a> {
    client: &'a StoreClient,
    pin: String,
    area: Area,
    page_token: Option<String>,
    mode: Option<ScrollMode>,
    version: Option<i64>,
    cursor: ScrollCursor,
}

impl<'a> ScrollProductsRequest<'a> {
    fn new(client: &'a StoreClient, pin: String, area: Area) -> Self {
        Self {
            client,
            pin,
            area,
            page_token: None,
            mode: None,
            version: None,
            cursor: ScrollCursor::new(),
        }
    }

    /// Resumes the iteration at a previously returned page token.
    #[must_use]
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.cursor = ScrollCursor::starting_at(token.clone());
        self.page_token = Some(token);
        self
    }

    /// Restricts the iteration to a scope, e.g. [`ScrollMode::Diff`].
    #[must_use]
    pub const fn mode(mut self, mode: ScrollMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Catalog version a diff scroll reports changes against.
    #[must_use]
    pub const fn version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    /// Fetches the next page, or `None` when the iteration is exhausted.
    ///
    /// The token of each response is tracked internally. When the server
    /// silently restarts an expired iteration and hands out a token that
    /// was already seen, the iteration stops with
    /// [`ScrollError::RepeatedToken`](crate::scroll::ScrollError::RepeatedToken)
    /// instead of looping forever.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a request fails or a page token repeats.
    pub async fn next_page(&mut self) -> Result<Option<ScrollProductsResponse>, StoreError> {
        if self.cursor.is_done() {
            return Ok(None);
        }
        let token = self.cursor.page_token().map(ToString::to_string);
        let page = self.fetch(token.as_deref()).await?;
        self.cursor.advance(&page.page_token)?;
        Ok(Some(page))
    }

    /// Fetches a single page using the explicitly configured token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails.
    pub async fn send(self) -> Result<ScrollProductsResponse, StoreError> {
        self.fetch(self.page_token.as_deref()).await
    }

    async fn fetch(&self, page_token: Option<&str>) -> Result<ScrollProductsResponse, StoreError> {
        let params = Params::new()
            .set("pin", self.pin.as_str())
            .set("area", self.area.as_str())
            .set_opt("pageToken", page_token)
            .set_opt("mode", self.mode.map(ScrollMode::as_str))
            .set_opt("version", self.version);
        let path = Template::expand_pattern(SCROLL_PATTERN, &params)?;
        self.client
            .execute(Request::new(Method::Get, path))
            .await?
            .decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Path templates ====================

    #[test]
    fn test_path_templates_parse() {
        for pattern in [
            PRODUCT_PATTERN,
            PRODUCTS_PATTERN,
            SCROLL_PATTERN,
            SEARCH_PATTERN,
            UPSERT_PATTERN,
        ] {
            assert!(Template::parse(pattern).is_ok(), "pattern {pattern} failed");
        }
    }

    #[test]
    fn test_product_path_percent_encodes_spn() {
        let path = ProductsService::product_path("AD8CCDD5F9", Area::Work, "MP 40/2").unwrap();
        assert_eq!(path, "/catalogs/AD8CCDD5F9/work/products/MP%2040%2F2");
    }

    #[test]
    fn test_scroll_mode_values() {
        assert_eq!(ScrollMode::Full.as_str(), "full");
        assert_eq!(ScrollMode::Diff.as_str(), "diff");
        assert_eq!(ScrollMode::Diff.to_string(), "diff");
    }

    // ==================== Entities ====================

    #[test]
    fn test_product_deserializes_wire_names() {
        let json = r#"{
            "id": "48F31F33AD@12",
            "kind": "store#product",
            "spn": "MBA11",
            "name": "MacBook Air 11\"",
            "price": 1299.0,
            "ou": "PIECE",
            "cu": "PIECE",
            "cuPerOu": 1.0,
            "imageURL": "https://store.meplato.com/media/mba11.jpg",
            "catalogId": 81,
            "merchantId": 4,
            "keywords": ["notebook", "laptop"],
            "custFields": [{"name": "weight", "value": "1.08kg"}],
            "scalePrices": [{"lbound": 10.0, "price": 1199.0}],
            "blobs": [{"kind": "image", "lang": "en", "source": "mba11.jpg"}],
            "eclasses": [{"code": "19010203", "version": "5.1"}],
            "taxRate": 0.2,
            "orderable": true,
            "mode": "updated"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.spn.as_deref(), Some("MBA11"));
        assert_eq!(product.order_unit.as_deref(), Some("PIECE"));
        assert_eq!(product.content_unit.as_deref(), Some("PIECE"));
        assert_eq!(
            product.image_url.as_deref(),
            Some("https://store.meplato.com/media/mba11.jpg")
        );
        assert_eq!(product.catalog_id, Some(81));
        assert_eq!(product.keywords.len(), 2);
        assert_eq!(product.cust_fields[0].name.as_deref(), Some("weight"));
        assert_eq!(product.scale_prices[0].lbound, Some(10.0));
        assert_eq!(product.blobs[0].language.as_deref(), Some("en"));
        assert_eq!(product.tax_rate, Some(0.2));
        assert_eq!(product.orderable, Some(true));
        assert_eq!(product.mode.as_deref(), Some("updated"));
    }

    #[test]
    fn test_product_defaults_for_absent_collections() {
        let product: Product = serde_json::from_str(r#"{"spn":"MBA11"}"#).unwrap();
        assert!(product.blobs.is_empty());
        assert!(product.keywords.is_empty());
        assert!(product.orderable.is_none());
        assert!(product.visible.is_none());
    }

    #[test]
    fn test_create_product_serializes_required_fields() {
        let create = CreateProduct {
            spn: "MBA11".to_string(),
            name: "MacBook Air 11\"".to_string(),
            price: 1299.0,
            order_unit: "PIECE".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(value["spn"], "MBA11");
        assert_eq!(value["ou"], "PIECE");
        assert_eq!(value["price"], 1299.0);
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("keywords"));
        assert!(!object.contains_key("cu"));
    }

    #[test]
    fn test_upsert_product_carries_spn_in_body() {
        let upsert = UpsertProduct {
            spn: "MBA11".to_string(),
            name: "MacBook Air 11\"".to_string(),
            price: 1299.0,
            order_unit: "PIECE".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&upsert).unwrap();
        assert_eq!(value["spn"], "MBA11");
    }

    // ==================== Partial updates ====================

    #[test]
    fn test_update_product_serializes_only_touched_fields() {
        let update = UpdateProduct {
            name: UpdateField::Set("X".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"name":"X"}"#);
    }

    #[test]
    fn test_update_product_clear_emits_null() {
        let update = UpdateProduct {
            description: UpdateField::Clear,
            price: UpdateField::Set(179.0),
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object["description"].is_null());
        assert_eq!(object["price"], 179.0);
    }

    #[test]
    fn test_update_product_untouched_serializes_empty() {
        let update = UpdateProduct::default();
        assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
    }

    #[test]
    fn test_update_product_renames_order_unit() {
        let update = UpdateProduct {
            order_unit: UpdateField::Set("BOX".to_string()),
            content_unit: UpdateField::Clear,
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["ou"], "BOX");
        assert!(object["cu"].is_null());
        assert!(!object.contains_key("orderUnit"));
    }

    // ==================== Listing envelopes ====================

    #[test]
    fn test_scroll_response_page_token_defaults_empty() {
        let response: ScrollProductsResponse =
            serde_json::from_str(r#"{"kind":"store#products/scroll"}"#).unwrap();
        assert!(response.page_token.is_empty());
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_scroll_response_carries_page_token() {
        let json = r#"{
            "kind": "store#products/scroll",
            "pageToken": "Cgtzske56789",
            "totalItems": 130,
            "items": [{"spn": "MBA11"}]
        }"#;

        let response: ScrollProductsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page_token, "Cgtzske56789");
        assert_eq!(response.total_items, 130);
        assert_eq!(response.items.len(), 1);
    }

    #[test]
    fn test_search_response_defaults() {
        let response: SearchProductsResponse =
            serde_json::from_str(r#"{"kind":"store#products/search"}"#).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.total_items, 0);
    }
}
