//! Identity of the authenticated merchant and user.
//!
//! The [`MeResponse`] entity is returned by
//! [`StoreClient::me`](crate::clients::StoreClient::me) and describes who
//! the configured credentials authenticate as. It is also the cheapest
//! call for verifying connectivity and credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity information for the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    /// URL to the catalogs the caller may access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogs_link: Option<String>,
    /// Kind is `store#me` for this entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Merchant the credentials belong to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<Merchant>,
    /// URL of this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// User the credentials belong to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A merchant (supplier) account on the Meplato Store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    /// 2-letter ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Creation time of the merchant account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// 3-letter ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Numeric identifier of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Kind is `store#merchant` for this entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 2-letter ISO language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Locale, e.g. `de_AT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Meplato classification code of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpcc: Option<String>,
    /// Meplato supplier code of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpsc: Option<String>,
    /// Display name of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Organizational unit of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ou: Option<String>,
    /// URL of this merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Indicates whether the merchant administers its own account.
    #[serde(default)]
    pub self_service: bool,
    /// Time zone, e.g. `Europe/Vienna`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// API token of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Time of the last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// A user account on the Meplato Store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 2-letter ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Creation time of the user account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// 3-letter ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Email address of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Numeric identifier of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Kind is `store#user` for this entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 2-letter ISO language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Locale, e.g. `de_AT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Identifier of the merchant this user belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<i64>,
    /// Display name of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Authentication provider of the user account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Time zone, e.g. `Europe/Vienna`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// External identifier of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Time of the last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_response_deserializes_wire_names() {
        let json = r#"{
            "kind": "store#me",
            "selfLink": "https://store.meplato.com/api/v2/",
            "catalogsLink": "https://store.meplato.com/api/v2/catalogs",
            "merchant": {
                "id": 4,
                "kind": "store#merchant",
                "name": "Demo Merchant",
                "mpcc": "meplato",
                "selfService": true,
                "created": "2015-03-11T12:34:56Z"
            },
            "user": {
                "id": 7,
                "kind": "store#user",
                "email": "supplier@example.com",
                "merchantId": 4
            }
        }"#;

        let me: MeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(me.kind.as_deref(), Some("store#me"));

        let merchant = me.merchant.unwrap();
        assert_eq!(merchant.id, Some(4));
        assert_eq!(merchant.name.as_deref(), Some("Demo Merchant"));
        assert!(merchant.self_service);
        assert!(merchant.created.is_some());

        let user = me.user.unwrap();
        assert_eq!(user.merchant_id, Some(4));
        assert_eq!(user.email.as_deref(), Some("supplier@example.com"));
    }

    #[test]
    fn test_me_response_without_identity() {
        // Anonymous calls yield an envelope with neither merchant nor user.
        let me: MeResponse = serde_json::from_str(r#"{"kind":"store#me"}"#).unwrap();
        assert!(me.merchant.is_none());
        assert!(me.user.is_none());
    }

    #[test]
    fn test_merchant_self_service_defaults_to_false() {
        let merchant: Merchant = serde_json::from_str(r#"{"id":4}"#).unwrap();
        assert!(!merchant.self_service);
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let user = User {
            id: Some(7),
            email: Some("supplier@example.com".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(!json.contains("selfLink"));
        assert!(!json.contains("merchantId"));
    }
}
