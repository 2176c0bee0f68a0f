//! Tri-state fields for selective-update payloads.
//!
//! Update operations are field-granular: the server only touches the fields
//! present in the request body. A payload field therefore has three states
//! rather than two, and a plain `Option<T>` cannot carry all three.
//! [`UpdateField`] makes the distinction explicit:
//!
//! - [`UpdateField::Unset`]: omit the key from the wire payload entirely;
//!   the server leaves the existing value untouched.
//! - [`UpdateField::Clear`]: send the key with a JSON `null`; the server
//!   clears the field.
//! - [`UpdateField::Set`]: send the key with the given value.
//!
//! Create, replace, and upsert payloads do **not** use this type: there is
//! no pre-existing value to leave untouched, so their optional fields are
//! plain `Option<T>` with ordinary omit-if-none serialization.
//!
//! # Wire discipline
//!
//! Every payload field of this type must be declared as
//!
//! ```text
//! #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
//! ```
//!
//! `skip_serializing_if` keeps unset fields off the wire; `default` maps a
//! missing key back to `Unset` when deserializing. An unset field that is
//! serialized without the skip attribute emits `null`, which the server
//! would read as a clear.
//!
//! # Example
//!
//! ```rust
//! use meplato_store::UpdateField;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Payload {
//!     #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
//!     name: UpdateField<String>,
//!     #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
//!     keywords: UpdateField<Vec<String>>,
//! }
//!
//! let payload = Payload {
//!     name: UpdateField::Set("Whiteboard Marker".to_string()),
//!     keywords: UpdateField::Clear,
//! };
//!
//! let json = serde_json::to_string(&payload).unwrap();
//! assert_eq!(json, r#"{"name":"Whiteboard Marker","keywords":null}"#);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of a selective-update payload: untouched, cleared, or set.
///
/// `From<T>` converts a value into [`UpdateField::Set`]. There is
/// deliberately no `From<Option<T>>`: a `None` would be ambiguous between
/// `Unset` and `Clear`, which is exactly the ambiguity this type exists to
/// remove.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateField<T> {
    /// Omit the key; the server leaves the existing value untouched.
    #[default]
    Unset,
    /// Send `null`; the server clears the field.
    Clear,
    /// Send the value; the server overwrites the field.
    Set(T),
}

impl<T> UpdateField<T> {
    /// Returns `true` for [`UpdateField::Unset`].
    ///
    /// This is the predicate `skip_serializing_if` points at.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` for [`UpdateField::Clear`].
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    /// Returns `true` for [`UpdateField::Set`].
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns the set value, if any.
    #[must_use]
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset | Self::Clear => None,
        }
    }

    /// Converts into the set value, if any.
    #[must_use]
    pub fn into_set(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset | Self::Clear => None,
        }
    }
}

impl<T> From<T> for UpdateField<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

impl<T: Serialize> Serialize for UpdateField<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unset | Self::Clear => serializer.serialize_none(),
            Self::Set(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for UpdateField<T> {
    /// A present key deserializes to `Clear` (null) or `Set` (value); a
    /// missing key only becomes `Unset` through `#[serde(default)]`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Payload {
        #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
        name: UpdateField<String>,
        #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
        price: UpdateField<f64>,
        #[serde(default, skip_serializing_if = "UpdateField::is_unset")]
        keywords: UpdateField<Vec<String>>,
    }

    #[test]
    fn test_default_is_unset() {
        let field: UpdateField<String> = UpdateField::default();
        assert!(field.is_unset());
        assert!(!field.is_clear());
        assert!(!field.is_set());
    }

    #[test]
    fn test_only_name_set_serializes_to_exactly_one_key() {
        let payload = Payload {
            name: UpdateField::Set("X".to_string()),
            ..Payload::default()
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"X"}"#);
    }

    #[test]
    fn test_all_unset_serializes_to_empty_object() {
        let json = serde_json::to_string(&Payload::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_clear_serializes_to_null() {
        let payload = Payload {
            price: UpdateField::Clear,
            ..Payload::default()
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"price":null}"#);
    }

    #[test]
    fn test_set_and_clear_mix() {
        let payload = Payload {
            name: UpdateField::Set("Marker".to_string()),
            price: UpdateField::Clear,
            keywords: UpdateField::Set(vec!["office".to_string()]),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Marker",
                "price": null,
                "keywords": ["office"],
            })
        );
    }

    #[test]
    fn test_deserialize_missing_null_and_value() {
        let payload: Payload = serde_json::from_str(r#"{"name":null,"price":9.5}"#).unwrap();
        assert!(payload.name.is_clear());
        assert_eq!(payload.price, UpdateField::Set(9.5));
        assert!(payload.keywords.is_unset());
    }

    #[test]
    fn test_from_value_is_set() {
        let field: UpdateField<i64> = 42.into();
        assert_eq!(field, UpdateField::Set(42));
        assert_eq!(field.as_set(), Some(&42));
        assert_eq!(field.into_set(), Some(42));
    }

    #[test]
    fn test_accessors_on_unset_and_clear() {
        let unset: UpdateField<i64> = UpdateField::Unset;
        let clear: UpdateField<i64> = UpdateField::Clear;
        assert_eq!(unset.as_set(), None);
        assert_eq!(clear.into_set(), None);
    }
}
