use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use self::conv::ConversionError;

/// Primary key of a table row.
///
/// Depending on the table definition the store
/// delivers either numeric or textual keys.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Bathroom {
    pub id                    : RowId,
    pub name                  : String,
    pub building              : String,
    pub lat                   : f64,
    pub lng                   : f64,
    #[serde(default)]
    pub wheelchair_accessible : bool,
    #[serde(default)]
    pub single_stall          : bool,
    #[serde(default)]
    pub gender_neutral        : bool,
    #[serde(default)]
    pub grab_bars             : bool,
    #[serde(default)]
    pub automatic_door        : bool,
}

/// Request body for inserting a bathroom.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewBathroom {
    pub name                  : String,
    pub building              : String,
    pub lat                   : f64,
    pub lng                   : f64,
    pub wheelchair_accessible : bool,
    pub single_stall          : bool,
    pub gender_neutral        : bool,
    pub grab_bars             : bool,
    pub automatic_door        : bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    pub id            : RowId,
    pub bathroom_id   : RowId,
    pub cleanliness   : i8,
    pub accessibility : i8,
    pub privacy       : i8,
    pub comment       : Option<String>,
    pub device_hash   : String,
    /// RFC 3339
    pub created_at    : String,
}

/// Request body for inserting a review.
///
/// The creation time is assigned by the store.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewReview {
    pub bathroom_id   : String,
    pub cleanliness   : i8,
    pub accessibility : i8,
    pub privacy       : i8,
    pub comment       : Option<String>,
    pub device_hash   : String,
}

/// Error payload returned by the store.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct StoreError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_bathroom_rows() {
        let json = r#"[
            {"id": 7, "name": "Ground floor", "building": "Kresge", "lat": 36.9972,
             "lng": -122.0665, "wheelchair_accessible": true, "single_stall": false,
             "gender_neutral": true, "automatic_door": false,
             "created_at": "2024-10-01T12:30:00+00:00"},
            {"id": "5b0c", "name": "Basement", "building": "Porter", "lat": 36.99,
             "lng": -122.06}
        ]"#;
        let rows: Vec<Bathroom> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].id, RowId::Int(7));
        assert!(rows[0].wheelchair_accessible);
        assert!(rows[0].gender_neutral);
        assert_eq!(rows[1].id.to_string(), "5b0c");
        assert!(!rows[1].grab_bars);
    }

    #[test]
    fn serialize_new_review_with_absent_comment() {
        let row = NewReview {
            bathroom_id: "7".into(),
            cleanliness: 5,
            accessibility: 4,
            privacy: 3,
            comment: None,
            device_hash: "ab".into(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["comment"], serde_json::Value::Null);
        assert_eq!(json["cleanliness"], 5);
        assert_eq!(json["device_hash"], "ab");
    }

    #[test]
    fn deserialize_store_error() {
        let json = r#"{"code":"23505","details":null,"hint":null,
            "message":"duplicate key value violates unique constraint"}"#;
        let err: StoreError = serde_json::from_str(json).unwrap();
        assert_eq!(err.code.as_deref(), Some("23505"));
        assert_eq!(err.hint, None);
        assert!(err.message.starts_with("duplicate key"));
    }
}
