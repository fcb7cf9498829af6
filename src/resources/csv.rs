//! CSV import profiles.
//!
//! A profile maps the columns of a CSV file to shipment fields. It is used by
//! [`ApiContext::import_queue_csv`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiContext, Error, HttpMethod};

use super::macros::wire_enum;

wire_enum! {
    /// Character encoding of an imported file.
    pub enum Encoding {
        Utf8 => "UTF-8",
        Iso88591 => "ISO-8859-1",
        Utf8Bom => "UTF-8-BOM",
    }
}

/// Maps one CSV header to a shipment field.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_field: Option<String>,

    /// Target field, e.g. `receiver.city`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_id: Option<String>,
}

impl Mapping {
    /// Maps `header_field` to `value_id`.
    #[must_use]
    pub fn new(header_field: impl Into<String>, value_id: impl Into<String>) -> Self {
        Self {
            header_field: Some(header_field.into()),
            value_id: Some(value_id.into()),
        }
    }
}

/// A CSV import profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CsvProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    /// Format of date columns, e.g. `dd.MM.yyyy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mapping: Vec<Mapping>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl ApiContext {
    /// `GET /csv/profiles`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn list_csv_profiles(&self) -> Result<Vec<CsvProfile>, Error> {
        let request = self
            .request()
            .path("/csv/profiles")
            .expect_json::<Vec<CsvProfile>>();
        self.send(request).await
    }

    /// `POST /csv/profiles`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn create_csv_profile(&self, profile: &CsvProfile) -> Result<CsvProfile, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/csv/profiles")
            .json(profile)
            .expect_json::<CsvProfile>();
        self.send(request).await
    }

    /// `GET /csv/profiles/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn get_csv_profile(&self, id: i64) -> Result<CsvProfile, Error> {
        let request = self
            .request()
            .path_fmt(format_args!("/csv/profiles/{id}"))
            .expect_json::<CsvProfile>();
        self.send(request).await
    }

    /// `PUT /csv/profiles/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn update_csv_profile(&self, id: i64, profile: &CsvProfile) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Put)
            .path_fmt(format_args!("/csv/profiles/{id}"))
            .json(profile);
        self.send(request).await
    }

    /// `DELETE /csv/profiles/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn delete_csv_profile(&self, id: i64) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Delete)
            .path_fmt(format_args!("/csv/profiles/{id}"));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encoding_wire_values() {
        assert_eq!(serde_json::to_value(Encoding::Utf8).unwrap(), json!("UTF-8"));
        assert_eq!(
            serde_json::to_value(Encoding::Iso88591).unwrap(),
            json!("ISO-8859-1")
        );
        let encoding: Encoding = serde_json::from_value(json!("UTF-8-BOM")).unwrap();
        assert_eq!(encoding, Encoding::Utf8Bom);
    }

    #[test]
    fn test_unknown_encoding_is_kept() {
        let profile: CsvProfile =
            serde_json::from_value(json!({"id": 1, "encoding": "UTF-16"})).unwrap();

        assert_eq!(profile.encoding, Some(Encoding::Other("UTF-16".to_string())));
        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({"id": 1, "encoding": "UTF-16"})
        );
    }

    #[test]
    fn test_profile_wire_shape() {
        let profile = CsvProfile {
            name: Some("Shop export".to_string()),
            delimiter: Some(";".to_string()),
            encoding: Some(Encoding::Iso88591),
            mapping: vec![Mapping::new("Stadt", "receiver.city")],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({
                "name": "Shop export",
                "delimiter": ";",
                "encoding": "ISO-8859-1",
                "mapping": [{"headerField": "Stadt", "valueId": "receiver.city"}]
            })
        );
    }
}
