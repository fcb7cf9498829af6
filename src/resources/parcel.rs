//! Parcel templates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiContext, Error, HttpMethod};

/// A parcel template with dimensions and weight.
///
/// Weight is in kilograms, dimensions in centimeters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Free text printed on the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Arbitrary caller-defined values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl ApiContext {
    /// `GET /parcels`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn list_parcels(&self) -> Result<Vec<Parcel>, Error> {
        let request = self.request().path("/parcels").expect_json::<Vec<Parcel>>();
        self.send(request).await
    }

    /// `POST /parcels`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn create_parcel(&self, parcel: &Parcel) -> Result<Parcel, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/parcels")
            .json(parcel)
            .expect_json::<Parcel>();
        self.send(request).await
    }

    /// `GET /parcels/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn get_parcel(&self, id: i64) -> Result<Parcel, Error> {
        let request = self
            .request()
            .path_fmt(format_args!("/parcels/{id}"))
            .expect_json::<Parcel>();
        self.send(request).await
    }

    /// `PUT /parcels/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn update_parcel(&self, id: i64, parcel: &Parcel) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Put)
            .path_fmt(format_args!("/parcels/{id}"))
            .json(parcel);
        self.send(request).await
    }

    /// `DELETE /parcels/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn delete_parcel(&self, id: i64) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Delete)
            .path_fmt(format_args!("/parcels/{id}"));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_custom_fields_keep_heterogeneous_values() {
        let parcel: Parcel = serde_json::from_value(json!({
            "id": 3,
            "weight": 2.5,
            "customFields": {"fragile": true, "shelf": 4, "tags": ["a", "b"]}
        }))
        .unwrap();

        assert_eq!(parcel.weight, Some(2.5));
        assert_eq!(parcel.custom_fields["fragile"], json!(true));
        assert_eq!(parcel.custom_fields["shelf"], json!(4));
        assert_eq!(parcel.custom_fields["tags"], json!(["a", "b"]));
    }

    #[test]
    fn test_empty_custom_fields_are_omitted() {
        let parcel = Parcel {
            name: Some("Small".to_string()),
            is_default: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&parcel).unwrap();
        assert_eq!(json, json!({"name": "Small", "isDefault": true}));
    }
}
