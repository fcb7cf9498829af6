//! Shipments.
//!
//! # Example
//!
//! ```rust,ignore
//! use shippinglabel::resources::{Address, Carrier, CarrierCode, Parcel, Shipment};
//!
//! let shipment = Shipment {
//!     carrier: Some(Carrier { code: Some(CarrierCode::Dhl), ..Default::default() }),
//!     parcels: vec![Parcel { weight: Some(1.2), ..Default::default() }],
//!     receiver: Some(Address { city: Some("Berlin".to_string()), ..Default::default() }),
//!     ..Default::default()
//! };
//!
//! api.validate_shipment(&shipment).await?;
//! let created = api.create_shipment(&shipment).await?;
//! let pdf = api.get_label(created.id.unwrap_or_default()).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiContext, Error, HttpMethod};

use super::{Address, Carrier, Customs, Parcel};

/// Page size used when a negative size is requested.
pub const DEFAULT_PAGE_SIZE: i64 = 10_000;

/// Processing state reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// A shipment with its parcels and addresses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Tracking number assigned by the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parcels: Vec<Parcel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Carrier specific details, e.g. `customs` or service settings.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub additional_details: HashMap<String, serde_json::Value>,

    /// Base64 encoded label, when included by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShipmentStatus>,
}

impl Shipment {
    /// Sets an additional detail, replacing any previous value for `key`.
    pub fn add_additional_detail(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) {
        self.additional_details.insert(key.into(), value.into());
    }

    /// Attaches a customs declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration cannot be converted to JSON.
    pub fn set_customs(&mut self, customs: &Customs) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(customs)?;
        self.add_additional_detail("customs", value);
        Ok(())
    }
}

/// Clamps list parameters to what the API accepts.
///
/// A negative page becomes `0`, a negative size becomes
/// [`DEFAULT_PAGE_SIZE`] and any order other than `asc` or `desc` becomes
/// `asc`.
pub(crate) fn normalize_list_params(page: i64, size: i64, order: &str) -> (i64, i64, &'static str) {
    let page = page.max(0);
    let size = if size < 0 { DEFAULT_PAGE_SIZE } else { size };
    let order = if order == "desc" { "desc" } else { "asc" };
    (page, size, order)
}

impl ApiContext {
    /// Lists shipments, one page at a time.
    ///
    /// `page` is zero based; with `size = 10`, page `0` holds shipments 1 to
    /// 10 and page `1` shipments 11 to 20. `order` is `asc` or `desc`. Out of
    /// range values are replaced by the defaults (page 0, size 10000, `asc`).
    ///
    /// `GET /shipments?page=&page_size=&order=`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn list_shipments(
        &self,
        page: i64,
        size: i64,
        order: &str,
    ) -> Result<Vec<Shipment>, Error> {
        let (page, size, order) = normalize_list_params(page, size, order);
        let request = self
            .request()
            .path("/shipments")
            .query_param("page", page)
            .query_param("page_size", size)
            .query_param("order", order)
            .expect_json::<Vec<Shipment>>();
        self.send(request).await
    }

    /// Checks a shipment without creating it.
    ///
    /// `POST /shipments/validate`
    ///
    /// # Errors
    ///
    /// [`Error::Api`] with one entry in `messages` per problem.
    pub async fn validate_shipment(&self, shipment: &Shipment) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/shipments/validate")
            .json(shipment);
        self.send(request).await
    }

    /// `POST /shipments`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn create_shipment(&self, shipment: &Shipment) -> Result<Shipment, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/shipments")
            .json(shipment)
            .expect_json::<Shipment>();
        self.send(request).await
    }

    /// Creates several shipments in one call.
    ///
    /// `POST /shipments/bulk`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn create_shipments(&self, shipments: &[Shipment]) -> Result<Vec<Shipment>, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/shipments/bulk")
            .json(shipments)
            .expect_json::<Vec<Shipment>>();
        self.send(request).await
    }

    /// `GET /shipments/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn get_shipment(&self, id: i64) -> Result<Shipment, Error> {
        let request = self
            .request()
            .path_fmt(format_args!("/shipments/{id}"))
            .expect_json::<Shipment>();
        self.send(request).await
    }

    /// `PUT /shipments/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn update_shipment(&self, id: i64, shipment: &Shipment) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Put)
            .path_fmt(format_args!("/shipments/{id}"))
            .json(shipment);
        self.send(request).await
    }

    /// `DELETE /shipments/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn delete_shipment(&self, id: i64) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Delete)
            .path_fmt(format_args!("/shipments/{id}"));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Amount, ExportType};
    use serde_json::json;

    #[test]
    fn test_normalize_list_params() {
        assert_eq!(normalize_list_params(-1, 10, "asc"), (0, 10, "asc"));
        assert_eq!(normalize_list_params(3, -1, "desc"), (3, DEFAULT_PAGE_SIZE, "desc"));
        assert_eq!(normalize_list_params(0, 0, "xyz"), (0, 0, "asc"));
        assert_eq!(normalize_list_params(0, 5, "DESC"), (0, 5, "asc"));
        assert_eq!(normalize_list_params(i64::MIN, i64::MIN, ""), (0, DEFAULT_PAGE_SIZE, "asc"));
    }

    #[test]
    fn test_set_customs_lands_in_additional_details() {
        let mut shipment = Shipment::default();
        shipment
            .set_customs(&Customs {
                export_type: Some(ExportType::Present),
                shipping_costs: Some(Amount::new(5.0, "EUR")),
                ..Default::default()
            })
            .unwrap();

        let json = serde_json::to_value(&shipment).unwrap();
        assert_eq!(
            json,
            json!({
                "additionalDetails": {
                    "customs": {
                        "exportType": "PRESENT",
                        "shippingCosts": {"value": 5.0, "currency": "EUR"}
                    }
                }
            })
        );
    }

    #[test]
    fn test_shipment_deserializes_nested_records() {
        let shipment: Shipment = serde_json::from_value(json!({
            "id": 9,
            "shipmentNumber": "00340434161094042557",
            "carrier": {"carrierCode": "DPD"},
            "parcels": [{"weight": 1.0}, {"weight": 2.0}],
            "receiver": {"city": "Köln"},
            "status": {"code": "CREATED", "message": "label created"},
            "additionalDetails": {"ekp": "123"}
        }))
        .unwrap();

        assert_eq!(shipment.id, Some(9));
        assert_eq!(shipment.parcels.len(), 2);
        assert_eq!(shipment.receiver.unwrap().city.as_deref(), Some("Köln"));
        assert_eq!(shipment.status.unwrap().code.as_deref(), Some("CREATED"));
        assert_eq!(shipment.additional_details["ekp"], json!("123"));
    }
}
