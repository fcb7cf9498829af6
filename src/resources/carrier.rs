//! Carrier accounts and their services.
//!
//! A carrier is identified by its [`CarrierCode`]; the code is also the path
//! segment of the carrier endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use shippinglabel::resources::{Carrier, CarrierCode, CarrierService, CarrierServiceCode};
//!
//! let mut cod = CarrierService::new(CarrierServiceCode::CashOnDelivery);
//! cod.add_parameter("amount", 49.90);
//!
//! let carrier = Carrier {
//!     code: Some(CarrierCode::Dhl),
//!     username: Some("user".to_string()),
//!     user_secret: Some("secret".to_string()),
//!     services: vec![cod],
//!     ..Default::default()
//! };
//! api.create_carrier(&carrier).await?;
//! api.verify_carrier(CarrierCode::Dhl).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::clients::{ApiContext, Error, HttpMethod};

use super::macros::wire_enum;

wire_enum! {
    /// Carriers, e.g. `DHL`.
    pub enum CarrierCode {
        Dhl => "DHL",
        Dp => "DP",
        Dpd => "DPD",
        Gls => "GLS",
        Hermes => "HERMES",
    }
}

wire_enum! {
    /// Additional services a carrier may offer for a shipment.
    pub enum CarrierServiceCode {
        PreferredNeighbour => "PREFERRED_NEIGHBOUR",
        PreferredLocation => "PREFERRED_LOCATION",
        VisualCheckOfAge => "VISUAL_CHECK_OF_AGE",
        NamedPersonOnly => "NAMED_PERSON_ONLY",
        IdentCheck => "IDENT_CHECK",
        PreferredDay => "PREFERRED_DAY",
        NoNeighbourDelivery => "NO_NEIGHBOUR_DELIVERY",
        AdditionalInsurance => "ADDITIONAL_INSURANCE",
        BulkyGoods => "BULKY_GOODS",
        CashOnDelivery => "CASH_ON_DELIVERY",
        PackagingReturn => "PACKAGING_RETURN",
        ParcelOutletRouting => "PARCEL_OUTLET_ROUTING",
        FlexDelivery => "FLEX_DELIVERY",
        NextDay => "NEXT_DAY",
        ShopReturn => "SHOP_RETURN",
        ShopDelivery => "SHOP_DELIVERY",
        IdentPin => "IDENT_PIN",
    }
}

/// A service with its carrier specific parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarrierService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<CarrierServiceCode>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, serde_json::Value>,
}

impl CarrierService {
    /// Creates a service without parameters.
    #[must_use]
    pub fn new(service: CarrierServiceCode) -> Self {
        Self {
            service: Some(service),
            parameters: HashMap::new(),
        }
    }

    /// Sets a parameter, replacing any previous value for `key`.
    pub fn add_parameter(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.parameters.insert(key.into(), value.into());
    }
}

/// A carrier account.
///
/// `user_secret` is write-only; the API never returns it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    #[serde(rename = "carrierCode", skip_serializing_if = "Option::is_none")]
    pub code: Option<CarrierCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_secret: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_secret_expiration: Option<DateTime<Utc>>,

    /// Default product for shipments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    /// Default label format for shipments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<CarrierService>,

    /// Carrier specific settings, e.g. the DHL `ekp`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, serde_json::Value>,
}

impl ApiContext {
    /// `GET /carriers`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn list_carriers(&self) -> Result<Vec<Carrier>, Error> {
        let request = self.request().path("/carriers").expect_json::<Vec<Carrier>>();
        self.send(request).await
    }

    /// `POST /carriers`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn create_carrier(&self, carrier: &Carrier) -> Result<Carrier, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/carriers")
            .json(carrier)
            .expect_json::<Carrier>();
        self.send(request).await
    }

    /// `GET /carriers/{code}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn get_carrier(&self, code: CarrierCode) -> Result<Carrier, Error> {
        let request = self
            .request()
            .path_fmt(format_args!("/carriers/{}", encode(code.as_str())))
            .expect_json::<Carrier>();
        self.send(request).await
    }

    /// `PUT /carriers/{code}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn update_carrier(&self, code: CarrierCode, carrier: &Carrier) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Put)
            .path_fmt(format_args!("/carriers/{}", encode(code.as_str())))
            .json(carrier);
        self.send(request).await
    }

    /// Replaces the login of a carrier account.
    ///
    /// `PUT /carriers/{code}/credentials`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn update_carrier_credentials(
        &self,
        code: CarrierCode,
        carrier: &Carrier,
    ) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Put)
            .path_fmt(format_args!("/carriers/{}/credentials", encode(code.as_str())))
            .json(carrier);
        self.send(request).await
    }

    /// Asks the API to log in to the carrier with the stored credentials.
    ///
    /// `POST /carriers/{code}/verify`
    ///
    /// # Errors
    ///
    /// [`Error::Api`] if the carrier rejects the credentials.
    pub async fn verify_carrier(&self, code: CarrierCode) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path_fmt(format_args!("/carriers/{}/verify", encode(code.as_str())));
        self.send(request).await
    }

    /// `DELETE /carriers/{code}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn delete_carrier(&self, code: CarrierCode) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Delete)
            .path_fmt(format_args!("/carriers/{}", encode(code.as_str())));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_carrier_code_wire_values() {
        assert_eq!(serde_json::to_value(CarrierCode::Hermes).unwrap(), json!("HERMES"));
        assert_eq!(CarrierCode::Dpd.to_string(), "DPD");
        let code: CarrierCode = serde_json::from_value(json!("GLS")).unwrap();
        assert_eq!(code, CarrierCode::Gls);
    }

    #[test]
    fn test_service_code_wire_values() {
        assert_eq!(
            serde_json::to_value(CarrierServiceCode::NoNeighbourDelivery).unwrap(),
            json!("NO_NEIGHBOUR_DELIVERY")
        );
        assert_eq!(
            serde_json::to_value(CarrierServiceCode::IdentPin).unwrap(),
            json!("IDENT_PIN")
        );
    }

    #[test]
    fn test_unknown_carrier_and_service_decode() {
        let carriers: Vec<Carrier> = serde_json::from_value(json!([
            {"carrierCode": "DHL"},
            {"carrierCode": "UPS", "services": [{"service": "GO_GREEN"}]}
        ]))
        .unwrap();

        assert_eq!(carriers[0].code, Some(CarrierCode::Dhl));
        assert_eq!(carriers[1].code, Some(CarrierCode::Other("UPS".to_string())));
        assert_eq!(
            carriers[1].services[0].service,
            Some(CarrierServiceCode::Other("GO_GREEN".to_string()))
        );
        assert_eq!(
            serde_json::to_value(&carriers[1]).unwrap(),
            json!({"carrierCode": "UPS", "services": [{"service": "GO_GREEN"}]})
        );
    }

    #[test]
    fn test_add_parameter_overwrites() {
        let mut service = CarrierService::new(CarrierServiceCode::CashOnDelivery);
        service.add_parameter("amount", 10);
        service.add_parameter("amount", 12.5);
        service.add_parameter("currency", "EUR");

        assert_eq!(service.parameters.len(), 2);
        assert_eq!(service.parameters["amount"], json!(12.5));
    }

    #[test]
    fn test_carrier_serializes_code_as_carrier_code() {
        let carrier = Carrier {
            code: Some(CarrierCode::Dhl),
            label_format: Some("A6".to_string()),
            services: vec![CarrierService::new(CarrierServiceCode::BulkyGoods)],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&carrier).unwrap(),
            json!({
                "carrierCode": "DHL",
                "labelFormat": "A6",
                "services": [{"service": "BULKY_GOODS"}]
            })
        );
    }
}
