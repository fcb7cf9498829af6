//! DHL specific types and the DHL product endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiContext, Error, HttpMethod};

use super::macros::wire_enum;
use super::LabelFormat;

/// DHL label formats share the generic shape.
pub type DhlLabelFormat = LabelFormat;

wire_enum! {
    /// Services DHL offers on top of a product.
    pub enum DhlServiceCode {
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
        IndividualSenderRequirement => "INDIVIDUAL_SENDER_REQUIREMENT",
        PackagingReturn => "PACKAGING_RETURN",
        ParcelOutletRouting => "PARCEL_OUTLET_ROUTING",
    }
}

/// DHL settings of a shipment or carrier account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DhlDetails {
    /// Customer number (EKP).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ekp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<DhlProduct>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<DhlService>,
}

/// A DHL product booked for the account, with the services it allows.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DhlProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_participation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_neighbour: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_check_of_age: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_person_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ident_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_neighbour_delivery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_green: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_insurance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulky_goods: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_on_delivery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_sender_requirement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_return: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_outlet_routing: Option<bool>,
}

/// A DHL service booked for a shipment.
///
/// Which fields apply depends on `service`: cash on delivery uses the bank
/// fields, ident check the name fields, insurance `float_value`, preferred
/// day `date_value`, everything else `value`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DhlService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<DhlServiceCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_value: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    // The API spells this one with a capital L.
    #[serde(rename = "LastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl ApiContext {
    /// Books a DHL product for the account.
    ///
    /// `POST /carriers/DHL/products`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn create_dhl_product(&self, product: &DhlProduct) -> Result<DhlProduct, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/carriers/DHL/products")
            .json(product)
            .expect_json::<DhlProduct>();
        self.send(request).await
    }

    /// `PUT /carriers/DHL/products/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn update_dhl_product(&self, id: i64, product: &DhlProduct) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Put)
            .path_fmt(format_args!("/carriers/DHL/products/{id}"))
            .json(product);
        self.send(request).await
    }

    /// `DELETE /carriers/DHL/products/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn delete_dhl_product(&self, id: i64) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Delete)
            .path_fmt(format_args!("/carriers/DHL/products/{id}"));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dhl_service_last_name_keeps_api_spelling() {
        let service = DhlService {
            service: Some(DhlServiceCode::IdentCheck),
            first_name: Some("Erika".to_string()),
            last_name: Some("Mustermann".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&service).unwrap(),
            json!({"service": "IDENT_CHECK", "firstName": "Erika", "LastName": "Mustermann"})
        );
    }

    #[test]
    fn test_dhl_details_deserialize() {
        let details: DhlDetails = serde_json::from_value(json!({
            "ekp": "1234567890",
            "products": [{"id": 1, "product": "V01PAK", "goGreen": true}],
            "services": [{"service": "CASH_ON_DELIVERY", "iban": "DE00", "floatValue": 20.0}]
        }))
        .unwrap();

        assert_eq!(details.ekp.as_deref(), Some("1234567890"));
        assert_eq!(details.products[0].go_green, Some(true));
        assert_eq!(details.services[0].service, Some(DhlServiceCode::CashOnDelivery));
        assert_eq!(details.services[0].float_value, Some(20.0));
    }

    #[test]
    fn test_unknown_dhl_service_decodes() {
        let service: DhlService =
            serde_json::from_value(json!({"service": "CLOSEST_DROP_POINT"})).unwrap();
        assert_eq!(
            service.service,
            Some(DhlServiceCode::Other("CLOSEST_DROP_POINT".to_string()))
        );
    }
}
