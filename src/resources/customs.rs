//! Customs declarations for shipments leaving the EU.
//!
//! A declaration travels in a shipment's `additional_details` under the
//! `customs` key; see [`Shipment::set_customs`](super::Shipment::set_customs).

use serde::{Deserialize, Serialize};

use super::macros::wire_enum;

wire_enum! {
    /// Reason for the export.
    pub enum ExportType {
        /// `OTHER` on the wire; `Other` holds unknown values.
        Miscellaneous => "OTHER",
        Present => "PRESENT",
        Sample => "SAMPLE",
        Document => "DOCUMENT",
        ReturnOfGoods => "RETURN_OF_GOODS",
        CommercialGoods => "COMMERCIAL_GOODS",
    }
}

/// A monetary amount.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Amount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// ISO 4217 code, e.g. `EUR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Amount {
    /// Creates an amount in `currency`.
    #[must_use]
    pub fn new(value: f64, currency: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            currency: Some(currency.into()),
        }
    }
}

/// Customs declaration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_type: Option<ExportType>,

    /// Required when `export_type` is [`ExportType::Miscellaneous`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_costs: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_customs_reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_customs_reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_electronic_export_notification: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CustomsItem>,
}

/// One declared position.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomsItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    /// Harmonized System tariff number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_value: Option<Amount>,

    /// Weight per unit in kilograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_type_other_values() {
        assert_eq!(
            serde_json::to_value(ExportType::Miscellaneous).unwrap(),
            json!("OTHER")
        );
        let known: ExportType = serde_json::from_value(json!("OTHER")).unwrap();
        assert_eq!(known, ExportType::Miscellaneous);
        let unknown: ExportType = serde_json::from_value(json!("GIFT")).unwrap();
        assert_eq!(unknown, ExportType::Other("GIFT".to_string()));
    }

    #[test]
    fn test_customs_wire_shape() {
        let customs = Customs {
            export_type: Some(ExportType::CommercialGoods),
            shipping_costs: Some(Amount::new(4.99, "EUR")),
            items: vec![CustomsItem {
                description: Some("T-Shirt".to_string()),
                quantity: Some(2),
                hs_code: Some("610910".to_string()),
                unit_value: Some(Amount::new(15.0, "EUR")),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&customs).unwrap(),
            json!({
                "exportType": "COMMERCIAL_GOODS",
                "shippingCosts": {"value": 4.99, "currency": "EUR"},
                "items": [{
                    "description": "T-Shirt",
                    "quantity": 2,
                    "hsCode": "610910",
                    "unitValue": {"value": 15.0, "currency": "EUR"}
                }]
            })
        );
    }
}
