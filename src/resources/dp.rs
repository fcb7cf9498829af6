//! Deutsche Post specific types.

use serde::{Deserialize, Serialize};

/// Deutsche Post settings of a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DpDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_product: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// A Deutsche Post product with its price and size limits.
///
/// Weights are in grams, dimensions in millimeters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DpProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_international: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<i32>,
}

/// A Deutsche Post label format, e.g. a sheet of labels.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DpLabelFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the address can be printed on the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_address_possible: Option<bool>,
    /// Labels per row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_count_x: Option<i32>,
    /// Labels per column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_count_y: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dp_product_limits() {
        let product: DpProduct = serde_json::from_value(json!({
            "product": "1",
            "name": "Standardbrief",
            "price": 0.85,
            "maxWeight": 20,
            "isInternational": false
        }))
        .unwrap();

        assert_eq!(product.price, Some(0.85));
        assert_eq!(product.max_weight, Some(20));
        assert!(product.min_weight.is_none());
    }

    #[test]
    fn test_dp_label_format_wire_names() {
        let format = DpLabelFormat {
            label_format: Some("A4".to_string()),
            label_count_x: Some(2),
            label_count_y: Some(4),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&format).unwrap(),
            json!({"labelFormat": "A4", "labelCountX": 2, "labelCountY": 4})
        );
    }
}
