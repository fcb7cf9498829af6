//! Carrier metadata: products and label formats per carrier.

use serde::{Deserialize, Serialize};

use crate::clients::{ApiContext, Error};

use super::{Carrier, DhlProduct, DpLabelFormat, DpProduct};

/// A bookable product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A label format, e.g. `A6`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Products and label formats of one carrier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarrierOptions<P, F> {
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<P>,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub label_formats: Vec<F>,
}

impl<P, F> Default for CarrierOptions<P, F> {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            label_formats: Vec::new(),
        }
    }
}

/// Everything the API knows about the supported carriers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarrierMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub carriers: Vec<Carrier>,

    #[serde(default)]
    pub dhl: CarrierOptions<DhlProduct, LabelFormat>,

    #[serde(default)]
    pub dp: CarrierOptions<DpProduct, DpLabelFormat>,

    #[serde(default)]
    pub dpd: CarrierOptions<Product, LabelFormat>,
}

impl ApiContext {
    /// Returns carriers, products and label formats.
    ///
    /// `GET /metadata/carriers/details`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn metadata(&self) -> Result<CarrierMetadata, Error> {
        let request = self
            .request()
            .path("/metadata/carriers/details")
            .expect_json::<CarrierMetadata>();
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::CarrierCode;
    use serde_json::json;

    #[test]
    fn test_metadata_deserializes_carrier_groups() {
        let metadata: CarrierMetadata = serde_json::from_value(json!({
            "carriers": [{"carrierCode": "DHL", "name": "DHL Paket"}],
            "dhl": {
                "products": [{"id": 1, "product": "V01PAK", "name": "DHL Paket"}],
                "labelFormats": [{"labelFormat": "A6", "name": "A6"}]
            },
            "dp": {
                "products": [{"product": "1", "price": 0.85}],
                "labelFormats": [{"labelFormat": "A4", "labelCountX": 2}]
            },
            "dpd": {
                "products": [{"product": "CL", "name": "Classic"}]
            }
        }))
        .unwrap();

        assert_eq!(metadata.carriers[0].code, Some(CarrierCode::Dhl));
        assert_eq!(metadata.dhl.products[0].product.as_deref(), Some("V01PAK"));
        assert_eq!(metadata.dhl.label_formats[0].label_format.as_deref(), Some("A6"));
        assert_eq!(metadata.dp.label_formats[0].label_count_x, Some(2));
        assert_eq!(metadata.dpd.products[0].name.as_deref(), Some("Classic"));
        assert!(metadata.dpd.label_formats.is_empty());
    }

    #[test]
    fn test_metadata_tolerates_missing_groups() {
        let metadata: CarrierMetadata = serde_json::from_value(json!({})).unwrap();
        assert!(metadata.carriers.is_empty());
        assert!(metadata.dhl.products.is_empty());
    }
}
