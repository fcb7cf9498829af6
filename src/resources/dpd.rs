//! DPD specific types.

use serde::{Deserialize, Serialize};

use super::{LabelFormat, Product};

/// DPD products share the generic shape.
pub type DpdProduct = Product;

/// DPD label formats share the generic shape.
pub type DpdLabelFormat = LabelFormat;

/// DPD settings of a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DpdDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_product: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<String>,
}
