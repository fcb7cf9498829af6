//! Label downloads.
//!
//! Labels come back as raw PDF bytes. Several labels can be fetched in one
//! document with [`ApiContext::get_labels`], which accepts the shipment ids as
//! integers or as strings through [`IntoLabelIds`].
//!
//! ```rust,ignore
//! let single = api.get_label(17).await?;
//! let merged = api.get_labels(vec![17_i64, 18, 19]).await?;
//! let merged = api.get_labels(vec!["17", "18"]).await?;
//! std::fs::write("labels.pdf", merged)?;
//! ```

use crate::clients::{ApiContext, Error, ValidationError};

/// A list of shipment ids, as strings or as integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelIds {
    Strings(Vec<String>),
    Integers(Vec<i64>),
}

impl LabelIds {
    /// Returns the ids as strings, integers converted.
    #[must_use]
    pub fn into_strings(self) -> Vec<String> {
        match self {
            Self::Strings(ids) => ids,
            Self::Integers(ids) => ids.iter().map(ToString::to_string).collect(),
        }
    }

    /// Builds the comma separated path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdList`] if there are no ids.
    pub fn into_path_segment(self) -> Result<String, ValidationError> {
        let ids = self.into_strings();
        if ids.is_empty() {
            return Err(ValidationError::EmptyIdList);
        }
        let encoded: Vec<String> = ids
            .iter()
            .map(|id| urlencoding::encode(id).into_owned())
            .collect();
        Ok(encoded.join(","))
    }
}

/// Conversion into [`LabelIds`].
///
/// Implemented for integer and string vectors, integer slices and
/// `serde_json::Value`. A JSON value must be an array of only strings or only
/// integers.
pub trait IntoLabelIds {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedIdList`] if the input is not a
    /// list of strings or integers.
    fn into_label_ids(self) -> Result<LabelIds, ValidationError>;
}

impl IntoLabelIds for LabelIds {
    fn into_label_ids(self) -> Result<LabelIds, ValidationError> {
        Ok(self)
    }
}

impl IntoLabelIds for Vec<i64> {
    fn into_label_ids(self) -> Result<LabelIds, ValidationError> {
        Ok(LabelIds::Integers(self))
    }
}

impl IntoLabelIds for &[i64] {
    fn into_label_ids(self) -> Result<LabelIds, ValidationError> {
        Ok(LabelIds::Integers(self.to_vec()))
    }
}

impl IntoLabelIds for Vec<String> {
    fn into_label_ids(self) -> Result<LabelIds, ValidationError> {
        Ok(LabelIds::Strings(self))
    }
}

impl IntoLabelIds for Vec<&str> {
    fn into_label_ids(self) -> Result<LabelIds, ValidationError> {
        Ok(LabelIds::Strings(
            self.into_iter().map(str::to_string).collect(),
        ))
    }
}

impl IntoLabelIds for serde_json::Value {
    fn into_label_ids(self) -> Result<LabelIds, ValidationError> {
        let items = match self {
            Self::Array(items) => items,
            other => {
                return Err(ValidationError::UnsupportedIdList {
                    found: json_kind(&other).to_string(),
                })
            }
        };

        if items.iter().all(Self::is_string) {
            let ids = items
                .into_iter()
                .filter_map(|item| match item {
                    Self::String(id) => Some(id),
                    _ => None,
                })
                .collect();
            return Ok(LabelIds::Strings(ids));
        }

        let integers: Option<Vec<i64>> = items.iter().map(Self::as_i64).collect();
        integers
            .map(LabelIds::Integers)
            .ok_or_else(|| ValidationError::UnsupportedIdList {
                found: "array of mixed values".to_string(),
            })
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl ApiContext {
    /// Downloads the label of one shipment as PDF.
    ///
    /// `GET /shipments/{id}/label`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn get_label(&self, id: i64) -> Result<Vec<u8>, Error> {
        let request = self
            .request()
            .path_fmt(format_args!("/shipments/{id}/label"))
            .expect_binary();
        self.send(request).await
    }

    /// Downloads the labels of several shipments as one PDF.
    ///
    /// The ids are validated before anything is sent.
    ///
    /// `GET /shipments/labels/{id,id,...}`
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `ids` is empty or not a list of strings or
    /// integers; otherwise see [`ApiContext::send`].
    pub async fn get_labels(&self, ids: impl IntoLabelIds) -> Result<Vec<u8>, Error> {
        let segment = ids.into_label_ids()?.into_path_segment()?;
        let request = self
            .request()
            .path_fmt(format_args!("/shipments/labels/{segment}"))
            .expect_binary();
        self.send(request).await
    }
}
