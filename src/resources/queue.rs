//! The shipment queue.
//!
//! Queued shipments are not sent to the carrier yet. They are created in bulk
//! by a [`ShipmentJob`](super::ShipmentJob), or imported from a CSV file with
//! a [`CsvProfile`](super::CsvProfile) describing the columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiContext, Error, HttpMethod};

use super::Shipment;

/// Content type of CSV imports.
pub const CONTENT_TYPE_CSV: &str = "text/csv";

/// A shipment waiting in the queue.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentQueueItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<Shipment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Validation or processing messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl ApiContext {
    /// `GET /shipments/queue`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn list_queue_items(&self) -> Result<Vec<ShipmentQueueItem>, Error> {
        let request = self
            .request()
            .path("/shipments/queue")
            .expect_json::<Vec<ShipmentQueueItem>>();
        self.send(request).await
    }

    /// Puts shipments into the queue.
    ///
    /// `POST /shipments/queue`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn add_queue_items(
        &self,
        items: &[ShipmentQueueItem],
    ) -> Result<Vec<ShipmentQueueItem>, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/shipments/queue")
            .json(items)
            .expect_json::<Vec<ShipmentQueueItem>>();
        self.send(request).await
    }

    /// `GET /shipments/queue/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn get_queue_item(&self, id: i64) -> Result<ShipmentQueueItem, Error> {
        let request = self
            .request()
            .path_fmt(format_args!("/shipments/queue/{id}"))
            .expect_json::<ShipmentQueueItem>();
        self.send(request).await
    }

    /// `PUT /shipments/queue/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn update_queue_item(&self, id: i64, item: &ShipmentQueueItem) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Put)
            .path_fmt(format_args!("/shipments/queue/{id}"))
            .json(item);
        self.send(request).await
    }

    /// `DELETE /shipments/queue/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn delete_queue_item(&self, id: i64) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Delete)
            .path_fmt(format_args!("/shipments/queue/{id}"));
        self.send(request).await
    }

    /// Imports a CSV file into the queue, using the column mapping of the
    /// CSV profile `profile_id`. The bytes are sent unchanged; their encoding
    /// must match the profile's.
    ///
    /// `POST /shipments/queue/csv?profileId={profile_id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn import_queue_csv(
        &self,
        profile_id: i64,
        csv: impl Into<Vec<u8>>,
    ) -> Result<Vec<ShipmentQueueItem>, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/shipments/queue/csv")
            .query_param("profileId", profile_id)
            .raw(csv, CONTENT_TYPE_CSV)
            .expect_json::<Vec<ShipmentQueueItem>>();
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_queue_item_round_trip_of_api_body() {
        let body = json!({
            "id": 5,
            "status": "INVALID",
            "messages": ["receiver.city is required"],
            "shipment": {"reference": "order-1"}
        });
        let item: ShipmentQueueItem = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(item.messages, vec!["receiver.city is required"]);
        assert_eq!(
            item.shipment.as_ref().and_then(|s| s.reference.as_deref()),
            Some("order-1")
        );
        assert_eq!(serde_json::to_value(&item).unwrap(), body);
    }
}
