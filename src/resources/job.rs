//! Shipment jobs: batch processing of queued shipments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiContext, Error, HttpMethod};

use super::macros::wire_enum;
use super::ShipmentQueueItem;

wire_enum! {
    /// Lifecycle of a job.
    pub enum JobStatus {
        Created => "CREATED",
        Running => "RUNNING",
        Cancelled => "CANCELLED",
        Completed => "COMPLETED",
    }
}

/// A job turning queue items into shipments.
///
/// Without an `execution_time` the job starts immediately.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub queue_items: Vec<ShipmentQueueItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_queue_items: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_queue_items: Option<i32>,
}

impl ShipmentJob {
    /// Returns `true` once the job can no longer change.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status,
            Some(JobStatus::Completed | JobStatus::Cancelled)
        )
    }
}

impl ApiContext {
    /// `GET /shipments/jobs`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn list_jobs(&self) -> Result<Vec<ShipmentJob>, Error> {
        let request = self
            .request()
            .path("/shipments/jobs")
            .expect_json::<Vec<ShipmentJob>>();
        self.send(request).await
    }

    /// `POST /shipments/jobs`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn create_job(&self, job: &ShipmentJob) -> Result<ShipmentJob, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/shipments/jobs")
            .json(job)
            .expect_json::<ShipmentJob>();
        self.send(request).await
    }

    /// `GET /shipments/jobs/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn get_job(&self, id: i64) -> Result<ShipmentJob, Error> {
        let request = self
            .request()
            .path_fmt(format_args!("/shipments/jobs/{id}"))
            .expect_json::<ShipmentJob>();
        self.send(request).await
    }

    /// Cancels and removes a job.
    ///
    /// `DELETE /shipments/jobs/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn delete_job(&self, id: i64) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Delete)
            .path_fmt(format_args!("/shipments/jobs/{id}"));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_status_and_progress() {
        let job: ShipmentJob = serde_json::from_value(json!({
            "id": 2,
            "status": "RUNNING",
            "totalQueueItems": 10,
            "processedQueueItems": 4,
            "lastUpdate": "2024-01-02T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(job.status, Some(JobStatus::Running));
        assert_eq!(job.processed_queue_items, Some(4));
        assert!(!job.is_finished());
    }

    #[test]
    fn test_is_finished() {
        for (status, finished) in [
            (JobStatus::Created, false),
            (JobStatus::Running, false),
            (JobStatus::Cancelled, true),
            (JobStatus::Completed, true),
        ] {
            let job = ShipmentJob {
                status: Some(status.clone()),
                ..Default::default()
            };
            assert_eq!(job.is_finished(), finished, "{status:?}");
        }
        assert!(!ShipmentJob::default().is_finished());
    }

    #[test]
    fn test_unknown_status_decodes_and_is_not_finished() {
        let job: ShipmentJob = serde_json::from_value(json!({"id": 3, "status": "FAILED"})).unwrap();

        assert_eq!(job.status, Some(JobStatus::Other("FAILED".to_string())));
        assert!(!job.is_finished());
    }
}
