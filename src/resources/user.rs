//! The authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiContext, Error};

use super::Address;

/// The account the token belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,

    /// Prepaid balance in EUR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_stats: Option<Stats>,
}

/// Shipment counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_year: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_month: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_year: Option<f64>,
}

impl ApiContext {
    /// Returns the user the token was issued for.
    ///
    /// `GET /user`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn get_user(&self) -> Result<User, Error> {
        let request = self.request().path("/user").expect_json::<User>();
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_user_deserializes_nested_values() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "email": "ops@example.com",
            "language": "de",
            "registerDate": "2023-04-01T08:30:00Z",
            "balance": 12.5,
            "address": {"city": "Hamburg"},
            "shipmentStats": {"total": 120, "today": 3}
        }))
        .unwrap();

        let registered = user.register_date.unwrap();
        assert_eq!(registered.year(), 2023);
        assert_eq!(registered.hour(), 8);
        assert_eq!(user.address.unwrap().city.as_deref(), Some("Hamburg"));

        let stats = user.shipment_stats.unwrap();
        assert_eq!(stats.total, Some(120.0));
        assert_eq!(stats.today, Some(3.0));
        assert!(stats.last_year.is_none());
    }
}
