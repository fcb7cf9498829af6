//! Sender and return addresses.
//!
//! # Example
//!
//! ```rust,ignore
//! use shippinglabel::resources::{Address, AddressType};
//!
//! let address = Address {
//!     company: Some("ACME GmbH".to_string()),
//!     street: Some("Hauptstraße".to_string()),
//!     street_number: Some("1".to_string()),
//!     postal_code: Some("10115".to_string()),
//!     city: Some("Berlin".to_string()),
//!     country: Some("DE".to_string()),
//!     address_type: Some(AddressType::Shipping),
//!     ..Default::default()
//! };
//! let saved = api.create_address(&address).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{ApiContext, Error, HttpMethod};

use super::macros::wire_enum;

wire_enum! {
    /// Role of a stored address.
    pub enum AddressType {
        /// Used as sender.
        Shipping => "SHIPPING",
        /// Used as return address.
        Return => "RETURN",
    }
}

/// A postal address.
///
/// `company`, `first_name` and `last_name` map to the three name lines
/// printed on the label.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// The unique identifier, assigned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// First name line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Second name line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Third name line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
}

impl ApiContext {
    /// Lists all stored addresses.
    ///
    /// `GET /addresses`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn list_addresses(&self) -> Result<Vec<Address>, Error> {
        let request = self
            .request()
            .path("/addresses")
            .expect_json::<Vec<Address>>();
        self.send(request).await
    }

    /// Stores a new address and returns it with its id.
    ///
    /// `POST /addresses`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn create_address(&self, address: &Address) -> Result<Address, Error> {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path("/addresses")
            .json(address)
            .expect_json::<Address>();
        self.send(request).await
    }

    /// `GET /addresses/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn get_address(&self, id: i64) -> Result<Address, Error> {
        let request = self
            .request()
            .path_fmt(format_args!("/addresses/{id}"))
            .expect_json::<Address>();
        self.send(request).await
    }

    /// Replaces the address stored under `id`.
    ///
    /// `PUT /addresses/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn update_address(&self, id: i64, address: &Address) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Put)
            .path_fmt(format_args!("/addresses/{id}"))
            .json(address);
        self.send(request).await
    }

    /// `DELETE /addresses/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiContext::send`].
    pub async fn delete_address(&self, id: i64) -> Result<(), Error> {
        let request = self
            .request()
            .method(HttpMethod::Delete)
            .path_fmt(format_args!("/addresses/{id}"));
        self.send(request).await
    }
}
