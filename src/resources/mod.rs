//! Resource types and their endpoints.
//!
//! Each module defines the records of one API resource together with the
//! [`ApiContext`](crate::ApiContext) methods that read and write them.
//! Records are plain serde structs: field names are camelCase on the wire,
//! every field is optional and absent fields are omitted when sending.
//!
//! | Resource | Methods |
//! |----------|---------|
//! | [`User`] | `get_user` |
//! | [`CarrierMetadata`] | `metadata` |
//! | [`Address`] | `list_addresses`, `create_address`, `get_address`, `update_address`, `delete_address` |
//! | [`Parcel`] | `list_parcels`, `create_parcel`, `get_parcel`, `update_parcel`, `delete_parcel` |
//! | [`Carrier`] | `list_carriers`, `create_carrier`, `get_carrier`, `update_carrier`, `update_carrier_credentials`, `verify_carrier`, `delete_carrier` |
//! | [`DhlProduct`] | `create_dhl_product`, `update_dhl_product`, `delete_dhl_product` |
//! | [`Shipment`] | `list_shipments`, `validate_shipment`, `create_shipment`, `create_shipments`, `get_shipment`, `update_shipment`, `delete_shipment` |
//! | labels | `get_label`, `get_labels` |
//! | [`ShipmentQueueItem`] | `list_queue_items`, `add_queue_items`, `get_queue_item`, `update_queue_item`, `delete_queue_item`, `import_queue_csv` |
//! | [`ShipmentJob`] | `list_jobs`, `create_job`, `get_job`, `delete_job` |
//! | [`CsvProfile`] | `list_csv_profiles`, `create_csv_profile`, `get_csv_profile`, `update_csv_profile`, `delete_csv_profile` |

mod address;
mod carrier;
mod csv;
mod customs;
mod dhl;
mod dp;
mod dpd;
mod job;
mod label;
mod macros;
mod metadata;
mod parcel;
mod queue;
mod shipment;
mod user;

pub use address::{Address, AddressType};
pub use carrier::{Carrier, CarrierCode, CarrierService, CarrierServiceCode};
pub use csv::{CsvProfile, Encoding, Mapping};
pub use customs::{Amount, Customs, CustomsItem, ExportType};
pub use dhl::{DhlDetails, DhlLabelFormat, DhlProduct, DhlService, DhlServiceCode};
pub use dp::{DpDetails, DpLabelFormat, DpProduct};
pub use dpd::{DpdDetails, DpdLabelFormat, DpdProduct};
pub use job::{JobStatus, ShipmentJob};
pub use label::{IntoLabelIds, LabelIds};
pub use metadata::{CarrierMetadata, CarrierOptions, LabelFormat, Product};
pub use parcel::Parcel;
pub use queue::{ShipmentQueueItem, CONTENT_TYPE_CSV};
pub use shipment::{Shipment, ShipmentStatus, DEFAULT_PAGE_SIZE};
pub use user::{Stats, User};
