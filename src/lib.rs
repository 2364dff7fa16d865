//! PurpleAir API client library.
//!
//! A thin Rust client for the PurpleAir air-quality sensor-network REST API.
//! Each method maps onto exactly one authenticated HTTP request against
//! `https://api.purpleair.com/v1/` and returns the status code paired with
//! the opaque response body. The official API definitions can be found at
//! <https://api.purpleair.com>.
//!
//! This layer adds no retries, caching, or schema validation, and it does
//! not treat non-2xx responses as errors: the status and body are handed
//! back for the caller to interpret. Transport failures (connection errors,
//! bodies that fail to decode as JSON) surface as [`PurpleAirError`].
//!
//! # Quick Start
//!
//! ```no_run
//! use purpleair::{PurpleAir, SensorFilters};
//!
//! fn main() -> purpleair::Result<()> {
//!     // At least one of the read/write keys is required.
//!     let client = PurpleAir::new(Some("YOUR-READ-KEY"), None)?;
//!
//!     // One sensor by index.
//!     let response = client.get_sensor_data(131075, None, Some("pm2.5"), None)?;
//!     println!("status {}: {}", response.status, response.body);
//!
//!     // Every outdoor sensor in a bounding box.
//!     let filters = SensorFilters {
//!         location_type: Some(0),
//!         nwlng: Some(-122.7),
//!         nwlat: Some(45.6),
//!         selng: Some(-122.5),
//!         selat: Some(45.4),
//!         ..Default::default()
//!     };
//!     let response = client.get_sensors_data("pm2.5,humidity", &filters)?;
//!     println!("status {}: {}", response.status, response.body);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Keys
//!
//! Retrieval operations use the read key; group create/delete and membership
//! changes use the write key. A client may carry either or both, and the
//! key an operation uses is fixed per operation.

mod client;
mod endpoints;
mod error;
mod params;

pub use client::{ApiResponse, PurpleAir};
pub use error::{PurpleAirError, Result};
pub use params::{GroupMemberParams, SensorFilters};
