//! High-level API for Rowenta Intense Pure Air purifiers
//!
//! This crate provides typed operations on top of the private
//! `signed-client` crate, which builds the signed `X-Zc-*` request envelope
//! the AbleCloud router requires.
//!
//! ```rust,no_run
//! use pure_air_api::{Mode, PureAirClient};
//!
//! let mut client = PureAirClient::new();
//! client.connect("user@example.com", "secret")?;
//!
//! let devices = client.list_devices()?;
//! for device in &devices {
//!     println!("Device {}: {}", device.device_id, device.name);
//!     client.set_mode(device.device_id, Mode::Night)?;
//! }
//! # Ok::<(), pure_air_api::ApiError>(())
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod operation;
pub mod operations;
pub mod types;

pub use client::PureAirClient;
pub use endpoint::Endpoint;
pub use error::{ApiError, Result};
pub use operation::PureAirOperation;
pub use types::{Device, Light, Mode};

pub use signed_client::{ClientConfig, Credentials, Protocol, SignedResponse, DEFAULT_ENDPOINT};
