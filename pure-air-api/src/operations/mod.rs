//! Purifier API operations, one per endpoint
//!
//! Each module pairs a request shape with its response extraction. The
//! three control commands share the `controlDeviceInfo` operation.

pub mod control;
pub mod device_info;
pub mod list_devices;
pub mod login;
pub mod sync_content;

pub use control::{Command, ControlDeviceOperation, ControlDeviceRequest};
pub use device_info::{QueryDeviceInfoOperation, QueryDeviceInfoRequest};
pub use list_devices::{ListDevicesOperation, ListDevicesRequest};
pub use login::{LoginOperation, LoginRequest, LoginResponse};
pub use sync_content::{SyncContentOperation, SyncContentRequest};
