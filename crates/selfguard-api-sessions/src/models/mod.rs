//! Request and response models.

pub mod events;
pub mod requests;
pub mod responses;

pub use events::RevocationEvent;
pub use requests::ConfirmPasswordRequest;
pub use responses::{
    DeviceListResponse, DeviceResponse, RevocationResponse, SessionListResponse, SessionResponse,
};
