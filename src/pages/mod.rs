//! Host screens. Presentational only; placement is decided by the gate.

pub mod home;
pub mod landing;
pub mod sign_in;
pub mod sign_up;
