pub mod error;
pub mod health;
pub mod posts;
pub mod response;

pub use error::ApiError;
pub use response::EnvelopeResponse;
