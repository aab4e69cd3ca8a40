mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{codes, Result, StorageError};
pub use http_mapping::storage_error_to_envelope;
pub use traits::PostRepository;
pub use types::ScanLimit;
