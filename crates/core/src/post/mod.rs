mod requests;
mod responses;
mod sorting;
mod types;

pub use requests::PostPayload;
pub use responses::{ErrorMessage, StatusMessage, POST_DELETED, POST_NOT_FOUND};
pub use sorting::sort_newest_first;
pub use types::{timestamp_now, Post, OWNER_USER_ID};
