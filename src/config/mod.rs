pub mod file;
pub mod link;

pub use file::PacerConfig;
pub use link::{ShareLink, percent_decode, percent_encode};
