pub mod api;
pub mod collation;
pub mod error;

pub use api::CountryDirectory;
pub use error::{DirectoryError, DirectoryResult};
