pub mod bit_utils;
pub mod codec;
pub mod error;
pub mod metadata;
pub mod version_db;

pub use bit_utils::*;
pub use codec::*;
pub use error::*;
pub use metadata::*;
pub use version_db::*;
