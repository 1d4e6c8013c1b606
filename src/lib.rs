//! # qrstream
//!
//! Builds the data-bit stream of a QR symbol, the part of QR generation that
//! comes before error correction coding and module placement.
//!
//! ## Features
//!
//! - **Mode Selection**: Picks the narrowest of Numeric, Alphanumeric and Byte mode for the input
//! - **Version Selection**: Picks the smallest bundled version that holds the input at an error correction level
//! - **Segment Packing**: Bit-exact packing of digit triples, alphanumeric pairs and UTF-8 bytes
//! - **Termination & Padding**: Terminator, byte alignment and alternating pad codewords up to exact capacity
//!
//! ## Quick Start
//!
//! ```rust
//! use qrstream::{build_data_stream, ECLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = build_data_stream("01234567", ECLevel::L)?;
//!
//! assert_eq!(plan.version().number(), 1);
//! assert_eq!(plan.data().len(), 152);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrstream::{ECLevel, Mode, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = QRBuilder::new("HELLO WORLD")
//!     .version(Version::new(2)?)   // if not provided, finds smallest version to fit data
//!     .mode(Mode::Alphanumeric)    // if not provided, finds narrowest mode covering data
//!     .ec_level(ECLevel::Q)        // if not provided, defaults to ECLevel::M
//!     .build()?;
//!
//! let codewords: &[u8] = plan.data().data();
//! assert_eq!(codewords.len(), 22);
//! # Ok(())
//! # }
//! ```
//!
//! ## Versions
//!
//! Versions 1-4 (21x21 to 33x33 modules) are bundled. Character count indicator
//! widths are defined for versions 1-40.
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! The level only budgets capacity here; codewords are computed downstream.

pub mod builder;
pub(crate) mod common;

pub use builder::QRBuilder;
pub use common::bit_utils::BitStream;
pub use common::codec::{
    build_data_stream, encode_with, select_version, AlphanumericEncoder, ByteEncoder,
    EncodingPlan, Mode, NumericEncoder, SegmentEncoder,
};
pub use common::error::{QRError, QRResult};
pub use common::metadata::{char_cnt_bits, ECLevel, Version};
pub use common::version_db::{lookup, version_count, CharCapacity, VersionInfo};
pub(crate) use common::*;
