use super::error::{QRError, QRResult};

// Character capacity
//------------------------------------------------------------------------------

/// Max characters a (version, ec level) pair holds in each mode.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct CharCapacity {
    pub numeric: usize,
    pub alphanumeric: usize,
    pub byte: usize,
}

impl CharCapacity {
    pub const fn new(numeric: usize, alphanumeric: usize, byte: usize) -> Self {
        Self { numeric, alphanumeric, byte }
    }
}

// Version info
//------------------------------------------------------------------------------

/// Capacity record of one version. Indexed by `ECLevel as usize` (L, M, Q, H).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct VersionInfo {
    pub number: usize,
    pub width: usize,
    pub char_capacity: [CharCapacity; 4],
    pub data_bits: [usize; 4],
}

/// Number of versions in the bundled table.
pub fn version_count() -> usize {
    VERSION_DB.len()
}

pub fn lookup(number: usize) -> QRResult<&'static VersionInfo> {
    number.checked_sub(1).and_then(|i| VERSION_DB.get(i)).ok_or(QRError::UnknownVersion)
}

#[cfg(test)]
mod version_db_tests {
    use super::{lookup, version_count, VERSION_DB};
    use crate::common::error::QRError;

    #[test]
    fn test_lookup() {
        assert_eq!(version_count(), 4);
        for v in 1..=version_count() {
            let info = lookup(v).unwrap();
            assert_eq!(info.number, v);
            assert_eq!(info.width, v * 4 + 17);
        }
        assert_eq!(lookup(0), Err(QRError::UnknownVersion));
        assert_eq!(lookup(5), Err(QRError::UnknownVersion));
    }

    #[test]
    fn test_strictly_increasing_capacity() {
        for pair in VERSION_DB.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            for l in 0..4 {
                assert!(lo.char_capacity[l].numeric < hi.char_capacity[l].numeric);
                assert!(lo.char_capacity[l].alphanumeric < hi.char_capacity[l].alphanumeric);
                assert!(lo.char_capacity[l].byte < hi.char_capacity[l].byte);
                assert!(lo.data_bits[l] < hi.data_bits[l]);
            }
        }
    }

    #[test]
    fn test_levels_decreasing_within_version() {
        for info in VERSION_DB.iter() {
            for l in 1..4 {
                assert!(info.data_bits[l] < info.data_bits[l - 1]);
                assert!(info.char_capacity[l].byte < info.char_capacity[l - 1].byte);
            }
        }
    }
}

// Global constants
//------------------------------------------------------------------------------

pub static VERSION_DB: [VersionInfo; 4] = [
    VersionInfo {
        number: 1,
        width: 21,
        char_capacity: [
            CharCapacity::new(41, 25, 17),
            CharCapacity::new(34, 20, 14),
            CharCapacity::new(27, 16, 11),
            CharCapacity::new(17, 10, 7),
        ],
        data_bits: [152, 128, 104, 72],
    },
    VersionInfo {
        number: 2,
        width: 25,
        char_capacity: [
            CharCapacity::new(77, 47, 32),
            CharCapacity::new(63, 38, 26),
            CharCapacity::new(48, 29, 20),
            CharCapacity::new(34, 20, 14),
        ],
        data_bits: [272, 224, 176, 128],
    },
    VersionInfo {
        number: 3,
        width: 29,
        char_capacity: [
            CharCapacity::new(127, 77, 53),
            CharCapacity::new(101, 61, 42),
            CharCapacity::new(77, 47, 32),
            CharCapacity::new(58, 35, 24),
        ],
        data_bits: [440, 352, 272, 208],
    },
    VersionInfo {
        number: 4,
        width: 33,
        char_capacity: [
            CharCapacity::new(187, 114, 78),
            CharCapacity::new(149, 90, 62),
            CharCapacity::new(111, 67, 46),
            CharCapacity::new(82, 50, 34),
        ],
        data_bits: [640, 512, 384, 288],
    },
];
