pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use crate::codec::Mode;
    use crate::common::bit_utils::BitStream;
    use crate::common::error::{QRError, QRResult};
    use crate::metadata::{ECLevel, Version};

    use super::writer::StreamWriter;

    /// Data stream of one symbol, ready for error correction coding.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EncodingPlan {
        mode: Mode,
        version: Version,
        ec_level: ECLevel,
        mode_indicator: BitStream,
        char_count_indicator: BitStream,
        segments: Vec<BitStream>,
        data: BitStream,
    }

    impl EncodingPlan {
        pub fn mode(&self) -> Mode {
            self.mode
        }

        pub fn version(&self) -> Version {
            self.version
        }

        pub fn ec_level(&self) -> ECLevel {
            self.ec_level
        }

        pub fn mode_indicator(&self) -> &BitStream {
            &self.mode_indicator
        }

        pub fn char_count_indicator(&self) -> &BitStream {
            &self.char_count_indicator
        }

        pub fn segments(&self) -> &[BitStream] {
            &self.segments
        }

        /// Final terminated and padded stream.
        pub fn data(&self) -> &BitStream {
            &self.data
        }

        pub fn into_data(self) -> BitStream {
            self.data
        }

        pub fn bit_capacity(&self) -> usize {
            self.version.data_bit_capacity(self.ec_level)
        }
    }

    /// Smallest supported version whose capacity for `mode` at `ecl` holds
    /// `len` characters.
    pub fn select_version(len: usize, mode: Mode, ecl: ECLevel) -> QRResult<Version> {
        Version::iter().find(|v| v.char_capacity(mode, ecl) >= len).ok_or(QRError::CapacityExceeded)
    }

    pub fn build_data_stream(text: &str, ecl: ECLevel) -> QRResult<EncodingPlan> {
        let mode = Mode::select(text);
        let ver = select_version(text.len(), mode, ecl)?;
        log::debug!("Selected mode {mode:?}, version {}, ec level {ecl:?}", *ver);
        encode_with(text, mode, ver, ecl)
    }

    /// Encodes `text` with a fixed mode and version. Fails rather than
    /// switching to a wider mode or larger version.
    pub fn encode_with(
        text: &str,
        mode: Mode,
        ver: Version,
        ecl: ECLevel,
    ) -> QRResult<EncodingPlan> {
        let segments = mode.encode(text)?;
        let len = text.len();
        if len > ver.char_capacity(mode, ecl) {
            return Err(QRError::CapacityExceeded);
        }

        let mode_indicator = mode_indicator(mode, ver)?;
        let char_count_indicator = char_count_indicator(len, mode, ver)?;

        let bcap = ver.data_bit_capacity(ecl);
        let mut writer = StreamWriter::new(bcap);
        writer.push_header(&mode_indicator, &char_count_indicator);
        writer.push_segments(&segments);
        if writer.len() > bcap {
            return Err(QRError::CapacityExceeded);
        }
        writer.push_terminator();
        writer.push_padding_bits();
        writer.push_padding_codewords();
        let data = writer.finish();

        log::debug!(
            "Encoded {len} chars into {} segment chunks, {} of {bcap} bits",
            segments.len(),
            data.len()
        );

        Ok(EncodingPlan {
            mode,
            version: ver,
            ec_level: ecl,
            mode_indicator,
            char_count_indicator,
            segments,
            data,
        })
    }

    pub fn mode_indicator(mode: Mode, ver: Version) -> QRResult<BitStream> {
        let mut bs = BitStream::new();
        bs.push_bits(mode.indicator(), ver.mode_bits())?;
        Ok(bs)
    }

    pub fn char_count_indicator(len: usize, mode: Mode, ver: Version) -> QRResult<BitStream> {
        let width = ver.char_cnt_bits(mode)?;
        if len >> width != 0 {
            return Err(QRError::IndicatorOverflow);
        }
        let mut bs = BitStream::new();
        bs.push_bits(len, width)?;
        Ok(bs)
    }

    #[cfg(test)]
    mod encode_tests {
        use test_case::test_case;

        use super::{
            build_data_stream, char_count_indicator, encode_with, mode_indicator,
            select_version, ECLevel, Mode, QRError, Version,
        };

        #[test_case(8, Mode::Numeric, ECLevel::L, 1)]
        #[test_case(41, Mode::Numeric, ECLevel::L, 1)]
        #[test_case(42, Mode::Numeric, ECLevel::L, 2)]
        #[test_case(20, Mode::Alphanumeric, ECLevel::M, 1)]
        #[test_case(21, Mode::Alphanumeric, ECLevel::M, 2)]
        #[test_case(7, Mode::Byte, ECLevel::H, 1)]
        #[test_case(8, Mode::Byte, ECLevel::H, 2)]
        #[test_case(34, Mode::Byte, ECLevel::H, 4)]
        #[test_case(187, Mode::Numeric, ECLevel::L, 4)]
        #[test_case(0, Mode::Byte, ECLevel::H, 1)]
        fn test_select_version(len: usize, mode: Mode, ecl: ECLevel, exp_ver: usize) {
            let ver = select_version(len, mode, ecl).unwrap();
            assert_eq!(ver.number(), exp_ver);
        }

        #[test_case(35, Mode::Byte, ECLevel::H)]
        #[test_case(188, Mode::Numeric, ECLevel::L)]
        #[test_case(115, Mode::Alphanumeric, ECLevel::L)]
        fn test_select_version_capacity_exceeded(len: usize, mode: Mode, ecl: ECLevel) {
            assert_eq!(select_version(len, mode, ecl), Err(QRError::CapacityExceeded));
        }

        #[test]
        fn test_mode_indicator() {
            let ver = Version::new(1).unwrap();
            assert_eq!(mode_indicator(Mode::Numeric, ver).unwrap().to_string(), "0001");
            assert_eq!(mode_indicator(Mode::Alphanumeric, ver).unwrap().to_string(), "0010");
            assert_eq!(mode_indicator(Mode::Byte, ver).unwrap().to_string(), "0100");
        }

        #[test]
        fn test_char_count_indicator() {
            let ver = Version::new(1).unwrap();
            let cci = char_count_indicator(1, Mode::Numeric, ver).unwrap();
            assert_eq!(cci.to_string(), "0000000001");
            let cci = char_count_indicator(5, Mode::Alphanumeric, ver).unwrap();
            assert_eq!(cci.to_string(), "000000101");
            let cci = char_count_indicator(255, Mode::Byte, ver).unwrap();
            assert_eq!(cci.to_string(), "11111111");
        }

        #[test]
        fn test_char_count_indicator_overflow() {
            let ver = Version::new(1).unwrap();
            assert_eq!(
                char_count_indicator(1024, Mode::Numeric, ver),
                Err(QRError::IndicatorOverflow)
            );
            assert_eq!(char_count_indicator(512, Mode::Alphanumeric, ver), Err(QRError::IndicatorOverflow));
            assert_eq!(char_count_indicator(256, Mode::Byte, ver), Err(QRError::IndicatorOverflow));
        }

        #[test]
        fn test_build_numeric() {
            let plan = build_data_stream("01234567", ECLevel::L).unwrap();
            assert_eq!(plan.mode(), Mode::Numeric);
            assert_eq!(plan.version().number(), 1);
            let widths = plan.segments().iter().map(|s| s.len()).collect::<Vec<_>>();
            assert_eq!(widths, vec![10, 10, 7]);
            assert_eq!(plan.data().len(), 152);
            assert_eq!(
                plan.data().data()[..5],
                [0b00010000, 0b00100000, 0b00001100, 0b01010110, 0b01100001]
            );
        }

        #[test]
        fn test_build_alphanumeric() {
            let plan = build_data_stream("AC-42", ECLevel::M).unwrap();
            assert_eq!(plan.mode(), Mode::Alphanumeric);
            assert_eq!(plan.version().number(), 1);
            assert_eq!(plan.mode_indicator().to_string(), "0010");
            assert_eq!(plan.char_count_indicator().to_string(), "000000101");
            let chunks = plan.segments().iter().map(|s| s.to_string()).collect::<Vec<_>>();
            assert_eq!(chunks, vec!["00111001110", "11100111001", "000010"]);
            assert_eq!(plan.data().len(), 128);
        }

        #[test]
        fn test_build_single_digit() {
            let plan = build_data_stream("5", ECLevel::H).unwrap();
            assert_eq!(plan.version().number(), 1);
            assert_eq!(plan.data().len(), 72);
            // 18 bits of header + data, 4 terminator bits, 2 padding bits
            let head = "0001".to_string() + "0000000001" + "0101" + "0000" + "00";
            let bits = plan.data().to_string();
            assert_eq!(bits[..24], head);
            assert_eq!(bits[24..], "11101100".to_string() + "00010001" + "11101100" + "00010001" + "11101100" + "00010001");
        }

        #[test]
        fn test_build_capacity_exceeded() {
            let text = "a".repeat(35);
            assert_eq!(build_data_stream(&text, ECLevel::H), Err(QRError::CapacityExceeded));
        }

        #[test]
        fn test_build_byte_multibyte() {
            let plan = build_data_stream("é", ECLevel::L).unwrap();
            assert_eq!(plan.mode(), Mode::Byte);
            assert_eq!(plan.char_count_indicator().to_string(), "00000010");
            assert_eq!(plan.segments().len(), 2);
        }

        #[test]
        fn test_build_empty() {
            let plan = build_data_stream("", ECLevel::Q).unwrap();
            assert_eq!(plan.mode(), Mode::Numeric);
            assert_eq!(plan.version().number(), 1);
            assert!(plan.segments().is_empty());
            assert_eq!(plan.data().len(), 104);
        }

        #[test]
        fn test_encode_with_full_capacity() {
            // 4 + 10 + 5 * 10 + 7 = 71 bits, one terminator bit fills version 1 H
            let text = "1".repeat(17);
            let ver = Version::new(1).unwrap();
            let plan = encode_with(&text, Mode::Numeric, ver, ECLevel::H).unwrap();
            assert_eq!(plan.data().len(), 72);
            assert_eq!(plan.data().get(71), Some(false));
        }

        #[test]
        fn test_encode_with_invalid_char() {
            let ver = Version::new(2).unwrap();
            assert_eq!(
                encode_with("12A", Mode::Numeric, ver, ECLevel::L),
                Err(QRError::InvalidChar('A'))
            );
            assert_eq!(
                encode_with("ab", Mode::Alphanumeric, ver, ECLevel::L),
                Err(QRError::InvalidChar('a'))
            );
        }

        #[test]
        fn test_encode_with_too_small_version() {
            let text = "A".repeat(21);
            let ver = Version::new(1).unwrap();
            assert_eq!(
                encode_with(&text, Mode::Alphanumeric, ver, ECLevel::M),
                Err(QRError::CapacityExceeded)
            );
            let ver = Version::new(2).unwrap();
            assert!(encode_with(&text, Mode::Alphanumeric, ver, ECLevel::M).is_ok());
        }

        #[test]
        fn test_encode_with_wider_mode() {
            let ver = Version::new(1).unwrap();
            let plan = encode_with("123", Mode::Byte, ver, ECLevel::L).unwrap();
            assert_eq!(plan.mode(), Mode::Byte);
            assert_eq!(plan.segments().len(), 3);
            assert_eq!(plan.data().len(), 152);
        }
    }
}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::codec::PADDING_CODEWORDS;
    use crate::common::bit_utils::BitStream;

    #[derive(Debug, PartialEq, Eq, Copy, Clone)]
    pub(super) enum WriterState {
        Empty,
        HeaderWritten,
        SegmentsWritten,
        Terminated,
        Padded,
        Final,
    }

    /// Assembles header, segments, terminator and padding into a stream of
    /// exactly `capacity` bits.
    pub struct StreamWriter {
        out: BitStream,
        capacity: usize,
        state: WriterState,
    }

    impl StreamWriter {
        pub fn new(capacity: usize) -> Self {
            Self { out: BitStream::with_capacity(capacity), capacity, state: WriterState::Empty }
        }

        pub fn len(&self) -> usize {
            self.out.len()
        }

        #[cfg(test)]
        pub(super) fn state(&self) -> WriterState {
            self.state
        }

        pub fn push_header(&mut self, mode_indicator: &BitStream, char_count_indicator: &BitStream) {
            debug_assert!(self.state == WriterState::Empty, "Header after {:?}", self.state);

            self.out.extend(mode_indicator);
            self.out.extend(char_count_indicator);
            self.state = WriterState::HeaderWritten;
        }

        pub fn push_segments(&mut self, segments: &[BitStream]) {
            debug_assert!(self.state == WriterState::HeaderWritten, "Segments after {:?}", self.state);

            segments.iter().for_each(|s| self.out.extend(s));
            self.state = WriterState::SegmentsWritten;
        }

        pub fn push_terminator(&mut self) {
            debug_assert!(
                self.state == WriterState::SegmentsWritten,
                "Terminator after {:?}",
                self.state
            );

            let bit_len = self.out.len();
            if bit_len >= self.capacity {
                log::trace!("Stream already at capacity {}, no terminator", self.capacity);
                self.state = WriterState::Final;
                return;
            }
            let term_len = std::cmp::min(4, self.capacity - bit_len);
            self.push_zeros(term_len);
            self.state = WriterState::Terminated;
        }

        pub fn push_padding_bits(&mut self) {
            if self.state == WriterState::Final {
                return;
            }
            debug_assert!(self.state == WriterState::Terminated, "Padding after {:?}", self.state);

            let offset = self.out.len() & 7;
            if offset > 0 {
                // Never past capacity
                let padding_bits_len = std::cmp::min(8 - offset, self.capacity - self.out.len());
                self.push_zeros(padding_bits_len);
            }
            self.state = WriterState::Padded;
        }

        pub fn push_padding_codewords(&mut self) {
            if self.state == WriterState::Final {
                return;
            }
            debug_assert!(self.state == WriterState::Padded, "Codewords after {:?}", self.state);

            let remain_byte_capacity = (self.capacity - self.out.len()) >> 3;
            log::trace!("Padding with {remain_byte_capacity} codewords");
            PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
                for i in (0..8).rev() {
                    self.out.push((pc >> i) & 1 == 1);
                }
            });
            self.state = WriterState::Final;
        }

        pub fn finish(self) -> BitStream {
            debug_assert!(self.state == WriterState::Final, "Unfinished stream: {:?}", self.state);
            self.out
        }

        fn push_zeros(&mut self, n: usize) {
            (0..n).for_each(|_| self.out.push(false));
        }
    }

}
