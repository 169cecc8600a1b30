
use encoding_rs as enc;

use crate::candidate::Candidate;
use crate::constants;
use crate::detector::read_window;
use crate::detector::CharsetDetector;

/// A reader that sniffs the encoding of its source and hands out the content
/// decoded to UTF-8.
///
/// The source is not touched until the first read (or [`encoding()`](Self::encoding)
/// call). That first operation peeks up to `detect_length` head bytes, runs
/// detection on them once, and replays them in front of the remaining source
/// bytes, so no byte is lost or handed out twice. When no candidate fits
/// even after the cut-character retry, reads fail with an
/// [`InvalidData`](std::io::ErrorKind::InvalidData) error; callers wanting a
/// fallback encoding append it to their candidate list instead.
///
/// Reads take `&mut self` and instances hold per-stream state, so a
/// `DetectReader` is meant for a single owner on a single thread.
///
/// # Example
/// ```
/// use std::io::Read;
///
/// let src = b"\xD6\xD0\xCE\xC4ABC"; // 中文ABC in GBK
/// let mut reader = chardet_rs::DetectReader::new(src.as_ref());
/// let mut text = String::new();
/// reader.read_to_string(&mut text).unwrap();
///
/// assert_eq!("中文ABC", text);
/// ```
pub struct DetectReader<R: std::io::Read> {
    reader: R,
    detect_length: usize,
    candidates: Vec<Candidate>,
    detected: Option<Candidate>,
    detect_failed: bool,
    decoder: Option<enc::Decoder>,
    buffer: Vec<u8>,
    read_buffer: Vec<u8>,
    write_buffer: Vec<u8>,
    decode_done: bool,
    eof: bool,
}

impl <R: std::io::Read> DetectReader<R> {

    pub fn new(reader: R) -> Self {
        return Self {
            reader,
            detect_length: constants::DETECT_LENGTH,
            candidates: vec![],
            detected: None,
            detect_failed: false,
            decoder: None,
            buffer: vec![0u8; 8*1024],
            read_buffer: vec![],
            write_buffer: vec![],
            decode_done: false,
            eof: false,
        };
    }

    /// Sets the number of head bytes examined for detection.
    /// The size needs to be at least 4 bytes. Otherwise, the specified size is ignored.
    pub fn detect_length(mut self: Self, size: usize) -> Self {
        if size < 4 {
            return self;
        }
        self.detect_length = size;
        return self;
    }

    /// Replaces the default candidate list for the one-shot detection.
    pub fn candidates(mut self: Self, candidates: &[Candidate]) -> Self {
        self.candidates = candidates.to_vec();
        return self;
    }

    /// Sets the raw read buffer size.
    /// The size needs to be at least 16 bytes. Otherwise, the specified size is ignored.
    pub fn buffer_size(mut self: Self, size: usize) -> Self {
        if size < 16 {
            return self;
        }
        self.buffer = vec![0u8; size];
        return self;
    }

    /// The encoding the content is decoded with. Runs detection if no read has
    /// triggered it yet.
    pub fn encoding(self: &mut Self) -> std::io::Result<Candidate> {
        return self.ensure_decoder();
    }

    fn ensure_decoder(self: &mut Self) -> std::io::Result<Candidate> {
        if let Some(found) = self.detected {
            return Ok(found);
        }
        if self.detect_failed { // the head bytes are gone, a re-run would see an empty source
            return Err(Self::detect_error());
        }
        let mut window = vec![0u8; self.detect_length];
        let len = read_window(&mut self.reader, &mut window)?;
        let detector = CharsetDetector::new().candidates(&self.candidates);
        let found = if len == window.len() {
            // A filled window usually cuts the stream mid-way, possibly through
            // a multi-byte character, so the shaving retry applies.
            detector.detect_prefix(&window[..len])
        } else {
            detector.detect(&window[..len])
        };
        let found = match found {
            Some(found) => found,
            None => {
                self.detect_failed = true;
                return Err(Self::detect_error());
            },
        };
        window.truncate(len);
        self.read_buffer = window; // replayed before anything else from the source
        self.eof = len < self.detect_length;
        self.decoder = Some(found.new_decoder());
        self.detected = Some(found);
        return Ok(found);
    }

    fn detect_error() -> std::io::Error {
        let message = "no candidate encoding could decode the input";
        return std::io::Error::new(std::io::ErrorKind::InvalidData, message);
    }

    fn copy_from_write_buffer_to(self: &mut Self, buffer: &mut [u8]) -> usize {
        let min = std::cmp::min(buffer.len(), self.write_buffer.len());
        buffer[..min].copy_from_slice(&self.write_buffer[..min]);
        self.write_buffer = self.write_buffer[min..].into();
        return min;
    }

    fn run_decode(self: &mut Self, buffer: &mut [u8]) -> usize {
        if self.read_buffer.len() == 0 && !self.eof { // nothing to feed yet
            return 0;
        }

        let decoder = self.decoder.as_mut().expect("detection runs before any decoding");
        if buffer.len() > 16 { // buffer has enough bytes for encoding_rs to write output
            let (result, num_read, num_written, _) =
                decoder.decode_to_utf8(&self.read_buffer, buffer, self.eof);
            self.read_buffer = self.read_buffer[num_read..].to_vec();
            self.decode_done = (result == enc::CoderResult::InputEmpty) && self.eof;
            return num_written;
        } else { // if the buffer is insufficient, let's create a buffer by ourselves
            let write_buffer = &mut [0u8; 8*1024];
            let (result, num_read, num_written, _) =
                decoder.decode_to_utf8(&self.read_buffer, write_buffer, self.eof);
            self.read_buffer = self.read_buffer[num_read..].to_vec();
            self.write_buffer = write_buffer[..num_written].to_vec();
            self.decode_done = (result == enc::CoderResult::InputEmpty) && self.eof;
            if num_written > 0 {
                return self.copy_from_write_buffer_to(buffer);
            }
            return 0;
        }
    }
}

impl <R: std::io::Read> std::io::Read for DetectReader<R> {

    fn read(self: &mut Self, buffer: &mut [u8]) -> std::io::Result<usize> {

        if buffer.len() == 0 {
            return Ok(0);
        }

        self.ensure_decoder()?;

        if self.write_buffer.len() > 0 {
            let num_written = self.copy_from_write_buffer_to(buffer);
            return Ok(num_written);
        }

        if self.read_buffer.len() > 0 {
            let num_written = self.run_decode(buffer);
            if num_written > 0 {
                return Ok(num_written);
            }
        }

        loop {
            if self.decode_done {
                return Ok(0);
            }
            let n = self.reader.read(&mut self.buffer)?;
            self.read_buffer = self.buffer[..n].to_vec();
            self.eof = n == 0;
            let num_written = self.run_decode(buffer);
            if num_written > 0 {
                return Ok(num_written);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use encoding_rs as enc;

    use super::*;

    macro_rules! test_reader {
        ($name:ident, $src:expr, $expected:expr, $encoding:expr) => {
            #[test]
            fn $name() {
                let mut reader = DetectReader::new($src.as_ref());
                let mut text = String::new();
                reader.read_to_string(&mut text).unwrap();
                assert_eq!($expected, text);
                assert_eq!($encoding, reader.encoding().unwrap().name());
            }
        };
    }

    test_reader!(reader_utf8     , "ようこそ".as_bytes()               , "ようこそ" , "UTF-8");
    test_reader!(reader_gbk      , b"\xD6\xD0\xCE\xC4\x41\x42\x43"     , "中文ABC"  , "GBK");
    test_reader!(reader_utf16be  , b"\x30\x88\x30\x46\x30\x53\x30\x5D" , "ようこそ" , "UTF-16BE");
    test_reader!(reader_ascii    , b"Hello, world!"                    , "Hello, world!", "UTF-8");

    #[test]
    fn reader_small_destination() {
        let src = b"\xD6\xD0\xCE\xC4\x41\x42\x43";
        let mut reader = DetectReader::new(src.as_ref());
        let mut buff = [0u8; 4];
        let n = reader.read(&mut buff).unwrap();
        let mut buff2 = [0u8; 1024];
        let n2 = reader.read(&mut buff2).unwrap();
        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        let all = [&buff[..n], &buff2[..n2], &rest].concat();
        assert_eq!("中文ABC".as_bytes(), &all[..]);
    }

    #[test]
    fn reader_window_cuts_a_character() {
        // The 4-byte window ends inside the second character; the shaving retry
        // still resolves UTF-8, and the replay loses none of the 12 bytes.
        let src = "中中中中".as_bytes();
        let candidates = [Candidate::Exact(enc::UTF_8)];
        let mut reader = DetectReader::new(src)
            .detect_length(4)
            .candidates(&candidates);
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!("中中中中", text);
    }

    #[test]
    fn reader_window_on_character_boundary() {
        let src = "中文".as_bytes(); // 6 bytes, filling the window exactly
        let mut reader = DetectReader::new(src).detect_length(6);
        assert_eq!("UTF-8", reader.encoding().unwrap().name());
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!("中文", text);
    }

    #[test]
    fn reader_fail() {
        let src = b"\x80";
        let mut reader = DetectReader::new(src.as_ref());
        let err = reader.encoding().unwrap_err();
        assert_eq!(std::io::ErrorKind::InvalidData, err.kind());
        let mut buff = [0u8; 16];
        assert!(reader.read(&mut buff).is_err());
    }

    #[test]
    fn reader_fail_without_shaving_at_stream_end() {
        // The source ends inside the window, so its bytes are complete and the
        // miss is reported straight away.
        let src = b"\xD8\x00\x00\xD8";
        let mut reader = DetectReader::new(src.as_ref());
        let err = reader.encoding().unwrap_err();
        assert_eq!(std::io::ErrorKind::InvalidData, err.kind());
    }

    #[test]
    fn reader_empty() {
        let src = b"";
        let mut reader = DetectReader::new(src.as_ref());
        assert_eq!("UTF-8", reader.encoding().unwrap().name()); // first candidate
        let mut buff = Vec::new();
        assert_eq!(0, reader.read_to_end(&mut buff).unwrap());
    }

    #[test]
    fn reader_custom_candidates() {
        let src = b"\xA4\xA4\xA4\xE5"; // 中文 in BIG5, which the default order reads as GBK
        let candidates = [Candidate::Exact(enc::BIG5)];
        let mut reader = DetectReader::new(src.as_ref()).candidates(&candidates);
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!("中文", text);
        assert_eq!("Big5", reader.encoding().unwrap().name());
    }

    #[test]
    fn reader_utf16_bom_switches_endianness() {
        let src = b"\xFF\xFE\x88\x30\x46\x30"; // ようこ... little-endian with BOM
        let candidates = [Candidate::Utf16];
        let mut reader = DetectReader::new(src.as_ref()).candidates(&candidates);
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!("よう", text);
    }

    #[test]
    fn reader_matches_direct_decode() {
        // Reading through the reader equals decoding the whole input directly.
        let mut src: Vec<u8> = Vec::new();
        for _ in 0..1000 {
            src.extend_from_slice(b"\xD6\xD0\xCE\xC4\x41\x42\x43");
        }
        let mut reader = DetectReader::new(&src[..]).detect_length(1024);
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        let (direct, _) = enc::GBK.decode_without_bom_handling(&src);
        assert_eq!(direct, text);
    }
}
