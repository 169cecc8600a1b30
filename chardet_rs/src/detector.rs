//! Probing across an ordered candidate list.

use std::io;

use crate::candidate::Candidate;
use crate::constants;

/// Finds the first candidate encoding that strictly decodes the input.
///
/// The candidate list is order-significant: the earliest match wins, no matter
/// how plausible a later candidate would be. When no list is supplied,
/// [`DEFAULT_CANDIDATES`](crate::DEFAULT_CANDIDATES) is used.
///
/// # Example
/// ```
/// let detector = chardet_rs::CharsetDetector::new();
///
/// assert_eq!("UTF-8", detector.detect("ようこそ".as_bytes()).unwrap().name());
/// assert_eq!("GBK", detector.detect(b"\xD6\xD0\xCE\xC4").unwrap().name());
/// ```
pub struct CharsetDetector {
    candidates: Vec<Candidate>,
    buffer_size: usize,
}

impl CharsetDetector {
    pub fn new() -> Self {
        return CharsetDetector {
            candidates: vec![],
            buffer_size: constants::STREAM_BUFFER_SIZE,
        };
    }

    /// Replaces the default candidate list. The given order becomes the probe
    /// order. An empty slice puts the default list back.
    pub fn candidates(mut self: Self, candidates: &[Candidate]) -> Self {
        self.candidates = candidates.to_vec();
        return self;
    }

    /// Sets the window size used by `detect_stream()`.
    /// The size needs to be at least 16 bytes. Otherwise, the specified value is ignored.
    pub fn buffer_size(mut self: Self, size: usize) -> Self {
        if size < 16 {
            return self;
        }
        self.buffer_size = size;
        return self;
    }

    fn list(self: &Self) -> &[Candidate] {
        if self.candidates.len() == 0 {
            return &constants::DEFAULT_CANDIDATES;
        }
        return &self.candidates;
    }

    /// Returns the first candidate that strictly decodes `bytes`, or `None`
    /// when every candidate fails. Zero-length input decodes under every
    /// encoding, so it yields the first candidate of the list.
    pub fn detect(self: &Self, bytes: &[u8]) -> Option<Candidate> {
        for candidate in self.list().iter() {
            if candidate.probe(bytes) {
                return Some(*candidate);
            }
        }
        return None;
    }

    /// Like `detect()`, but for a window that is the completely filled head of
    /// a longer stream. A multi-byte character cut at the window edge makes
    /// every strict probe fail even when the encoding is right, so on a miss
    /// the whole candidate pass is repeated with 1, 2 and finally 3 trailing
    /// bytes removed, stopping at the first success.
    ///
    /// Do not use this for a window that holds the entire input; its bytes are
    /// already complete and a miss there is a real miss.
    pub fn detect_prefix(self: &Self, bytes: &[u8]) -> Option<Candidate> {
        if let Some(found) = self.detect(bytes) {
            return Some(found);
        }
        for cut in 1..=constants::MAX_TAIL_SHAVE {
            if cut >= bytes.len() {
                break;
            }
            if let Some(found) = self.detect(&bytes[..bytes.len() - cut]) {
                return Some(found);
            }
        }
        return None;
    }

    /// Reads the stream window by window and probes each window until one
    /// matches. An empty stream, or a stream whose every window misses,
    /// gives `Ok(None)`.
    ///
    /// The reader is consumed: detection stops at the first match, but the
    /// bytes read so far are gone. Use [`DetectReader`](crate::DetectReader)
    /// when the content is needed after detection.
    pub fn detect_stream<R: io::Read>(self: &Self, mut reader: R) -> io::Result<Option<Candidate>> {
        let mut window = vec![0u8; self.buffer_size];
        loop {
            let len = read_window(&mut reader, &mut window)?;
            if len == 0 {
                return Ok(None);
            }
            if let Some(found) = self.detect(&window[..len]) {
                return Ok(Some(found));
            }
            if len < window.len() { // the stream ended inside this window
                return Ok(None);
            }
        }
    }
}

// Fills `window` from `reader`, stopping short only at end of stream.
pub(crate) fn read_window<R: io::Read>(reader: &mut R, window: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < window.len() {
        let n = reader.read(&mut window[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    return Ok(filled);
}
