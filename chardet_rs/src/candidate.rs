//! A single encoding to probe, and the probe itself.

use std::fmt;

use encoding_rs as enc;

/// One entry of a candidate list.
///
/// Most encodings are carried as `encoding_rs` statics. Two members cover names
/// that `encoding_rs` has no single encoding for: `Utf16` resolves its
/// endianness from a leading BOM, and `Ascii` is the seven-bit set, which the
/// WHATWG label table would otherwise fold into windows-1252.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Candidate {
    /// An encoding probed exactly as-is.
    Exact(&'static enc::Encoding),
    /// UTF-16 with an optional BOM. Big-endian unless a little-endian BOM leads.
    Utf16,
    /// Seven-bit ASCII.
    Ascii,
}

impl Candidate {
    /// Resolves an encoding label to a candidate.
    /// Returns `None` for labels naming no known encoding; such a label is a
    /// configuration mistake of the caller, not a detection failure.
    ///
    /// # Example
    /// ```
    /// use chardet_rs::Candidate;
    ///
    /// assert_eq!("Shift_JIS", Candidate::for_label("sjis").unwrap().name());
    /// assert_eq!("UTF-16", Candidate::for_label("unicode").unwrap().name());
    /// assert_eq!("US-ASCII", Candidate::for_label("ascii").unwrap().name());
    /// assert!(Candidate::for_label("klingon").is_none());
    /// ```
    pub fn for_label(label: &str) -> Option<Candidate> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("us-ascii")
            || label.eq_ignore_ascii_case("ascii")
            || label.eq_ignore_ascii_case("ansi_x3.4-1968") {
            return Some(Candidate::Ascii);
        }
        if label.eq_ignore_ascii_case("utf-16")
            || label.eq_ignore_ascii_case("utf16")
            || label.eq_ignore_ascii_case("unicode") {
            return Some(Candidate::Utf16);
        }
        return enc::Encoding::for_label(label.as_bytes()).map(Candidate::Exact);
    }

    /// The canonical name of the encoding this candidate stands for.
    pub fn name(self: &Self) -> &'static str {
        match *self {
            Candidate::Exact(encoding) => encoding.name(),
            Candidate::Utf16 => "UTF-16",
            Candidate::Ascii => "US-ASCII",
        }
    }

    /// Tries a strict decode of the whole of `bytes`.
    /// Returns `true` iff decoding completes without a single malformed or
    /// unmappable sequence. Nothing is substituted and the input is not
    /// altered. A multi-byte character truncated at the end of the span counts
    /// as malformed, and zero bytes decode under every encoding.
    pub fn probe(self: &Self, bytes: &[u8]) -> bool {
        match *self {
            Candidate::Exact(encoding) => {
                return encoding.decode_without_bom_handling_and_without_replacement(bytes).is_some();
            },
            Candidate::Utf16 => {
                let (endian, bom_len) = if bytes.len() >= 2 && bytes[..2] == [0xFE, 0xFF] {
                    (enc::UTF_16BE, 2)
                } else if bytes.len() >= 2 && bytes[..2] == [0xFF, 0xFE] {
                    (enc::UTF_16LE, 2)
                } else {
                    (enc::UTF_16BE, 0)
                };
                return endian.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..]).is_some();
            },
            Candidate::Ascii => {
                return enc::mem::is_ascii(bytes);
            },
        }
    }

    /// Creates the decoder used to read content once this candidate has won.
    /// Unlike the probe, this decoder replaces malformed sequences with U+FFFD,
    /// so bytes beyond the examined head never abort a read.
    pub fn new_decoder(self: &Self) -> enc::Decoder {
        match *self {
            Candidate::Exact(encoding) => {
                return encoding.new_decoder_without_bom_handling();
            },
            Candidate::Utf16 => {
                // BOM sniffing switches this to UTF-16LE when a little-endian BOM leads.
                return enc::UTF_16BE.new_decoder();
            },
            Candidate::Ascii => {
                // encoding_rs has no ASCII decoder. ASCII is a UTF-8 subset, and
                // any non-ASCII tail bytes the probe never saw become U+FFFD.
                return enc::UTF_8.new_decoder_without_bom_handling();
            },
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.name());
    }
}
