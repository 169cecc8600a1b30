use encoding_rs as enc;

use crate::candidate::Candidate;

/// Number of head bytes a `DetectReader` examines before deciding.
pub const DETECT_LENGTH: usize = 8 * 1024;

/// Bytes read per probe window when scanning a whole stream.
pub const STREAM_BUFFER_SIZE: usize = 16 * 1024;

// The widest code unit among the candidates is 4 bytes, so probing again with
// up to 3 trailing bytes removed is enough to step over a character cut at the
// window edge. Revisit if a wider multi-byte encoding ever joins the defaults.
pub(crate) const MAX_TAIL_SHAVE: usize = 3;

/// The default candidates, probed in order. The first one whose strict decode
/// succeeds wins, so the order is a tie-break priority, not an accuracy rank.
/// GB2312 and UNICODE are label aliases of GBK and UTF-16 under encoding_rs;
/// their entries are kept so the documented probe order stays intact.
pub static DEFAULT_CANDIDATES: [Candidate; 10] = [
    Candidate::Exact(&enc::UTF_8_INIT),    // UTF-8
    Candidate::Exact(&enc::GBK_INIT),      // GBK
    Candidate::Exact(&enc::GBK_INIT),      // GB2312
    Candidate::Exact(&enc::GB18030_INIT),  // GB18030
    Candidate::Exact(&enc::UTF_16BE_INIT), // UTF-16BE
    Candidate::Exact(&enc::UTF_16LE_INIT), // UTF-16LE
    Candidate::Utf16,                      // UTF-16
    Candidate::Exact(&enc::BIG5_INIT),     // BIG5
    Candidate::Utf16,                      // UNICODE
    Candidate::Ascii,                      // US-ASCII
];

/// The labels of the default candidates, in probe order, as accepted by
/// [`Candidate::for_label`].
pub static DEFAULT_CANDIDATE_LABELS: [&str; 10] = [
    "UTF-8",
    "GBK",
    "GB2312",
    "GB18030",
    "UTF-16BE",
    "UTF-16LE",
    "UTF-16",
    "BIG5",
    "UNICODE",
    "US-ASCII",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_to_defaults() {
        for i in 0..DEFAULT_CANDIDATE_LABELS.len() {
            let resolved = Candidate::for_label(DEFAULT_CANDIDATE_LABELS[i]);
            assert_eq!(Some(DEFAULT_CANDIDATES[i]), resolved, "label {}", DEFAULT_CANDIDATE_LABELS[i]);
        }
    }
}
