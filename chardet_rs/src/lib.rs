//! This is a character encoding detection library.
//! Detection here means trying strict decoders one by one over an ordered list of
//! candidate encodings and keeping the first candidate that decodes the input
//! without errors. Strictness is what makes this work: multi-byte encodings
//! reject most byte patterns that are not theirs, while a replacing decoder
//! would accept almost anything.
//!
//! The decoders come from [`encoding_rs`](https://github.com/hsivonen/encoding_rs).
//! This library drives them over byte slices and readers, and wraps a reader so
//! that its contents come out decoded to UTF-8 with whatever encoding the probe
//! found.

mod candidate;
mod constants;
mod detect_reader;
mod detector;

pub use candidate::Candidate;
pub use constants::DEFAULT_CANDIDATES;
pub use constants::DEFAULT_CANDIDATE_LABELS;
pub use constants::DETECT_LENGTH;
pub use constants::STREAM_BUFFER_SIZE;
pub use detect_reader::DetectReader;
pub use detector::CharsetDetector;
