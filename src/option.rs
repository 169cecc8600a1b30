use structopt::StructOpt;
use std::path::PathBuf;

/// Detects the text encoding of files by trial decoding.
/// Candidate encodings are tried in order with strict decoders and the first one that
/// decodes the input without errors is reported.
/// If no candidate fits, an error message is emitted; there is no fallback guess.
#[derive(StructOpt, Debug, Default)]
#[structopt(verbatim_doc_comment, version=env!("CARGO_PKG_VERSION"))]
pub struct Opt {
    /// Prints version information.
    #[structopt(short, long)]
    pub version: bool,

    /// Comma-separated encodings to try, in priority order, replacing the default candidates.
    #[structopt(name = "ENCODING", short = "c", long = "candidates", use_delimiter = true)]
    pub candidates: Vec<String>,

    /// Bytes examined per probe window while scanning a stream.
    #[structopt(name = "BYTES", short = "b", long = "buffer-size", default_value = "16384")]
    pub buffer_size: usize,

    /// Number of head bytes examined by --print.
    /// Larger values detect more accurately at memory cost.
    #[structopt(name = "LENGTH", short = "n", long = "detect-length", default_value = "8192")]
    pub detect_length: usize,

    /// Decodes the inputs with the detected encoding and prints them as UTF-8
    /// instead of reporting the encoding name.
    #[structopt(short, long)]
    pub print: bool,

    /// Prints the default candidate encodings in probe order.
    #[structopt(short, long)]
    pub list: bool,

    /// Suppresses error messages when detection failed.
    #[structopt(short, long)]
    pub quiet: bool,

    /// Files (or directories) to process
    #[structopt(name = "FILE", parse(from_os_str))]
    pub paths: Vec<PathBuf>,
}

impl Opt {
    pub fn new() -> Self {
        let mut opt = Opt::default();
        opt.buffer_size = 16 * 1024;
        opt.detect_length = 8 * 1024;
        return opt;
    }
}
