use crate::error;
use crate::option;

use chardet_rs as cd;
use std::io;
use std::io::Write;
use std::path;

pub fn detect(reader: &mut dyn io::Read, writer: &mut dyn io::Write,
    opt: &option::Opt, candidates: &[cd::Candidate], path: &path::PathBuf)
    -> Result<(), error::Error> {

    if opt.print {
        return print_decoded(reader, writer, opt, candidates, path);
    }

    let detector = cd::CharsetDetector::new()
        .candidates(candidates)
        .buffer_size(opt.buffer_size);
    let found = detector.detect_stream(reader)
        .map_err(|e| map_io_err(e, path, "Error reading the input"))?;
    match found {
        Some(found) => {
            writeln!(writer, "{}: {}", path.to_string_lossy(), found.name())
                .map_err(|e| map_io_err(e, path, "Error writing output"))?;
            return Ok(());
        },
        None => {
            return Err(detect_failure(opt, path));
        },
    }
}

fn print_decoded(reader: &mut dyn io::Read, writer: &mut dyn io::Write,
    opt: &option::Opt, candidates: &[cd::Candidate], path: &path::PathBuf)
    -> Result<(), error::Error> {

    let mut reader = cd::DetectReader::new(reader)
        .detect_length(opt.detect_length)
        .candidates(candidates);
    match reader.encoding() {
        Ok(_) => {},
        Err(ref e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(detect_failure(opt, path));
        },
        Err(e) => return Err(map_io_err(e, path, "Error reading the input")),
    }
    io::copy(&mut reader, writer)
        .map(|_| ())
        .map_err(|e| map_io_err(e, path, "Error writing output"))?;
    return Ok(());
}

// Reported as it happens; a directory walk carries only one error to the exit path.
fn detect_failure(opt: &option::Opt, path: &path::PathBuf) -> error::Error {
    let err = error::Error::Detect { path: path.to_owned() };
    if ! opt.quiet {
        eprintln!("{}", err);
    }
    return err;
}

fn map_io_err(e: io::Error, path: &path::PathBuf, msg: &str) -> error::Error {
    return error::Error::Io { source: e, path: path.into(), message: msg.into() };
}
