
use std::io;
use std::path;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io{source: io::Error, path: path::PathBuf, message: String},
    Usage(String),
    Detect{path: path::PathBuf},
}

impl Error {
    pub fn is_detect(&self) -> bool {
        if let Error::Detect{..} = self {
            return true;
        }
        return false;
    }

    pub fn error_code(&self) -> i32 {
        match self {
            Error::Io{..} => exitcode::IOERR,
            Error::Usage(_) => exitcode::USAGE,
            Error::Detect{..} => exitcode::DATAERR,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io{source, path, message}
                => write!(f, "{}. {}\nCaused By: {}", message, path.to_string_lossy(), source),
            Error::Usage(message) => write!(f, "{}", message),
            Error::Detect{path}
                => write!(f, "Could not detect the encoding. {}", path.to_string_lossy()),
        }
    }
}
