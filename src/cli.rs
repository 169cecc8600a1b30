use crate::detect;
use crate::error;
use crate::option;

use chardet_rs as cd;
use std::fs;
use std::io;
use std::path;

pub fn dispatch(opt: &option::Opt) -> Result<(), error::Error> {
    if opt.list {
        list();
        return Ok(());
    } else if opt.version {
        version();
        return Ok(());
    } else {
        return run(opt);
    }
}

fn run(opt: &option::Opt) -> Result<(), error::Error> {

    let mut candidates = Vec::with_capacity(opt.candidates.len());
    for label in opt.candidates.iter() {
        match cd::Candidate::for_label(label) {
            Some(candidate) => candidates.push(candidate),
            None => return Err(error::Error::Usage(format!("Invalid encoding: {}", label))),
        }
    }

    let in_paths = &opt.paths;
    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();
    let writer: &mut dyn io::Write = &mut stdout_lock;

    if in_paths.len() == 0 {
        let stdin = &mut io::stdin();
        return detect::detect(stdin, writer, opt, &candidates, &"-".into());
    }

    for i in 0..in_paths.len() {
        if ! path::Path::exists(&in_paths[i]) {
            let source = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
            return Err(error::Error::Io { source, path: in_paths[i].to_owned(), message: "Error opening the file".into() });
        }
    }
    let mut result: Result<(), error::Error> = Ok(());
    for in_path in in_paths.iter() {
        let ret = traverse(writer, in_path, opt, &candidates);
        if let Err(err) = ret {
            if err.is_detect() {
                result = Err(err);
            } else {
                return Err(err);
            }
        }
    }
    return result;
}

fn traverse(writer: &mut dyn io::Write, in_path: &path::PathBuf, opt: &option::Opt, candidates: &[cd::Candidate])
    -> Result<(), error::Error> {
    if in_path.is_dir() {
        let mut result: Result<(), error::Error> = Ok(());
        let dir_ent = fs::read_dir(in_path)
            .map_err(|e| map_err(e, in_path, "Error reading the directory"))?;
        for child in dir_ent {
            let c = child
                .map_err(|e| map_err(e, in_path, "Error reading the directory"))?;
            let child_path = &c.path();
            let ret = traverse(writer, child_path, opt, candidates);
            if let Err(err) = ret {
                if err.is_detect() {
                    result = Err(err);
                } else {
                    return Err(err);
                }
            }
        }
        return result;
    } else {
        let reader = &mut fs::File::open(in_path)
            .map_err(|e| map_err(e, in_path, "Error opening the file"))?;
        return detect::detect(reader, writer, opt, candidates, in_path);
    }
}

fn map_err(e: io::Error, path: &path::PathBuf, msg: &str) -> error::Error {
    return error::Error::Io { source: e, path: path.into(), message: msg.into() };
}

fn list() {
    for label in cd::DEFAULT_CANDIDATE_LABELS.iter() {
        println!("{}", label);
    }
}

fn version() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
