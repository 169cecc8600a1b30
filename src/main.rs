use structopt::StructOpt;
use adet::option;

fn main() -> () {
    let opt: option::Opt = StructOpt::from_args();
    match adet::cli::dispatch(&opt) {
        Err(err) => {
            if err.is_detect() {
                // the failure message is already printed unless --quiet asked for silence
                if opt.quiet {
                    std::process::exit(exitcode::OK);
                }
            } else {
                eprintln!("{}", err);
            }
            std::process::exit(err.error_code());
        },
        Ok(_) => {
            std::process::exit(exitcode::OK);
        },
    };
}
