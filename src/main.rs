use structopt::StructOpt;
use radixconv::option;

fn main() -> () {
    let opt: option::Opt = StructOpt::from_args();
    let result = {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        radixconv::cli::dispatch(&opt, &mut stdout.lock(), &mut stderr.lock())
    };
    match result {
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(err.error_code());
        },
        Ok(_) => {
            std::process::exit(exitcode::OK);
        },
    };
}
