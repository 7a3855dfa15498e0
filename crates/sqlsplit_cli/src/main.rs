//! sqlsplit CLI

use std::io;
use std::process::ExitCode;

use sqlsplit_cli::{init_tracing, parse_args, read_input, run, Command, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Split(args)) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(err.exit_code());
        }
    };

    let result = read_input(args.input.as_deref()).and_then(|input| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run(&args, &input, &mut out)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
