// Copyright 2024 Martin Pool

//! `factorial`: print the factorial of the number given as the first argument.

use std::env;
use std::process::exit;

use anyhow::Result;
use tracing::debug;

use c_samples::atoi::atoi_bytes;
use c_samples::config::Config;
use c_samples::console;
use c_samples::error::FactorialError;
use c_samples::exit_code;
use c_samples::factorial::compute;
use c_samples::options::{Args, Options};
use c_samples::{NAME, VERSION};

fn main() -> Result<()> {
    let args = match Args::try_parse_argv() {
        Ok(args) => args,
        // --help and the like go to stdout and succeed.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            exit(exit_code::USAGE);
        }
    };
    console::setup_global_trace(args.level)?;

    if args.version {
        println!("{NAME} {VERSION}");
        return Ok(());
    }

    let Some(number) = args.number() else {
        let program = env::args_os()
            .next()
            .map(|arg0| arg0.to_string_lossy().into_owned())
            .unwrap_or_else(|| "factorial".to_owned());
        fail(FactorialError::MissingArgument { program });
    };
    let n = atoi_bytes(number.as_encoded_bytes());
    debug!(?number, n, "parsed argument");

    let config = Config::for_args(&args)?;
    let options = Options::new(&args, &config);
    debug!(?options);
    match compute(n, options.overflow) {
        Ok(result) => {
            println!("Factorial of {n} is {result}");
            Ok(())
        }
        Err(err) => fail(err),
    }
}

/// Print the diagnostic on stdout and exit with its code.
fn fail(err: FactorialError) -> ! {
    println!("{err}");
    exit(err.exit_code());
}
