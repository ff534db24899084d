// Runs the demos named on the command line, or every demo when none is given.
//
//   cargo run --bin patterns -- adapter decorator

use design_patterns::catalog::Demo;
use design_patterns::runner;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return runner::run_all(&Demo::ALL);
    }

    let mut demos = Vec::with_capacity(args.len());
    for arg in &args {
        match arg.parse::<Demo>() {
            Ok(demo) => demos.push(demo),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }
    runner::run_all(&demos)
}
