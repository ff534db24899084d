use design_patterns::catalog::Demo;
use design_patterns::runner;
use std::process::ExitCode;

fn main() -> ExitCode {
    runner::run(Demo::Observer)
}
