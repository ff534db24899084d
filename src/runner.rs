// Shared entry point for the demo binaries.

use crate::catalog::Demo;
use crate::config::Settings;
use crate::console::Console;
use crate::error::Result;
use crate::telemetry;
use colored::Colorize;
use std::process::ExitCode;
use tracing::info;

/// Run `demos` in order on stdout, stopping at the first failure.
pub fn run_all(demos: &[Demo]) -> ExitCode {
    let settings = match Settings::discover() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(&settings);

    let mut console = Console::stdout(settings.color);
    match run_on(demos, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

pub fn run(demo: Demo) -> ExitCode {
    run_all(&[demo])
}

/// Print each demo under its title, separated by blank lines.
pub fn run_on(demos: &[Demo], console: &mut Console) -> Result<()> {
    for (i, demo) in demos.iter().enumerate() {
        if i > 0 {
            console.blank()?;
        }
        info!(demo = demo.name(), "starting demo");
        console.line(demo.title())?;
        console.line("=".repeat(demo.title().len()))?;
        console.blank()?;
        demo.run(console)?;
        info!(demo = demo.name(), "demo finished");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_on_prints_titles() {
        let mut console = Console::memory();
        run_on(&[Demo::Prototype, Demo::Builder], &mut console).unwrap();

        let lines = console.transcript();
        assert_eq!(lines[0], "Prototype Pattern");
        assert_eq!(lines[1], "=================");
        assert!(lines.contains(&"Builder Pattern".to_string()));
    }

    #[test]
    fn test_run_on_nothing() {
        let mut console = Console::memory();
        run_on(&[], &mut console).unwrap();
        assert!(console.transcript().is_empty());
    }
}
