use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use hexstego_core::SteganoError;

use crate::cli::{CliArgs, Request};

mod cli;
mod commands;

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let result = match CliArgs::parse().into_request() {
        Request::Hide(request) => request.run(),
        Request::Retrieve(request) => request.run(),
        Request::ShowUsage => {
            println!("{}", CliArgs::command().render_usage());
            Ok(())
        }
    };

    report_mode_error(result, &mut io::stdout())
}

/// an image that cannot carry a message is an answer, not a crash
fn report_mode_error(result: CliResult<()>, out: &mut impl Write) -> CliResult<()> {
    match result {
        Err(e @ SteganoError::UnsupportedFormat(_)) => {
            writeln!(out, "{e}")?;
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_print_unsupported_images_and_succeed() {
        let mut out = Vec::new();
        let result = report_mode_error(
            Err(SteganoError::UnsupportedFormat("L8".to_string())),
            &mut out,
        );

        assert!(result.is_ok());
        let printed = String::from_utf8(out).expect("output is not UTF-8");
        assert!(printed.starts_with("Incorrect image mode detected: L8"));
        assert!(printed.ends_with('\n'));
    }

    #[test]
    fn should_pass_other_errors_through() {
        let mut out = Vec::new();
        let result = report_mode_error(Err(SteganoError::InvalidImageMedia), &mut out);

        assert!(matches!(result, Err(SteganoError::InvalidImageMedia)));
        assert!(out.is_empty());
    }

    #[test]
    fn should_stay_quiet_on_success() {
        let mut out = Vec::new();

        assert!(report_mode_error(Ok(()), &mut out).is_ok());
        assert!(out.is_empty());
    }
}
