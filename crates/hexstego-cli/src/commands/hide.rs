use std::path::PathBuf;

use hexstego_core::{CodecOptions, HideReport};
use log::debug;

use crate::cli::ask_for_message;
use crate::CliResult;

/// Hides a text message in a PNG image
#[derive(Debug, PartialEq, Eq)]
pub struct HideRequest {
    pub image: PathBuf,
    pub output: Option<PathBuf>,
    pub message: Option<String>,
    pub options: CodecOptions,
}

impl HideRequest {
    pub fn execute(self) -> CliResult<HideReport> {
        let message = match self.message {
            Some(message) => message,
            None => ask_for_message()?,
        };

        debug!(
            "Hiding {} bytes in {:?} with {:?}",
            message.len(),
            self.image,
            self.options
        );
        let report = hexstego_core::api::hide::prepare()
            .with_options(self.options)
            .with_image(&self.image)
            .use_output(self.output)
            .use_message(Some(message))
            .execute()?;
        debug!("{report:?}");

        Ok(report)
    }

    pub fn run(self) -> CliResult<()> {
        self.execute()?;
        println!("Completed!");
        Ok(())
    }
}
