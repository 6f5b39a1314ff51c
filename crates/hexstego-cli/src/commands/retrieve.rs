use std::path::PathBuf;

use hexstego_core::CodecOptions;
use log::debug;

use crate::CliResult;

/// Retrieves a hidden text message from a PNG image
#[derive(Debug, PartialEq, Eq)]
pub struct RetrieveRequest {
    pub image: PathBuf,
    pub options: CodecOptions,
}

impl RetrieveRequest {
    pub fn execute(self) -> CliResult<String> {
        debug!("Retrieving from {:?} with {:?}", self.image, self.options);
        hexstego_core::api::retrieve::prepare()
            .with_options(self.options)
            .from_secret_file(&self.image)
            .execute()
    }

    pub fn run(self) -> CliResult<()> {
        println!("{}", self.execute()?);
        Ok(())
    }
}
