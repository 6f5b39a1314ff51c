use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use dialoguer::Input;
use hexstego_core::{BitLayout, CodecOptions, SteganoError};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Target image to hide a message in, it gets overwritten unless --out is given
    #[arg(
        short = 'e',
        long = "encode",
        value_name = "target file",
        conflicts_with = "retrieve"
    )]
    pub hide: Option<PathBuf>,

    /// Target image to retrieve a message from
    #[arg(short = 'd', long = "decode", value_name = "target file")]
    pub retrieve: Option<PathBuf>,

    /// A text message that will be hidden, asked for on stdin when missing
    #[arg(
        short,
        long,
        value_name = "text message",
        requires = "hide",
        conflicts_with = "retrieve"
    )]
    pub message: Option<String>,

    /// Final image will be stored as this file instead
    #[arg(
        short,
        long = "out",
        value_name = "output image file",
        requires = "hide",
        conflicts_with = "retrieve"
    )]
    pub output: Option<PathBuf>,

    /// Lay out the message as one big binary number, like older tools did
    #[arg(long)]
    pub legacy_bits: bool,

    /// Experimental: cut the message off when the image is too small
    #[arg(long = "x-allow-truncation")]
    pub allow_truncation: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Request {
    Hide(hide::HideRequest),
    Retrieve(retrieve::RetrieveRequest),
    ShowUsage,
}

impl CliArgs {
    pub fn into_request(self) -> Request {
        let options = self.codec_options();
        match (self.hide, self.retrieve) {
            (Some(image), _) => Request::Hide(hide::HideRequest {
                image,
                output: self.output,
                message: self.message,
                options,
            }),
            (None, Some(image)) => Request::Retrieve(retrieve::RetrieveRequest { image, options }),
            (None, None) => Request::ShowUsage,
        }
    }

    fn codec_options(&self) -> CodecOptions {
        let bit_layout = if self.legacy_bits {
            BitLayout::Legacy
        } else {
            BitLayout::FixedWidth
        };

        CodecOptions::default()
            .with_bit_layout(bit_layout)
            .with_truncation_allowed(self.allow_truncation)
    }
}

/// asks interactively on a terminal, otherwise reads one line from stdin
pub fn ask_for_message() -> CliResult<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Input::<String>::new()
            .with_prompt("Enter a message to hide")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SteganoError::IoError(io::Error::other(e)));
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    let message = line.strip_suffix('\n').unwrap_or(&line);
    let message = message.strip_suffix('\r').unwrap_or(message);

    Ok(message.to_string())
}
