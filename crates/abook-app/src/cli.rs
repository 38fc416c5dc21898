use std::path::PathBuf;

use abook_rfc::rfc::vcard::VCardVersion;
use clap::{Parser, Subcommand, ValueEnum};

/// Reads, converts and inspects vCard address books.
#[derive(Parser, Debug)]
#[command(author, version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Rewrite an address book as vCard 2.1 or 3.0
    Convert {
        /// Input file, `-` for stdin
        input: PathBuf,
        /// Output version; defaults to the configured `vcard.version`
        #[arg(long, value_enum)]
        to: Option<TargetVersion>,
        /// Output file; stdout if omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the contacts of an address book as JSON
    Dump {
        /// Input file, `-` for stdin
        input: PathBuf,
    },
    /// List the supported formats
    Formats,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetVersion {
    #[value(name = "2.1")]
    V2_1,
    #[value(name = "3.0")]
    V3_0,
}

impl From<TargetVersion> for VCardVersion {
    fn from(version: TargetVersion) -> Self {
        match version {
            TargetVersion::V2_1 => Self::V2_1,
            TargetVersion::V3_0 => Self::V3_0,
        }
    }
}
