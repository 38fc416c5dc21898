//! Subcommand implementations.

use std::path::Path;

use abook_core::config::Settings;
use abook_rfc::format::{ContactFormat, FormatRegistry};
use abook_rfc::rfc::vcard::{ToolOptions, VCardVersion};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::cli::Command;
use crate::error::{AppError, AppResult};

/// Tag of the format used to read input; the parser accepts every version.
const INPUT_FORMAT: &str = "vcard";

/// Runs subcommands against a format registry built from the settings.
#[derive(Debug)]
pub struct App {
    registry: FormatRegistry,
    default_version: VCardVersion,
}

impl App {
    /// ## Errors
    /// Returns an error if the configured vCard version is not supported.
    pub fn new(settings: &Settings) -> AppResult<Self> {
        let default_version = settings.vcard.version.parse::<VCardVersion>()?;
        let registry = FormatRegistry::with_defaults(ToolOptions::from(&settings.vcard));
        Ok(Self {
            registry,
            default_version,
        })
    }

    /// ## Errors
    /// Returns an error if reading input, writing output or encoding JSON fails.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, command: Command) -> AppResult<()> {
        match command {
            Command::Convert { input, to, output } => {
                let text = read_input(&input).await?;
                let version = to.map_or(self.default_version, VCardVersion::from);
                let converted = self.convert(&text, version)?;
                write_output(output.as_deref(), &converted).await
            }
            Command::Dump { input } => {
                let text = read_input(&input).await?;
                let json = self.dump(&text)?;
                write_output(None, &format!("{json}\n")).await
            }
            Command::Formats => write_output(None, &self.formats()).await,
        }
    }

    /// Re-serializes every contact in `text` as `version`.
    ///
    /// ## Errors
    /// Returns an error if no format is registered for the version.
    pub fn convert(&self, text: &str, version: VCardVersion) -> AppResult<String> {
        let contacts = self.registry.require(INPUT_FORMAT)?.parse(text);
        tracing::info!(count = contacts.len(), %version, "Converting contacts");
        Ok(self.registry.require(format_tag(version))?.serialize(&contacts))
    }

    /// Renders every contact in `text` as pretty-printed JSON.
    ///
    /// ## Errors
    /// Returns an error if JSON encoding fails.
    pub fn dump(&self, text: &str) -> AppResult<String> {
        let contacts = self.registry.require(INPUT_FORMAT)?.parse(text);
        tracing::info!(count = contacts.len(), "Dumping contacts");
        Ok(serde_json::to_string_pretty(&contacts)?)
    }

    /// One `tag<TAB>description` line per registered format.
    #[must_use]
    pub fn formats(&self) -> String {
        self.registry
            .formats()
            .map(|f| format!("{}\t{}\n", f.tag(), f.description()))
            .collect()
    }
}

const fn format_tag(version: VCardVersion) -> &'static str {
    match version {
        VCardVersion::V2_1 => "vcard21",
        VCardVersion::V3_0 => "vcard",
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads the whole input. Bytes that are not UTF-8 are replaced so that
/// legacy files still load.
async fn read_input(path: &Path) -> AppResult<String> {
    let io_error = |source| AppError::Io {
        path: path.display().to_string(),
        source,
    };

    let bytes = if is_stdio(path) {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .map_err(io_error)?;
        buf
    } else {
        tokio::fs::read(path).await.map_err(io_error)?
    };

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read input");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn write_output(path: Option<&Path>, text: &str) -> AppResult<()> {
    match path.filter(|p| !is_stdio(p)) {
        Some(path) => {
            tokio::fs::write(path, text)
                .await
                .map_err(|source| AppError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "Wrote output");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            let io_error = |source| AppError::Io {
                path: "-".to_string(),
                source,
            };
            stdout.write_all(text.as_bytes()).await.map_err(io_error)?;
            stdout.flush().await.map_err(io_error)?;
        }
    }
    Ok(())
}
