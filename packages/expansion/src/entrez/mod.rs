//! Entrez Direct adapter.
//!
//! Drives the NCBI Entrez Direct command-line tools (`elink`, `efetch`) to
//! implement [`LiteratureService`]. Every failure mode (spawn error,
//! non-zero exit, timeout, non-UTF-8 output) is logged and absorbed into
//! an empty result, so the pipeline sees sparse data instead of errors.

pub mod parse;

use std::collections::HashMap;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::warn;

use crate::traits::literature::LiteratureService;
use crate::types::candidate::{ArticleMetadata, Pmid};

/// Default per-invocation timeout for the external tools.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from driving the external command-line tools.
///
/// These never escape [`EntrezCliService`]; they exist so the absorption
/// point can log what actually went wrong.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The tool could not be started.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The tool exited with a non-zero status.
    #[error("{program} exited with {status}")]
    NonZeroExit {
        program: String,
        status: std::process::ExitStatus,
    },

    /// The tool ran past the per-call timeout.
    #[error("{program} timed out after {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    /// The tool produced output that is not valid UTF-8.
    #[error("{program} produced non-UTF-8 output")]
    Output { program: String },
}

/// [`LiteratureService`] implementation backed by the Entrez Direct tools.
pub struct EntrezCliService {
    timeout: Duration,
}

impl EntrezCliService {
    /// Create a service with the default 30-second per-call timeout.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one tool invocation and capture its stdout.
    async fn run_command(
        &self,
        program: &str,
        args: &[&str],
        input: Option<&str>,
    ) -> Result<String, CommandError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

        if let Some(text) = input {
            if let Some(mut stdin) = child.stdin.take() {
                // A closed pipe surfaces through the exit status instead.
                let _ = stdin.write_all(text.as_bytes()).await;
            }
        }

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?,
            Err(_) => {
                return Err(CommandError::Timeout {
                    program: program.to_string(),
                    timeout: self.timeout,
                })
            }
        };

        if !output.status.success() {
            return Err(CommandError::NonZeroExit {
                program: program.to_string(),
                status: output.status,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| CommandError::Output {
            program: program.to_string(),
        })
    }
}

impl Default for EntrezCliService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LiteratureService for EntrezCliService {
    async fn find_related(&self, seed: Pmid) -> Vec<Pmid> {
        let seed_arg = seed.to_string();
        let linked = match self
            .run_command("elink", &["-db", "pubmed", "-id", &seed_arg, "-related"], None)
            .await
        {
            Ok(out) if !out.trim().is_empty() => out,
            Ok(_) => return Vec::new(),
            Err(e) => {
                warn!("related-record query failed for {}: {}", seed, e);
                return Vec::new();
            }
        };

        match self
            .run_command("efetch", &["-format", "uid"], Some(&linked))
            .await
        {
            Ok(out) => parse::parse_uid_lines(&out),
            Err(e) => {
                warn!("uid fetch failed for {}: {}", seed, e);
                Vec::new()
            }
        }
    }

    async fn fetch_metadata(&self, batch: &[Pmid]) -> HashMap<Pmid, ArticleMetadata> {
        if batch.is_empty() {
            return HashMap::new();
        }

        let ids = batch
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",");

        match self
            .run_command("efetch", &["-db", "pubmed", "-id", &ids, "-format", "xml"], None)
            .await
        {
            Ok(out) => parse::parse_article_stream(&out, batch),
            Err(e) => {
                warn!("metadata fetch failed for batch of {}: {}", batch.len(), e);
                HashMap::new()
            }
        }
    }
}
