use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use graph_serialization_json::serialize_to_bytes;

use crate::catalog;
use crate::config::AppConfig;

#[derive(Args)]
pub struct DecodeArgs {
    /// Wire type name of the target model, e.g. `deviceShellScript`
    #[arg(short, long)]
    model: String,
    /// Payload file; reads stdin when omitted
    file: Option<PathBuf>,
}

impl DecodeArgs {
    pub fn run(&self, config: &AppConfig) -> Result<()> {
        let entry = catalog::find(&self.model).with_context(|| {
            format!(
                "unknown model `{}`; run `graph-codec models` to list them",
                self.model
            )
        })?;

        let payload = self.read_payload(config.codec.max_payload_bytes)?;
        tracing::debug!(model = entry.name, bytes = payload.len(), "decoding payload");

        let decoded = (entry.decode)(&payload, &config.codec)
            .with_context(|| format!("failed to decode payload as `{}`", entry.name))?;
        tracing::info!(model = entry.name, resolved = decoded.type_name, "payload decoded");

        let encoded = serialize_to_bytes(decoded.value.as_ref(), &config.codec)
            .context("failed to re-encode payload")?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&encoded)?;
        stdout.write_all(b"\n")?;
        Ok(())
    }

    /// Read at most one byte past `limit`, so an oversized payload is rejected
    /// without buffering all of it.
    fn read_payload(&self, limit: usize) -> Result<Vec<u8>> {
        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
        let mut payload = Vec::new();
        match &self.file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                file.take(cap)
                    .read_to_end(&mut payload)
                    .with_context(|| format!("failed to read {}", path.display()))?;
            }
            None => {
                std::io::stdin()
                    .lock()
                    .take(cap)
                    .read_to_end(&mut payload)
                    .context("failed to read stdin")?;
            }
        }
        if payload.len() > limit {
            anyhow::bail!("payload exceeds the limit of {limit} bytes");
        }
        Ok(payload)
    }
}
