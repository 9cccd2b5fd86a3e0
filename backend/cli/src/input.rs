//! Reply input: a file path, or `-` for stdin.

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::debug;

pub const STDIN_MARKER: &str = "-";

pub async fn read_reply(source: &str) -> Result<String> {
    let reply = if source == STDIN_MARKER {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read reply from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read reply from {source}"))?
    };
    debug!(source, bytes = reply.len(), "Read reply");
    Ok(reply)
}
