//! CLI Export Command
//!
//! Saves a reply as a standalone HTML page, or prints it with `-o -`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::input::{read_reply, STDIN_MARKER};
use crate::settings::Settings;
use crate::terminal_output::{note_success, note_warn, stream_write};

pub async fn run(settings: &Settings, input: &str, output: Option<PathBuf>) -> Result<()> {
    let reply = read_reply(input).await?;
    let exporter = settings.exporter();

    if output.as_deref() == Some(Path::new(STDIN_MARKER)) {
        let html = exporter.render(&reply);
        stream_write(&mut std::io::stdout().lock(), &html)?;
        return Ok(());
    }

    let path = output.unwrap_or_else(|| settings.file_name.clone());
    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        note_warn(&format!("Overwriting {}", path.display()));
    }
    let written = exporter.write_to(&reply, &path).await?;
    info!(input, output = %written.display(), "Export complete");
    note_success(&format!("Exported analysis to {}", written.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use priorart_config::{apply_all_defaults, PriorArtConfig};

    #[tokio::test]
    async fn exports_to_requested_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("reply.md");
        std::fs::write(&input, "OVERLAP ANALYSIS\n**Overall Summary**\nDone.").unwrap();
        let output = dir.path().join("out.html");

        let settings = Settings::from_config(&apply_all_defaults(PriorArtConfig::default())).unwrap();
        run(&settings, input.to_str().unwrap(), Some(output.clone()))
            .await
            .unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<h2>OVERLAP ANALYSIS</h2>"));
        assert!(html.contains("<p>Done.</p>"));
    }
}
