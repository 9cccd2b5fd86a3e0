//! CLI Inspect Command
//!
//! Prints the parsed document as pretty JSON.

use anyhow::Result;

use priorart_markdown::{parse, parse_titled};

use crate::input::read_reply;
use crate::settings::Settings;
use crate::terminal_output::stream_write;

/// With `titled`, the report title is lifted off first, as the export does.
pub fn render_json(reply: &str, settings: &Settings, titled: bool) -> Result<String> {
    let json = if titled {
        serde_json::to_string_pretty(&parse_titled(reply, &settings.options))?
    } else {
        parse(reply, &settings.options).to_json()?
    };
    Ok(json)
}

pub async fn run(settings: &Settings, input: &str, titled: bool) -> Result<()> {
    let reply = read_reply(input).await?;
    let mut json = render_json(&reply, settings, titled)?;
    json.push('\n');
    stream_write(&mut std::io::stdout().lock(), &json)?;
    Ok(())
}
