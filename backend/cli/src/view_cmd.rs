//! CLI View Command
//!
//! Draws a reply in the terminal from the interactive render nodes.

use anyhow::Result;

use priorart_markdown::InteractiveRenderer;

use crate::input::read_reply;
use crate::settings::Settings;
use crate::terminal_output::{stream_write, supports_color, Painter};

pub async fn run(settings: &Settings, input: &str, no_color: bool) -> Result<()> {
    let reply = read_reply(input).await?;
    let nodes = InteractiveRenderer::render_reply(&reply, &settings.options);
    let painted = Painter::new(!no_color && supports_color()).paint(&nodes);
    stream_write(&mut std::io::stdout().lock(), &painted)?;
    Ok(())
}
