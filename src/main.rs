use std::io::Write as _;

use color_eyre::Result;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use council::{config, CouncilClient, MessageRequest};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = CouncilClient::with_base_url(config::base_url());

    match client.models().await {
        Ok(models) => {
            println!("council:  {}", models.defaults.council_models.join(", "));
            println!("chairman: {}", models.defaults.chairman_model);
        }
        Err(e) => {
            eprintln!("warning: could not fetch models config: {e}");
        }
    }

    let conversation = client.create_conversation().await?;
    println!(
        "conversation {} - type a message, Ctrl-D to quit\n",
        conversation.id
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let content = line.trim();
        if content.is_empty() {
            continue;
        }

        client
            .send_message_stream(&conversation.id, &MessageRequest::new(content), print_event)
            .await?;
        println!();
    }

    Ok(())
}

/// Render one stream event to the terminal.
///
/// The client deliberately does not interpret event kinds, so rendering
/// stays heuristic: textual `content` is printed as it arrives, and
/// anything else is shown as a stage marker.
fn print_event(kind: &str, payload: &Value) {
    if let Some(text) = payload.get("content").and_then(Value::as_str) {
        if let Some(model) = payload.get("model").and_then(Value::as_str) {
            println!("\n[{kind}] {model}:");
        }
        print!("{text}");
        let _ = std::io::stdout().flush();
    } else {
        println!("\n-- {kind} --");
    }
}
