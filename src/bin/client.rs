//! Terminal conversation client for a running Parley server.
//!
//! Prompts for the shared secret, then exchanges messages line by line.
//! The server URL comes from PARLEY_URL (default http://localhost:8080).

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use parley::session::{Conversation, HttpBackend};

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    std::io::stdout().flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parley=warn".into()),
        )
        .init();

    let base_url =
        std::env::var("PARLEY_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let backend = HttpBackend::new(reqwest::Client::new(), base_url);
    let mut conversation = Conversation::new(backend);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Credential prompt until the gate opens
    while !conversation.is_unlocked() {
        prompt("Password: ")?;
        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };
        match conversation.unlock(line.trim()).await {
            Ok(()) => println!("Unlocked."),
            Err(e) => eprintln!("{}", e),
        }
    }

    // Message loop; empty lines are ignored, EOF or /quit ends the session
    loop {
        prompt("> ")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == "/quit" {
            break;
        }
        match conversation.send(&line).await {
            Ok(Some(reply)) => println!("{}", reply.content),
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
