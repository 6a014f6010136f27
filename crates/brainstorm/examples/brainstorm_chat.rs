//! Interactive brainstorming against the configured idea endpoint.
//!
//! Run with: cargo run -p brainstorm --example brainstorm_chat -- manhattan
//!
//! Make sure to set environment variables in .env:
//!   IDEA_ENDPOINT_URL - idea-generation endpoint (e.g. a running idea-web)
//!   IDEA_ENDPOINT_KEY - optional key sent with each request
//!
//! The first line you type is the problem; every later line is feedback on
//! the current idea. An empty line exits.

use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use brainstorm::{Category, Session};
use idea_client::RemoteIdeaClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let category = Category::lookup(&env::args().nth(1).unwrap_or_default());
    let client = RemoteIdeaClient::from_env()?;
    println!("Endpoint: {}", client.config().endpoint_url);

    let mut session = Session::start(Arc::new(client), category).await;
    println!("{}\n", session.welcome_message());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }

        let reply = session.send(&line).await?;
        println!("\n[{:?}] {}\n", reply.source, reply.text);
    }

    Ok(())
}
