//! Interactive chat with Phi-2 over the together.xyz API
//!
//! Run with `TOGETHER_API_KEY=... cargo run -p snail --example chat`.
//! Type `/clear` to start over and an empty line to quit.

use snail::prelude::*;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let provider = Together::from_env()?;
    let formatter = Formatter::builder()
        .system("You are a helpful bot. Answer in one or two sentences.")
        .build()?;
    let mut dialogue = Dialogue::builder(provider)
        .dialogue_name("Terminal chat")
        .formatter(formatter)
        .build();
    let options = InvokeOptions::new().with_max_tokens(256);

    let stdin = io::stdin();
    loop {
        print!("{}> ", dialogue.user_name());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }

        match line.trim() {
            "/clear" => {
                dialogue.clear();
                println!("(transcript cleared)");
            }
            message => match dialogue.invoke(message, &options).await {
                Ok(reply) => println!("{}> {}", dialogue.bot_name(), reply.content().trim()),
                Err(e) => eprintln!("(no reply: {})", e),
            },
        }
    }

    Ok(())
}
