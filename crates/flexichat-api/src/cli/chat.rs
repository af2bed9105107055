//! Interactive chat REPL.
//!
//! Reads lines from stdin, sends each to the engine, and prints the reply.
//! "exit" or "quit" leaves the session.

use anyhow::Result;
use console::style;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::state::AppState;

pub async fn run_chat(state: &AppState) -> Result<()> {
    let assistant = state.config.assistant_name.clone();

    println!();
    println!(
        "  {} Chatting with {}. Type {} or {} to leave.",
        style("●").green(),
        style(&assistant).cyan().bold(),
        style("exit").dim(),
        style("quit").dim(),
    );
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"  you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let reply = {
            let mut engine = state.engine.lock().await;
            engine.get_response(input).await
        };

        println!("  {}> {}", style(&assistant).cyan(), reply);
    }

    println!();
    println!("  {}", style("Bye!").dim());
    Ok(())
}
