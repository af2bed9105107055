//! Memory CLI commands: history display and full reset.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use dialoguer::Confirm;

use crate::state::AppState;

/// Print the durable conversation log, newest last.
pub async fn show_history(state: &AppState, json: bool) -> Result<()> {
    let engine = state.engine.lock().await;
    let history = engine.history();

    if json {
        println!("{}", serde_json::to_string_pretty(history)?);
        return Ok(());
    }

    if history.is_empty() {
        println!();
        println!(
            "  {} No conversations yet. Say hi with {}.",
            style("i").blue().bold(),
            style("flexichat chat").cyan(),
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Time").fg(Color::White),
        Cell::new("You").fg(Color::White),
        Cell::new("Assistant").fg(Color::White),
    ]);

    for exchange in history {
        table.add_row(vec![
            Cell::new(&exchange.time).fg(Color::DarkGrey),
            Cell::new(&exchange.user),
            Cell::new(&exchange.ai).fg(Color::Cyan),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Wipe the memory record after confirmation.
pub async fn reset_memory(state: &AppState, force: bool, json: bool) -> Result<()> {
    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Erase everything the assistant remembers?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  Aborted.");
            return Ok(());
        }
    }

    let reply = {
        let mut engine = state.engine.lock().await;
        engine.reset().await
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "status": "success",
                "message": reply,
            }))?
        );
    } else {
        println!("  {} {}", style("✓").green(), reply);
    }
    Ok(())
}
