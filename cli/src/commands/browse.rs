//! Interactive browsing session
//!
//! Reads one command per line from stdin. A line starting with `/` is a
//! location to navigate to; `back` and `forward` walk the history. Ctrl-C
//! while a list loads abandons the load; at the prompt it ends the session.

use super::connect;
use crate::config::CliConfigLoader;
use anyhow::Result;
use atlas_core::{Navigator, PendingView, RouterConfig};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const HELP: &str = "Commands:
  /<path>   open a location (/categories, /countries, /languages)
  back      go to the previous location
  forward   go to the next location
  routes    list the route table
  help      show this message
  quit      leave the session";

/// Start an interactive session at `start`
pub async fn browse_command(
    start: String,
    max_history: usize,
    loader: CliConfigLoader,
) -> Result<()> {
    let client = connect(&loader).await?;
    let config = RouterConfig::new().with_max_history(max_history);
    let mut navigator = Navigator::catalog(client, config)?;

    info!(start = %start, "Starting interactive session");
    let first = navigator.start(&start);
    show(&mut navigator, first).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("atlas> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted at the prompt");
                println!();
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "routes" => {
                for entry in navigator.router().table().entries() {
                    println!("  {}", entry.path);
                }
            }
            "back" => match navigator.back() {
                Some(pending) => show(&mut navigator, pending).await,
                None => println!("Nothing to go back to"),
            },
            "forward" => match navigator.forward() {
                Some(pending) => show(&mut navigator, pending).await,
                None => println!("Nothing to go forward to"),
            },
            path if path.starts_with('/') => {
                let pending = navigator.open(path);
                show(&mut navigator, pending).await;
            }
            other => println!("Unknown command: {} (type 'help')", other),
        }
    }

    Ok(())
}

/// Wait for a view to settle and print it; Ctrl-C abandons the load
async fn show(navigator: &mut Navigator, pending: PendingView) {
    let path = pending.path().unwrap_or_default().to_string();

    tokio::select! {
        outcome = pending.outcome() => println!("{}\n", outcome.render()),
        _ = tokio::signal::ctrl_c() => {
            debug!(path = %path, "Load interrupted");
            navigator.cancel();
            println!("Loading of {} was cancelled\n", path);
        }
    }
}
