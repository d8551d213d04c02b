use std::{
    io::{IsTerminal, Write},
    time::Duration,
};

use clap::{Parser, Subcommand};
use tokio::time::MissedTickBehavior;

use crate::{
    client::DashboardClient,
    render::{Screen, render_card, render_updated},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citytime", version, about = "City time & weather in the terminal")]
pub struct Cli {
    /// Base URL of the dashboard server.
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    pub url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and print the dashboard once.
    Show,

    /// Re-render the dashboard on a fixed interval until interrupted.
    Watch {
        /// Seconds between refreshes.
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = DashboardClient::new(&self.url)?;

        match self.command {
            Command::Show => {
                let envelope = client.fetch().await?;
                println!("{}\n", render_updated(envelope.updated_at_utc));
                for city in &envelope.cities {
                    println!("{}", render_card(city));
                }
            }
            Command::Watch { interval } => watch(&client, Duration::from_secs(interval)).await?,
        }

        Ok(())
    }
}

/// One fetch-and-render cycle per tick. A cycle finishes before the next tick
/// is awaited, so refreshes never overlap.
async fn watch(client: &DashboardClient, period: Duration) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut screen = Screen::default();
    let mut stdout = std::io::stdout();
    let clear = stdout.is_terminal();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => break,
        }

        let frame = screen.update(client.fetch().await);
        if clear {
            write!(stdout, "\x1b[2J\x1b[H")?;
        }
        writeln!(stdout, "{frame}")?;
        stdout.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_defaults_to_one_minute() {
        let cli = Cli::parse_from(["citytime", "watch"]);

        assert_eq!(cli.url, "http://localhost:3000");
        assert!(matches!(cli.command, Command::Watch { interval: 60 }));
    }

    #[test]
    fn url_is_accepted_after_subcommand() {
        let cli = Cli::parse_from(["citytime", "show", "--url", "http://dash:8080"]);

        assert_eq!(cli.url, "http://dash:8080");
        assert!(matches!(cli.command, Command::Show));
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Cli::try_parse_from(["citytime", "watch", "--interval", "0"]).is_err());
    }
}
