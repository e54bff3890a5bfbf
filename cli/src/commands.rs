pub mod report;
pub mod rooms;

use clap::{ArgAction, Parser, Subcommand};
use kos_common::config::{Config, DEFAULT_DAYS};
use kos_core::{Room, RoomRegistry};
use tracing::info;

pub const DEFAULT_ROOM_NAME: &str = "Kamar A";
pub const DEFAULT_ROOM_PRICE: f64 = 50000.0;

#[derive(Parser)]
#[command(name = "kos")]
#[command(about = "Room rental bookkeeping for a boarding house.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Room to register as NAME=PRICE, repeatable. Replaces the default room
    #[arg(long = "room", value_name = "NAME=PRICE", value_parser = parse_room, global = true)]
    pub rooms: Vec<Room>,

    /// Number of days to compute rent for
    #[arg(long, default_value_t = DEFAULT_DAYS, allow_negative_numbers = true, global = true)]
    pub days: i64,

    /// Less log output (-qq silences logging)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List registered rooms with their daily price
    #[command(alias = "l")]
    Rooms,
    /// Print the rent report
    #[command(alias = "r")]
    Report,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            days: self.days,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }

    /// Registers the rooms given on the command line, or the default room
    /// when none were given.
    pub fn registry(&self) -> anyhow::Result<RoomRegistry> {
        let mut registry = RoomRegistry::new();

        if self.rooms.is_empty() {
            registry.add_room(DEFAULT_ROOM_NAME, DEFAULT_ROOM_PRICE)?;
        }

        for room in &self.rooms {
            registry.add(room.clone());
        }

        info!("Registered {} room(s)", registry.len());
        Ok(registry)
    }
}

/// Parses `NAME=PRICE`, splitting on the last `=` and trimming both sides.
///
/// A negative price is rejected here so clap reports it as a usage error.
fn parse_room(arg: &str) -> Result<Room, String> {
    let (name, price) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PRICE, got '{arg}'"))?;

    let price = price.trim();
    let price_per_day: f64 = price
        .parse()
        .map_err(|e| format!("invalid price '{price}': {e}"))?;

    Room::new(name.trim(), price_per_day).map_err(|e| e.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
