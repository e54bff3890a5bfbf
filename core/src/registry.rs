use std::io::{self, Write};

use kos_common::error::Result;
use tracing::debug;

use crate::report;
use crate::room::Room;

/// Ordered, append-only collection of rooms.
///
/// Names are not unique; two rooms with the same name are independent entries.
#[derive(Debug, Default, Clone)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a room and appends it. The registry is untouched on error.
    pub fn add_room(&mut self, name: impl Into<String>, price_per_day: f64) -> Result<()> {
        self.add(Room::new(name, price_per_day)?);
        Ok(())
    }

    /// Appends an already validated room.
    pub fn add(&mut self, room: Room) {
        debug!("Added room '{}' at {} per day", room.name(), room.price_per_day());
        self.rooms.push(room);
    }

    /// Rooms in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn calculate_total_rent(&self, days: i64) -> f64 {
        // fold from +0.0, `Sum` on an empty iterator yields -0.0
        self.rooms
            .iter()
            .fold(0.0, |total, room| total + room.calculate_rent(days))
    }

    pub fn write_rooms<W: Write>(&self, out: &mut W) -> io::Result<()> {
        report::write_rooms(&self.rooms, out)
    }

    pub fn write_report<W: Write>(&self, days: i64, out: &mut W) -> io::Result<()> {
        report::write_report(&self.rooms, days, self.calculate_total_rent(days), out)
    }

    /// Prints the room listing to stdout.
    pub fn display_rooms(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_rooms(&mut out)?;
        out.flush()
    }

    /// Prints the rent report for `days` days to stdout.
    pub fn print_report(&self, days: i64) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(days, &mut out)?;
        out.flush()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
