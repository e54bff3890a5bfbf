//! Plain-text rendering of the room listing and the rent report.
//!
//! Output is line based and written to any [`Write`] sink, stdout in the
//! binary and an in-memory buffer in tests.

use std::io::{self, Write};

use kos_common::utils::currency::rupiah;
use tracing::debug;

use crate::room::Room;

pub const ROOMS_HEADER: &str = "Daftar Kamar:";
pub const REPORT_HEADER: &str = "----- Laporan Sewa Kamar Kos -----";
pub const REPORT_FOOTER: &str = "------------------------------------";

pub fn room_line(room: &Room) -> String {
    format!(
        "Kamar: {}, Harga per Hari: {}",
        room.name(),
        rupiah(room.price_per_day())
    )
}

pub fn rent_line(room: &Room, days: i64) -> String {
    format!(
        "Kamar: {}, Biaya Sewa: {}",
        room.name(),
        rupiah(room.calculate_rent(days))
    )
}

pub fn total_line(days: i64, total: f64) -> String {
    format!("Total Biaya Sewa untuk {} hari: {}", days, rupiah(total))
}

pub fn write_rooms<W: Write>(rooms: &[Room], out: &mut W) -> io::Result<()> {
    writeln!(out, "{ROOMS_HEADER}")?;
    for room in rooms {
        writeln!(out, "{}", room_line(room))?;
    }
    Ok(())
}

pub fn write_report<W: Write>(rooms: &[Room], days: i64, total: f64, out: &mut W) -> io::Result<()> {
    debug!("Rendering report for {} rooms over {} days", rooms.len(), days);
    writeln!(out, "{REPORT_HEADER}")?;
    for room in rooms {
        writeln!(out, "{}", rent_line(room, days))?;
    }
    writeln!(out, "{}", total_line(days, total))?;
    writeln!(out, "{REPORT_FOOTER}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
