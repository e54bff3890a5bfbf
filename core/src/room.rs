use kos_common::error::{Result, RoomError};
use tracing::warn;

/// A rentable room with a name and a non-negative daily price.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: String,
    price_per_day: f64,
}

impl Room {
    /// Creates a room, rejecting a negative daily price.
    pub fn new(name: impl Into<String>, price_per_day: f64) -> Result<Self> {
        ensure_non_negative(price_per_day)?;
        Ok(Self {
            name: name.into(),
            price_per_day,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn price_per_day(&self) -> f64 {
        self.price_per_day
    }

    /// Updates the daily price. On error the previous price is kept.
    pub fn set_price_per_day(&mut self, price_per_day: f64) -> Result<()> {
        ensure_non_negative(price_per_day)?;
        self.price_per_day = price_per_day;
        Ok(())
    }

    /// Rent for `days` days. `days` is not validated, a negative count gives
    /// a negative rent.
    pub fn calculate_rent(&self, days: i64) -> f64 {
        self.price_per_day * days as f64
    }
}

fn ensure_non_negative(price_per_day: f64) -> Result<()> {
    if price_per_day < 0.0 {
        warn!("Rejected negative price per day: {price_per_day}");
        return Err(RoomError::negative_price(price_per_day));
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
