//! Rupiah display helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix used in every listing and report line.
pub const CURRENCY_PREFIX: &str = "Rp";

const DECIMALS: u32 = 2;

/// Formats an amount as rupiah with exactly two decimals, e.g. `Rp50000.00`.
///
/// Rounds the shortest decimal form of `amount` half away from zero, so
/// `0.125` prints as `Rp0.13`. No thousands separators are inserted.
pub fn rupiah(amount: f64) -> String {
    format!("{CURRENCY_PREFIX}{}", two_decimals(amount))
}

fn two_decimals(amount: f64) -> String {
    // Shortest round-trip form, then decimal rounding on that text.
    match amount.to_string().parse::<Decimal>() {
        Ok(value) => {
            let mut rounded =
                value.round_dp_with_strategy(DECIMALS, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(DECIMALS);
            rounded.to_string()
        }
        // NaN, infinities and magnitudes beyond Decimal's range
        Err(_) => format!("{amount:.2}"),
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
