use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoomError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RoomError {
    pub fn negative_price(price: f64) -> Self {
        Self::InvalidArgument(format!("price per day must not be negative, got {price}"))
    }
}

pub type Result<T> = std::result::Result<T, RoomError>;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
