//! # Kos Core
//!
//! Room bookkeeping for a boarding house ("kos").
//!
//! * **[`room`]**: a single room with a validated daily price.
//! * **[`registry`]**: the ordered, append-only collection of rooms.
//! * **[`report`]**: text rendering of the room listing and the rent report.

pub mod registry;
pub mod report;
pub mod room;

pub use registry::RoomRegistry;
pub use room::Room;
