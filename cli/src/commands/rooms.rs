use kos_core::RoomRegistry;

pub fn rooms(registry: &RoomRegistry) -> anyhow::Result<()> {
    registry.display_rooms()?;
    Ok(())
}
