use kos_common::config::Config;
use kos_core::RoomRegistry;
use tracing::info;

pub fn report(registry: &RoomRegistry, cfg: &Config) -> anyhow::Result<()> {
    info!("Rent report for {} day(s)", cfg.days);
    registry.print_report(cfg.days)?;
    Ok(())
}
