mod commands;
mod terminal;

use commands::{CommandLine, Commands, report, rooms};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);

    let registry = commands.registry()?;

    match commands.command {
        Some(Commands::Rooms) => rooms::rooms(&registry),
        Some(Commands::Report) => report::report(&registry, &cfg),
        None => {
            rooms::rooms(&registry)?;
            report::report(&registry, &cfg)
        }
    }
}
