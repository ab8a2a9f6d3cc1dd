use crate::board::Board;
use crate::config::ModuleConfig;
use crate::console::Console;
use crate::error::Error;

const RELOADING_CONFIG: &str = "Reloading configuration...";
const SAVING_CONFIG: &str = "Saving configuration...";

/// `l`: replace the configuration with the stored one
///
/// The in-memory configuration is left untouched if loading fails.
pub(super) fn reload_config<B: Board>(
    console: &mut Console<B>,
    config: &mut ModuleConfig,
) -> Result<(), Error> {
    console.say(RELOADING_CONFIG);
    *config = console.board_mut().load()?;
    Ok(())
}

/// `s`: persist the configuration
pub(super) fn save_config<B: Board>(
    console: &mut Console<B>,
    config: &ModuleConfig,
) -> Result<(), Error> {
    if !console.board().is_valid(config) {
        return Err(Error::ConfigInvalid);
    }

    console.say(SAVING_CONFIG);
    console.board_mut().save(config)
}
