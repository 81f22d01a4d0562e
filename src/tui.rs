use anyhow::Result;

use crate::model::ClientConfig;
use crate::store::ConfigStore;

/// Runs the interactive collection browser until the user quits.
///
/// Logs go to `<config dir>/pokedeck.log`; the terminal belongs to the UI.
pub fn run(store: ConfigStore, config: ClientConfig) -> Result<()> {
    crate::logging::init_file(&store.log_path(), "info")?;
    tracing::info!(base_url = %config.base_url, "tui starting");
    crate::tui_shell::run(config)
}
