mod settings;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{LogSettings, Overrides, ServerSettings, Settings};

/// Prefix shared by every environment variable the relay reads,
/// e.g. `MSGRELAY_SERVER__PORT`.
pub const ENV_PREFIX: &str = "MSGRELAY";

/// Loads the configuration from a file and environment variables.
///
/// With `path == None` the optional `config/default` file is used; an explicit
/// path must exist. Whatever the sources leave unset falls back to
/// `Settings::default()`.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("config/default").required(false),
    };

    let builder = Config::builder().add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(Settings::default().merge(partial))
}
