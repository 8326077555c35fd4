//! Search configuration loading.
//!
//! Sources, later ones overriding earlier ones:
//! 1. `SearchConfig::default()`
//! 2. The TOML file passed with `--config` (must exist when given)
//! 3. Environment variables with the `CAUSAL_GRAPH__` prefix

use std::path::Path;

use causal_graph_backdoor::{BackdoorError, BackdoorResult, SearchConfig};

/// Environment variable prefix (joined to keys with `__`).
pub const ENV_PREFIX: &str = "CAUSAL_GRAPH";

/// Load and validate the search configuration.
pub fn load_search_config(path: Option<&Path>) -> BackdoorResult<SearchConfig> {
    load_with_env(path, None)
}

/// As [`load_search_config`], reading environment overrides from `env`
/// instead of the process environment when it is `Some`.
pub fn load_with_env(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> BackdoorResult<SearchConfig> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).required(true));
    }
    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let config: SearchConfig = builder
        .build()
        .and_then(config::Config::try_deserialize)
        .map_err(|e| BackdoorError::InvalidConfig(e.to_string()))?;
    config.validate()?;

    tracing::debug!(?config, "search configuration loaded");
    Ok(config)
}
