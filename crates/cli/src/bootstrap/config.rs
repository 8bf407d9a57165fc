use getservers_domain::{CliOverrides, Config};

/// Load and validate the configuration. Runs before the tracing
/// subscriber exists, so the summary line is logged by the caller.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    Ok(config)
}
