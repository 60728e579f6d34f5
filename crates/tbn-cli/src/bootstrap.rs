use anyhow::Context;
use tbn_config::TankobonConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TankobonConfig> {
    let config = TankobonConfig::load_with_dotenv().context("failed to load configuration")?;
    let config = apply_overrides(config, flags);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// `--db`, `--owner` and `--no-enrich` win over every config source.
pub fn apply_overrides(mut config: TankobonConfig, flags: &GlobalFlags) -> TankobonConfig {
    if let Some(path) = &flags.db {
        config.database.path.clone_from(path);
    }
    if let Some(owner) = &flags.owner {
        config.general.owner_id.clone_from(owner);
    }
    if flags.no_enrich {
        config.metadata.enabled = false;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};
    use tbn_config::TankobonConfig;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            db: None,
            owner: None,
            no_enrich: false,
        }
    }

    #[test]
    fn no_flags_keep_config() {
        let config = apply_overrides(TankobonConfig::default(), &flags());
        assert_eq!(config.database.path, TankobonConfig::default().database.path);
        assert!(config.metadata.enabled);
    }

    #[test]
    fn flags_override_config() {
        let flags = GlobalFlags {
            db: Some(":memory:".into()),
            owner: Some("alice".into()),
            no_enrich: true,
            ..flags()
        };
        let config = apply_overrides(TankobonConfig::default(), &flags);
        assert_eq!(config.database.path, ":memory:");
        assert_eq!(config.general.owner_id, "alice");
        assert!(!config.metadata.enabled);
    }
}
