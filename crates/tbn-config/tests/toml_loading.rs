//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use tbn_config::TankobonConfig;

fn layered(file: &str) -> Figment {
    Figment::from(Serialized::defaults(TankobonConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed("TANKOBON_").split("__"))
}

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/tankobon/library.db"
"#,
        )?;

        let config: TankobonConfig = layered("config.toml").extract()?;
        assert_eq!(config.database.path, "/var/lib/tankobon/library.db");
        Ok(())
    });
}

#[test]
fn loads_metadata_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[metadata]
enabled = false
google_books_url = "http://localhost:8080/books"
anilist_url = "http://localhost:8080/graphql"
timeout_secs = 3
"#,
        )?;

        let config: TankobonConfig = layered("config.toml").extract()?;
        assert!(!config.metadata.enabled);
        assert_eq!(config.metadata.google_books_url, "http://localhost:8080/books");
        assert_eq!(config.metadata.anilist_url, "http://localhost:8080/graphql");
        assert_eq!(config.metadata.timeout_secs, 3);
        assert_eq!(config.metadata.user_agent, "tankobon/0.1");
        assert!(!config.metadata.is_configured());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
owner_id = "user-42"
"#,
        )?;

        let config: TankobonConfig = layered("config.toml").extract()?;
        assert_eq!(config.general.owner_id, "user-42");
        assert_eq!(config.general.default_language, "en");
        assert_eq!(config.general.default_edition, "Standard");
        assert_eq!(config.database.path, ".tankobon/library.db");
        assert!(config.metadata.enabled);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
owner_id = "from-toml"
"#,
        )?;
        jail.set_env("TANKOBON_GENERAL__OWNER_ID", "from-env");

        let config: TankobonConfig = layered("config.toml").extract()?;
        assert_eq!(config.general.owner_id, "from-env");
        Ok(())
    });
}

#[test]
fn wrong_type_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[metadata]
timeout_secs = "soon"
"#,
        )?;

        let result: Result<TankobonConfig, _> = layered("config.toml").extract();
        assert!(result.is_err());
        Ok(())
    });
}
