use figment::Jail;
use tbn_config::TankobonConfig;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("TANKOBON_DATABASE__PATH", ":memory:");
        jail.set_env("TANKOBON_METADATA__ENABLED", "false");

        let config = TankobonConfig::load().expect("config loads");
        assert!(config.database.is_in_memory());
        assert!(!config.metadata.enabled);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tankobon")?;
        jail.create_file(
            ".tankobon/config.toml",
            r#"
[general]
default_language = "ja"
"#,
        )?;

        let config = TankobonConfig::load().expect("config loads");
        assert_eq!(config.general.default_language, "ja");
        Ok(())
    });
}
