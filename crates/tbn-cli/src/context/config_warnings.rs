use tbn_config::TankobonConfig;

const SECTIONS: [&str; 3] = ["DATABASE", "METADATA", "GENERAL"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TankobonConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TankobonConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let current = serde_json::to_value(config).unwrap_or_default();
    let defaults = serde_json::to_value(TankobonConfig::default()).unwrap_or_default();
    let mut warnings = Vec::new();

    for (key, _) in env {
        let Some(rest) = key.strip_prefix("TANKOBON_") else {
            continue;
        };
        if rest == "LOG" || rest.contains("__") {
            continue;
        }
        let Some(section) = SECTIONS.iter().find(|s| rest.starts_with(*s)) else {
            continue;
        };
        let name = section.to_ascii_lowercase();
        if current.get(&name) == defaults.get(&name) {
            let field = rest[section.len()..].trim_start_matches('_').to_ascii_uppercase();
            warnings.push(format!(
                "{key} is ignored. Use double underscores (example: TANKOBON_{section}__{field})."
            ));
        }
    }

    warnings
}
