//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use apis_config::{ApisConfig, ConfigError};
use apis_core::enums::DedupPolicy;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "data/bees.db"

[advisor]
dedup = "same_day"

[general]
default_limit = 50
user_id = "usr-0000abcd"
user_email = "keeper@example.invalid"
"#,
        )?;

        let config: ApisConfig = Figment::from(Serialized::defaults(ApisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "data/bees.db");
        assert_eq!(config.advisor.dedup, DedupPolicy::SameDay);
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.user_id(), Some("usr-0000abcd"));
        assert_eq!(config.general.user_email, "keeper@example.invalid");
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
user_id = "usr-00000001"
"#,
        )?;

        let config: ApisConfig = Figment::from(Serialized::defaults(ApisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.general.user_email, "beekeeper@localhost");
        assert_eq!(config.advisor.dedup, DedupPolicy::None);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".apis")?;
        jail.create_file(
            ".apis/config.toml",
            r#"
[advisor]
dedup = "same_day"
"#,
        )?;

        let config = ApisConfig::load_for_project(jail.directory()).expect("config loads");
        assert_eq!(config.advisor.dedup, DedupPolicy::SameDay);
        Ok(())
    });
}

#[test]
fn env_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".apis")?;
        jail.create_file(
            ".apis/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;
        jail.set_env("APIS_GENERAL__DEFAULT_LIMIT", "7");
        jail.set_env("APIS_ADVISOR__DEDUP", "same_day");

        let config = ApisConfig::load_for_project(jail.directory()).expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        assert_eq!(config.advisor.dedup, DedupPolicy::SameDay);
        Ok(())
    });
}

#[test]
fn unknown_dedup_policy_fails() {
    Jail::expect_with(|jail| {
        jail.set_env("APIS_ADVISOR__DEDUP", "weekly");

        let result = ApisConfig::load_for_project(jail.directory());
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn invalid_values_are_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("APIS_GENERAL__DEFAULT_LIMIT", "0");

        let result = ApisConfig::load_for_project(jail.directory());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
