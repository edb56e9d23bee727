//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed files and env vars. `XDG_CONFIG_HOME`
//! points into the jail so a real user config never leaks in.

use atomlab_config::{AtomlabConfig, ConfigError};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[simulation]
initial_atomic_number = 6

[quiz]
feedback_delay_ms = 750
question_count = 5
"#,
        )?;

        let config: AtomlabConfig = Figment::from(Serialized::defaults(AtomlabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.simulation.initial_atomic_number, 6);
        assert_eq!(config.quiz.feedback_delay_ms, 750);
        assert_eq!(config.quiz.question_count, 5);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[quiz]\nquestion_count = 20\n")?;

        let config: AtomlabConfig = Figment::from(Serialized::defaults(AtomlabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.quiz.question_count, 20);
        assert_eq!(config.quiz.feedback_delay_ms, 2000);
        assert_eq!(config.simulation.initial_atomic_number, 1);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".atomlab")?;
        jail.create_file(
            ".atomlab/config.toml",
            "[simulation]\ninitial_atomic_number = 11\n",
        )?;

        let config = AtomlabConfig::load().expect("config loads");
        assert_eq!(config.simulation.initial_atomic_number, 11);
        Ok(())
    });
}

#[test]
fn project_file_beats_user_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir("xdg/atomlab")?;
        jail.create_file(
            "xdg/atomlab/config.toml",
            "[quiz]\nfeedback_delay_ms = 100\nquestion_count = 3\n",
        )?;
        jail.create_dir(".atomlab")?;
        jail.create_file(".atomlab/config.toml", "[quiz]\nquestion_count = 4\n")?;

        let config = AtomlabConfig::load().expect("config loads");
        assert_eq!(config.quiz.feedback_delay_ms, 100);
        assert_eq!(config.quiz.question_count, 4);
        Ok(())
    });
}

#[test]
fn out_of_range_values_are_rejected() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".atomlab")?;
        jail.create_file(".atomlab/config.toml", "[quiz]\nquestion_count = 21\n")?;

        let error = AtomlabConfig::load().expect_err("validation fails");
        assert!(matches!(
            error,
            ConfigError::InvalidValue { ref field, .. } if field == "quiz.question_count"
        ));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".atomlab")?;
        jail.create_file(".atomlab/config.toml", "[quiz]\nquestion_count = \"many\"\n")?;

        let error = AtomlabConfig::load().expect_err("extraction fails");
        assert!(matches!(error, ConfigError::Figment(_)));
        Ok(())
    });
}
