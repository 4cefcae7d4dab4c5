// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use jobdeck_app::{DEFAULT_MAX_RESUME_BYTES, EmptyStateMessages, ScreenOptions};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "jobdeck";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_SAMPLE_RESUME: &str = "Jamet kudasi - CV - UI/UX Designer.pdf";
const DEFAULT_SAMPLE_RESUME_BYTES: i64 = 867 * 1024;
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub resume: Resume,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            resume: Resume::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub clear_query_on_select: Option<bool>,
    pub empty_results_message: Option<String>,
    pub empty_records_message: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        let messages = EmptyStateMessages::default();
        Self {
            clear_query_on_select: Some(true),
            empty_results_message: Some(messages.no_results),
            empty_records_message: Some(messages.no_records),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub sample_file: Option<String>,
    pub sample_size_bytes: Option<i64>,
    pub max_size_bytes: Option<i64>,
}

impl Default for Resume {
    fn default() -> Self {
        Self {
            sample_file: Some(DEFAULT_SAMPLE_RESUME.to_owned()),
            sample_size_bytes: Some(DEFAULT_SAMPLE_RESUME_BYTES),
            max_size_bytes: Some(DEFAULT_MAX_RESUME_BYTES as i64),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("JOBDECK_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set JOBDECK_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no version. Add `version = 1` above the [ui], [resume], and [log] sections",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        for (key, size) in [
            ("resume.max_size_bytes", self.resume.max_size_bytes),
            ("resume.sample_size_bytes", self.resume.sample_size_bytes),
        ] {
            if let Some(size) = size
                && size <= 0
            {
                bail!("{key} in {} must be positive, got {size}", path.display());
            }
        }

        if let Some(level) = &self.log.level
            && !LOG_LEVELS.contains(&level.trim().to_ascii_lowercase().as_str())
        {
            bail!(
                "log.level in {} must be one of {}, got {:?}",
                path.display(),
                LOG_LEVELS.join(", "),
                level
            );
        }

        for (key, message) in [
            ("ui.empty_results_message", &self.ui.empty_results_message),
            ("ui.empty_records_message", &self.ui.empty_records_message),
        ] {
            if let Some(message) = message
                && message.trim().is_empty()
            {
                bail!(
                    "{key} in {} must not be blank; remove it to use the default",
                    path.display()
                );
            }
        }

        Ok(())
    }

    pub fn clear_query_on_select(&self) -> bool {
        self.ui.clear_query_on_select.unwrap_or(true)
    }

    pub fn empty_state_messages(&self) -> EmptyStateMessages {
        let defaults = EmptyStateMessages::default();
        EmptyStateMessages {
            no_results: self
                .ui
                .empty_results_message
                .clone()
                .unwrap_or(defaults.no_results),
            no_records: self
                .ui
                .empty_records_message
                .clone()
                .unwrap_or(defaults.no_records),
        }
    }

    pub fn screen_options(&self) -> ScreenOptions {
        ScreenOptions {
            clear_query_on_select: self.clear_query_on_select(),
            messages: self.empty_state_messages(),
        }
    }

    /// File name the mocked document picker hands back; `None` makes every
    /// upload a cancel.
    pub fn sample_resume(&self) -> Option<&str> {
        self.resume
            .sample_file
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn sample_resume_bytes(&self) -> u64 {
        self.resume
            .sample_size_bytes
            .and_then(|size| u64::try_from(size).ok())
            .unwrap_or(DEFAULT_SAMPLE_RESUME_BYTES as u64)
    }

    pub fn max_resume_bytes(&self) -> u64 {
        self.resume
            .max_size_bytes
            .and_then(|size| u64::try_from(size).ok())
            .unwrap_or(DEFAULT_MAX_RESUME_BYTES)
    }

    pub fn log_level(&self) -> String {
        self.log
            .level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .trim()
            .to_ascii_lowercase()
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# jobdeck config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\nclear_query_on_select = true\nempty_results_message = \"{}\"\nempty_records_message = \"{}\"\n\n[resume]\n# File name the mock file picker returns; set to \"\" to simulate a cancel\nsample_file = \"{}\"\nsample_size_bytes = {}\nmax_size_bytes = {}\n\n[log]\n# error, warn, info, debug or trace; JOBDECK_LOG overrides\nlevel = \"{}\"\n",
            path.display(),
            EmptyStateMessages::default().no_results,
            EmptyStateMessages::default().no_records,
            DEFAULT_SAMPLE_RESUME,
            DEFAULT_SAMPLE_RESUME_BYTES,
            DEFAULT_MAX_RESUME_BYTES,
            DEFAULT_LOG_LEVEL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use anyhow::Result;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert!(config.clear_query_on_select());
        assert_eq!(config.log_level(), "warn");
        assert_eq!(
            config.sample_resume(),
            Some("Jamet kudasi - CV - UI/UX Designer.pdf")
        );
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[ui]\nclear_query_on_select = false\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        assert!(error.to_string().contains("version = 1"));
        Ok(())
    }

    #[test]
    fn full_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[ui]\nclear_query_on_select = false\nempty_results_message = \"Nothing matches\"\n[resume]\nsample_file = \"cv.pdf\"\nsample_size_bytes = 4096\nmax_size_bytes = 2048\n[log]\nlevel = \"DEBUG\"\n",
        )?;
        let config = Config::load(&path)?;
        let options = config.screen_options();
        assert!(!options.clear_query_on_select);
        assert_eq!(options.messages.no_results, "Nothing matches");
        assert_eq!(options.messages.no_records, "Nothing here yet");
        assert_eq!(config.sample_resume(), Some("cv.pdf"));
        assert_eq!(config.sample_resume_bytes(), 4096);
        assert_eq!(config.max_resume_bytes(), 2048);
        assert_eq!(config.log_level(), "debug");
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn non_positive_resume_limit_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[resume]\nmax_size_bytes = 0\n")?;
        let error = Config::load(&path).expect_err("zero limit should fail");
        assert!(error.to_string().contains("must be positive"));
        Ok(())
    }

    #[test]
    fn unknown_log_level_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[log]\nlevel = \"loud\"\n")?;
        let error = Config::load(&path).expect_err("bad level should fail");
        assert!(error.to_string().contains("log.level"));
        Ok(())
    }

    #[test]
    fn blank_empty_state_message_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nempty_records_message = \"  \"\n")?;
        let error = Config::load(&path).expect_err("blank message should fail");
        assert!(error.to_string().contains("ui.empty_records_message"));
        Ok(())
    }

    #[test]
    fn blank_sample_file_means_cancel() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[resume]\nsample_file = \"\"\n")?;
        let config = Config::load(&path)?;
        assert_eq!(config.sample_resume(), None);
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("JOBDECK_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("JOBDECK_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn example_config_round_trips_through_load() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, Config::example_config(&path))?;
        let config = Config::load(&path)?;
        assert!(config.clear_query_on_select());
        assert_eq!(config.log_level(), "warn");
        Ok(())
    }
}
