//! Configuration loader.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file. A leading `~` is expanded.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let path = PathBuf::from(Self::expand_path(&path.to_string_lossy()));
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Self::load_str(&content)
    }

    /// Load configuration from a file, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Render a configuration back to TOML.
    pub fn to_toml(config: &Config) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(config)?)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::InvalidValue {
            field: "env".to_string(),
            message: e.to_string(),
        })?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.webhands`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.agent.max_steps, 100);
        assert!(config.actions.disabled.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [agent]
            max_steps = 25
            max_actions_per_step = 4
            use_vision = true
            include_attributes = ["title"]

            [scroll]
            max_page_scrolls = 10

            [actions]
            disabled = ["search_google"]
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.agent.max_steps, 25);
        assert_eq!(config.agent.max_actions_per_step, 4);
        assert!(config.agent.use_vision);
        assert_eq!(config.agent.include_attributes, vec!["title".to_string()]);
        assert_eq!(config.scroll.max_page_scrolls, Some(10));
        assert_eq!(config.actions.disabled, vec!["search_google".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[agent]").unwrap();
        writeln!(file, "max_steps = 7").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.agent.max_steps, 7);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_expands_home() {
        let home = tempfile::tempdir().unwrap();
        std::fs::write(home.path().join("webhands.toml"), "[agent]\nmax_steps = 9\n").unwrap();
        let previous = std::env::var_os("HOME");
        // SAFETY: other tests here only need HOME to be some directory
        unsafe {
            std::env::set_var("HOME", home.path());
        }

        let loaded = ConfigLoader::load(Path::new("~/webhands.toml"));
        let fallback = ConfigLoader::load_or_default(Path::new("~/webhands.toml"));

        unsafe {
            match previous {
                Some(value) => std::env::set_var("HOME", value),
                None => std::env::remove_var("HOME"),
            }
        }
        assert_eq!(loaded.unwrap().agent.max_steps, 9);
        assert_eq!(fallback.unwrap().agent.max_steps, 9);
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ConfigLoader::load_or_default(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test sets a unique test-only env var
        unsafe {
            std::env::set_var("WEBHANDS_TEST_MAX_STEPS", "42");
        }
        let config = ConfigLoader::load_str("[agent]\nmax_steps = ${WEBHANDS_TEST_MAX_STEPS}").unwrap();
        assert_eq!(config.agent.max_steps, 42);
        unsafe {
            std::env::remove_var("WEBHANDS_TEST_MAX_STEPS");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_WEBHANDS_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/test");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/test"));
    }

    #[test]
    fn test_to_toml_contains_sections() {
        let text = ConfigLoader::to_toml(&Config::default()).unwrap();
        assert!(text.contains("[agent]"));
        assert!(text.contains("max_steps = 100"));
    }
}
