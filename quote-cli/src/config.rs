//! `quote.toml` plus environment overrides.
//!
//! ```toml
//! [email]
//! service_id = "service_xxx"
//! public_key = "${EMAILJS_PUBLIC_KEY}"
//! inquiry_template_id = "template_xxx"
//!
//! [store]
//! backend = "sqlite"
//! connection_string = "drafts.db"
//!
//! [catalog]
//! path = "catalog.csv"
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use quote_core::store::StoreConfig;
use quote_mailer::EmailJsConfig;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "quote.toml";

pub const ENV_SERVICE_ID: &str = "QUOTE_EJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "QUOTE_EJS_TEMPLATE_ID";
pub const ENV_CONTACT_TEMPLATE_ID: &str = "QUOTE_EJS_CONTACT_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "QUOTE_EJS_PUBLIC_KEY";

static VAR_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("pattern is valid"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// CSV price list; the built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub email: EmailJsConfig,
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Reads the config the way the binary does.
    ///
    /// An explicit `path` must exist. Without one, `quote.toml` in the
    /// working directory is used if present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// [`load`](Self::load) with an injectable environment.
    pub fn load_with<F>(
        path: Option<&Path>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content, &env)?,
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };
        config.apply_env(&env);
        Ok(config)
    }

    /// Parses TOML after replacing `${VAR}` references. Unset variables are
    /// left as written.
    pub fn from_toml_str<F>(
        content: &str,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = VAR_REF.replace_all(content, |caps: &Captures| {
            env(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        });
        Ok(toml::from_str(&expanded)?)
    }

    /// Overrides email settings from the `QUOTE_EJS_*` variables.
    pub fn apply_env<F>(
        &mut self,
        env: F,
    ) where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = [
            (ENV_SERVICE_ID, &mut self.email.service_id),
            (ENV_TEMPLATE_ID, &mut self.email.inquiry_template_id),
            (ENV_CONTACT_TEMPLATE_ID, &mut self.email.contact_template_id),
            (ENV_PUBLIC_KEY, &mut self.email.public_key),
        ];
        for (name, slot) in overrides {
            if let Some(value) = env(name).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("", env_of(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store.backend, "sqlite");
    }

    #[test]
    fn parses_all_sections() {
        let toml = r#"
[email]
service_id = "service_1"
public_key = "pk"
inquiry_template_id = "tpl_inquiry"
timeout_secs = 3

[store]
backend = "memory"

[catalog]
path = "prices.csv"
"#;

        let config = AppConfig::from_toml_str(toml, env_of(&[])).unwrap();

        assert_eq!(config.email.service_id, "service_1");
        assert_eq!(config.email.timeout_secs, 3);
        assert_eq!(config.email.endpoint, quote_mailer::DEFAULT_ENDPOINT);
        assert_eq!(config.store.backend, "memory");
        assert_eq!(config.store.connection_string, "sqlite:drafts.db?mode=rwc");
        assert_eq!(config.catalog.path, Some(PathBuf::from("prices.csv")));
    }

    #[test]
    fn substitutes_known_variables_only() {
        let toml = r#"
[email]
public_key = "${MY_KEY}"
service_id = "${NOT_SET}"
"#;

        let config = AppConfig::from_toml_str(toml, env_of(&[("MY_KEY", "secret")])).unwrap();

        assert_eq!(config.email.public_key, "secret");
        assert_eq!(config.email.service_id, "${NOT_SET}");
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = AppConfig::from_toml_str(
            "[email]\nservice_id = \"from_file\"\npublic_key = \"pk\"",
            env_of(&[]),
        )
        .unwrap();

        config.apply_env(env_of(&[
            (ENV_SERVICE_ID, "from_env"),
            (ENV_TEMPLATE_ID, "tpl"),
            (ENV_PUBLIC_KEY, "  "),
        ]));

        assert_eq!(config.email.service_id, "from_env");
        assert_eq!(config.email.inquiry_template_id, "tpl");
        assert_eq!(config.email.public_key, "pk");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[store\nbackend = 1", env_of(&[])).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = AppConfig::load_with(Some(&missing), env_of(&[])).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reads_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[email]\nservice_id = \"file\"\n[store]\nbackend = \"memory\"").unwrap();

        let config = AppConfig::load_with(
            Some(file.path()),
            env_of(&[(ENV_CONTACT_TEMPLATE_ID, "tpl_contact")]),
        )
        .unwrap();

        assert_eq!(config.email.service_id, "file");
        assert_eq!(config.email.contact_template_id, "tpl_contact");
        assert_eq!(config.store.backend, "memory");
    }
}
