use inter_banking::{ClientCertificate, ClientConfig, Environment};
use oauth2::{ClientId, ClientSecret, Scope};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_DIR_PREFIX: &str = "inter-banking";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found at {0:?}. Please create one.")]
    NotFound(PathBuf),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0}")]
    Invalid(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub client: InterConfig,
    pub certificate: CertificateConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InterConfig {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for InterConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            scopes: Vec::new(),
            environment: Environment::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl InterConfig {
    pub fn client_id(&self) -> ClientId {
        ClientId::new(self.client_id.clone())
    }

    pub fn client_secret(&self) -> ClientSecret {
        ClientSecret::new(self.client_secret.clone())
    }

    /// Scopes to request, with command-line values taking precedence over the file.
    pub fn scopes(&self, overrides: &[String]) -> Vec<Scope> {
        let scopes = match overrides.is_empty() {
            true => self.scopes.as_slice(),
            false => overrides,
        };
        scopes.iter().map(|s| Scope::new(s.to_string())).collect()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::for_environment(self.environment)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CertificateConfig {
    pub cert_file: PathBuf,
    pub key_file: PathBuf,
}

impl CertificateConfig {
    /// Read the certificate and key files into a client identity.
    pub fn load(&self) -> anyhow::Result<ClientCertificate> {
        let cert = read_file(&self.cert_file)?;
        let key = read_file(&self.key_file)?;

        Ok(ClientCertificate::from_pem(&cert, &key)?)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_file()?;

        if !config_path.exists() {
            return Err(ConfigError::NotFound(config_path));
        }

        let contents = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
            path: config_path.clone(),
            source,
        })?;

        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;

        if config.client.client_id.is_empty() || config.client.client_secret.is_empty() {
            return Err(ConfigError::Invalid(
                "client_id and client_secret must be set in config file".to_string(),
            ));
        }

        if config.certificate.cert_file.as_os_str().is_empty()
            || config.certificate.key_file.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid(
                "cert_file and key_file must be set in config file".to_string(),
            ));
        }

        Ok(config)
    }

    fn xdg_dirs() -> xdg::BaseDirectories {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf, ConfigError> {
        Self::xdg_dirs()
            .place_config_file("config.toml")
            .map_err(|e| ConfigError::Invalid(format!("Failed to create config directory: {}", e)))
    }
}
