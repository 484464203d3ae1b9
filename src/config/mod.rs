use crate::errors::{AppError, AppResult};
use crate::models::Session;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_marked_by")]
    pub marked_by: i64,
    #[serde(default = "default_session")]
    pub default_session: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_marked_by() -> i64 {
    1
}
fn default_session() -> String {
    "fullday".to_string()
}
fn default_timeout() -> u64 {
    10
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            database: default_database(),
            marked_by: default_marked_by(),
            default_session: default_session(),
            request_timeout_secs: default_timeout(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the operation log database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML; missing fields take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Configured default session, validated.
    pub fn session(&self) -> AppResult<Session> {
        Session::from_name(&self.default_session)
    }

    /// Create the config directory, write the config file (unless `is_test`)
    /// and return the resulting configuration.
    pub fn init_all(custom_db: Option<String>, backend: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::default();

        if let Some(name) = custom_db {
            let p = Path::new(&name);
            config.database = if p.is_absolute() {
                name.clone()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        if let Some(url) = backend {
            if url.trim().is_empty() {
                return Err(AppError::Config("backend URL cannot be empty".to_string()));
            }
            config.backend_url = url;
        }

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
