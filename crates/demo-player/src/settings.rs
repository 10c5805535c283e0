use anyhow::{bail, Context, Result};
use replay_core::OverlapPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::EnvConfig;
use crate::constants::{defaults, env_keys};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Where "save all" writes the project files
    pub download_dir: PathBuf,

    /// What a new run does to a playback still in flight
    pub overlap_policy: OverlapPolicy,

    /// Playback speed multiplier
    pub speed: f64,

    /// Replay script to use instead of the built-in demo
    pub script_path: Option<PathBuf>,

    pub log_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from(defaults::DOWNLOAD_DIR),
            overlap_policy: OverlapPolicy::default(),
            speed: 1.0,
            script_path: None,
            log_dir: PathBuf::from(defaults::LOG_DIR),
        }
    }
}

impl AppSettings {
    /// Settings file with environment overrides on top. Only the default
    /// settings file may be absent; a path given explicitly must exist.
    pub fn load(path: Option<&Path>, env: &EnvConfig) -> Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| env.get(env_keys::SETTINGS).map(PathBuf::from));

        let mut settings = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("settings file {} does not exist", path.display());
                }
                debug!(path = %path.display(), "loading settings");
                Self::read(&path)?
            }
            None => {
                let path = PathBuf::from(defaults::SETTINGS_FILE);
                if path.exists() {
                    debug!(path = %path.display(), "loading settings");
                    Self::read(&path)?
                } else {
                    Self::default()
                }
            }
        };
        settings.apply_env(env);
        Ok(settings)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parsing settings {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing settings {}", path.display()))
    }

    /// Bad override values are ignored with a warning.
    pub fn apply_env(&mut self, env: &EnvConfig) {
        if let Some(dir) = env.get(env_keys::DOWNLOAD_DIR) {
            self.download_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env.get(env_keys::LOG_DIR) {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(script) = env.get(env_keys::SCRIPT) {
            self.script_path = Some(PathBuf::from(script));
        }
        if let Some(policy) = env.get(env_keys::OVERLAP) {
            match policy.parse() {
                Ok(policy) => self.overlap_policy = policy,
                Err(e) => warn!(error = %e, "ignoring {}", env_keys::OVERLAP),
            }
        }
        if let Some(speed) = env.get(env_keys::SPEED) {
            match speed.parse::<f64>() {
                Ok(speed) if speed.is_finite() && speed > 0.0 => self.speed = speed,
                _ => warn!(value = %speed, "ignoring {}", env_keys::SPEED),
            }
        }
    }
}
