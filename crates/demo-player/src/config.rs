use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Environment lookups backed by the process environment with a `.env`
/// fallback. The process environment always wins; nothing is written back.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    dotenv: HashMap<String, String>,
}

impl EnvConfig {
    /// Reads `.env` from the current directory and up to two parents
    /// (best-effort). Nearer files take precedence.
    pub fn load() -> Self {
        let mut config = Self::default();
        for path in [".env", "../.env", "../../.env"] {
            let path = Path::new(path);
            if !path.exists() {
                continue;
            }
            match dotenvy::from_path_iter(path) {
                Ok(iter) => {
                    debug!(path = %path.display(), "reading environment file");
                    config.merge_missing(collect_entries(iter, &path.display().to_string()));
                }
                Err(err) => warn!(path = %path.display(), error = %err, "skipping environment file"),
            }
        }
        config
    }

    pub fn from_dotenv(content: &str) -> Self {
        Self {
            dotenv: collect_entries(dotenvy::from_read_iter(content.as_bytes()), "inline"),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .or_else(|| self.dotenv.get(key).cloned())
            .filter(|v| !v.is_empty())
    }

    fn merge_missing(&mut self, vars: HashMap<String, String>) {
        for (key, value) in vars {
            self.dotenv.entry(key).or_insert(value);
        }
    }
}

/// Malformed entries are skipped with a warning.
fn collect_entries<R: Read>(iter: dotenvy::Iter<R>, source: &str) -> HashMap<String, String> {
    iter.filter_map(|entry| match entry {
        Ok(pair) => Some(pair),
        Err(err) => {
            warn!(source, error = %err, "ignoring environment entry");
            None
        }
    })
    .collect()
}
