//! Static file assets shipped with the demo and the sinks that save them.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// A named blob of text. Never parsed or executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAsset {
    pub name: String,
    pub contents: String,
}

impl FileAsset {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.contents.len()
    }

    pub fn line_count(&self) -> usize {
        self.contents.lines().count()
    }
}

/// Ordered filename -> contents mapping.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    files: Vec<FileAsset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four files of the XML-RPC demo project.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert("requirements.txt", include_str!("../assets/requirements.txt"));
        registry.insert("servidor.py", include_str!("../assets/servidor.py"));
        registry.insert("cliente.py", include_str!("../assets/cliente.py"));
        registry.insert(
            "testador_completo.py",
            include_str!("../assets/testador_completo.py"),
        );
        registry
    }

    /// Adds a file, replacing the contents in place if the name exists.
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        let asset = FileAsset::new(name, contents);
        match self.files.iter_mut().find(|f| f.name == asset.name) {
            Some(existing) => existing.contents = asset.contents,
            None => self.files.push(asset),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FileAsset> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileAsset> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Destination of a save-to-disk action.
#[async_trait]
pub trait AssetSink: Send + Sync {
    async fn save(&self, name: &str, contents: &str) -> Result<()>;
}

/// Writes each asset as a file under `root`, creating it on demand.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AssetSink for DirectorySink {
    async fn save(&self, name: &str, contents: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("creating {}", self.root.display()))?;
        let path = self.root.join(name);
        tokio::fs::write(&path, contents)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// Keeps every save action in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    saved: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn saved(&self) -> Vec<(String, String)> {
        self.saved.lock().await.clone()
    }
}

#[async_trait]
impl AssetSink for RecordingSink {
    async fn save(&self, name: &str, contents: &str) -> Result<()> {
        self.saved
            .lock()
            .await
            .push((name.to_string(), contents.to_string()));
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub saved: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl SaveReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One save action per asset, in registry order. Failures are collected,
/// not propagated.
pub async fn save_all(registry: &AssetRegistry, sink: &dyn AssetSink) -> SaveReport {
    let mut report = SaveReport::default();
    for asset in registry.iter() {
        match sink.save(&asset.name, &asset.contents).await {
            Ok(()) => report.saved.push(asset.name.clone()),
            Err(e) => {
                warn!(file = %asset.name, error = %format!("{e:#}"), "failed to save asset");
                report.failed.push((asset.name.clone(), format!("{e:#}")));
            }
        }
    }
    info!(
        saved = report.saved.len(),
        failed = report.failed.len(),
        "saved file assets"
    );
    report
}
