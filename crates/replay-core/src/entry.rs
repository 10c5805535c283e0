use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Display category of a log line. Controls the icon and the pane colour.
///
/// Deserialization goes through [`Category::from_name`], so scripts with an
/// unknown or differently-cased category still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Info,
    Success,
    Error,
    Warning,
    Server,
    Client,
    System,
    Input,
    Output,
    Code,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Info,
        Category::Success,
        Category::Error,
        Category::Warning,
        Category::Server,
        Category::Client,
        Category::System,
        Category::Input,
        Category::Output,
        Category::Code,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            Category::Success => "✅",
            Category::Error => "❌",
            Category::Warning => "⚠️",
            Category::Server => "🟦",
            Category::Client => "🟩",
            Category::System => "🔧",
            Category::Input => "🔷",
            Category::Output => "🟢",
            Category::Code => "💻",
            Category::Info => "💡",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Server => "server",
            Category::Client => "client",
            Category::System => "system",
            Category::Input => "input",
            Category::Output => "output",
            Category::Code => "code",
        }
    }

    /// Lenient lookup: unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scripted line. `delay_ms` is relative to the previous entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub delay_ms: u64,
    pub message: String,
    #[serde(default)]
    pub category: Category,
}

impl LogEntry {
    pub fn new(delay_ms: u64, message: impl Into<String>, category: Category) -> Self {
        Self {
            delay_ms,
            message: message.into(),
            category,
        }
    }

    pub fn immediate(message: impl Into<String>, category: Category) -> Self {
        Self::new(0, message, category)
    }
}
