use anyhow::{bail, Context, Result};
use std::path::Path;
use std::time::Duration;

use crate::entry::LogEntry;

/// Ordered script of entries. Order is playback order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<LogEntry>,
}

impl Timeline {
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cumulative offset of every entry from playback start.
    pub fn fire_offsets(&self) -> Vec<Duration> {
        self.scheduled().map(|(offset, _)| offset).collect()
    }

    /// Entries paired with their cumulative offsets.
    pub fn scheduled(&self) -> impl Iterator<Item = (Duration, &LogEntry)> + '_ {
        self.entries.iter().scan(0u64, |total, entry| {
            *total = total.saturating_add(entry.delay_ms);
            Some((Duration::from_millis(*total), entry))
        })
    }

    pub fn total_duration(&self) -> Duration {
        self.fire_offsets().last().copied().unwrap_or_default()
    }

    /// Divides every delay by `speed`. A speed of 2.0 plays twice as fast.
    pub fn scaled(&self, speed: f64) -> Result<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            bail!("playback speed must be a positive number, got {speed}");
        }
        let entries = self
            .entries
            .iter()
            .map(|entry| LogEntry {
                delay_ms: (entry.delay_ms as f64 / speed).round() as u64,
                ..entry.clone()
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<LogEntry> =
            serde_json::from_str(json).context("replay script must be a JSON array of entries")?;
        Ok(Self { entries })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading replay script {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing replay script {}", path.display()))
    }
}

impl From<Vec<LogEntry>> for Timeline {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<LogEntry> for Timeline {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Category;

    fn timeline(delays: &[u64]) -> Timeline {
        delays
            .iter()
            .enumerate()
            .map(|(i, d)| LogEntry::new(*d, format!("line {i}"), Category::Info))
            .collect()
    }

    #[test]
    fn offsets_are_cumulative() {
        let t = timeline(&[1000, 2000, 0, 500]);
        let offsets: Vec<u64> = t.fire_offsets().iter().map(|d| d.as_millis() as u64).collect();
        assert_eq!(offsets, vec![1000, 3000, 3000, 3500]);
        assert_eq!(t.total_duration(), Duration::from_millis(3500));
    }

    #[test]
    fn offsets_never_decrease() {
        let t = timeline(&[0, 7, 0, 0, 13, 1, 0, 250]);
        let offsets = t.fire_offsets();
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn empty_timeline_has_zero_duration() {
        assert_eq!(Timeline::default().total_duration(), Duration::ZERO);
    }

    #[test]
    fn scaling_divides_delays() {
        let t = timeline(&[1000, 500]).scaled(2.0).unwrap();
        let delays: Vec<u64> = t.entries().iter().map(|e| e.delay_ms).collect();
        assert_eq!(delays, vec![500, 250]);
        assert!(timeline(&[1]).scaled(0.0).is_err());
        assert!(timeline(&[1]).scaled(f64::NAN).is_err());
    }

    #[test]
    fn parses_json_scripts() {
        let t = Timeline::from_json(
            r#"[{"delay_ms":0,"message":"A","category":"info"},
                {"delay_ms":100,"message":"B","category":"success"}]"#,
        )
        .unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.entries()[1].category, Category::Success);
        assert!(Timeline::from_json(r#"{"message":"not an array"}"#).is_err());
    }

    #[test]
    fn unknown_categories_load_as_info() {
        let t = Timeline::from_json(
            r#"[{"delay_ms":0,"message":"x","category":"debug"},
                {"delay_ms":0,"message":"y","category":"Server"}]"#,
        )
        .unwrap();
        assert_eq!(t.entries()[0].category, Category::Info);
        assert_eq!(t.entries()[1].category, Category::Server);
    }
}
