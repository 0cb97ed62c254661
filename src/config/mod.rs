use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest width whose square still fits in an `i64`.
pub const MAX_WIDTH: i64 = 3_037_000_499;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    pub entry: EntrySection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntrySection {
    pub width: i64,
}

impl Default for EntrySection {
    fn default() -> Self {
        Self { width: 4 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub verbose: bool,
}

impl EntryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，未填欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ConfigProvider for EntryConfig {
    fn width(&self) -> i64 {
        self.entry.width
    }

    fn verbose(&self) -> bool {
        self.logging.verbose
    }
}

impl Validate for EntryConfig {
    fn validate(&self) -> Result<()> {
        validate_range("entry.width", self.entry.width, -MAX_WIDTH, MAX_WIDTH)
    }
}
