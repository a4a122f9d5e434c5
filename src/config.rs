use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::Variant;

/// 配置文件，两个小节均可省略
///
/// ```toml
/// [registry]
/// algorithm = "sha256"
/// scan_dir = "data"
/// output = "data/registry.txt"
/// include_extensions = ["nc", "zip"]
/// prefix_checksum = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Variant::registry")]
    pub registry: Variant,
    #[serde(default = "Variant::readme")]
    pub readme: Variant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: Variant::registry(),
            readme: Variant::readme(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("无法读取配置文件: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("无法解析配置文件: {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
