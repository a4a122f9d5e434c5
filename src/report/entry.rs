use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use super::error::ReportError;
use super::variant::Variant;
use crate::utils::{Algorithm, HashResult, compute_file_hash, format_size, relative_display};

/// 单个文件的校验和记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumEntry {
    /// 相对于扫描目录，以 `/` 分隔
    pub path: String,
    pub size: u64,
    pub digest: HashResult,
    pub algorithm: Algorithm,
}

impl ChecksumEntry {
    pub fn checksum(&self, prefixed: bool) -> String {
        if prefixed {
            format!("{}:{}", self.algorithm.name(), self.digest)
        } else {
            self.digest.clone()
        }
    }

    pub fn human_size(&self) -> String {
        format_size(self.size)
    }
}

/// 扫描并计算所有符合条件文件的校验和
pub fn collect_entries(root: &Path, variant: &Variant) -> Result<Vec<ChecksumEntry>> {
    let scan_root = root.join(&variant.scan_dir);
    if !scan_root.is_dir() {
        return Err(ReportError::MissingScanDir(scan_root).into());
    }

    let files = variant.filter(root).scan(root, &variant.scan_dir)?;
    let mut entries = Vec::with_capacity(files.len());

    for relative_path in files {
        let path = root.join(&relative_path);
        let digest = compute_file_hash(&path, variant.algorithm)?;
        let size = path
            .metadata()
            .with_context(|| format!("无法读取文件信息: {:?}", path))?
            .len();
        debug!(file = %relative_path.display(), size, %digest, "computed checksum");

        entries.push(ChecksumEntry {
            path: relative_display(&relative_path, &variant.scan_dir),
            size,
            digest,
            algorithm: variant.algorithm,
        });
    }

    if variant.sorted {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
    }

    Ok(entries)
}
