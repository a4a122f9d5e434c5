use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use super::ReportSummary;
use super::entry::{ChecksumEntry, collect_entries};
use super::variant::Variant;

/// 生成注册表内容，每行 `<path> <checksum>`
pub fn render_registry(entries: &[ChecksumEntry], prefixed: bool) -> String {
    entries
        .iter()
        .map(|entry| format!("{} {}\n", entry.path, entry.checksum(prefixed)))
        .collect()
}

/// 计算校验和并覆盖写入注册表文件
pub fn write_registry(root: &Path, variant: &Variant, dry_run: bool) -> Result<ReportSummary> {
    println!("正在计算校验和...");
    let entries = collect_entries(root, variant)?;
    let content = render_registry(&entries, variant.prefix_checksum);

    let target = variant.output_path(root);
    if dry_run {
        println!("试运行，不写入 {}", target.display());
    } else {
        fs::write(&target, content).with_context(|| format!("无法写入注册表: {:?}", target))?;
    }

    info!(count = entries.len(), target = %target.display(), dry_run, "registry generated");
    Ok(ReportSummary::new(entries.len(), target, dry_run))
}
