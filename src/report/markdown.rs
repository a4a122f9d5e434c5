use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use super::ReportSummary;
use super::entry::{ChecksumEntry, collect_entries};
use super::error::ReportError;
use super::variant::Variant;

/// 表格插入位置之前的锚点标题
pub const ANCHOR_HEADING: &str = "## Available datasets";
/// 校验和表格所在小节的标题
pub const FILES_HEADING: &str = "### Files";

const TABLE_HEADER: &str = "| File | Size | Checksum |\n";
const TABLE_DIVIDER: &str = "| ---- | ---- | -------- |\n";

/// 生成表格行
pub fn render_table(entries: &[ChecksumEntry], prefixed: bool) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            format!(
                "| {} | {} | {} |\n",
                entry.path,
                entry.human_size(),
                entry.checksum(prefixed)
            )
        })
        .collect()
}

/// 将表格写入文档，替换已有的 `### Files` 小节
///
/// 文档从最后一个 `### Files` 起被截断，新的小节插入在
/// `## Available datasets` 之后。找不到锚点时返回错误，不做任何修改。
pub fn splice_table(document: &str, rows: &[String]) -> Result<String, ReportError> {
    let mut lines: Vec<String> = document
        .split_inclusive('\n')
        .map(|line| {
            if line.ends_with('\n') {
                line.to_string()
            } else {
                format!("{}\n", line)
            }
        })
        .collect();

    // 移除旧表格
    if let Some(start) = lines.iter().rposition(|line| line.starts_with(FILES_HEADING)) {
        lines.truncate(start);
    }

    let anchor = lines
        .iter()
        .position(|line| line.starts_with(ANCHOR_HEADING))
        .ok_or_else(|| ReportError::AnchorNotFound(ANCHOR_HEADING.to_string()))?;

    let mut section = vec![
        "\n".to_string(),
        format!("{}\n", FILES_HEADING),
        "\n".to_string(),
        TABLE_HEADER.to_string(),
        TABLE_DIVIDER.to_string(),
    ];
    section.extend(rows.iter().cloned());
    lines.splice(anchor + 1..anchor + 1, section);

    // 去掉末尾空行
    if lines.last().is_some_and(|line| line.starts_with('\n')) {
        lines.pop();
    }

    Ok(lines.concat())
}

/// 计算校验和并更新 README 中的表格
pub fn update_readme(root: &Path, variant: &Variant, dry_run: bool) -> Result<ReportSummary> {
    let target = variant.output_path(root);
    let document =
        fs::read_to_string(&target).with_context(|| format!("无法读取文档: {:?}", target))?;

    println!("正在计算校验和...");
    let entries = collect_entries(root, variant)?;
    let rows = render_table(&entries, variant.prefix_checksum);
    let updated =
        splice_table(&document, &rows).with_context(|| format!("无法更新文档: {:?}", target))?;

    if dry_run {
        println!("试运行，不写入 {}", target.display());
    } else {
        fs::write(&target, updated).with_context(|| format!("无法写入文档: {:?}", target))?;
    }

    info!(count = entries.len(), target = %target.display(), dry_run, "checksum table updated");
    Ok(ReportSummary::new(entries.len(), target, dry_run))
}
