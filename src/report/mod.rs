mod entry;
mod error;
mod markdown;
mod registry;
mod variant;

use std::path::PathBuf;

pub use entry::{ChecksumEntry, collect_entries};
pub use error::ReportError;
pub use markdown::{ANCHOR_HEADING, FILES_HEADING, render_table, splice_table, update_readme};
pub use registry::{render_registry, write_registry};
pub use variant::Variant;

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub written: usize,
    pub target: PathBuf,
    pub dry_run: bool,
}

impl ReportSummary {
    pub fn new(written: usize, target: PathBuf, dry_run: bool) -> Self {
        Self {
            written,
            target,
            dry_run,
        }
    }

    pub fn summary(&self) -> String {
        if self.dry_run {
            format!(
                "试运行: 计算了 {} 个校验和，未写入 {}",
                self.written,
                self.target.display()
            )
        } else {
            format!(
                "已写入 {} 个校验和到 {}",
                self.written,
                self.target.display()
            )
        }
    }
}
