use std::path::PathBuf;
use thiserror::Error;

/// 报告生成过程中的业务错误
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("文档中找不到锚点标题: {0:?}")]
    AnchorNotFound(String),

    #[error("扫描目录不存在: {0:?}")]
    MissingScanDir(PathBuf),
}
