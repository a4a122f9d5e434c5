//! # Dataset Checksums
//!
//! 数据集文件校验和生成工具库
//!
//! ## 功能
//!
//! - 遍历数据目录，排除根目录文件、隐藏文件和旧的校验和文件
//! - 计算每个文件的 MD5 或 SHA256 校验和
//! - 生成 `data/registry.txt` 注册表，或将校验和表格写入 README 的 `### Files` 小节
//!
//! ## 使用示例
//!
//! ```no_run
//! use dataset_checksums::report::{Variant, update_readme, write_registry};
//! use std::path::Path;
//!
//! // 生成注册表
//! write_registry(Path::new("."), &Variant::registry(), false).unwrap();
//!
//! // 更新 README 表格
//! update_readme(Path::new("."), &Variant::readme(), false).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use report::{ChecksumEntry, ReportError, ReportSummary, Variant};
pub use report::{update_readme, write_registry};
