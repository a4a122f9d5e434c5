use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::{Algorithm, FileFilter};

/// 报告生成配置
///
/// 注册表与 README 两种输出使用不同的算法、过滤规则和排序方式，
/// 这里把差异统一成同一结构的两组默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub algorithm: Algorithm,
    /// 扫描目录 (相对于根目录)，为空表示根目录本身
    #[serde(default)]
    pub scan_dir: PathBuf,
    /// 输出文件 (相对于根目录)
    pub output: PathBuf,
    #[serde(default)]
    pub include_extensions: Vec<String>,
    #[serde(default)]
    pub exclude_extensions: Vec<String>,
    /// 校验和是否带 `<algorithm>:` 前缀
    #[serde(default)]
    pub prefix_checksum: bool,
    /// 是否按路径排序，否则保持遍历顺序
    #[serde(default)]
    pub sorted: bool,
}

impl Variant {
    /// `data/registry.txt` 注册表
    pub fn registry() -> Self {
        Self {
            algorithm: Algorithm::Sha256,
            scan_dir: PathBuf::from("data"),
            output: PathBuf::from("data/registry.txt"),
            include_extensions: vec!["nc".to_string(), "zip".to_string()],
            exclude_extensions: Vec::new(),
            prefix_checksum: true,
            sorted: false,
        }
    }

    /// README 中的 `### Files` 表格
    pub fn readme() -> Self {
        Self {
            algorithm: Algorithm::Md5,
            scan_dir: PathBuf::new(),
            output: PathBuf::from("README.md"),
            include_extensions: Vec::new(),
            exclude_extensions: vec!["md5".to_string()],
            prefix_checksum: false,
            sorted: true,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// 输出文件的实际位置
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }

    /// 输出文件相对于根目录的路径
    ///
    /// 输出可能是绝对路径或包含 `..`，文件已存在时按规范化后的路径计算。
    pub fn output_relative(&self, root: &Path) -> PathBuf {
        let output = self.output_path(root);
        if let (Ok(root), Ok(output)) = (root.canonicalize(), output.canonicalize())
            && let Ok(relative) = output.strip_prefix(&root)
        {
            return relative.to_path_buf();
        }

        match output.strip_prefix(root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => self.output.clone(),
        }
    }

    /// 输出文件本身总是被排除
    pub fn filter(&self, root: &Path) -> FileFilter {
        FileFilter {
            include_extensions: self.include_extensions.clone(),
            exclude_extensions: self.exclude_extensions.clone(),
            exclude_files: vec![self.output_relative(root)],
        }
    }
}
