use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// 隐藏文件标记
const HIDDEN_MARKER: char = '.';

/// 判断文件是否应参与校验和计算
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// 仅接受这些扩展名，为空时接受全部
    pub include_extensions: Vec<String>,
    /// 排除这些扩展名 (例如旧的 `.md5` 文件)
    pub exclude_extensions: Vec<String>,
    /// 排除的文件 (相对于根目录)，通常是报告本身
    pub exclude_files: Vec<PathBuf>,
}

impl FileFilter {
    /// `relative` 为相对于 `root` 的路径
    pub fn accepts(&self, root: &Path, relative: &Path) -> bool {
        // 排除根目录下的文件
        if normal_segments(relative).count() <= 1 {
            return false;
        }

        if is_hidden(relative) {
            return false;
        }

        if self
            .exclude_files
            .iter()
            .any(|excluded| same_path(excluded, relative))
        {
            return false;
        }

        let extension = relative
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        if let Some(ext) = &extension
            && contains_extension(&self.exclude_extensions, ext)
        {
            return false;
        }

        if !self.include_extensions.is_empty() {
            match &extension {
                Some(ext) if contains_extension(&self.include_extensions, ext) => {}
                _ => return false,
            }
        }

        root.join(relative).is_file()
    }

    /// 遍历 `root/scan_dir`，按遍历顺序返回通过过滤的文件 (相对于 `root`)
    pub fn scan(&self, root: &Path, scan_dir: &Path) -> Result<Vec<PathBuf>> {
        let scan_root = root.join(scan_dir);
        let mut files = Vec::new();

        for entry in WalkDir::new(&scan_root) {
            let entry = entry.with_context(|| format!("无法遍历目录: {:?}", scan_root))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative_path = path
                .strip_prefix(root)
                .with_context(|| format!("无法获取相对路径: {:?}", path))?;
            let relative_path: PathBuf = normal_segments(relative_path).collect();

            if self.accepts(root, &relative_path) {
                files.push(relative_path);
            }
        }

        Ok(files)
    }
}

/// 任一路径段以 `.` 开头即视为隐藏
pub fn is_hidden(path: &Path) -> bool {
    normal_segments(path).any(|segment| segment.to_string_lossy().starts_with(HIDDEN_MARKER))
}

/// 去掉 `base` 前缀后以 `/` 连接的路径，用于报告输出
pub fn relative_display(path: &Path, base: &Path) -> String {
    let base: PathBuf = normal_segments(base).collect();
    let stripped = path.strip_prefix(&base).unwrap_or(path);
    normal_segments(stripped)
        .map(|segment| segment.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn normal_segments(path: &Path) -> impl Iterator<Item = &std::ffi::OsStr> {
    path.components().filter_map(|component| match component {
        Component::Normal(segment) => Some(segment),
        _ => None,
    })
}

fn same_path(a: &Path, b: &Path) -> bool {
    normal_segments(a).eq(normal_segments(b))
}

fn contains_extension(list: &[String], ext: &str) -> bool {
    list.iter()
        .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
}
