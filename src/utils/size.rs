const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// 将字节数格式化为可读的大小，例如 `1.5 kiB`
///
/// 以 1024 为进制，保留一位小数。单位最大到 `MiB`，更大的文件仍以 `MiB` 表示。
pub fn format_size(bytes: u64) -> String {
    match bytes {
        0 => "0 B".into(),
        1..KIB => format!("{:.1} B", bytes as f64),
        KIB..MIB => format!("{:.1} kiB", bytes as f64 / KIB as f64),
        _ => format!("{:.1} MiB", bytes as f64 / MIB as f64),
    }
}
