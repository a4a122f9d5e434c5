mod fs;
mod hash;
mod size;

pub use fs::{FileFilter, is_hidden, relative_display};
pub use hash::{Algorithm, HashResult, compute_bytes_hash, compute_file_hash};
pub use size::format_size;
