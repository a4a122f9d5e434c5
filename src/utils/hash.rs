use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 十六进制摘要
pub type HashResult = String;

/// 校验和算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha256,
}

impl Algorithm {
    /// 写入校验和字符串时使用的前缀名
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha256 => "sha256",
        }
    }
}

enum Hasher {
    Md5(md5::Context),
    Sha256(Sha256),
}

impl Hasher {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Hasher::Md5(md5::Context::new()),
            Algorithm::Sha256 => Hasher::Sha256(Sha256::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Hasher::Md5(ctx) => ctx.consume(data),
            Hasher::Sha256(hasher) => hasher.update(data),
        }
    }

    fn finalize(self) -> HashResult {
        match self {
            Hasher::Md5(ctx) => format!("{:x}", ctx.finalize()),
            Hasher::Sha256(hasher) => hex::encode(hasher.finalize()),
        }
    }
}

/// 计算文件的校验和
pub fn compute_file_hash(path: &Path, algorithm: Algorithm) -> Result<HashResult> {
    let file = File::open(path).with_context(|| format!("无法打开文件: {:?}", path))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new(algorithm);
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .with_context(|| format!("无法读取文件: {:?}", path))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize())
}

/// 计算内存数据的校验和
pub fn compute_bytes_hash(data: &[u8], algorithm: Algorithm) -> HashResult {
    let mut hasher = Hasher::new(algorithm);
    hasher.update(data);
    hasher.finalize()
}
