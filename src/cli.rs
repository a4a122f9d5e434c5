use anyhow::{Result, anyhow};
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::report::{ReportSummary, update_readme, write_registry};
use crate::utils::Algorithm;

/// 数据集校验和生成工具
#[derive(Debug, Parser)]
#[command(name = "dsc")]
#[command(about = "数据集校验和生成工具", long_about = None)]
pub struct Cli {
    /// 数据集根目录
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,
    /// 配置文件 (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// 输出调试日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 生成 data/registry.txt 注册表
    Registry {
        /// 只计算，不写入文件
        #[arg(long, env = "DRY_RUN", value_parser = FalseyValueParser::new())]
        dry_run: bool,
        /// 校验和算法
        #[arg(long, value_enum)]
        algorithm: Option<Algorithm>,
    },
    /// 更新 README 中的校验和表格
    Readme {
        /// 只计算，不写入文件
        #[arg(long, env = "DRY_RUN", value_parser = FalseyValueParser::new())]
        dry_run: bool,
        /// README 路径 (相对于根目录)
        #[arg(long)]
        readme: Option<PathBuf>,
        /// 校验和算法
        #[arg(long, value_enum)]
        algorithm: Option<Algorithm>,
    },
}

impl Cli {
    /// 按命令生成注册表或更新 README
    pub fn run(self) -> Result<ReportSummary> {
        if !self.root.exists() {
            return Err(anyhow!("根目录不存在: {:?}", self.root));
        }

        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        match self.command {
            Commands::Registry { dry_run, algorithm } => {
                let mut variant = config.registry;
                if let Some(algorithm) = algorithm {
                    variant = variant.with_algorithm(algorithm);
                }
                write_registry(&self.root, &variant, dry_run)
            }
            Commands::Readme {
                dry_run,
                readme,
                algorithm,
            } => {
                let mut variant = config.readme;
                if let Some(readme) = readme {
                    variant = variant.with_output(readme);
                }
                if let Some(algorithm) = algorithm {
                    variant = variant.with_algorithm(algorithm);
                }
                let document = variant.output_path(&self.root);
                if !document.exists() {
                    return Err(anyhow!("文档不存在: {:?}", document));
                }
                update_readme(&self.root, &variant, dry_run)
            }
        }
    }
}
