use crate::config::{Config, LLMProvider};
use clap::Parser;
use std::path::PathBuf;

/// tendergen-rs - 由Rust与AI驱动的招标文件生成引擎
#[derive(Parser, Debug)]
#[command(name = "tendergen-rs")]
#[command(
    about = "AI-based generation engine for RFP/tender packets. It derives the full decision context from a raw input document, generates every required section through an LLM with concurrent scheduling, and assembles the completed packet."
)]
#[command(version)]
pub struct Args {
    /// 原始录入文档路径（JSON，内含raw_input与include_sections）
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 输出路径
    #[arg(short, long, default_value = "./tendergen.out")]
    pub output_path: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 项目名称
    #[arg(short, long)]
    pub name: Option<String>,

    /// 不生成的段落，可重复指定
    #[arg(long = "exclude-section")]
    pub exclude_sections: Vec<String>,

    /// LLM Provider (openai, moonshot, deepseek, anthropic, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 段落生成使用的模型
    #[arg(long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 单个波次内的最大并发请求数
    #[arg(long)]
    pub max_parallels: Option<usize>,

    /// 单次生成请求的超时时间（秒）
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// 跳过启动时的模型连接检查
    #[arg(long)]
    pub skip_connection_check: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            Config::from_file(config_path).unwrap_or_else(|e| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}: {}", config_path, e)
            })
        } else {
            // 没有显式指定配置文件时，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("tendergen.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|e| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}: {}",
                        default_config_path, e
                    )
                })
            } else {
                Config::default()
            }
        };

        // 覆盖配置文件中的设置
        if self.input.is_some() {
            config.input_path = self.input;
        }
        config.output_path = self.output_path;

        if let Some(name) = self.name {
            config.project_name = Some(name);
        }
        config.excluded_sections.extend(self.exclude_sections);

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        if let Some(max_parallels) = self.max_parallels {
            config.llm.max_parallels = max_parallels;
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            config.llm.timeout_seconds = timeout_seconds;
        }

        // 其他配置
        config.skip_connection_check |= self.skip_connection_check;
        config.verbose |= self.verbose;

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
