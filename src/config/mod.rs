use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 项目名称（用于输出文档命名，缺省时从录入文档路径推断）
    pub project_name: Option<String>,

    /// 原始录入文档路径（JSON，内含raw_input与include_sections）
    pub input_path: Option<PathBuf>,

    /// 输出路径
    pub output_path: PathBuf,

    /// 不需要生成的段落，等价于包含覆盖为false
    pub excluded_sections: Vec<String>,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 跳过启动时的模型连接检查
    pub skip_connection_check: bool,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 段落生成使用的模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 单次生成请求的超时时间（秒）
    pub timeout_seconds: u64,

    /// 单个波次内的最大并发请求数
    pub max_parallels: usize,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 获取项目名称，优先使用配置的project_name，否则从录入文档路径推断
    pub fn get_project_name(&self) -> String {
        if let Some(ref name) = self.project_name
            && !name.trim().is_empty()
        {
            return name.clone();
        }

        self.input_path
            .as_ref()
            .and_then(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "tender".to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: None,
            input_path: None,
            output_path: PathBuf::from("./tendergen.out"),
            excluded_sections: vec![],
            llm: LLMConfig::default(),
            skip_connection_check: false,
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("TENDERGEN_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("gpt-5-mini"),
            max_tokens: 16384,
            temperature: 0.0,
            timeout_seconds: 120,
            max_parallels: 4,
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
