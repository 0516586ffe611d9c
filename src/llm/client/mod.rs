//! LLM客户端 - 提供统一的文本生成服务接口

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::config::Config;

mod providers;

use providers::ProviderClient;

/// 文本生成能力抽象
///
/// 调度器只依赖这一层：输入完整prompt，返回生成文本或失败。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// 生成请求错误
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("生成请求超时（{0}秒）")]
    Timeout(u64),
    #[error("模型服务返回空内容")]
    EmptyResponse,
}

/// 段落生成的统一系统提示词
const PREAMBLE: &str =
    "أنت خبير في صياغة كراسات الشروط والمواصفات للمنافسات الحكومية. اكتب نصا رسميا واضحا جاهزا للإدراج مباشرة في الكراسة.";

/// LLM客户端
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        match self.generate("مرحبا").await {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl TextGenerator for LLMClient {
    /// 单轮生成，带配置化的请求超时
    async fn generate(&self, prompt: &str) -> Result<String> {
        let llm_config = &self.config.llm;
        let agent = self
            .client
            .create_agent(&llm_config.model, PREAMBLE, llm_config);

        let timeout = Duration::from_secs(llm_config.timeout_seconds);
        let response = match tokio::time::timeout(timeout, agent.prompt(prompt)).await {
            Ok(result) => result?,
            Err(_) => return Err(GenerationError::Timeout(llm_config.timeout_seconds).into()),
        };

        let response = response.trim().to_string();
        if response.is_empty() {
            return Err(GenerationError::EmptyResponse.into());
        }
        Ok(response)
    }
}
