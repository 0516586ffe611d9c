//! 生成工作流：决策构建 -> 段落调度 -> 结果合成

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;

use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::generator::decisions::{DecisionBuilder, Decisions};
use crate::generator::outlet::{DiskOutlet, Outlet};
use crate::generator::scheduler::SectionScheduler;
use crate::generator::synthesizer;
use crate::llm::client::{LLMClient, TextGenerator};

/// 一次生成请求
///
/// 请求内数据只随请求传递，不落入任何全局状态。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// 原始录入：JSON对象，或待解析的JSON字符串
    #[serde(default)]
    pub raw_input: Value,
    /// 段落包含覆盖：显式false才剔除，缺省即包含
    #[serde(default)]
    pub include_sections: HashMap<String, bool>,
}

/// 入站边界的结构化结果：要么携带完整决策，要么携带错误描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decisions: Option<Decisions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunReport {
    pub fn completed(decisions: Decisions) -> Self {
        Self {
            success: true,
            decisions: Some(decisions),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            decisions: None,
            error: Some(error),
        }
    }
}

/// 执行一次完整运行
pub async fn run<G>(
    generator: &G,
    context: &GeneratorContext,
    request: &GenerateRequest,
) -> Result<Decisions>
where
    G: TextGenerator + ?Sized,
{
    let built = DecisionBuilder.build(
        &request.raw_input,
        &request.include_sections,
        Decisions::new(),
    );
    println!("📋 本次运行需生成{}个段落", built.sections.len());

    let scheduler = SectionScheduler::new(
        generator,
        &context.templates,
        context.config.llm.max_parallels,
    );
    let decisions = scheduler.execute(&built.sections, built.decisions).await?;

    Ok(synthesizer::finalize(decisions))
}

/// 入站边界契约：调用方总能拿到结构化结果
///
/// 段落级失败在调度器内已转化为兜底文本，这里只兜调度级错误。
pub async fn execute_request<G>(
    generator: &G,
    context: &GeneratorContext,
    request: &GenerateRequest,
) -> RunReport
where
    G: TextGenerator + ?Sized,
{
    match run(generator, context, request).await {
        Ok(decisions) => RunReport::completed(decisions),
        Err(e) => {
            eprintln!("❌ 生成运行失败: {}", e);
            RunReport::failed(e.to_string())
        }
    }
}

/// 启动一次性的CLI生成流程
pub async fn launch(config: &Config) -> Result<()> {
    let llm_client = LLMClient::new(config.clone())?;

    // 启动时检查模型连接
    if !config.skip_connection_check {
        llm_client.check_connection().await?;
    }

    let context = GeneratorContext::new(config.clone());
    let request = read_request(config)?;

    let report = execute_request(&llm_client, &context, &request).await;

    if let Some(decisions) = &report.decisions {
        DiskOutlet.save(&context, decisions).await?;
        println!("✅ 生成完成，共{}个字段", decisions.len());
    }

    if let Some(error) = report.error {
        anyhow::bail!("{}", error);
    }
    Ok(())
}

/// 从配置指定的录入文档构造请求
fn read_request(config: &Config) -> Result<GenerateRequest> {
    let Some(input_path) = &config.input_path else {
        // 未指定录入文档：空请求，全部段落按缺省包含
        return Ok(apply_excluded_sections(GenerateRequest::default(), config));
    };

    let content = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input document: {:?}", input_path))?;
    let request: GenerateRequest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse input document: {:?}", input_path))?;

    Ok(apply_excluded_sections(request, config))
}

/// CLI层的段落剔除并入请求的包含覆盖
fn apply_excluded_sections(mut request: GenerateRequest, config: &Config) -> GenerateRequest {
    for section in &config.excluded_sections {
        request.include_sections.insert(section.clone(), false);
    }
    request
}

// Include tests
#[cfg(test)]
mod tests;
