//! 段落生成调度器 - 本引擎的核心
//!
//! 将请求段落解析为拓扑波次：独立段落一波并发生成，单点失败只替换
//! 自己的兜底文本；波次整体完成后一次性合并，再派发先决条件已满足的
//! 依赖段落。一次运行端到端只执行一遍，无重试、无重入。

use anyhow::{Result, bail};
use std::collections::HashSet;

use crate::generator::decisions::Decisions;
use crate::generator::sections::{self, DependentSpec};
use crate::generator::templates::{self, TemplateCatalog};
use crate::llm::client::TextGenerator;
use crate::utils::threads::do_parallel_with_limit;

/// 生成失败时合并进上下文的固定兜底文本
pub const FALLBACK_TEXT: &str = "تعذر توليد النص.";

/// 单个段落的生成结果，每段每次运行恰好产生一个
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// 生成成功的文本
    Generated(String),
    /// 生成失败，由固定兜底文本替代
    Fallback,
}

impl SectionOutcome {
    /// 合并进上下文的最终文本：任何结果都是字符串
    pub fn into_text(self) -> String {
        match self {
            SectionOutcome::Generated(text) => text,
            SectionOutcome::Fallback => FALLBACK_TEXT.to_string(),
        }
    }
}

/// 单次运行的阶段状态机
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    DispatchingWave,
    MergingWave,
    DispatchingDependent,
    Done,
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunPhase::Idle => write!(f, "idle"),
            RunPhase::DispatchingWave => write!(f, "dispatching_wave"),
            RunPhase::MergingWave => write!(f, "merging_wave"),
            RunPhase::DispatchingDependent => write!(f, "dispatching_dependent"),
            RunPhase::Done => write!(f, "done"),
        }
    }
}

/// 一个波次：一批并发派发的生成请求，随后单点合并
struct Wave {
    sections: Vec<String>,
    dependent: bool,
}

/// 段落生成调度器
///
/// 按调用显式构造并注入协作方，不持有任何进程级全局状态。
pub struct SectionScheduler<'a, G: TextGenerator + ?Sized> {
    generator: &'a G,
    templates: &'a TemplateCatalog,
    dependents: &'a [DependentSpec],
    max_parallels: usize,
}

impl<'a, G> SectionScheduler<'a, G>
where
    G: TextGenerator + ?Sized,
{
    pub fn new(generator: &'a G, templates: &'a TemplateCatalog, max_parallels: usize) -> Self {
        Self {
            generator,
            templates,
            dependents: sections::DEPENDENT_SECTIONS,
            max_parallels,
        }
    }

    /// 替换依赖段落声明表（内置表只含评标标准一项）
    pub fn with_dependents(mut self, dependents: &'a [DependentSpec]) -> Self {
        self.dependents = dependents;
        self
    }

    /// 执行一次完整的生成运行
    ///
    /// 请求列表中的每个段落恰好合并一个结果（生成文本或兜底文本）。
    /// 唯一的调度级错误是依赖声明无法解析为DAG。
    pub async fn execute(
        &self,
        section_list: &[String],
        mut decisions: Decisions,
    ) -> Result<Decisions> {
        let mut phase = RunPhase::Idle;
        let waves = self.plan_waves(section_list)?;

        for wave in &waves {
            if wave.sections.is_empty() {
                continue;
            }

            self.advance(
                &mut phase,
                if wave.dependent {
                    RunPhase::DispatchingDependent
                } else {
                    RunPhase::DispatchingWave
                },
            );
            println!(
                "🚀 并发生成{}个段落：{}",
                wave.sections.len(),
                wave.sections.join("、")
            );
            let outcomes = self.dispatch_wave(wave, &decisions).await;

            // 波次整体完成后按固定段落顺序合并，后续波次构造prompt时
            // 可见全部已合并结果
            self.advance(&mut phase, RunPhase::MergingWave);
            for (section, outcome) in outcomes {
                decisions.insert_text(&section, outcome.into_text());
            }
        }

        self.advance(&mut phase, RunPhase::Done);
        Ok(decisions)
    }

    /// 将请求段落解析为拓扑波次
    ///
    /// 第一波为全部独立段落；其后每波只含先决条件已全部合并（或未被
    /// 请求，按空串字段处理）的依赖段落。无法推进即为依赖环。
    fn plan_waves(&self, section_list: &[String]) -> Result<Vec<Wave>> {
        let mut independent = Vec::new();
        let mut pending: Vec<&DependentSpec> = Vec::new();

        for section in section_list {
            match self.dependents.iter().find(|d| d.section == *section) {
                Some(spec) => pending.push(spec),
                None => independent.push(section.clone()),
            }
        }

        let requested: HashSet<&str> = section_list.iter().map(|s| s.as_str()).collect();
        let mut satisfied: HashSet<&str> = independent.iter().map(|s| s.as_str()).collect();
        let mut waves = vec![Wave {
            sections: independent.clone(),
            dependent: false,
        }];

        while !pending.is_empty() {
            let (ready, rest): (Vec<_>, Vec<_>) = pending.into_iter().partition(|spec| {
                spec.prerequisites
                    .iter()
                    .all(|p| satisfied.contains(p) || !requested.contains(p))
            });

            if ready.is_empty() {
                bail!(
                    "依赖段落无法解析为DAG（存在环）: {}",
                    rest.iter()
                        .map(|spec: &&DependentSpec| spec.section)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }

            for spec in &ready {
                satisfied.insert(spec.section);
            }
            waves.push(Wave {
                sections: ready.iter().map(|spec| spec.section.to_string()).collect(),
                dependent: true,
            });
            pending = rest;
        }

        Ok(waves)
    }

    /// 并发派发一个波次
    ///
    /// 所有prompt在派发前以只读快照解析完毕，同波次兄弟任务的结果
    /// 不会影响彼此的prompt；单个请求的失败在任务边界被捕获。
    async fn dispatch_wave(
        &self,
        wave: &Wave,
        decisions: &Decisions,
    ) -> Vec<(String, SectionOutcome)> {
        let mut request_futures = Vec::new();

        for section in &wave.sections {
            let prompt = self.resolve_prompt(section, decisions);
            let section = section.clone();
            let generator = self.generator;

            request_futures.push(Box::pin(async move {
                let Some(prompt) = prompt else {
                    // 既无模板也无专用prompt的段落按兜底文本落盘，
                    // 保证一段一果
                    println!("⚠️ 段落缺少模板: {}", section);
                    return (section, SectionOutcome::Fallback);
                };

                match generator.generate(&prompt).await {
                    Ok(text) => (section, SectionOutcome::Generated(text)),
                    Err(e) => {
                        println!("⚠️ 段落生成失败，使用兜底文本: {} ... {}", section, e);
                        (section, SectionOutcome::Fallback)
                    }
                }
            }));
        }

        do_parallel_with_limit(request_futures, self.max_parallels).await
    }

    /// 解析段落的prompt
    ///
    /// 评标标准使用专用构造器，其余段落走模板目录。
    fn resolve_prompt(&self, section: &str, decisions: &Decisions) -> Option<String> {
        if section == sections::BID_EVALUATION_CRITERIA {
            return Some(templates::build_bid_evaluation_prompt(decisions));
        }
        self.templates
            .get(section)
            .map(|template| self.templates.render(template, decisions))
    }

    fn advance(&self, phase: &mut RunPhase, next: RunPhase) {
        println!("   ▶ 调度状态: {} -> {}", phase, next);
        *phase = next;
    }
}
