//! 输出落盘

use anyhow::{Context as _, Result};
use std::fs;

use crate::generator::context::GeneratorContext;
use crate::generator::decisions::Decisions;
use crate::generator::sections::{self, FieldKind};

pub trait Outlet {
    async fn save(&self, context: &GeneratorContext, decisions: &Decisions) -> Result<()>;
}

/// 磁盘输出：完整决策JSON + 按目录顺序拼装的Markdown文档
pub struct DiskOutlet;

impl Outlet for DiskOutlet {
    async fn save(&self, context: &GeneratorContext, decisions: &Decisions) -> Result<()> {
        println!("\n🖊️ 生成结果存储中...");
        let output_path = &context.config.output_path;
        fs::create_dir_all(output_path)
            .with_context(|| format!("Failed to create output directory: {:?}", output_path))?;

        let json = serde_json::to_string_pretty(decisions)?;
        fs::write(output_path.join("decisions.json"), json)
            .context("Failed to write decisions.json")?;

        let packet = render_packet(decisions);
        fs::write(output_path.join("rfp_packet.md"), packet)
            .context("Failed to write rfp_packet.md")?;

        println!("✓ 输出已写入 {:?}", output_path);
        Ok(())
    }
}

/// 按字段目录顺序将生成段落拼装为一份文档
fn render_packet(decisions: &Decisions) -> String {
    let mut packet = format!(
        "# كراسة الشروط والمواصفات — {}\n\n",
        decisions.get_text(sections::PROJECT_NAME)
    );

    for (name, kind) in sections::FIELD_MAP {
        if *kind != FieldKind::Llm {
            continue;
        }
        let text = decisions.get_text(name);
        if text.is_empty() {
            continue;
        }
        packet.push_str(&format!("## {}\n\n{}\n\n", name, text));
    }
    packet
}
