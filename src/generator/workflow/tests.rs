#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::generator::context::GeneratorContext;
    use crate::generator::decisions::INPUT_PARSE_WARNING;
    use crate::generator::scheduler::FALLBACK_TEXT;
    use crate::generator::sections;
    use crate::generator::workflow::{GenerateRequest, RunReport, execute_request, run};
    use crate::llm::client::TextGenerator;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    struct StaticGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for StaticGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct BrokenGenerator;

    #[async_trait]
    impl TextGenerator for BrokenGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(anyhow!("backend unreachable"))
        }
    }

    fn create_test_context() -> GeneratorContext {
        GeneratorContext::new(Config::default())
    }

    #[tokio::test]
    async fn test_run_produces_one_outcome_per_section() {
        let context = create_test_context();
        let request = GenerateRequest {
            raw_input: json!({ "Project_Name": "مشروع", "Issue_Date": "2025-01-01" }),
            include_sections: HashMap::new(),
        };

        let decisions = run(&StaticGenerator("نص"), &context, &request)
            .await
            .unwrap();

        for (name, kind) in sections::FIELD_MAP {
            if *kind != sections::FieldKind::Llm {
                continue;
            }
            assert_eq!(decisions.get_text(name), "نص", "section {}", name);
        }
        // 日期推导与回写同样进入最终上下文
        assert_eq!(decisions.get_text("Award_Decision_Date"), "2025-01-18");
        assert_eq!(decisions.get_text("Commencement_of_Work"), "2025-01-31");
        assert!(decisions.contains("raw_input"));
    }

    #[tokio::test]
    async fn test_run_with_all_sections_failing_still_succeeds() {
        let context = create_test_context();
        let request = GenerateRequest::default();

        let report = execute_request(&BrokenGenerator, &context, &request).await;

        assert!(report.success);
        let decisions = report.decisions.unwrap();
        assert_eq!(decisions.get_text(sections::INTRODUCTION), FALLBACK_TEXT);
        assert_eq!(
            decisions.get_text(sections::BID_EVALUATION_CRITERIA),
            FALLBACK_TEXT
        );
    }

    #[tokio::test]
    async fn test_malformed_raw_input_completes_with_defaults() {
        let context = create_test_context();
        // 全部段落被剔除 + 无法解析的录入：运行仍须完成
        let include_sections: HashMap<String, bool> = sections::FIELD_MAP
            .iter()
            .filter(|(_, kind)| *kind == sections::FieldKind::Llm)
            .map(|(name, _)| (name.to_string(), false))
            .collect();
        let request = GenerateRequest {
            raw_input: Value::String("{broken".to_string()),
            include_sections,
        };

        let report = execute_request(&BrokenGenerator, &context, &request).await;

        assert!(report.success);
        let decisions = report.decisions.unwrap();
        assert!(decisions.contains(INPUT_PARSE_WARNING));
        // 缺省决策仍然齐备
        assert!(decisions.contains("Commencement_of_Work"));
        for key in sections::PENALTY_FIELDS {
            assert!(decisions.contains(key));
        }
        // 没有任何段落被生成
        assert!(!decisions.contains(sections::INTRODUCTION));
    }

    #[tokio::test]
    async fn test_inclusion_override_is_scoped_to_request() {
        let context = create_test_context();
        let request = GenerateRequest {
            raw_input: json!({}),
            include_sections: HashMap::from([(sections::INTRODUCTION.to_string(), false)]),
        };

        let decisions = run(&StaticGenerator("نص"), &context, &request)
            .await
            .unwrap();
        assert!(!decisions.contains(sections::INTRODUCTION));
        assert_eq!(decisions.get_text(sections::SCOPE_OF_WORK), "نص");

        // 第二个请求不受上一个请求的覆盖影响
        let decisions = run(&StaticGenerator("نص"), &context, &GenerateRequest::default())
            .await
            .unwrap();
        assert_eq!(decisions.get_text(sections::INTRODUCTION), "نص");
    }

    #[test]
    fn test_run_report_shapes() {
        let completed = RunReport::completed(Default::default());
        assert!(completed.success);
        assert!(completed.decisions.is_some());
        assert!(completed.error.is_none());

        let failed = RunReport::failed("boom".to_string());
        assert!(!failed.success);
        assert!(failed.decisions.is_none());
        assert_eq!(failed.error.as_deref(), Some("boom"));

        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json, json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn test_generate_request_deserializes_with_defaults() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.raw_input.is_null());
        assert!(request.include_sections.is_empty());

        let request: GenerateRequest = serde_json::from_str(
            r#"{ "raw_input": { "Project_Name": "x" }, "include_sections": { "Introduction": false } }"#,
        )
        .unwrap();
        assert_eq!(request.raw_input["Project_Name"], "x");
        assert_eq!(request.include_sections.get("Introduction"), Some(&false));
    }
}
