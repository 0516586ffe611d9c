#[cfg(test)]
mod tests {
    use crate::config::{Config, LLMConfig, LLMProvider};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.project_name.is_none());
        assert!(config.input_path.is_none());
        assert_eq!(config.output_path, PathBuf::from("./tendergen.out"));
        assert!(config.excluded_sections.is_empty());
        assert!(!config.skip_connection_check);
        assert!(!config.verbose);
    }

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "moonshot".parse::<LLMProvider>().unwrap(),
            LLMProvider::Moonshot
        );
        assert_eq!(
            "deepseek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "anthropic".parse::<LLMProvider>().unwrap(),
            LLMProvider::Anthropic
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::Moonshot.to_string(), "moonshot");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_llm_config_default() {
        let config = LLMConfig::default();

        assert_eq!(config.provider, LLMProvider::OpenAI);
        // api_key may be empty if env var is not set
        assert!(!config.api_base_url.is_empty());
        assert!(!config.model.is_empty());
        assert_eq!(config.max_tokens, 16384);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.timeout_seconds, 120);
        assert_eq!(config.max_parallels, 4);
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tendergen.toml");

        let config_content = r#"project_name = "City Road Maintenance"
output_path = "/tmp/out"
excluded_sections = ["Special_Conditions"]

[llm]
provider = "deepseek"
model = "deepseek-chat"
timeout_seconds = 60
max_parallels = 2
"#;
        std::fs::write(&config_path, config_content).unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert_eq!(
            config.project_name,
            Some("City Road Maintenance".to_string())
        );
        assert_eq!(config.output_path, PathBuf::from("/tmp/out"));
        assert_eq!(
            config.excluded_sections,
            vec!["Special_Conditions".to_string()]
        );
        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.model, "deepseek-chat");
        assert_eq!(config.llm.timeout_seconds, 60);
        assert_eq!(config.llm.max_parallels, 2);
        // 未出现在文件中的字段走缺省值
        assert_eq!(config.llm.temperature, 0.0);
        assert!(!config.verbose);
    }

    #[test]
    fn test_config_from_missing_file() {
        let path = PathBuf::from("/nonexistent/tendergen.toml");
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_get_project_name_with_configured_name() {
        let mut config = Config::default();
        config.project_name = Some("Test Project".to_string());

        assert_eq!(config.get_project_name(), "Test Project");
    }

    #[test]
    fn test_get_project_name_empty_configured_name() {
        let mut config = Config::default();
        config.project_name = Some("   ".to_string());

        assert_ne!(config.get_project_name(), "   ");
    }

    #[test]
    fn test_get_project_name_from_input_path() {
        let mut config = Config::default();
        config.input_path = Some(PathBuf::from("/requests/road-tender.json"));

        assert_eq!(config.get_project_name(), "road-tender");
    }

    #[test]
    fn test_get_project_name_fallback() {
        let config = Config::default();
        assert_eq!(config.get_project_name(), "tender");
    }
}
