#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(["tendergen-rs"]).unwrap();

        assert!(args.input.is_none());
        assert_eq!(args.output_path, PathBuf::from("./tendergen.out"));
        assert!(args.config.is_none());
        assert!(args.exclude_sections.is_empty());
        assert!(!args.skip_connection_check);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_short_options() {
        let args = Args::try_parse_from([
            "tendergen-rs",
            "-i",
            "/requests/tender.json",
            "-o",
            "/tmp/out",
            "-n",
            "Road Maintenance",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("/requests/tender.json")));
        assert_eq!(args.output_path, PathBuf::from("/tmp/out"));
        assert_eq!(args.name, Some("Road Maintenance".to_string()));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_exclude_section_repeatable() {
        let args = Args::try_parse_from([
            "tendergen-rs",
            "--exclude-section",
            "Special_Conditions",
            "--exclude-section",
            "Introduction",
        ])
        .unwrap();

        assert_eq!(
            args.exclude_sections,
            vec!["Special_Conditions".to_string(), "Introduction".to_string()]
        );
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from([
            "tendergen-rs",
            "--llm-provider",
            "deepseek",
            "--llm-api-key",
            "test-key",
            "--llm-api-base-url",
            "https://api.deepseek.com",
            "--model",
            "deepseek-chat",
            "--max-tokens",
            "2048",
            "--temperature",
            "0.7",
            "--max-parallels",
            "5",
            "--timeout-seconds",
            "30",
        ])
        .unwrap();

        assert_eq!(args.llm_provider, Some("deepseek".to_string()));
        assert_eq!(args.llm_api_key, Some("test-key".to_string()));
        assert_eq!(
            args.llm_api_base_url,
            Some("https://api.deepseek.com".to_string())
        );
        assert_eq!(args.model, Some("deepseek-chat".to_string()));
        assert_eq!(args.max_tokens, Some(2048));
        assert_eq!(args.temperature, Some(0.7));
        assert_eq!(args.max_parallels, Some(5));
        assert_eq!(args.timeout_seconds, Some(30));
    }

    #[test]
    fn test_into_config_applies_overrides() {
        let args = Args::try_parse_from([
            "tendergen-rs",
            "-i",
            "/requests/tender.json",
            "--llm-provider",
            "anthropic",
            "--model",
            "claude-sonnet-4-5",
            "--timeout-seconds",
            "45",
            "--exclude-section",
            "Introduction",
            "--skip-connection-check",
        ])
        .unwrap();

        let config = args.into_config();

        assert_eq!(config.input_path, Some(PathBuf::from("/requests/tender.json")));
        assert_eq!(config.llm.provider, LLMProvider::Anthropic);
        assert_eq!(config.llm.model, "claude-sonnet-4-5");
        assert_eq!(config.llm.timeout_seconds, 45);
        assert_eq!(config.excluded_sections, vec!["Introduction".to_string()]);
        assert!(config.skip_connection_check);
    }

    #[test]
    fn test_into_config_unknown_provider_keeps_default() {
        let args =
            Args::try_parse_from(["tendergen-rs", "--llm-provider", "not-a-provider"]).unwrap();
        let config = args.into_config();

        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
    }
}
