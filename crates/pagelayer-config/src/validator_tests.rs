    use super::*;

    #[test]
    fn test_validate_default_config() {
        let result = ConfigValidator::validate(&Config::default());
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_invalid_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "server.port"));
    }

    #[test]
    fn test_validate_zero_viewport() {
        let mut config = Config::default();
        config.render.viewport_width = 0;
        config.render.viewport_height = 0;

        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors.iter().any(|e| e.path == "render.viewport_height"));
    }

    #[test]
    fn test_validate_negative_min_size() {
        let mut config = Config::default();
        config.extract.min_visible_size = -1.0;

        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "extract.min_visible_size"));
    }

    #[test]
    fn test_validate_nan_min_size() {
        let mut config = Config::default();
        config.extract.min_visible_size = f64::NAN;

        assert!(!ConfigValidator::validate(&config).is_valid());
    }

    #[test]
    fn test_validate_empty_tag() {
        let mut config = Config::default();
        config.extract.blocked_tags.push("  ".to_string());

        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.path == "extract.blocked_tags"));
    }

    #[test]
    fn test_validate_deep_extraction_warning() {
        let mut config = Config::default();
        config.extract.max_depth = 64;

        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "extract.max_depth"));
    }

    #[test]
    fn test_validate_signal_tag_also_blocked() {
        let mut config = Config::default();
        config.extract.signal_tags.push("SCRIPT".to_string());

        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.message.contains("SCRIPT")));
    }

    #[test]
    fn test_validate_scripts_enabled_warning() {
        let mut config = Config::default();
        config.browser.disable_javascript = false;

        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("server.port", "Port cannot be 0");
        assert_eq!(err.to_string(), "server.port: Port cannot be 0");
    }
