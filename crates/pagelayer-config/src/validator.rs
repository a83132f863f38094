//! Configuration validation.

use crate::schema::Config;

/// Depth beyond which extraction output grows large for little gain.
const DEEP_EXTRACTION_WARNING: usize = 32;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_browser(config, &mut result);
        Self::validate_render(config, &mut result);
        Self::validate_extract(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        if config.server.body_limit_bytes == 0 {
            result.add_error(ValidationError::new(
                "server.body_limit_bytes",
                "body_limit_bytes must be greater than 0",
            ));
        }
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        if config.browser.debug_port == 0 {
            result.add_error(ValidationError::new("browser.debug_port", "Port cannot be 0"));
        }

        if let Some(ref path) = config.browser.chrome_path {
            if !path.exists() {
                result.add_warning(ValidationWarning::new(
                    "browser.chrome_path",
                    format!("Chrome executable does not exist: {:?}", path),
                ));
            }
        }

        if !config.browser.disable_javascript {
            result.add_warning(ValidationWarning::new(
                "browser.disable_javascript",
                "Scripts in submitted HTML will run during rendering",
            ));
        }
    }

    fn validate_render(config: &Config, result: &mut ValidationResult) {
        if config.render.viewport_width == 0 {
            result.add_error(ValidationError::new(
                "render.viewport_width",
                "viewport_width must be greater than 0",
            ));
        }

        if config.render.viewport_height == 0 {
            result.add_error(ValidationError::new(
                "render.viewport_height",
                "viewport_height must be greater than 0",
            ));
        }

        if config.render.stabilization_timeout_ms == 0 {
            result.add_error(ValidationError::new(
                "render.stabilization_timeout_ms",
                "stabilization_timeout_ms must be greater than 0",
            ));
        }
    }

    fn validate_extract(config: &Config, result: &mut ValidationResult) {
        let extract = &config.extract;

        if !(extract.min_visible_size >= 0.0) {
            result.add_error(ValidationError::new(
                "extract.min_visible_size",
                "min_visible_size must be a non-negative number",
            ));
        }

        if extract.max_depth > DEEP_EXTRACTION_WARNING {
            result.add_warning(ValidationWarning::new(
                "extract.max_depth",
                format!(
                    "max_depth is very high (>{}), output may be large",
                    DEEP_EXTRACTION_WARNING
                ),
            ));
        }

        if extract.text_max == 0 {
            result.add_warning(ValidationWarning::new(
                "extract.text_max",
                "text_max is 0, all text will be dropped",
            ));
        }

        for (path, tags) in [
            ("extract.blocked_tags", &extract.blocked_tags),
            ("extract.signal_tags", &extract.signal_tags),
        ] {
            if tags.iter().any(|t| t.trim().is_empty()) {
                result.add_error(ValidationError::new(path, "Tag names cannot be empty"));
            }
        }

        for tag in &extract.signal_tags {
            if extract.is_blocked(tag) {
                result.add_warning(ValidationWarning::new(
                    "extract.signal_tags",
                    format!("Tag '{}' is also blocked and will never be kept", tag),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
