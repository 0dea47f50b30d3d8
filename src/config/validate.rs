//! configuration validation stuff
use {
    crate::{config::options::*, validator, validator_nested},
    color_eyre::Result,
    globset::Glob,
};

/// trait for validating config structs
pub trait Validate {
    /// validate the config
    fn validate(&self) -> Result<(), Vec<String>>;

    /// check if the config is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

validator! { LoggingConfig,
    level => |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str()),
        "must be one of: trace, debug, info, warn, error";
}

impl Validate for VariantSet {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        for (name, slot) in self.variants() {
            match slot {
                None => errors.push(format!("{name}: missing required variant")),
                Some(value) => {
                    if let Err(e) = value.resolve() {
                        errors.push(format!("{name}: {e}"));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for ExtendCfg {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        if let Some(ref colors) = self.colors {
            for (role, set) in colors {
                if role.trim().is_empty() {
                    errors.push("colors: role names must not be empty".to_string());
                }

                if let Err(set_errors) = set.validate() {
                    for err in set_errors {
                        errors.push(format!("colors.{role}.{err}"));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

validator_nested! { ThemeCfg,
    fields: {}
    nested: {
        extend;
    }
}

impl Validate for Tinge {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        if let Some(ref content) = self.content {
            if content.is_empty() {
                errors.push("content: no content paths were specified".to_string());
            }

            for path in content {
                if path.trim().is_empty() {
                    errors.push("content: paths must not be empty strings".to_string());
                } else if Glob::new(path).is_err() {
                    errors.push(format!("content: `{path}` is not a valid glob pattern"));
                }
            }
        }

        if let Some(ref plugins) = self.plugins {
            if plugins.is_empty() {
                errors.push("plugins: at least one plugin must be listed".to_string());
            }

            for plugin in plugins {
                if plugin.trim().is_empty() || plugin.chars().any(char::is_whitespace) {
                    errors.push(format!("plugins: `{plugin}` is not a valid module name"));
                }
            }
        }

        macro_rules! validate_nested {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(ref nested) = self.$field {
                        if let Err(nested_errors) = nested.validate() {
                            for err in nested_errors {
                                errors.push(format!("{}.{}", stringify!($field), err));
                            }
                        }
                    }
                )*
            };
        }

        validate_nested!(theme, logging);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// format validation errors for display
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_contrast_names_role_and_field() {
        let cfg: Tinge = toml::from_str(
            r##"
            content = ["./index.html"]
            plugins = ["@tailwindcss/forms"]

            [theme.extend.colors.pri]
            default = "#ff7f50"
            hover = "#ff8b61"
            active = "#e57248"
            "##,
        )
        .unwrap();

        let errors = cfg.validate().unwrap_err();
        assert_eq!(
            errors,
            vec!["theme.extend.colors.pri.contrast: missing required variant".to_string()]
        );
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let mut cfg = Tinge::default();
        cfg.content = Some(vec![]);

        let errors = cfg.validate().unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.contains("no content paths were specified")),
            "{errors:?}"
        );
    }

    #[test]
    fn test_empty_content_entry_is_rejected() {
        let mut cfg = Tinge::default();
        cfg.content = Some(vec!["./index.html".to_owned(), "  ".to_owned()]);

        let errors = cfg.validate().unwrap_err();
        assert!(
            errors.iter().any(|e| e.contains("must not be empty")),
            "{errors:?}"
        );
    }

    #[test]
    fn test_empty_plugins_are_rejected() {
        let mut cfg = Tinge::default();
        cfg.plugins = Some(vec![]);

        assert!(!cfg.is_valid());
    }

    #[test]
    fn test_out_of_range_shade_is_rejected() {
        let cfg: Tinge = toml::from_str(
            r##"
            content = ["./index.html"]
            plugins = ["@tailwindcss/forms"]

            [theme.extend.colors.sec]
            default = "cyan[850]"
            hover = "cyan[700]"
            active = "cyan[900]"
            contrast = "white"
            "##,
        )
        .unwrap();

        let errors = cfg.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "theme.extend.colors.sec.default: palette scale `cyan` has no shade 850"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let mut cfg = Tinge::default();
        cfg.logging = Some(LoggingConfig {
            level: Some("verbose".to_owned()),
            ..LoggingConfig::default()
        });

        let errors = cfg.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.starts_with("logging.level")));
    }

    #[test]
    fn test_format_validation_errors() {
        let out = format_validation_errors(&[
            "content: no content paths were specified".to_string(),
            "plugins: at least one plugin must be listed".to_string(),
        ]);

        assert!(out.starts_with("Configuration validation failed:"));
        assert!(out.contains("  1. content:"));
        assert!(out.contains("  2. plugins:"));
    }
}
