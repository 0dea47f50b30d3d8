//! every single available configuration option and its type is listed in this file
use {
    crate::{
        color::{ColorValue, Rgb},
        config::validate::{Validate, format_validation_errors},
    },
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, OptionExt, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    indexmap::IndexMap,
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::info,
};

/// how log events are rendered
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
pub enum LoggingFormat {
    /// use extra pretty multi-line logging
    #[default]
    Pretty,

    /// use compact single-line logging
    Compact,
}

/// Configuration options for logging
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("info".to_string()))]
    pub level: Option<String>,

    /// The format to render log events in
    #[default(Some(LoggingFormat::Pretty))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors and stuff
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// The four color slots a role carries, one per interaction state
///
/// every slot is required; a missing one fails validation naming the role and
/// the slot, and any key outside the four is rejected at parse time
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[serde(deny_unknown_fields)]
pub struct VariantSet {
    /// The resting color of the role
    pub default: Option<ColorValue>,

    /// The color while hovered
    pub hover: Option<ColorValue>,

    /// The color while pressed/active
    pub active: Option<ColorValue>,

    /// The text color drawn on top of the role color
    pub contrast: Option<ColorValue>,
}

impl VariantSet {
    /// the slots in declaration order, paired with their names
    pub fn variants(&self) -> [(&'static str, Option<&ColorValue>); 4] {
        [
            ("default", self.default.as_ref()),
            ("hover", self.hover.as_ref()),
            ("active", self.active.as_ref()),
            ("contrast", self.contrast.as_ref()),
        ]
    }
}

/// Theme additions layered on top of the generator's built-ins
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
pub struct ExtendCfg {
    /// Semantic color roles, keyed by role name; insertion order is kept
    #[default(Some(default_color_roles()))]
    pub colors: Option<IndexMap<String, VariantSet>>,
}

/// The `theme` section
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
pub struct ThemeCfg {
    /// Extensions to the generator's default theme
    #[default(Some(ExtendCfg::default()))]
    pub extend: Option<ExtendCfg>,
}

/// The root theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
pub struct Tinge {
    /// Glob patterns for the source files the generator scans for class usage
    #[default(Some(default_content()))]
    pub content: Option<Vec<String>>,

    /// Theme settings
    #[default(Some(ThemeCfg::default()))]
    pub theme: Option<ThemeCfg>,

    /// External generator plugins, loaded in list order
    #[default(Some(default_plugins()))]
    pub plugins: Option<Vec<String>>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

/// the content globs shipped in the default config
fn default_content() -> Vec<String> {
    vec!["./index.html".to_owned(), "./src/**/*.{ts,vue}".to_owned()]
}

/// the plugin list shipped in the default config
fn default_plugins() -> Vec<String> {
    vec!["@tailwindcss/forms".to_owned()]
}

/// the role set shipped in the default config
fn default_color_roles() -> IndexMap<String, VariantSet> {
    /// shorthand for a packed hex literal
    fn hex(v: u32) -> ColorValue {
        ColorValue::Hex(Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8))
    }

    /// shorthand for a `scale[shade]` reference
    fn step(scale: &str, shade: u16) -> ColorValue {
        ColorValue::Reference {
            scale: scale.to_owned(),
            shade,
        }
    }

    /// shorthand for the white contrast color
    fn white() -> ColorValue {
        ColorValue::Named("white".to_owned())
    }

    /// shorthand for a fully populated variant set
    fn set(default: ColorValue, hover: ColorValue, active: ColorValue) -> VariantSet {
        VariantSet {
            default: Some(default),
            hover: Some(hover),
            active: Some(active),
            contrast: Some(white()),
        }
    }

    IndexMap::from_iter([
        (
            "pri".to_owned(),
            set(hex(0xff7f50), hex(0xff8b61), hex(0xe57248)),
        ),
        (
            "sec".to_owned(),
            set(step("cyan", 800), step("cyan", 700), step("cyan", 900)),
        ),
        (
            "neu".to_owned(),
            set(step("stone", 700), step("stone", 600), step("stone", 800)),
        ),
        (
            "suc".to_owned(),
            set(step("green", 800), step("green", 700), step("green", 900)),
        ),
        (
            "dng".to_owned(),
            set(step("red", 800), step("red", 700), step("red", 900)),
        ),
        (
            "wrn".to_owned(),
            set(step("amber", 500), step("amber", 400), step("amber", 600)),
        ),
        (
            "inf".to_owned(),
            set(step("blue", 500), step("blue", 400), step("blue", 600)),
        ),
    ])
}

impl Tinge {
    /// load config from default locations
    ///
    /// load prio: local > global > defaults
    pub fn load() -> Result<Self> {
        let global_config_path = Self::global_config_path()?;
        let defaults = Self::load_defaults()?;
        let mut builder = Self::create_builder(defaults.clone())?;

        if global_config_path.exists() {
            Self::check_source(&global_config_path)?;
        }

        builder = builder.add_source(
            config::File::with_name(global_config_path.to_str().unwrap()).required(false),
        );

        if let Some(local_config) = Self::find_local_config()? {
            Self::check_source(&local_config)?;

            builder = builder.add_source(
                config::File::with_name(local_config.to_str().unwrap()).required(false),
            );
        }

        builder = builder.add_source(config::Environment::with_prefix("TINGE"));

        let settings = builder.build().wrap_err("Failed to build configuration")?;
        let cfg: Tinge = settings
            .try_deserialize::<Tinge>()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        info!("Configuration validation successful");

        if !global_config_path.exists() {
            Self::create_default_config(&global_config_path, &defaults)?;
        }

        Ok(cfg)
    }

    /// the color role map, if the config carries one
    pub fn color_roles(&self) -> Option<&IndexMap<String, VariantSet>> {
        self.theme
            .as_ref()
            .and_then(|t| t.extend.as_ref())
            .and_then(|e| e.colors.as_ref())
    }

    /// get the global config file path
    fn global_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        Ok(config_dir.join("tinge.toml"))
    }

    /// load default config from embedded default config file
    fn load_defaults() -> Result<Self> {
        toml::from_str(include_str!("../../resources/tinge.default.toml"))
            .wrap_err("Failed to parse embedded default configuration")
            .note("This is a bug - the embedded defaults are malformed")
    }

    /// create a config builder with defaults
    fn create_builder(defaults: Tinge) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let builder = Config::builder();
        let config_source = config::Config::try_from(&defaults)
            .wrap_err("Failed to convert default Tinge struct to config source")?;

        Ok(builder.add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    pub fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| {
                let formatted = format_validation_errors(&errors);
                eyre!(formatted)
            })
            .wrap_err("config validation failed")
            .suggestion("Check your tinge.toml for invalid values")
            .suggestion("Run with --gen-default to see valid options")
    }

    /// parse and validate a config file on its own, before it joins the merge
    ///
    /// the layered merge completes partial tables from the lower layers, so a
    /// role missing a variant has to be caught while the file still stands
    /// alone
    fn check_source(path: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Tinge = toml::from_str(&raw)
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.run_validation()
            .wrap_err_with(|| format!("Invalid config file: {}", path.display()))
    }

    /// find the local config file
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        for ancestor in curr_dir.ancestors() {
            let config_path = ancestor.join("tinge.toml");
            if config_path.exists() {
                return Ok(Some(config_path));
            }
        }

        Ok(None)
    }

    /// create the default config file
    fn create_default_config(path: &Path, defaults: &Tinge) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_eyre("Unable to determine parent directory of config path")?;

        std::fs::create_dir_all(config_dir)
            .wrap_err("Failed to create config directory")
            .with_section(|| format!("{}", config_dir.display()).header("Directory:"))?;

        defaults
            .save_to_file(path)
            .wrap_err("Failed to write default configuration file")?;

        Ok(())
    }

    /// save config to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str =
            toml::to_string_pretty(self).wrap_err("Failed to serialize config to TOML")?;

        std::fs::write(path, &toml_str)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
            .with_section(|| path.display().to_string().header("File path"))
            .with_section(|| format!("{} bytes", toml_str.len()).header("Content size:"))?;

        Ok(())
    }

    /// save config to the global config location
    pub fn save(&self) -> Result<()> {
        let path = Self::global_config_path()?;
        self.save_to_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let cfg = Tinge::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.color_roles().unwrap().len(), 7);
    }

    #[test]
    fn test_embedded_defaults_match_struct_defaults() {
        let embedded = Tinge::load_defaults().unwrap();
        assert_eq!(embedded, Tinge::default());
    }

    #[test]
    fn test_plugin_order_survives_roundtrip() {
        let mut cfg = Tinge::default();
        cfg.plugins = Some(vec![
            "@tailwindcss/forms".to_owned(),
            "@tailwindcss/typography".to_owned(),
            "@tailwindcss/aspect-ratio".to_owned(),
        ]);

        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let reloaded: Tinge = toml::from_str(&toml_str).unwrap();

        assert_eq!(reloaded.plugins, cfg.plugins);
        assert_eq!(reloaded, cfg);
    }

    #[test]
    fn test_role_order_survives_roundtrip() {
        let cfg = Tinge::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let reloaded: Tinge = toml::from_str(&toml_str).unwrap();

        let before: Vec<_> = cfg.color_roles().unwrap().keys().cloned().collect();
        let after: Vec<_> = reloaded.color_roles().unwrap().keys().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_unknown_variant_key_is_rejected() {
        let err = toml::from_str::<Tinge>(
            r##"
            [theme.extend.colors.pri]
            default = "#ff7f50"
            hover = "#ff8b61"
            active = "#e57248"
            contrast = "white"
            focus = "#123456"
            "##,
        )
        .unwrap_err();

        assert!(err.to_string().contains("focus"), "{err}");
    }

    #[test]
    fn test_duplicate_role_keys_are_rejected() {
        let res = toml::from_str::<Tinge>(
            r##"
            [theme.extend.colors.pri]
            default = "#ff7f50"
            hover = "#ff8b61"
            active = "#e57248"
            contrast = "white"

            [theme.extend.colors.pri]
            default = "#000000"
            hover = "#000000"
            active = "#000000"
            contrast = "white"
            "##,
        );

        assert!(res.is_err());
    }

    #[test]
    fn test_malformed_color_fails_at_parse() {
        let err = toml::from_str::<Tinge>(
            r##"
            [theme.extend.colors.pri]
            default = "#ff7f5"
            hover = "#ff8b61"
            active = "#e57248"
            contrast = "white"
            "##,
        )
        .unwrap_err();

        assert!(err.to_string().contains("malformed hex color"), "{err}");
    }

    #[test]
    fn test_role_order_survives_config_merge() {
        let source = Config::try_from(&Tinge::default()).unwrap();
        let settings = Config::builder().add_source(source).build().unwrap();
        let merged: Tinge = settings.try_deserialize().unwrap();

        let order: Vec<_> = merged.color_roles().unwrap().keys().cloned().collect();
        assert_eq!(order, ["pri", "sec", "neu", "suc", "dng", "wrn", "inf"]);
    }

    #[test]
    fn test_partial_role_in_file_is_rejected_before_merge() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tinge.toml");

        std::fs::write(
            &path,
            r##"
            [theme.extend.colors.pri]
            default = "#ff7f50"
            hover = "#ff8b61"
            active = "#e57248"
            "##,
        )
        .unwrap();

        let err = Tinge::check_source(&path).unwrap_err();
        assert!(
            format!("{err:?}").contains("theme.extend.colors.pri.contrast"),
            "{err:?}"
        );
    }

    #[test]
    fn test_save_to_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tinge.toml");

        let cfg = Tinge::default();
        cfg.save_to_file(&path).unwrap();

        let reloaded: Tinge = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded, cfg);
    }
}
