//! resolved theme stuff
//!
//! a [`ResolvedTheme`] is the load-time product of the configuration: every
//! symbolic color value replaced by its concrete [`Rgb`]
use {
    crate::{
        bail,
        color::Rgb,
        config::options::{Tinge, VariantSet},
        error::{Result, TingeError},
    },
    indexmap::IndexMap,
};

/// a role with all four variants resolved to concrete colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRole {
    /// the resting color
    pub default: Rgb,
    /// the hover color
    pub hover: Rgb,
    /// the active color
    pub active: Rgb,
    /// the contrast text color
    pub contrast: Rgb,
}

impl ResolvedRole {
    /// resolve a variant set, naming the role on failure
    fn from_set(role: &str, set: &VariantSet) -> Result<Self> {
        /// resolve one slot of the set
        fn slot(role: &str, name: &str, value: Option<&crate::color::ColorValue>) -> Result<Rgb> {
            let Some(value) = value else {
                bail!("colors.{}.{}: missing required variant", role, name);
            };

            value
                .resolve()
                .map_err(|e| TingeError::Invalid(format!("colors.{role}.{name}: {e}")))
        }

        Ok(Self {
            default: slot(role, "default", set.default.as_ref())?,
            hover: slot(role, "hover", set.hover.as_ref())?,
            active: slot(role, "active", set.active.as_ref())?,
            contrast: slot(role, "contrast", set.contrast.as_ref())?,
        })
    }
}

/// a fully resolved theme, role order as configured
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedTheme {
    /// the resolved roles
    pub roles: IndexMap<String, ResolvedRole>,
}

impl ResolvedTheme {
    /// resolve every role of a configuration
    pub fn from_config(cfg: &Tinge) -> Result<Self> {
        let mut roles = IndexMap::new();

        if let Some(colors) = cfg.color_roles() {
            for (role, set) in colors {
                roles.insert(role.clone(), ResolvedRole::from_set(role, set)?);
            }
        }

        Ok(Self { roles })
    }

    /// convert the theme to CSS custom properties
    pub fn to_css_vars(&self) -> String {
        let mut vars = String::new();

        for (role, set) in &self.roles {
            vars.push_str(&format!(
                "--{role}: {};\n--{role}-hover: {};\n--{role}-active: {};\n--{role}-contrast: {};\n",
                set.default, set.hover, set.active, set.contrast
            ));
        }

        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let theme = ResolvedTheme::from_config(&Tinge::default()).unwrap();
        assert_eq!(theme.roles.len(), 7);

        let pri = &theme.roles["pri"];
        assert_eq!(pri.default, Rgb::new(0xff, 0x7f, 0x50));
        assert_eq!(pri.hover, Rgb::new(0xff, 0x8b, 0x61));
        assert_eq!(pri.active, Rgb::new(0xe5, 0x72, 0x48));
        assert_eq!(pri.contrast, Rgb::new(255, 255, 255));

        let sec = &theme.roles["sec"];
        assert_eq!(sec.default, Rgb::new(0x15, 0x5e, 0x75));
    }

    #[test]
    fn test_resolution_is_idempotent_for_hex() {
        let theme = ResolvedTheme::from_config(&Tinge::default()).unwrap();
        let again = ResolvedTheme::from_config(&Tinge::default()).unwrap();
        assert_eq!(theme, again);
    }

    #[test]
    fn test_css_vars() {
        let theme = ResolvedTheme::from_config(&Tinge::default()).unwrap();
        let css = theme.to_css_vars();

        assert!(css.contains("--pri: #ff7f50;"));
        assert!(css.contains("--pri-contrast: #ffffff;"));
        assert!(css.contains("--sec: #155e75;"));
        assert!(css.contains("--wrn-active: #d97706;"));
    }

    #[test]
    fn test_missing_variant_fails_resolution() {
        let cfg: Tinge = toml::from_str(
            r##"
            [theme.extend.colors.pri]
            default = "#ff7f50"
            hover = "#ff8b61"
            active = "#e57248"
            "##,
        )
        .unwrap();

        let err = ResolvedTheme::from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("colors.pri.contrast"), "{err}");
    }

    #[test]
    fn test_role_order_is_kept() {
        let order: Vec<_> = ResolvedTheme::from_config(&Tinge::default())
            .unwrap()
            .roles
            .keys()
            .cloned()
            .collect();

        assert_eq!(order, ["pri", "sec", "neu", "suc", "dng", "wrn", "inf"]);
    }
}
