//! color value parsing stuff
use {
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
    std::{fmt, str::FromStr},
    thiserror::Error,
};

/// a concrete resolved color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// red channel
    pub r: u8,
    /// green channel
    pub g: u8,
    /// blue channel
    pub b: u8,
}

impl Rgb {
    /// make a new color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// an error produced while parsing or resolving a color value
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// a hex literal that isn't `#RGB` or `#RRGGBB`
    #[error("malformed hex color `{0}`")]
    BadHex(String),

    /// a `scale[shade]` reference that doesn't parse
    #[error("malformed palette reference `{0}`")]
    BadReference(String),

    /// a bare name that isn't in the palette
    #[error("unknown palette color `{0}`")]
    UnknownColor(String),

    /// a reference naming a scale the palette doesn't have
    #[error("unknown palette scale `{0}`")]
    UnknownScale(String),

    /// a reference naming a shade step the scale doesn't have
    #[error("palette scale `{scale}` has no shade {shade}")]
    UnknownShade {
        /// the scale that was looked up
        scale: String,
        /// the missing shade step
        shade: u16,
    },
}

/// a single color slot in the theme config
///
/// kept in the symbolic form it was written in, so serializing a loaded
/// config writes back exactly what came in; resolution to [`Rgb`] happens
/// separately
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorValue {
    /// a literal hex color
    Hex(Rgb),
    /// a `scale[shade]` lookup into the standard palette
    Reference {
        /// the scale name, e.g. `cyan`
        scale: String,
        /// the shade step, e.g. `800`
        shade: u16,
    },
    /// a bare named palette color, e.g. `white`
    Named(String),
}

impl ColorValue {
    /// resolve the value against the standard palette
    pub fn resolve(&self) -> Result<Rgb, ColorError> {
        match self {
            Self::Hex(rgb) => Ok(*rgb),
            Self::Reference { scale, shade } => crate::palette::shade(scale, *shade),
            Self::Named(name) => crate::palette::named(name),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(rgb) => write!(f, "{rgb}"),
            Self::Reference { scale, shade } => write!(f, "{scale}[{shade}]"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex)
                .map(Self::Hex)
                .ok_or_else(|| ColorError::BadHex(s.to_owned()));
        }

        if s.contains('[') {
            return parse_reference(s);
        }

        if !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase()) {
            return Ok(Self::Named(s.to_owned()));
        }

        Err(ColorError::UnknownColor(s.to_owned()))
    }
}

/// parse the digits of a hex code into an `Rgb`
fn parse_hex(hex: &str) -> Option<Rgb> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

/// parse a `scale[shade]` reference
fn parse_reference(s: &str) -> Result<ColorValue, ColorError> {
    let bad = || ColorError::BadReference(s.to_owned());

    let (scale, rest) = s.split_once('[').ok_or_else(bad)?;
    let shade = rest.strip_suffix(']').ok_or_else(bad)?;

    if scale.is_empty() || !scale.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(bad());
    }

    let shade: u16 = shade.parse().map_err(|_| bad())?;

    Ok(ColorValue::Reference {
        scale: scale.to_owned(),
        shade,
    })
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl schemars::JsonSchema for ColorValue {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "ColorValue".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "description": "a hex color, a `scale[shade]` palette reference, or a named palette color",
            "pattern": "^(#[0-9a-fA-F]{3}|#[0-9a-fA-F]{6}|[a-z]+\\[[0-9]+\\]|[a-z]+)$",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(
            "#ff7f50".parse::<ColorValue>(),
            Ok(ColorValue::Hex(Rgb::new(0xff, 0x7f, 0x50)))
        );
        assert_eq!(
            "#F00".parse::<ColorValue>(),
            Ok(ColorValue::Hex(Rgb::new(255, 0, 0)))
        );
        assert!("#GG0000".parse::<ColorValue>().is_err());
        assert!("#ff7f5".parse::<ColorValue>().is_err());
    }

    #[test]
    fn test_parse_references() {
        assert_eq!(
            "cyan[800]".parse::<ColorValue>(),
            Ok(ColorValue::Reference {
                scale: "cyan".to_owned(),
                shade: 800,
            })
        );
        assert!("cyan[".parse::<ColorValue>().is_err());
        assert!("[800]".parse::<ColorValue>().is_err());
        assert!("cyan[dark]".parse::<ColorValue>().is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(
            "white".parse::<ColorValue>(),
            Ok(ColorValue::Named("white".to_owned()))
        );
        assert!("".parse::<ColorValue>().is_err());
        assert!("Not A Color".parse::<ColorValue>().is_err());
    }

    #[test]
    fn test_display_roundtrip_is_idempotent() {
        for src in ["#ff7f50", "cyan[800]", "white", "#F00"] {
            let first: ColorValue = src.parse().unwrap();
            let second: ColorValue = first.to_string().parse().unwrap();
            assert_eq!(first, second);
            assert_eq!(first.resolve(), second.resolve());
        }
    }

    #[test]
    fn test_resolve() {
        let contrast: ColorValue = "white".parse().unwrap();
        assert_eq!(contrast.resolve(), Ok(Rgb::new(255, 255, 255)));

        let hex: ColorValue = "#e57248".parse().unwrap();
        assert_eq!(hex.resolve(), Ok(Rgb::new(0xe5, 0x72, 0x48)));

        let missing: ColorValue = "cyan[850]".parse().unwrap();
        assert_eq!(
            missing.resolve(),
            Err(ColorError::UnknownShade {
                scale: "cyan".to_owned(),
                shade: 850,
            })
        );
    }
}
