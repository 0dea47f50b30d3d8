//! the standard color palette
//!
//! an explicit table of the utility-CSS color scales, each with shade steps
//! from 50 to 950, plus the fixed named colors. references like `cyan[800]`
//! resolve here at load time
use {
    crate::color::{ColorError, Rgb},
    hashbrown::HashMap,
    std::sync::LazyLock,
};

/// a full shade scale of a single hue
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    /// the scale name, e.g. `cyan`
    pub name: &'static str,
    /// the shade steps, ascending
    pub steps: &'static [(u16, Rgb)],
}

impl Scale {
    /// look up a shade step in the scale
    pub fn shade(&self, shade: u16) -> Option<Rgb> {
        self.steps
            .iter()
            .find(|(step, _)| *step == shade)
            .map(|(_, rgb)| *rgb)
    }
}

/// split a packed `0xrrggbb` literal into channels
const fn rgb(v: u32) -> Rgb {
    Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// declare the palette scales from packed hex literals
macro_rules! palette {
    ($( $name:ident => [ $( $step:literal : $hex:literal ),* $(,)? ] );* $(;)?) => {
        /// every scale in the standard palette
        pub static SCALES: &[Scale] = &[
            $(
                Scale {
                    name: stringify!($name),
                    steps: &[ $( ($step, rgb($hex)) ),* ],
                },
            )*
        ];
    };
}

palette! {
    slate => [
        50: 0xf8fafc, 100: 0xf1f5f9, 200: 0xe2e8f0, 300: 0xcbd5e1,
        400: 0x94a3b8, 500: 0x64748b, 600: 0x475569, 700: 0x334155,
        800: 0x1e293b, 900: 0x0f172a, 950: 0x020617,
    ];
    gray => [
        50: 0xf9fafb, 100: 0xf3f4f6, 200: 0xe5e7eb, 300: 0xd1d5db,
        400: 0x9ca3af, 500: 0x6b7280, 600: 0x4b5563, 700: 0x374151,
        800: 0x1f2937, 900: 0x111827, 950: 0x030712,
    ];
    zinc => [
        50: 0xfafafa, 100: 0xf4f4f5, 200: 0xe4e4e7, 300: 0xd4d4d8,
        400: 0xa1a1aa, 500: 0x71717a, 600: 0x52525b, 700: 0x3f3f46,
        800: 0x27272a, 900: 0x18181b, 950: 0x09090b,
    ];
    neutral => [
        50: 0xfafafa, 100: 0xf5f5f5, 200: 0xe5e5e5, 300: 0xd4d4d4,
        400: 0xa3a3a3, 500: 0x737373, 600: 0x525252, 700: 0x404040,
        800: 0x262626, 900: 0x171717, 950: 0x0a0a0a,
    ];
    stone => [
        50: 0xfafaf9, 100: 0xf5f5f4, 200: 0xe7e5e4, 300: 0xd6d3d1,
        400: 0xa8a29e, 500: 0x78716c, 600: 0x57534e, 700: 0x44403c,
        800: 0x292524, 900: 0x1c1917, 950: 0x0c0a09,
    ];
    red => [
        50: 0xfef2f2, 100: 0xfee2e2, 200: 0xfecaca, 300: 0xfca5a5,
        400: 0xf87171, 500: 0xef4444, 600: 0xdc2626, 700: 0xb91c1c,
        800: 0x991b1b, 900: 0x7f1d1d, 950: 0x450a0a,
    ];
    orange => [
        50: 0xfff7ed, 100: 0xffedd5, 200: 0xfed7aa, 300: 0xfdba74,
        400: 0xfb923c, 500: 0xf97316, 600: 0xea580c, 700: 0xc2410c,
        800: 0x9a3412, 900: 0x7c2d12, 950: 0x431407,
    ];
    amber => [
        50: 0xfffbeb, 100: 0xfef3c7, 200: 0xfde68a, 300: 0xfcd34d,
        400: 0xfbbf24, 500: 0xf59e0b, 600: 0xd97706, 700: 0xb45309,
        800: 0x92400e, 900: 0x78350f, 950: 0x451a03,
    ];
    yellow => [
        50: 0xfefce8, 100: 0xfef9c3, 200: 0xfef08a, 300: 0xfde047,
        400: 0xfacc15, 500: 0xeab308, 600: 0xca8a04, 700: 0xa16207,
        800: 0x854d0e, 900: 0x713f12, 950: 0x422006,
    ];
    lime => [
        50: 0xf7fee7, 100: 0xecfccb, 200: 0xd9f99d, 300: 0xbef264,
        400: 0xa3e635, 500: 0x84cc16, 600: 0x65a30d, 700: 0x4d7c0f,
        800: 0x3f6212, 900: 0x365314, 950: 0x1a2e05,
    ];
    green => [
        50: 0xf0fdf4, 100: 0xdcfce7, 200: 0xbbf7d0, 300: 0x86efac,
        400: 0x4ade80, 500: 0x22c55e, 600: 0x16a34a, 700: 0x15803d,
        800: 0x166534, 900: 0x14532d, 950: 0x052e16,
    ];
    emerald => [
        50: 0xecfdf5, 100: 0xd1fae5, 200: 0xa7f3d0, 300: 0x6ee7b7,
        400: 0x34d399, 500: 0x10b981, 600: 0x059669, 700: 0x047857,
        800: 0x065f46, 900: 0x064e3b, 950: 0x022c22,
    ];
    teal => [
        50: 0xf0fdfa, 100: 0xccfbf1, 200: 0x99f6e4, 300: 0x5eead4,
        400: 0x2dd4bf, 500: 0x14b8a6, 600: 0x0d9488, 700: 0x0f766e,
        800: 0x115e59, 900: 0x134e4a, 950: 0x042f2e,
    ];
    cyan => [
        50: 0xecfeff, 100: 0xcffafe, 200: 0xa5f3fc, 300: 0x67e8f9,
        400: 0x22d3ee, 500: 0x06b6d4, 600: 0x0891b2, 700: 0x0e7490,
        800: 0x155e75, 900: 0x164e63, 950: 0x083344,
    ];
    sky => [
        50: 0xf0f9ff, 100: 0xe0f2fe, 200: 0xbae6fd, 300: 0x7dd3fc,
        400: 0x38bdf8, 500: 0x0ea5e9, 600: 0x0284c7, 700: 0x0369a1,
        800: 0x075985, 900: 0x0c4a6e, 950: 0x082f49,
    ];
    blue => [
        50: 0xeff6ff, 100: 0xdbeafe, 200: 0xbfdbfe, 300: 0x93c5fd,
        400: 0x60a5fa, 500: 0x3b82f6, 600: 0x2563eb, 700: 0x1d4ed8,
        800: 0x1e40af, 900: 0x1e3a8a, 950: 0x172554,
    ];
    indigo => [
        50: 0xeef2ff, 100: 0xe0e7ff, 200: 0xc7d2fe, 300: 0xa5b4fc,
        400: 0x818cf8, 500: 0x6366f1, 600: 0x4f46e5, 700: 0x4338ca,
        800: 0x3730a3, 900: 0x312e81, 950: 0x1e1b4b,
    ];
    violet => [
        50: 0xf5f3ff, 100: 0xede9fe, 200: 0xddd6fe, 300: 0xc4b5fd,
        400: 0xa78bfa, 500: 0x8b5cf6, 600: 0x7c3aed, 700: 0x6d28d9,
        800: 0x5b21b6, 900: 0x4c1d95, 950: 0x2e1065,
    ];
    purple => [
        50: 0xfaf5ff, 100: 0xf3e8ff, 200: 0xe9d5ff, 300: 0xd8b4fe,
        400: 0xc084fc, 500: 0xa855f7, 600: 0x9333ea, 700: 0x7e22ce,
        800: 0x6b21a8, 900: 0x581c87, 950: 0x3b0764,
    ];
    fuchsia => [
        50: 0xfdf4ff, 100: 0xfae8ff, 200: 0xf5d0fe, 300: 0xf0abfc,
        400: 0xe879f9, 500: 0xd946ef, 600: 0xc026d3, 700: 0xa21caf,
        800: 0x86198f, 900: 0x701a75, 950: 0x4a044e,
    ];
    pink => [
        50: 0xfdf2f8, 100: 0xfce7f3, 200: 0xfbcfe8, 300: 0xf9a8d4,
        400: 0xf472b6, 500: 0xec4899, 600: 0xdb2777, 700: 0xbe185d,
        800: 0x9d174d, 900: 0x831843, 950: 0x500724,
    ];
    rose => [
        50: 0xfff1f2, 100: 0xffe4e6, 200: 0xfecdd3, 300: 0xfda4af,
        400: 0xfb7185, 500: 0xf43f5e, 600: 0xe11d48, 700: 0xbe123c,
        800: 0x9f1239, 900: 0x881337, 950: 0x4c0519,
    ];
}

/// the fixed named colors that carry no shade steps
pub static NAMED: &[(&str, Rgb)] = &[("white", rgb(0xffffff)), ("black", rgb(0x000000))];

/// scale lookup table keyed by name
static BY_NAME: LazyLock<HashMap<&'static str, &'static Scale>> =
    LazyLock::new(|| SCALES.iter().map(|s| (s.name, s)).collect());

/// get a scale by name
pub fn scale(name: &str) -> Option<&'static Scale> {
    BY_NAME.get(name).copied()
}

/// resolve a `scale[shade]` reference
pub fn shade(name: &str, step: u16) -> Result<Rgb, ColorError> {
    let scale = scale(name).ok_or_else(|| ColorError::UnknownScale(name.to_owned()))?;

    scale.shade(step).ok_or_else(|| ColorError::UnknownShade {
        scale: name.to_owned(),
        shade: step,
    })
}

/// resolve a bare named color
pub fn named(name: &str) -> Result<Rgb, ColorError> {
    NAMED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, rgb)| *rgb)
        .ok_or_else(|| ColorError::UnknownColor(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shades() {
        assert_eq!(shade("cyan", 800), Ok(Rgb::new(0x15, 0x5e, 0x75)));
        assert_eq!(shade("stone", 700), Ok(Rgb::new(0x44, 0x40, 0x3c)));
        assert_eq!(shade("amber", 500), Ok(Rgb::new(0xf5, 0x9e, 0x0b)));
        assert_eq!(shade("blue", 400), Ok(Rgb::new(0x60, 0xa5, 0xfa)));
    }

    #[test]
    fn test_unknown_scale_and_shade() {
        assert_eq!(
            shade("mauve", 500),
            Err(ColorError::UnknownScale("mauve".to_owned()))
        );
        assert_eq!(
            shade("cyan", 750),
            Err(ColorError::UnknownShade {
                scale: "cyan".to_owned(),
                shade: 750,
            })
        );
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(named("white"), Ok(Rgb::new(255, 255, 255)));
        assert_eq!(named("black"), Ok(Rgb::new(0, 0, 0)));
        assert!(named("offwhite").is_err());
    }

    #[test]
    fn test_every_scale_has_eleven_steps() {
        for scale in SCALES {
            assert_eq!(scale.steps.len(), 11, "scale {}", scale.name);
        }
    }
}
