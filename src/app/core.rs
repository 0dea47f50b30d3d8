//! the core app
use {
    super::logging,
    crate::{
        app::cli::Cli,
        color::Rgb,
        config::{instance::init_config, options::Tinge},
        resolve::ResolvedTheme,
    },
    color_eyre::eyre::{Context, Result},
    owo_colors::OwoColorize,
    tracing::info,
};

/// the tinge app
pub struct TingeApp {
    /// the loaded theme configuration
    cfg: Tinge,
}

impl TingeApp {
    /// initialize tinge
    ///
    /// - 1. handles any cli arguments if any
    /// - 2. loads and validates the configuration file
    /// - 3. seeds the config singleton
    /// - 4. sets up logging
    ///
    /// # Errors
    ///
    /// returns an error if the cli fails to run
    /// returns an error if it fails to load the configuration file
    /// returns an error if it fails to setup logging
    pub fn init() -> Result<Self> {
        Cli::run()?;

        let cfg = Tinge::load().wrap_err("failed to load theme configuration")?;
        init_config()?;
        logging::setup()?;

        info!(
            "Starting {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        Ok(Self { cfg })
    }

    /// resolve the theme and print a summary of it
    ///
    /// # Errors
    ///
    /// returns an error if a color value fails to resolve against the palette
    pub fn run(&self) -> Result<()> {
        let theme = ResolvedTheme::from_config(&self.cfg)?;
        let content = self.cfg.content.as_deref().unwrap_or_default();
        let plugins = self.cfg.plugins.as_deref().unwrap_or_default();

        println!(
            "{}: {} roles, {} content paths, {} plugins\n",
            "theme".bold(),
            theme.roles.len(),
            content.len(),
            plugins.len()
        );

        for (role, set) in &theme.roles {
            println!(
                "  {:<8} {}  {}  {}  {}",
                role.bold(),
                Self::swatch(set.default),
                Self::swatch(set.hover),
                Self::swatch(set.active),
                Self::swatch(set.contrast),
            );
        }

        println!("\n{}", "content".bold());
        for path in content {
            println!("  {}", path);
        }

        println!("\n{}", "plugins".bold());
        for plugin in plugins {
            println!("  {}", plugin);
        }

        Ok(())
    }

    /// render a colored swatch next to the hex value
    fn swatch(rgb: Rgb) -> String {
        format!("{} {}", "■".truecolor(rgb.r, rgb.g, rgb.b), rgb)
    }
}
