//! cli stuff
use {
    crate::{config::options::Tinge, resolve::ResolvedTheme},
    clap::Parser,
    color_eyre::{Report, eyre::Result},
    schemars::generate::SchemaSettings,
    std::{
        fs::OpenOptions,
        io::{BufWriter, Write},
    },
};

/// the CLI
#[derive(Parser)]
pub struct Cli {
    /// Save instead of printing
    #[arg(long)]
    pub save: bool,

    /// Generate a JSON schemafile based on the defaults
    #[arg(short = 's', long)]
    pub gen_schema: bool,

    /// Generate the default config file
    #[arg(short = 'd', long)]
    pub gen_default: bool,

    /// Generate both the schema and the default config file
    #[arg(short = 'a', long)]
    pub gen_all: bool,

    /// Load and validate the configuration, then exit
    #[arg(short, long)]
    pub check: bool,

    /// Print the resolved theme as CSS custom properties
    #[arg(long)]
    pub css: bool,
}

impl Cli {
    /// run the CLI
    ///
    /// # Errors
    ///
    /// returns an error if it fails to generate and/or save the json schema
    /// returns an error if it fails to generate and/or save the default config
    /// returns an error if the configuration fails to load or validate
    pub fn run() -> Result<()> {
        let argv = Self::parse();

        if argv.gen_schema || argv.gen_all {
            Self::gen_schema(argv.save)?;
        }

        if argv.gen_default || argv.gen_all {
            Self::gen_defaults(argv.save)?;
        }

        if argv.check {
            Self::check()?;
        }

        if argv.css {
            Self::css_vars(argv.save)?;
        }

        if argv.should_exit() {
            std::process::exit(0);
        }

        Ok(())
    }

    /// whether the invocation was a one-shot generator/inspection run
    fn should_exit(&self) -> bool {
        self.gen_default || self.gen_all || self.gen_schema || self.check || self.css || self.save
    }

    /// save a string to a file
    ///
    /// # Arguments
    ///
    /// * `path` - the path to the file being written
    /// * `contents` - the data to write to the file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to open `path`
    pub fn write_to_file(path: &str, contents: &str) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;
        let mut w = BufWriter::new(file);
        w.write_all(contents.as_bytes()).map_err(Report::new)
    }

    /// generate/save the config schema
    ///
    /// # Arguments
    ///
    /// * `save` - save instead of printing
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the schema to a JSON string
    /// returns an error if it fails to save the schema to `resources/tinge.schema.json`
    pub fn gen_schema(save: bool) -> Result<()> {
        let settings = SchemaSettings::draft2020_12().for_serialize();
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<Tinge>();
        let schema_str = serde_json::to_string_pretty(&schema)?;

        if save {
            Self::write_to_file("resources/tinge.schema.json", &schema_str)?;
        } else {
            println!("{}", schema_str);
        }

        Ok(())
    }

    /// generate/save the default config file
    ///
    /// # Arguments
    ///
    /// * `save` - save instead of printing
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the default config to TOML
    /// returns an error if it fails to save the default config to `resources/tinge.default.toml`
    pub fn gen_defaults(save: bool) -> Result<()> {
        let defaults = toml::to_string_pretty(&Tinge::default())?;

        if save {
            Self::write_to_file("resources/tinge.default.toml", &defaults)?;
        } else {
            println!("{}", defaults);
        }

        Ok(())
    }

    /// load and validate the configuration
    ///
    /// # Errors
    ///
    /// returns an error if the configuration fails to load, deserialize or
    /// validate, with the offending roles/fields named
    pub fn check() -> Result<()> {
        let cfg = Tinge::load()?;
        let theme = ResolvedTheme::from_config(&cfg)?;

        println!(
            "configuration OK: {} roles, {} content paths, {} plugins",
            theme.roles.len(),
            cfg.content.as_deref().unwrap_or_default().len(),
            cfg.plugins.as_deref().unwrap_or_default().len(),
        );

        Ok(())
    }

    /// print/save the resolved theme as CSS custom properties
    ///
    /// # Arguments
    ///
    /// * `save` - save to `tinge.css` instead of printing
    ///
    /// # Errors
    ///
    /// returns an error if the configuration fails to load or resolve
    /// returns an error if it fails to save the output to `tinge.css`
    pub fn css_vars(save: bool) -> Result<()> {
        let cfg = Tinge::load()?;
        let vars = ResolvedTheme::from_config(&cfg)?.to_css_vars();

        if save {
            Self::write_to_file("tinge.css", &vars)?;
        } else {
            print!("{}", vars);
        }

        Ok(())
    }
}
