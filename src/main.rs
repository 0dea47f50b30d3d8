//! the tinge binary
use tinge::{app::TingeApp, error::Result};

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = TingeApp::init()?;
    app.run()?;

    Ok(())
}
