//! config singleton management stuff
use {
    crate::config::options::Tinge,
    color_eyre::{Result, eyre::Context},
    std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// global config instance
static CONFIG: LazyLock<RwLock<Tinge>> = LazyLock::new(|| {
    RwLock::new(Tinge::load().expect("!!!Failed to load configuration, this should NOT happen!!!"))
});

/// init the config explicitly
pub fn init_config() -> Result<()> {
    let _l = config()?;
    Ok(())
}

/// get a ro ref to the config
pub fn config() -> Result<RwLockReadGuard<'static, Tinge>> {
    CONFIG
        .read()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration lock poisoned: {}", e))
}

/// get a rw ref to the config
pub fn config_mut() -> Result<RwLockWriteGuard<'static, Tinge>> {
    CONFIG
        .write()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration lock poisoned: {}", e))
}

/// reload cfg from disk
pub fn reload_config() -> Result<()> {
    let new_config = Tinge::load().wrap_err("Failed to reload config from disk")?;
    let mut config = config_mut().wrap_err("failed to acquire write lock for cfg reload")?;

    *config = new_config;

    Ok(())
}

/// get a specific config value with a default fallback
pub fn get_or_default<T, F>(getter: F, default: T) -> T
where
    F: FnOnce(&Tinge) -> Option<T>,
    T: Clone,
{
    config()
        .ok()
        .and_then(|cfg| getter(&cfg))
        .unwrap_or(default)
}
