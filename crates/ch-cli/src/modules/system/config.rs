use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::Mutex;

use anyhow::Context;
use tracing::debug;

use super::types::CliConfig;
use crate::{API_KEY_ENV, CONFIG_DIR_ENV};

/// Narrow handle to wherever the credential record lives.
pub(crate) trait ConfigStore: Send + Sync {
    fn read_config(&self) -> anyhow::Result<CliConfig>;
    fn write_config(&self, config: &CliConfig) -> anyhow::Result<()>;
}

pub(crate) struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub(crate) fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join("config.json"),
        }
    }

    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(config_dir()?))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn read_config(&self) -> anyhow::Result<CliConfig> {
        if !self.path.exists() {
            return Ok(CliConfig::default());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("read config {}", self.path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("parse config {}", self.path.display()))?;
        Ok(config)
    }

    // Last writer wins; there is no cross-process locking.
    fn write_config(&self, config: &CliConfig) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            create_private_dir(parent).context("ensure config dir")?;
        }
        let mut contents = serde_json::to_string_pretty(config).context("encode config json")?;
        contents.push('\n');

        let tmp = self.path.with_extension("json.tmp");
        write_private_file(&tmp, contents.as_bytes()).context("write config")?;
        fs::rename(&tmp, &self.path).context("commit config")?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

fn config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    if let Ok(base) = std::env::var("XDG_CONFIG_HOME") {
        if !base.trim().is_empty() {
            return Ok(Path::new(&base).join("ch"));
        }
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".config").join("ch"))
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

fn write_private_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

pub(crate) fn api_key(store: &dyn ConfigStore) -> anyhow::Result<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            return Ok(key);
        }
    }
    let config = store.read_config()?;
    if config.api_key.is_empty() {
        anyhow::bail!("no API key configured (set {API_KEY_ENV} or run: ch auth set-key)");
    }
    Ok(config.api_key)
}

pub(crate) fn resolve_company_number(
    store: &dyn ConfigStore,
    company_number: Option<String>,
) -> anyhow::Result<String> {
    if let Some(number) = company_number.filter(|value| !value.trim().is_empty()) {
        return Ok(number.trim().to_string());
    }
    let config = store.read_config().context("read config")?;
    if config.default_company.is_empty() {
        anyhow::bail!("no company number provided and no default set (run: ch setup)");
    }
    Ok(config.default_company)
}

pub(crate) fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryConfigStore {
    config: Mutex<CliConfig>,
    writes: Mutex<usize>,
}

#[cfg(test)]
impl MemoryConfigStore {
    pub(crate) fn with_config(config: CliConfig) -> Self {
        Self {
            config: Mutex::new(config),
            writes: Mutex::new(0),
        }
    }

    pub(crate) fn snapshot(&self) -> CliConfig {
        self.config.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or_default()
    }
}

#[cfg(test)]
impl ConfigStore for MemoryConfigStore {
    fn read_config(&self) -> anyhow::Result<CliConfig> {
        let config = self
            .config
            .lock()
            .map_err(|_| anyhow::anyhow!("failed to lock config store"))?;
        Ok(config.clone())
    }

    fn write_config(&self, config: &CliConfig) -> anyhow::Result<()> {
        let mut stored = self
            .config
            .lock()
            .map_err(|_| anyhow::anyhow!("failed to lock config store"))?;
        *stored = config.clone();
        let mut writes = self
            .writes
            .lock()
            .map_err(|_| anyhow::anyhow!("failed to lock config store"))?;
        *writes += 1;
        Ok(())
    }
}
