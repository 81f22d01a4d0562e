use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::ClientConfig;

const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "pokedeck.log";

/// Client configuration on disk (`$POKEDECK_HOME/config.json`, falling back
/// to `$HOME/.pokedeck`).
#[derive(Clone, Debug)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn open(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn discover() -> Result<Self> {
        if let Some(dir) = std::env::var_os("POKEDECK_HOME").filter(|d| !d.is_empty()) {
            return Ok(Self::open(Path::new(&dir)));
        }
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .ok_or_else(|| anyhow!("cannot locate config dir (set POKEDECK_HOME or HOME)"))?;
        Ok(Self::open(&Path::new(&home).join(".pokedeck")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }

    /// Reads the stored config; a missing file yields the defaults.
    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.config_path(), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn set_token(&self, token: Option<String>) -> Result<ClientConfig> {
        let mut cfg = self.read_config()?;
        cfg.token = token;
        self.write_config(&cfg)?;
        Ok(cfg)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
