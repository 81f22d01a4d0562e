use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use pokedeck::model::ClientConfig;
use pokedeck::remote::RemoteClient;

pub struct ServerGuard {
    /// Server root (`http://127.0.0.1:PORT`); the API lives under `/api`.
    pub root_url: String,
    pub token: String,
    _scratch: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl ServerGuard {
    pub fn api_url(&self) -> String {
        format!("{}/api", self.root_url)
    }

    pub fn config(&self, token: Option<&str>) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url(),
            token: token.map(str::to_string),
            timeout_secs: 10,
            ..ClientConfig::default()
        }
    }

    /// Client authenticated as the seeded admin (`ash`).
    #[allow(dead_code)]
    pub fn admin_client(&self) -> Result<RemoteClient> {
        RemoteClient::new(&self.config(Some(&self.token))).context("build admin client")
    }

    /// Client authenticated by logging in as a seeded user.
    #[allow(dead_code)]
    pub fn login_as(&self, username: &str, password: &str) -> Result<RemoteClient> {
        let anon = RemoteClient::new(&self.config(None)).context("build anonymous client")?;
        let auth = anon
            .login(&format!("{}@pokedeck.dev", username), password)
            .with_context(|| format!("login as {}", username))?;
        RemoteClient::new(&self.config(Some(&auth.token))).context("build user client")
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    let scratch = tempfile::tempdir().context("create server tempdir")?;
    let token = "dev".to_string();
    let addr_file = scratch.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_pokedeck-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--dev-token",
            &token,
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn pokedeck-server")?;

    let root_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&root_url)?;

    Ok(ServerGuard {
        root_url,
        token,
        _scratch: scratch,
        child,
    })
}

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(root_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", root_url);
        }
        match client.get(format!("{}/healthz", root_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

#[allow(dead_code)]
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
