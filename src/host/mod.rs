//! Host process boundary
//!
//! The native host owns config persistence, the global shortcut, autostart
//! and URL opening. The UI reaches it through the [`Host`] trait; the real
//! implementation is [`HostClient`], length-prefixed JSON over a Unix
//! domain socket.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

mod messages;
pub use messages::{HostRequest, HostResponse};

use crate::config::AppConfig;

/// Maximum message size (10 MB) to prevent DoS via memory exhaustion
const MAX_MESSAGE_SIZE: usize = 10 * 1024 * 1024;

/// Get default socket path (XDG_RUNTIME_DIR with fallback to cache)
pub fn default_socket_path() -> Result<PathBuf> {
    if let Ok(runtime_dir) = std::env::var("XDG_RUNTIME_DIR") {
        return Ok(PathBuf::from(runtime_dir).join("askbar/host.sock"));
    }

    let cache = dirs::cache_dir()
        .context("Failed to determine cache directory (no XDG_RUNTIME_DIR or HOME)")?;
    Ok(cache.join("askbar/host.sock"))
}

/// Capabilities the UI needs from the host process
pub trait Host {
    /// Fetch the full current configuration
    fn get_config(&mut self) -> Result<AppConfig>;

    /// Persist the full configuration, replacing host state wholesale
    fn save_config(&mut self, config: &AppConfig) -> Result<()>;

    /// Open a URL in the user's default handler
    fn open_external(&mut self, url: &str) -> Result<()>;

    /// Hide the launcher window
    fn hide_window(&mut self) -> Result<()>;
}

/// Client for the host process socket.
///
/// Each request opens a fresh connection, so a host restart or a transient
/// failure only affects the one operation it interrupted.
pub struct HostClient {
    socket_path: PathBuf,
}

impl HostClient {
    /// Client against the default socket path
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(default_socket_path()?))
    }

    /// Client against a specific socket path
    pub fn with_path(socket_path: PathBuf) -> Self {
        Self { socket_path }
    }

    /// Send a request and wait for the response (blocking)
    pub fn request(&mut self, req: &HostRequest) -> Result<HostResponse> {
        let mut stream = UnixStream::connect(&self.socket_path).context(format!(
            "Failed to connect to host at {}",
            self.socket_path.display()
        ))?;
        write_message(&mut stream, req)?;
        read_message(&mut stream)
    }

    /// Issue a request whose only interesting outcome is success
    fn request_ok(&mut self, req: &HostRequest) -> Result<()> {
        match self.request(req)? {
            HostResponse::Ok => Ok(()),
            HostResponse::Error(msg) => Err(anyhow!("Host reported error: {msg}")),
            other => Err(anyhow!("Unexpected host response: {other:?}")),
        }
    }
}

impl Host for HostClient {
    fn get_config(&mut self) -> Result<AppConfig> {
        match self.request(&HostRequest::GetConfig)? {
            HostResponse::Config(config) => Ok(config),
            HostResponse::Error(msg) => Err(anyhow!("Host reported error: {msg}")),
            other => Err(anyhow!("Unexpected host response: {other:?}")),
        }
    }

    fn save_config(&mut self, config: &AppConfig) -> Result<()> {
        self.request_ok(&HostRequest::SaveConfig(config.clone()))
    }

    fn open_external(&mut self, url: &str) -> Result<()> {
        self.request_ok(&HostRequest::OpenExternal(url.to_string()))
    }

    fn hide_window(&mut self) -> Result<()> {
        self.request_ok(&HostRequest::HideWindow)
    }
}

/// Write length-prefixed message to stream
fn write_message<T: Serialize>(stream: &mut UnixStream, msg: &T) -> Result<()> {
    let json = serde_json::to_vec(msg).context("Failed to serialize message to JSON")?;

    // Length prefix (u32 little-endian), then the JSON payload
    let len = json.len() as u32;
    stream
        .write_all(&len.to_le_bytes())
        .context("Failed to write message length")?;
    stream
        .write_all(&json)
        .context("Failed to write message payload")?;
    stream.flush().context("Failed to flush stream")?;

    Ok(())
}

/// Read length-prefixed message from stream
fn read_message<T: for<'de> Deserialize<'de>>(stream: &mut UnixStream) -> Result<T> {
    let mut len_buf = [0u8; 4];
    stream
        .read_exact(&mut len_buf)
        .context("Failed to read message length")?;
    let len = u32::from_le_bytes(len_buf) as usize;

    // Sanity check (prevent DoS via huge allocation)
    if len > MAX_MESSAGE_SIZE {
        return Err(anyhow!("Message too large: {} bytes (max: {})", len, MAX_MESSAGE_SIZE));
    }

    let mut json_buf = vec![0u8; len];
    stream
        .read_exact(&mut json_buf)
        .context("Failed to read message payload")?;

    serde_json::from_slice(&json_buf).context("Failed to deserialize message from JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{Engine, DEFAULT_LOGO};
    use std::os::unix::net::UnixListener;
    use std::sync::atomic::{AtomicU32, Ordering};

    static SOCKET_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn test_socket_path() -> PathBuf {
        let n = SOCKET_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("askbar-test-{}-{n}.sock", std::process::id()))
    }

    /// Serve exactly one request with a canned response on a fresh socket
    fn serve_one(path: PathBuf, response: HostResponse) -> std::thread::JoinHandle<HostRequest> {
        let listener = UnixListener::bind(&path).unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request: HostRequest = read_message(&mut stream).unwrap();
            write_message(&mut stream, &response).unwrap();
            let _ = std::fs::remove_file(&path);
            request
        })
    }

    fn test_config() -> AppConfig {
        AppConfig {
            engines: vec![Engine::new("Claude", "https://claude.ai/new?q=", DEFAULT_LOGO)],
            default_engine: 0,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_get_config_round_trip() {
        let path = test_socket_path();
        let server = serve_one(path.clone(), HostResponse::Config(test_config()));

        let mut client = HostClient::with_path(path.clone());
        let config = client.get_config().unwrap();

        assert_eq!(config, test_config());
        assert!(matches!(server.join().unwrap(), HostRequest::GetConfig));
    }

    #[test]
    fn test_save_config_sends_full_record() {
        let path = test_socket_path();
        let server = serve_one(path.clone(), HostResponse::Ok);

        let mut client = HostClient::with_path(path.clone());
        client.save_config(&test_config()).unwrap();

        match server.join().unwrap() {
            HostRequest::SaveConfig(sent) => assert_eq!(sent, test_config()),
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_remote_error_surfaces_as_failure() {
        let path = test_socket_path();
        let server = serve_one(path.clone(), HostResponse::Error("disk full".to_string()));

        let mut client = HostClient::with_path(path.clone());
        let err = client.save_config(&test_config()).unwrap_err();

        assert!(err.to_string().contains("disk full"));
        server.join().unwrap();
    }

    #[test]
    fn test_open_external_and_hide_window() {
        let path = test_socket_path();
        let server = serve_one(path.clone(), HostResponse::Ok);
        let mut client = HostClient::with_path(path.clone());
        client.open_external("https://claude.ai/new?q=hi").unwrap();
        match server.join().unwrap() {
            HostRequest::OpenExternal(url) => assert_eq!(url, "https://claude.ai/new?q=hi"),
            other => panic!("unexpected request: {other:?}"),
        }

        let path = test_socket_path();
        let server = serve_one(path.clone(), HostResponse::Ok);
        let mut client = HostClient::with_path(path.clone());
        client.hide_window().unwrap();
        assert!(matches!(server.join().unwrap(), HostRequest::HideWindow));
    }

    #[test]
    fn test_oversized_message_rejected() {
        let path = test_socket_path();
        let listener = UnixListener::bind(&path).unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut len_buf = [0u8; 4];
            stream.read_exact(&mut len_buf).unwrap();
            let len = u32::from_le_bytes(len_buf) as usize;
            let mut buf = vec![0u8; len];
            stream.read_exact(&mut buf).unwrap();
            // Claim a payload far beyond the size cap
            let bogus = (MAX_MESSAGE_SIZE as u32 + 1).to_le_bytes();
            stream.write_all(&bogus).unwrap();
            stream.flush().unwrap();
        });

        let mut client = HostClient::with_path(path.clone());
        let err = client.request(&HostRequest::GetConfig).unwrap_err();
        assert!(err.to_string().contains("too large"));

        server.join().unwrap();
        let _ = std::fs::remove_file(&path);
    }
}
