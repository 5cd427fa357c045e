//! In-memory mirror of the host-owned configuration
//!
//! Load replaces the copy wholesale; save pushes a full draft back. There
//! is no incremental diff path, and a failed round-trip never touches the
//! copy the UI is rendering from.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::AppConfig;
use crate::host::Host;

pub struct ConfigMirror<H: Host> {
    host: H,
    config: AppConfig,
}

impl<H: Host> ConfigMirror<H> {
    /// Wrap a host connection; the mirror starts from defaults until the
    /// first successful load.
    pub fn new(host: H) -> Self {
        Self {
            host,
            config: AppConfig::default(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn host(&mut self) -> &mut H {
        &mut self.host
    }

    /// Fetch the full configuration from the host and replace the copy.
    /// On failure the previous copy stays in place.
    pub fn load(&mut self) -> Result<()> {
        let mut loaded = self
            .host
            .get_config()
            .context("Failed to load configuration from host")?;
        loaded.clamp_default_engine();
        info!(engines = loaded.engines.len(), "Loaded configuration from host");
        self.config = loaded;
        Ok(())
    }

    /// Push the full draft to the host. The mirror only adopts the draft
    /// after the host confirms persistence.
    pub fn save(&mut self, draft: &AppConfig) -> Result<()> {
        self.host
            .save_config(draft)
            .context("Failed to save configuration to host")?;
        info!(engines = draft.engines.len(), "Saved configuration to host");
        self.config = draft.clone();
        Ok(())
    }

    /// Throw away unsaved edits by reloading from the host
    pub fn discard_draft(&mut self) -> Result<()> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{Engine, DEFAULT_LOGO};
    use anyhow::anyhow;

    /// Scripted host: canned config plus per-operation failure switches
    struct FakeHost {
        stored: AppConfig,
        fail_get: bool,
        fail_save: bool,
        save_calls: usize,
    }

    impl FakeHost {
        fn new(stored: AppConfig) -> Self {
            Self {
                stored,
                fail_get: false,
                fail_save: false,
                save_calls: 0,
            }
        }
    }

    impl Host for FakeHost {
        fn get_config(&mut self) -> Result<AppConfig> {
            if self.fail_get {
                return Err(anyhow!("host unreachable"));
            }
            Ok(self.stored.clone())
        }

        fn save_config(&mut self, config: &AppConfig) -> Result<()> {
            self.save_calls += 1;
            if self.fail_save {
                return Err(anyhow!("write failed"));
            }
            self.stored = config.clone();
            Ok(())
        }

        fn open_external(&mut self, _url: &str) -> Result<()> {
            Ok(())
        }

        fn hide_window(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn host_config() -> AppConfig {
        AppConfig {
            shortcut: "Ctrl+Space".to_string(),
            engines: vec![
                Engine::new("Claude", "https://claude.ai/new?q=", DEFAULT_LOGO),
                Engine::new("Perplexity", "https://www.perplexity.ai/search?q=", DEFAULT_LOGO),
            ],
            default_engine: 1,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_load_replaces_copy_wholesale() {
        let mut mirror = ConfigMirror::new(FakeHost::new(host_config()));
        assert_eq!(mirror.config(), &AppConfig::default());

        mirror.load().unwrap();
        assert_eq!(mirror.config(), &host_config());
    }

    #[test]
    fn test_failed_load_keeps_previous_copy() {
        let mut mirror = ConfigMirror::new(FakeHost::new(host_config()));
        mirror.load().unwrap();

        mirror.host().fail_get = true;
        mirror.host().stored.shortcut = "changed".to_string();

        assert!(mirror.load().is_err());
        assert_eq!(mirror.config(), &host_config());
    }

    #[test]
    fn test_load_clamps_stale_default_index() {
        let mut stored = host_config();
        stored.default_engine = 99;
        let mut mirror = ConfigMirror::new(FakeHost::new(stored));

        mirror.load().unwrap();
        assert_eq!(mirror.config().default_engine, 0);
    }

    #[test]
    fn test_save_adopts_draft_on_success() {
        let mut mirror = ConfigMirror::new(FakeHost::new(host_config()));
        mirror.load().unwrap();

        let mut draft = mirror.config().clone();
        draft.auto_start = true;
        draft.engines.push(Engine::new("Phind", "https://www.phind.com/search?q=", DEFAULT_LOGO));

        mirror.save(&draft).unwrap();
        assert_eq!(mirror.config(), &draft);
        assert_eq!(mirror.host().stored, draft);
    }

    #[test]
    fn test_failed_save_leaves_state_identical() {
        let mut mirror = ConfigMirror::new(FakeHost::new(host_config()));
        mirror.load().unwrap();

        let before = mirror.config().clone();
        let mut draft = before.clone();
        draft.shortcut = "Super+K".to_string();
        draft.engines.remove(0);

        mirror.host().fail_save = true;
        assert!(mirror.save(&draft).is_err());

        // Field-for-field identical to the pre-save copy, and the draft
        // itself was not consumed or mutated
        assert_eq!(mirror.config(), &before);
        assert_eq!(draft.shortcut, "Super+K");
        assert_eq!(mirror.host().save_calls, 1);
    }

    #[test]
    fn test_discard_draft_reloads_from_host() {
        let mut mirror = ConfigMirror::new(FakeHost::new(host_config()));
        mirror.load().unwrap();

        // Host state moves on (e.g. saved from another surface)
        mirror.host().stored.shortcut = "Alt+Enter".to_string();

        mirror.discard_draft().unwrap();
        assert_eq!(mirror.config().shortcut, "Alt+Enter");
    }
}
