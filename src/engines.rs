//! Engine roster: the ordered AI engine list plus its two cursors
//!
//! Every mutation (push/remove/move/set_default) keeps `default` and
//! `current` pointing at the same underlying engines they named before,
//! except where an operation explicitly retargets them. Out-of-range
//! indices are caller bugs and assert rather than clamp.

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

/// Logo value used when the user attaches no image
pub const DEFAULT_LOGO: &str = "askbar_logo.png";

/// A configured search target. Immutable once created; edits go through
/// whole-record replacement in the roster.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    pub name: String,
    pub url: String,
    pub logo: String,
}

impl Engine {
    pub fn new(name: impl Into<String>, url: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            logo: logo.into(),
        }
    }

    /// Full URL for a submitted query: the percent-encoded query text
    /// appended to the engine's URL prefix.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}{}", self.url, urlencoding::encode(query))
    }
}

/// Why a new-engine submission was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    EmptyUrl,
    InvalidUrl(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "Please enter an engine name."),
            ValidationError::EmptyUrl => write!(f, "Please enter a search URL."),
            ValidationError::InvalidUrl(reason) => {
                write!(f, "Please enter a valid absolute URL ({reason}).")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate the add-engine form fields. The URL must be absolute since the
/// query string is appended directly onto it.
pub fn validate_new_engine(name: &str, url: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if url.trim().is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    match Url::parse(url.trim()) {
        Ok(parsed) if parsed.cannot_be_a_base() => {
            Err(ValidationError::InvalidUrl("not a base URL".to_string()))
        }
        Ok(_) => Ok(()),
        Err(e) => Err(ValidationError::InvalidUrl(e.to_string())),
    }
}

/// Ordered engine list with the default and current cursors.
///
/// Invariant: when the list is non-empty both cursors are in `[0, len)`;
/// when empty both are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineRoster {
    engines: Vec<Engine>,
    default: usize,
    current: usize,
}

impl EngineRoster {
    pub fn new(engines: Vec<Engine>, default: usize) -> Self {
        let default = if engines.is_empty() { 0 } else { default.min(engines.len() - 1) };
        Self {
            engines,
            default,
            current: default,
        }
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    pub fn engines(&self) -> &[Engine] {
        &self.engines
    }

    pub fn default_index(&self) -> usize {
        self.default
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn get(&self, index: usize) -> Option<&Engine> {
        self.engines.get(index)
    }

    /// Engine that will receive the next submitted query
    pub fn current(&self) -> Option<&Engine> {
        self.engines.get(self.current)
    }

    /// Append an engine to the end of the list. The new entry lands at the
    /// old length so no cursor needs adjustment.
    pub fn push(&mut self, engine: Engine) {
        info!(name = %engine.name, index = self.engines.len(), "Adding engine");
        self.engines.push(engine);
    }

    /// Remove the engine at `index`.
    ///
    /// The deleted default's replacement is `max(0, default - 1)`; a cursor
    /// past the removal point shifts down by one; the current cursor snaps
    /// to the new default when its own engine was removed.
    pub fn remove(&mut self, index: usize) -> Engine {
        assert!(index < self.engines.len(), "remove index {index} out of range");

        let removed = self.engines.remove(index);
        info!(name = %removed.name, index, "Removed engine");

        if self.engines.is_empty() {
            self.default = 0;
            self.current = 0;
            return removed;
        }

        self.default = if index == self.default {
            self.default.saturating_sub(1)
        } else if index < self.default {
            self.default - 1
        } else {
            self.default
        };

        self.current = if index == self.current {
            self.default
        } else if index < self.current {
            self.current - 1
        } else {
            self.current
        };

        removed
    }

    /// Make `index` the default engine. Changing the default immediately
    /// changes the active engine as well.
    pub fn set_default(&mut self, index: usize) {
        assert!(index < self.engines.len(), "set_default index {index} out of range");
        self.default = index;
        self.current = index;
    }

    /// Select `index` as the current engine without touching the default
    pub fn select(&mut self, index: usize) {
        assert!(index < self.engines.len(), "select index {index} out of range");
        self.current = index;
    }

    /// Restore the current cursor to the default engine (window reopen,
    /// blur, escape)
    pub fn reset_current(&mut self) {
        self.current = self.default;
    }

    /// Splice-move: remove the engine at `from` and reinsert it at `to`,
    /// where `to` is a position in the list after removal. Both cursors
    /// keep naming the engines they named before the move.
    pub fn move_engine(&mut self, from: usize, to: usize) {
        assert!(from < self.engines.len(), "move from {from} out of range");
        assert!(to < self.engines.len(), "move to {to} out of range");
        assert_ne!(from, to, "move requires distinct positions");

        let engine = self.engines.remove(from);
        info!(name = %engine.name, from, to, "Moving engine");
        self.engines.insert(to, engine);

        self.default = adjust_cursor_for_move(self.default, from, to);
        self.current = adjust_cursor_for_move(self.current, from, to);
    }
}

/// Cursor adjustment for a splice move, applied independently to each cursor
fn adjust_cursor_for_move(cursor: usize, from: usize, to: usize) -> usize {
    if cursor == from {
        to
    } else if from < cursor && to >= cursor {
        cursor - 1
    } else if from > cursor && to <= cursor {
        cursor + 1
    } else {
        cursor
    }
}
