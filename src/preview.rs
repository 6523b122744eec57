//! Preview flag.
//!
//! A `?preview=true` visit turns preview mode on and `?preview=false` turns
//! it off; the choice sticks in storage across later visits without the
//! parameter. Analytics loaders ask [`PreviewFlag::is_enabled`] (published as
//! `window.isPreviewMode`) and skip initialization while it holds.

use crate::consts::{BADGE_ID, BADGE_STYLE, BADGE_TEXT, PREVIEW_KEY};
use crate::storage::KeyValueStore;

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Stored value marking preview mode active.
const ENABLED: &str = "true";

/// What a query parameter did to the stored flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewChange {
    Enabled,
    Disabled,
    Unchanged,
}

/// The fixed-position badge injected while preview mode is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub text: String,
    pub style: String,
}

pub struct PreviewFlag<S> {
    store: S,
    key: String,
    badge_id: String,
    badge_text: String,
}

impl<S: KeyValueStore> PreviewFlag<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: PREVIEW_KEY.to_owned(),
            badge_id: BADGE_ID.to_owned(),
            badge_text: BADGE_TEXT.to_owned(),
        }
    }

    /// Use a different storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Override the badge's element id and text.
    #[must_use]
    pub fn with_badge(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.badge_id = id.into();
        self.badge_text = text.into();
        self
    }

    /// Update the stored flag from the raw `preview` parameter value.
    ///
    /// Only the exact strings `true` and `false` have an effect.
    pub fn apply_param(&self, value: Option<&str>) -> PreviewChange {
        match value {
            Some("true") => {
                self.store.set(&self.key, ENABLED);
                log::info!("preview: enabled, analytics disabled");
                PreviewChange::Enabled
            }
            Some("false") => {
                self.store.remove(&self.key);
                log::info!("preview: disabled, analytics enabled");
                PreviewChange::Disabled
            }
            _ => PreviewChange::Unchanged,
        }
    }

    /// Like [`Self::apply_param`], for a lookup that may have failed. A failed
    /// lookup leaves the stored flag as it was.
    pub fn apply_lookup<E: std::fmt::Display>(&self, lookup: Result<Option<String>, E>) -> PreviewChange {
        match crate::error::warn_on_err("preview", lookup) {
            Some(value) => self.apply_param(value.as_deref()),
            None => PreviewChange::Unchanged,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.get(&self.key).as_deref() == Some(ENABLED)
    }

    /// The badge to show, or `None` when preview mode is off.
    pub fn badge(&self) -> Option<Badge> {
        self.is_enabled().then(|| Badge {
            id: self.badge_id.clone(),
            text: self.badge_text.clone(),
            style: BADGE_STYLE.join(";"),
        })
    }
}
