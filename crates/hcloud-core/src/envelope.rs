//! Generic unwrapping of heterogeneous JSON response bodies.
//!
//! Endpoint responses vary in shape: a single resource under its own key,
//! a list under a pluralized key, an `action`, an `actions` list, or
//! combinations of these. [`Envelope`] deserializes any of them and exposes
//! typed accessors, so every resource client shares one unwrapping path.

use crate::action::Action;
use crate::error::{Error, Result};
use crate::page::PageMeta;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level keys that never denote the primary resource.
const RESERVED_KEYS: &[&str] = &["action", "actions", "meta", "error"];

/// A deserialized response body with typed access to its parts.
///
/// Reserved keys (`action`, `actions`, `meta`) are captured in typed fields;
/// every other top-level key lands verbatim in an open map that preserves
/// the source JSON's insertion order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    action: Option<Action>,

    #[serde(default)]
    actions: Vec<Action>,

    #[serde(default)]
    meta: Option<PageMeta>,

    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl Envelope {
    /// Deserialize an envelope from a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the body is not a JSON object.
    pub fn from_body(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|err| Error::Parse(format!("Failed to parse response envelope: {err}")))
    }

    /// The primary resource: the first non-reserved top-level key, in source
    /// order, deserialized as `T`.
    ///
    /// Returns `None` when no non-reserved key is present (for instance the
    /// empty body a missing resource is rewritten to). When a response ever
    /// carries more than one non-reserved key, the first one wins; call
    /// sites that know the key they want should use [`Envelope::field`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the value does not deserialize as `T`.
    pub fn primary<T>(&self) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        for (key, value) in &self.rest {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            let parsed = serde_json::from_value(value.clone()).map_err(|err| {
                Error::Parse(format!("Failed to deserialize `{key}`: {err}"))
            })?;
            return Ok(Some(parsed));
        }
        Ok(None)
    }

    /// Look up one named top-level key and deserialize it as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the value does not deserialize as `T`.
    pub fn field<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.rest.get(name) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|err| Error::Parse(format!("Failed to deserialize `{name}`: {err}"))),
            None => Ok(None),
        }
    }

    /// Whether a named top-level key is present.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.rest.contains_key(name)
    }

    /// The single associated action, if the response carried one.
    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Consume the envelope and return its single associated action.
    #[must_use]
    pub fn into_action(self) -> Option<Action> {
        self.action
    }

    /// The associated action list (empty if the response carried none).
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Consume the envelope and return its action list.
    #[must_use]
    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    /// Pagination metadata, when present.
    #[must_use]
    pub fn meta(&self) -> Option<&PageMeta> {
        self.meta.as_ref()
    }

    /// Consume the envelope into its action and primary resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the primary value does not deserialize
    /// as `T`.
    pub fn into_pair<T>(self) -> Result<(Option<Action>, Option<T>)>
    where
        T: DeserializeOwned,
    {
        let primary = self.primary()?;
        Ok((self.action, primary))
    }

    /// True when the envelope holds no action, no actions and no open keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.action.is_none()
            && self.actions.is_empty()
            && !self.rest.keys().any(|k| !RESERVED_KEYS.contains(&k.as_str()))
    }
}
