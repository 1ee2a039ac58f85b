//! Persisted binding profiles.
//!
//! A [`BindingProfile`] maps action names to binding descriptions. It is the
//! crate's configuration file: TOML by default, JSON when the path ends in
//! `.json`. Descriptions are stored in their text form:
//!
//! ```toml
//! name = "default"
//!
//! [buttons]
//! jump = "button:256,engine:gcpad,port:0"
//!
//! [analogs]
//! move = "axis_x:0,axis_y:1,deadzone:0.15,engine:gcpad,port:0"
//! ```
//!
//! [`InputManager::bind_profile`](crate::manager::InputManager::bind_profile)
//! turns a profile into a [`BoundProfile`] of live devices.

use crate::device::{AnalogDevice, ButtonDevice};
use crate::error::BindingResult;
use crate::params::ParamPackage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Serializable set of named bindings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BindingProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub buttons: BTreeMap<String, ParamPackage>,
    #[serde(default)]
    pub analogs: BTreeMap<String, ParamPackage>,
}

impl BindingProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> BindingResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> BindingResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_json_str(s: &str) -> BindingResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_string(&self) -> BindingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a profile; `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> BindingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let profile = if is_json(path) {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        tracing::debug!(path = %path.display(), name = %profile.name, "loaded binding profile");
        Ok(profile)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> BindingResult<()> {
        let path = path.as_ref();
        let text = if is_json(path) {
            self.to_json_string()?
        } else {
            self.to_toml_string()?
        };
        std::fs::write(path, text)?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Live devices built from a [`BindingProfile`].
#[derive(Default)]
pub struct BoundProfile {
    pub buttons: BTreeMap<String, Box<dyn ButtonDevice>>,
    pub analogs: BTreeMap<String, Box<dyn AnalogDevice>>,
}

/// Polled values of every action in a [`BoundProfile`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileState {
    pub buttons: BTreeMap<String, bool>,
    pub analogs: BTreeMap<String, (f32, f32)>,
}

impl BoundProfile {
    /// Polls every device once.
    pub fn resolve(&self) -> ProfileState {
        ProfileState {
            buttons: self
                .buttons
                .iter()
                .map(|(action, device)| (action.clone(), device.poll()))
                .collect(),
            analogs: self
                .analogs
                .iter()
                .map(|(action, device)| (action.clone(), device.poll()))
                .collect(),
        }
    }
}

impl ProfileState {
    /// State of a bound button (false if unbound).
    pub fn button(&self, action: &str) -> bool {
        self.buttons.get(action).copied().unwrap_or(false)
    }

    /// State of a bound stick (centered if unbound).
    pub fn analog(&self, action: &str) -> (f32, f32) {
        self.analogs.get(action).copied().unwrap_or((0.0, 0.0))
    }
}
