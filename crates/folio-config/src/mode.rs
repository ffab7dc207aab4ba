//! Build modes and the overlays that specialize a base plan for them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::dev::{DevOptions, DevServerSettings};
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::merge::merge_values;
use crate::plan::{BuildPlan, Devtool};
use crate::plugin::SideEffect;

/// Build mode as supplied by the invoking environment.
///
/// Any string parses; values other than `production` and `development` are
/// kept verbatim as [`Mode::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    Production,
    Development,
    Unknown(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Production => "production",
            Mode::Development => "development",
            Mode::Unknown(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Mode::Unknown(_))
    }
}

impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        match value {
            "production" => Mode::Production,
            "development" => Mode::Development,
            other => Mode::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        Mode::from(value.as_str())
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Mode::from(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with a mode that has no overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModePolicy {
    /// Use the base plan unchanged
    #[default]
    Permissive,
    /// Reject with [`ConfigError::UnknownMode`]
    Strict,
}

impl ModePolicy {
    pub fn check(self, mode: &Mode) -> Result<()> {
        match (self, mode) {
            (ModePolicy::Strict, Mode::Unknown(name)) => Err(ConfigError::UnknownMode(name.clone())),
            _ => Ok(()),
        }
    }
}

/// Scalar settings an overlay replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,
}

/// Mode-specific fragment merged onto the base plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeOverlay {
    pub mode: Mode,
    /// Appended after the base plan's plugins
    pub extra_plugins: Vec<SideEffect>,
    pub settings: OverlaySettings,
}

impl ModeOverlay {
    pub fn select(mode: &Mode, layout: &ProjectLayout, dev: &DevOptions) -> Self {
        match mode {
            Mode::Production => Self::production(layout),
            Mode::Development => Self::development(dev),
            Mode::Unknown(_) => Self::passthrough(mode.clone()),
        }
    }

    fn production(layout: &ProjectLayout) -> Self {
        Self {
            mode: Mode::Production,
            extra_plugins: vec![
                SideEffect::MinifyScripts {
                    parallel: true,
                    cache: true,
                    source_map: true,
                },
                SideEffect::MinifyStyles,
                SideEffect::CleanOutput {
                    paths: vec![layout.resolved_output_dir()],
                },
            ],
            settings: OverlaySettings::default(),
        }
    }

    fn development(dev: &DevOptions) -> Self {
        let mut extra_plugins = Vec::new();
        if dev.open {
            extra_plugins.push(SideEffect::LaunchBrowser {
                url: dev.browser_url(),
            });
        }

        Self {
            mode: Mode::Development,
            extra_plugins,
            settings: OverlaySettings {
                dev_server: Some(dev.server_settings()),
                devtool: Some(Devtool::EvalCheapModuleSourceMap),
            },
        }
    }

    fn passthrough(mode: Mode) -> Self {
        Self {
            mode,
            extra_plugins: Vec::new(),
            settings: OverlaySettings::default(),
        }
    }

    pub fn is_passthrough(&self) -> bool {
        !self.mode.is_known()
    }

    /// The overlay as a partial plan document.
    fn fragment(&self) -> Result<Value> {
        let mut fragment = Map::new();
        fragment.insert("mode".to_string(), Value::String(self.mode.to_string()));

        if !self.extra_plugins.is_empty() {
            fragment.insert("plugins".to_string(), to_value(&self.extra_plugins)?);
        }

        if let Value::Object(settings) = to_value(&self.settings)? {
            fragment.extend(settings);
        }

        Ok(Value::Object(fragment))
    }
}

/// Merge `overlay` onto `plan`.
///
/// Scalars in the overlay replace the base, lists are appended after the base
/// entries, so nothing the base registered is ever dropped. A pass-through
/// overlay returns the plan untouched under [`ModePolicy::Permissive`].
pub fn apply_mode(plan: BuildPlan, overlay: &ModeOverlay, policy: ModePolicy) -> Result<BuildPlan> {
    policy.check(&overlay.mode)?;

    if overlay.is_passthrough() {
        warn!(
            mode = %overlay.mode,
            "no overlay for build mode, using the base plan as-is"
        );
        return Ok(plan);
    }

    let mut merged = plan.to_value()?;
    merge_values(&mut merged, &overlay.fragment()?);

    let plan = BuildPlan::from_value(merged).map_err(|err| ConfigError::InvalidOverlay {
        message: err.to_string(),
    })?;

    debug!(
        mode = %plan.mode,
        added = overlay.extra_plugins.len(),
        plugins = plan.plugins.len(),
        "applied mode overlay"
    );

    Ok(plan)
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|err| ConfigError::InvalidOverlay {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_and_unknown_modes() {
        assert_eq!("production".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!(Mode::from("development"), Mode::Development);
        assert_eq!(Mode::from("staging"), Mode::Unknown("staging".into()));
        assert_eq!(Mode::from("staging").to_string(), "staging");
    }

    #[test]
    fn mode_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_value(Mode::Production).unwrap(),
            serde_json::json!("production")
        );
        let mode: Mode = serde_json::from_value(serde_json::json!("qa")).unwrap();
        assert_eq!(mode, Mode::Unknown("qa".into()));
    }

    #[test]
    fn strict_policy_rejects_unknown_modes() {
        assert!(ModePolicy::Strict.check(&Mode::Production).is_ok());
        assert!(ModePolicy::Permissive.check(&Mode::from("qa")).is_ok());
        assert!(matches!(
            ModePolicy::Strict.check(&Mode::from("qa")),
            Err(ConfigError::UnknownMode(name)) if name == "qa"
        ));
    }

    #[test]
    fn development_overlay_skips_browser_when_open_is_off() {
        let dev = DevOptions {
            open: false,
            ..DevOptions::default()
        };
        let overlay = ModeOverlay::select(&Mode::Development, &ProjectLayout::default(), &dev);
        assert!(overlay.extra_plugins.is_empty());
        assert!(overlay.settings.dev_server.is_some());
    }

    #[test]
    fn production_fragment_only_carries_plugins_and_mode() {
        let overlay = ModeOverlay::select(
            &Mode::Production,
            &ProjectLayout::rooted("/p"),
            &DevOptions::default(),
        );
        let fragment = overlay.fragment().unwrap();
        let keys: Vec<_> = fragment.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["mode", "plugins"]);
        assert_eq!(fragment["plugins"].as_array().unwrap().len(), 3);
    }
}
