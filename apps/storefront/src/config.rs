//! # Storefront Configuration
//!
//! Configuration for the storefront host.
//!
//! ## Configuration Sources (in priority order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Resolution                             │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     SHRINE_VIEWPORT_WIDTH, SHRINE_VIEWPORT_HEIGHT,                      │
//! │     SHRINE_REDUCED_MOTION, SHRINE_INITIAL_STATE, SHRINE_FPS             │
//! │                                                                         │
//! │  2. Config File                                                         │
//! │     --config <path>, or                                                 │
//! │     ~/.config/storefront/storefront.toml (Linux)                        │
//! │     ~/Library/Application Support/com.shrine.storefront/ (macOS)        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     411 x 731 viewport, collapsed cart, full motion, 60 fps             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Config File
//! ```toml
//! [viewport]
//! width = 411.0
//! height = 731.0
//!
//! [panel]
//! initial_state = "collapsed"
//! reduced_motion = false
//!
//! [catalog]
//! category = "all"
//!
//! [frames]
//! fps = 60
//! run_for_ms = 4000
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use shrine_core::{Category, Viewport};
use shrine_panel::{CartState, TransitionTable};

use crate::error::{HostError, HostResult};

/// Highest frame rate the driver accepts.
pub const MAX_FPS: u32 = 240;

// =============================================================================
// Sections
// =============================================================================

/// Viewport bounds in density-independent units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    411.0
}

fn default_height() -> f32 {
    731.0
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Cart panel settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub initial_state: CartState,

    /// Settle every transition on its first frame.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Catalog settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Category selected at startup.
    #[serde(default)]
    pub category: Category,
}

/// Frame driver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Length of the scripted session.
    #[serde(default = "default_run_for_ms")]
    pub run_for_ms: u64,
}

fn default_fps() -> u32 {
    60
}

fn default_run_for_ms() -> u64 {
    4_000
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            run_for_ms: default_run_for_ms(),
        }
    }
}

// =============================================================================
// Storefront Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,

    #[serde(default)]
    pub panel: PanelConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub frames: FrameConfig,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> HostResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    HostError::ConfigLoadFailed(format!("{}: {e}", path.display()))
                })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> HostResult<()> {
        Viewport::try_new(self.viewport.width, self.viewport.height)?;

        if self.frames.fps == 0 || self.frames.fps > MAX_FPS {
            return Err(HostError::InvalidConfig(format!(
                "frames.fps must be between 1 and {MAX_FPS}, got {}",
                self.frames.fps
            )));
        }

        if self.frames.run_for_ms == 0 {
            return Err(HostError::InvalidConfig(
                "frames.run_for_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `SHRINE_*` overrides read through `var`. Unparseable values
    /// are logged and skipped.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(width) = var("SHRINE_VIEWPORT_WIDTH") {
            match width.parse::<f32>() {
                Ok(w) => {
                    debug!(width = w, "Overriding viewport width from environment");
                    self.viewport.width = w;
                }
                Err(_) => warn!(value = %width, "Ignoring SHRINE_VIEWPORT_WIDTH"),
            }
        }

        if let Some(height) = var("SHRINE_VIEWPORT_HEIGHT") {
            match height.parse::<f32>() {
                Ok(h) => {
                    debug!(height = h, "Overriding viewport height from environment");
                    self.viewport.height = h;
                }
                Err(_) => warn!(value = %height, "Ignoring SHRINE_VIEWPORT_HEIGHT"),
            }
        }

        if let Some(reduced) = var("SHRINE_REDUCED_MOTION") {
            match reduced.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.panel.reduced_motion = true,
                "0" | "false" | "no" | "off" => self.panel.reduced_motion = false,
                _ => warn!(value = %reduced, "Ignoring SHRINE_REDUCED_MOTION"),
            }
        }

        if let Some(state) = var("SHRINE_INITIAL_STATE") {
            match state.parse::<CartState>() {
                Ok(parsed) => {
                    debug!(state = %parsed, "Overriding initial cart state from environment");
                    self.panel.initial_state = parsed;
                }
                Err(e) => warn!(error = %e, "Ignoring SHRINE_INITIAL_STATE"),
            }
        }

        if let Some(fps) = var("SHRINE_FPS") {
            match fps.parse::<u32>() {
                Ok(f) => {
                    debug!(fps = f, "Overriding frame rate from environment");
                    self.frames.fps = f;
                }
                Err(_) => warn!(value = %fps, "Ignoring SHRINE_FPS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shrine", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The configured viewport.
    pub fn viewport(&self) -> HostResult<Viewport> {
        Ok(Viewport::try_new(self.viewport.width, self.viewport.height)?)
    }

    /// Timing table honoring the reduced-motion switch.
    pub fn transition_table(&self) -> TransitionTable {
        if self.panel.reduced_motion {
            TransitionTable::reduced_motion()
        } else {
            TransitionTable::shrine()
        }
    }

    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.frames.fps.max(1)))
    }
}
