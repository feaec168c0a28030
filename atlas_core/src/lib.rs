//! Presentation engine for the Energy Atlas guided tour.
//!
//! Drives a linear, eleven-step narrative over a static regional
//! energy dataset: each step deterministically resolves per-feature
//! styling and tooltips, the visible narrative panel, the active
//! sub-metric menu and the population overlay. [`SceneState`] owns the
//! whole view state and is mutated only through step navigation, menu
//! selection and the final population toggle.

mod markers;
mod menu;
pub mod metrics;
mod palette;
mod scene;
mod steps;
mod style;
mod tooltip;
mod viz_config;

pub use markers::{population_markers, PopulationMarker};
pub use menu::{MenuKind, MenuOption, MenuSpec};
pub use metrics::{DatasetSummary, MetricSummary};
pub use palette::{PaletteError, Rgb, ThresholdScale};
pub use scene::{ActiveMenu, FeatureView, SceneState};
pub use steps::{step_spec, PanelId, StepEffects, StepSpec, StepView, MAX_STEP, STEPS, STEP_COUNT};
pub use style::{style_for, FeatureStyle, StyleMode};
pub use tooltip::{population_tooltip, tooltip_for, Tooltip, TooltipMode};
pub use viz_config::{
    load_viz_config_from_env, PanelText, VizConfig, VizConfigError, VizConfigMetadata,
    BUILTIN_VIZ_CONFIG,
};
