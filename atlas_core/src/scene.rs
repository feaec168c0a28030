use std::sync::Arc;

use atlas_data::RegionCollection;

use crate::markers::{population_markers, PopulationMarker};
use crate::menu::MenuSpec;
use crate::steps::{step_spec, PanelId, StepEffects, StepView, MAX_STEP};
use crate::style::{style_for, FeatureStyle, StyleMode};
use crate::tooltip::{tooltip_for, Tooltip, TooltipMode};
use crate::viz_config::{PanelText, VizConfig};

/// Resolved presentation of one feature at the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureView {
    pub style: FeatureStyle,
    pub tooltip: Tooltip,
}

/// The menu currently on screen and its selected option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveMenu {
    pub spec: MenuSpec,
    pub selected: &'static str,
}

/// The whole view state of the guided tour.
///
/// Exclusively owned by the UI thread; every mutation path recomputes
/// the affected state from the step table, so re-applying a step is
/// idempotent and navigation never needs to undo prior side effects.
#[derive(Debug, Clone)]
pub struct SceneState {
    regions: Arc<RegionCollection>,
    config: Arc<VizConfig>,
    step: usize,
    features: Vec<FeatureView>,
    panel: Option<PanelId>,
    menu: Option<ActiveMenu>,
    markers: Vec<PopulationMarker>,
    population_toggle: Option<bool>,
}

impl SceneState {
    pub fn new(regions: Arc<RegionCollection>, config: Arc<VizConfig>) -> Self {
        let mut scene = Self {
            regions,
            config,
            step: 0,
            features: Vec::new(),
            panel: None,
            menu: None,
            markers: Vec::new(),
            population_toggle: None,
        };
        scene.apply_step();
        scene
    }

    pub fn regions(&self) -> &RegionCollection {
        &self.regions
    }

    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_name(&self) -> &'static str {
        // Step index stays in table bounds by construction.
        step_spec(self.step).map(|spec| spec.name).unwrap_or("?")
    }

    pub fn feature_views(&self) -> &[FeatureView] {
        &self.features
    }

    /// Panel visible at this step, with its configured text. A panel
    /// id without text in the config simply stays hidden.
    pub fn panel(&self) -> Option<(PanelId, &PanelText)> {
        let id = self.panel?;
        self.config.panel(id.id()).map(|text| (id, text))
    }

    pub fn menu(&self) -> Option<&ActiveMenu> {
        self.menu.as_ref()
    }

    pub fn markers(&self) -> &[PopulationMarker] {
        &self.markers
    }

    /// `None` when the step offers no toggle, otherwise its checked
    /// state.
    pub fn population_toggle(&self) -> Option<bool> {
        self.population_toggle
    }

    pub fn can_advance(&self, direction: i32) -> bool {
        match direction {
            1 => self.step < MAX_STEP,
            -1 => self.step > 0,
            _ => false,
        }
    }

    /// Moves one step forward or backward. Directions other than ±1
    /// and moves past either end are rejected without touching state.
    pub fn advance(&mut self, direction: i32) -> bool {
        if !self.can_advance(direction) {
            return false;
        }
        self.step = (self.step as i32 + direction) as usize;
        tracing::debug!(
            target: "energy_atlas::scene",
            step = self.step,
            name = self.step_name(),
            "scene.step"
        );
        self.apply_step();
        true
    }

    /// Selects a menu option by id. A missing menu or foreign id is a
    /// no-op; a valid selection restyles and re-tooltips every feature.
    pub fn select_menu_option(&mut self, id: &str) -> bool {
        let Some(active) = &self.menu else {
            return false;
        };
        let Some(option) = active.spec.options().iter().find(|option| option.id == id) else {
            tracing::debug!(
                target: "energy_atlas::scene",
                menu = active.spec.name(),
                id,
                "scene.menu_option_ignored"
            );
            return false;
        };
        let option_id = option.id;
        let Some((style, tooltip)) = active.spec.resolve(option_id) else {
            return false;
        };
        if let Some(active) = &mut self.menu {
            active.selected = option_id;
        }
        self.apply_view(style, tooltip);
        true
    }

    /// Step-10 population checkbox. Ignored whenever the toggle is not
    /// on offer.
    pub fn set_population_overlay(&mut self, visible: bool) -> bool {
        if self.population_toggle.is_none() {
            return false;
        }
        self.population_toggle = Some(visible);
        self.markers = if visible {
            population_markers(&self.regions, &self.config)
        } else {
            Vec::new()
        };
        true
    }

    fn apply_step(&mut self) {
        // An out-of-table index cannot happen after a clamped advance;
        // absorb it rather than panic, like the style fallbacks do.
        let spec = match step_spec(self.step) {
            Some(spec) => *spec,
            None => return,
        };

        self.panel = spec.panel;

        match spec.view {
            StepView::Fixed { style, tooltip } => {
                self.menu = None;
                self.apply_view(style, tooltip);
            }
            StepView::Menu(kind) => {
                let menu = MenuSpec::for_kind(kind);
                let selected = menu.default_id();
                let (style, tooltip) = menu
                    .resolve(selected)
                    .unwrap_or((StyleMode::Default, TooltipMode::Zone));
                self.menu = Some(ActiveMenu {
                    spec: menu,
                    selected,
                });
                self.apply_view(style, tooltip);
            }
        }

        self.markers = if spec.effects.contains(StepEffects::SHOW_MARKERS) {
            population_markers(&self.regions, &self.config)
        } else {
            Vec::new()
        };
        self.population_toggle = spec
            .effects
            .contains(StepEffects::POPULATION_TOGGLE)
            .then_some(false);
    }

    fn apply_view(&mut self, style: StyleMode, tooltip: TooltipMode) {
        self.features = self
            .regions
            .features()
            .iter()
            .map(|feature| FeatureView {
                style: style_for(feature, style, &self.config),
                tooltip: tooltip_for(feature, tooltip, &self.config),
            })
            .collect();
    }
}
