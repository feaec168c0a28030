use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::menu::MenuKind;
use crate::style::StyleMode;
use crate::tooltip::TooltipMode;

/// Narrative text panels. A step shows at most one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Intro,
    Presentation,
    Transition,
    Population,
    Heatmap,
    RatioEnr,
    Production,
}

impl PanelId {
    /// Key into the panel section of the viz config.
    pub fn id(self) -> &'static str {
        match self {
            PanelId::Intro => "intro",
            PanelId::Presentation => "presentation",
            PanelId::Transition => "transition",
            PanelId::Population => "population",
            PanelId::Heatmap => "heatmap",
            PanelId::RatioEnr => "ratioenr",
            PanelId::Production => "production",
        }
    }
}

bitflags! {
    /// Overlay state a step switches on. Anything not set is off; the
    /// scene recomputes from the table instead of diffing transitions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct StepEffects: u8 {
        /// Population circles drawn on the map.
        const SHOW_MARKERS = 1;
        /// Population checkbox offered to the viewer.
        const POPULATION_TOGGLE = 1 << 1;
    }
}

/// How a step drives the layer: a fixed style/tooltip pair, or a menu
/// whose selected option resolves the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepView {
    Fixed {
        style: StyleMode,
        tooltip: TooltipMode,
    },
    Menu(MenuKind),
}

/// One row of the narrative table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    pub name: &'static str,
    pub view: StepView,
    pub panel: Option<PanelId>,
    pub effects: StepEffects,
}

pub const STEP_COUNT: usize = 11;
pub const MAX_STEP: usize = STEP_COUNT - 1;

const MUTED: StepView = StepView::Fixed {
    style: StyleMode::Default,
    tooltip: TooltipMode::Zone,
};

const ZONE: StepView = StepView::Fixed {
    style: StyleMode::Zone,
    tooltip: TooltipMode::Zone,
};

/// The whole narrative, in order. Indices are the step ids exposed to
/// navigation.
pub const STEPS: [StepSpec; STEP_COUNT] = [
    StepSpec {
        name: "initial",
        view: MUTED,
        panel: None,
        effects: StepEffects::empty(),
    },
    StepSpec {
        name: "intro",
        view: MUTED,
        panel: Some(PanelId::Intro),
        effects: StepEffects::empty(),
    },
    StepSpec {
        name: "zone",
        view: ZONE,
        panel: None,
        effects: StepEffects::empty(),
    },
    StepSpec {
        name: "zone-presentation",
        view: ZONE,
        panel: Some(PanelId::Presentation),
        effects: StepEffects::empty(),
    },
    StepSpec {
        name: "transition",
        view: ZONE,
        panel: Some(PanelId::Transition),
        effects: StepEffects::empty(),
    },
    StepSpec {
        name: "population",
        view: ZONE,
        panel: Some(PanelId::Population),
        effects: StepEffects::SHOW_MARKERS,
    },
    StepSpec {
        name: "zone-recap",
        view: ZONE,
        panel: None,
        effects: StepEffects::SHOW_MARKERS,
    },
    StepSpec {
        name: "consumption",
        view: StepView::Menu(MenuKind::Consumption),
        panel: Some(PanelId::Heatmap),
        effects: StepEffects::empty(),
    },
    StepSpec {
        name: "ratio-enr",
        view: StepView::Fixed {
            style: StyleMode::RatioEnr,
            tooltip: TooltipMode::RatioEnr,
        },
        panel: Some(PanelId::RatioEnr),
        effects: StepEffects::empty(),
    },
    StepSpec {
        name: "production",
        view: StepView::Menu(MenuKind::Production),
        panel: Some(PanelId::Production),
        effects: StepEffects::empty(),
    },
    StepSpec {
        name: "final",
        view: StepView::Menu(MenuKind::Final),
        panel: None,
        effects: StepEffects::POPULATION_TOGGLE,
    },
];

pub fn step_spec(step: usize) -> Option<&'static StepSpec> {
    STEPS.get(step)
}
