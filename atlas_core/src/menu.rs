use atlas_data::{ConsumptionKind, ProductionKind};

use crate::style::StyleMode;
use crate::tooltip::TooltipMode;

/// Which radio group is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    Consumption,
    Production,
    /// Closing recap: each option selects a whole view mode with its
    /// documented default sub-metric.
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// A radio-button group bound to the style/tooltip generators. At most
/// one menu exists at a time; showing a new one replaces the previous
/// instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSpec {
    kind: MenuKind,
    name: &'static str,
    options: Vec<MenuOption>,
    default_id: &'static str,
}

impl MenuSpec {
    pub fn consumption() -> Self {
        let options = ConsumptionKind::ALL
            .into_iter()
            .map(|kind| MenuOption {
                id: kind.metric().id(),
                label: kind.metric().label(),
            })
            .collect();
        Self {
            kind: MenuKind::Consumption,
            name: "consumption",
            options,
            default_id: ConsumptionKind::Total.metric().id(),
        }
    }

    pub fn production() -> Self {
        let options = ProductionKind::ALL
            .into_iter()
            .map(|kind| MenuOption {
                id: kind.metric().id(),
                label: kind.metric().label(),
            })
            .collect();
        Self {
            kind: MenuKind::Production,
            name: "production",
            options,
            default_id: ProductionKind::Total.metric().id(),
        }
    }

    pub fn final_recap() -> Self {
        Self {
            kind: MenuKind::Final,
            name: "final",
            options: vec![
                MenuOption {
                    id: "zone",
                    label: "Types d'habitats",
                },
                MenuOption {
                    id: "consumption",
                    label: "Conso. totale 2022",
                },
                MenuOption {
                    id: "ratio_enr",
                    label: "Part d'ENR",
                },
                MenuOption {
                    id: "production",
                    label: "Prod. totale 2022",
                },
            ],
            default_id: "zone",
        }
    }

    pub fn for_kind(kind: MenuKind) -> Self {
        match kind {
            MenuKind::Consumption => MenuSpec::consumption(),
            MenuKind::Production => MenuSpec::production(),
            MenuKind::Final => MenuSpec::final_recap(),
        }
    }

    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn default_id(&self) -> &'static str {
        self.default_id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.options.iter().any(|option| option.id == id)
    }

    /// Maps a selected option to the style/tooltip pair it drives.
    /// Unknown ids resolve to `None` and leave the scene untouched.
    pub fn resolve(&self, id: &str) -> Option<(StyleMode, TooltipMode)> {
        match self.kind {
            MenuKind::Consumption => ConsumptionKind::from_id(id)
                .map(|kind| (StyleMode::Consumption(kind), TooltipMode::Consumption)),
            MenuKind::Production => ProductionKind::from_id(id)
                .map(|kind| (StyleMode::Production(kind), TooltipMode::Production(kind))),
            MenuKind::Final => match id {
                "zone" => Some((StyleMode::Zone, TooltipMode::Zone)),
                "consumption" => Some((
                    StyleMode::Consumption(ConsumptionKind::Total),
                    TooltipMode::Consumption,
                )),
                "ratio_enr" => Some((StyleMode::RatioEnr, TooltipMode::RatioEnr)),
                "production" => Some((
                    StyleMode::Production(ProductionKind::Total),
                    TooltipMode::Production(ProductionKind::Total),
                )),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_menu_defaults_to_the_total_metric() {
        let menu = MenuSpec::consumption();
        assert_eq!(menu.options().len(), 2);
        assert_eq!(menu.default_id(), "total_conso_2022");
        assert!(menu.contains("per_capita_conso_2022"));
    }

    #[test]
    fn production_menu_lists_all_seven_sources() {
        let menu = MenuSpec::production();
        assert_eq!(menu.options().len(), 7);
        assert_eq!(
            menu.resolve("prod_hydro_2022"),
            Some((
                StyleMode::Production(ProductionKind::Hydro),
                TooltipMode::Production(ProductionKind::Hydro)
            ))
        );
    }

    #[test]
    fn final_menu_resolves_whole_view_modes() {
        let menu = MenuSpec::final_recap();
        assert_eq!(menu.default_id(), "zone");
        assert_eq!(
            menu.resolve("consumption"),
            Some((
                StyleMode::Consumption(ConsumptionKind::Total),
                TooltipMode::Consumption
            ))
        );
        assert_eq!(menu.resolve("prod_bio_2022"), None);
    }

    #[test]
    fn every_default_is_one_of_the_options() {
        for menu in [
            MenuSpec::consumption(),
            MenuSpec::production(),
            MenuSpec::final_recap(),
        ] {
            assert!(menu.contains(menu.default_id()), "{}", menu.name());
        }
    }
}
