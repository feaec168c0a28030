mod common;

use atlas_core::{Rgb, SceneState};

fn fill_colors(scene: &SceneState) -> Vec<Rgb> {
    scene
        .feature_views()
        .iter()
        .map(|view| view.style.fill_color)
        .collect()
}

fn rgb(raw: &str) -> Rgb {
    Rgb::from_css(raw).unwrap()
}

fn scene_at(step: usize) -> SceneState {
    let mut scene = common::test_scene();
    for _ in 0..step {
        scene.advance(1);
    }
    scene
}

#[test]
fn zone_step_paints_the_categorical_palette() {
    let scene = scene_at(2);
    assert_eq!(
        fill_colors(&scene),
        vec![rgb("#10a010"), rgb("#708090"), rgb("#506020")]
    );
}

#[test]
fn consumption_step_buckets_totals_by_default() {
    let scene = scene_at(7);
    let menu = scene.menu().expect("consumption menu");
    assert_eq!(menu.selected, "total_conso_2022");
    // 50 / 150 / 250 against cutoffs [100, 200].
    assert_eq!(
        fill_colors(&scene),
        vec![rgb("#110000"), rgb("#220000"), rgb("#330000")]
    );
}

#[test]
fn per_capita_selection_rebuckets_every_feature() {
    let mut scene = scene_at(7);
    assert!(scene.select_menu_option("per_capita_conso_2022"));
    // 5 / 15 / 25 against cutoffs [10, 20]: same ordering, per-capita
    // figures this time.
    assert_eq!(
        fill_colors(&scene),
        vec![rgb("#110000"), rgb("#220000"), rgb("#330000")]
    );
    for view in scene.feature_views() {
        assert_eq!(view.tooltip.details.len(), 2);
        assert!(view.tooltip.details[0].starts_with("Total consommé: "));
        assert!(view.tooltip.details[1].starts_with("Conso. par habitant: "));
    }
}

#[test]
fn ratio_step_spans_the_five_color_ramp() {
    let scene = scene_at(8);
    // 5 / 25 / 100 against cutoffs [10, 20, 30, 40].
    assert_eq!(
        fill_colors(&scene),
        vec![rgb("#000011"), rgb("#000033"), rgb("#000055")]
    );
    for view in scene.feature_views() {
        assert_eq!(view.tooltip.details.len(), 1);
        assert!(view.tooltip.details[0].starts_with("Ratio ENR: "));
    }
}

#[test]
fn production_menu_switch_updates_styles_and_tooltips_together() {
    let mut scene = scene_at(9);
    let menu = scene.menu().expect("production menu");
    assert_eq!(menu.selected, "total_prod_2022");
    assert_eq!(menu.spec.options().len(), 7);
    // Totals 50 / 150 / 350 against [100, 200, 300].
    assert_eq!(
        fill_colors(&scene),
        vec![rgb("#001100"), rgb("#002200"), rgb("#004400")]
    );

    assert!(scene.select_menu_option("prod_eolien_2022"));
    // Wind 5 / 500 / 5000 against [10, 100, 1000].
    assert_eq!(
        fill_colors(&scene),
        vec![rgb("#001100"), rgb("#003300"), rgb("#004400")]
    );
    for view in scene.feature_views() {
        assert!(view.tooltip.details[0].starts_with("Éolien: "));
        assert!(view.tooltip.details[1].starts_with("Pred. totale 2025: "));
    }

    // Unknown ids leave the selection and the view alone.
    let before = fill_colors(&scene);
    assert!(!scene.select_menu_option("prod_nuke_2022"));
    assert_eq!(scene.menu().unwrap().selected, "prod_eolien_2022");
    assert_eq!(fill_colors(&scene), before);
}
