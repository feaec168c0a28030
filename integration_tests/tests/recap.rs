mod common;

use atlas_core::{FeatureView, SceneState, MAX_STEP};

fn scene_at(step: usize) -> SceneState {
    let mut scene = common::test_scene();
    for _ in 0..step {
        scene.advance(1);
    }
    scene
}

fn views(scene: &SceneState) -> Vec<FeatureView> {
    scene.feature_views().to_vec()
}

#[test]
fn recap_menu_reproduces_each_standalone_chapter() {
    let mut recap = scene_at(MAX_STEP);
    let menu = recap.menu().expect("final menu");
    assert_eq!(menu.selected, "zone");
    assert_eq!(views(&recap), views(&scene_at(2)), "zone view");

    assert!(recap.select_menu_option("consumption"));
    assert_eq!(views(&recap), views(&scene_at(7)), "consumption view");

    assert!(recap.select_menu_option("ratio_enr"));
    assert_eq!(views(&recap), views(&scene_at(8)), "ratio view");

    assert!(recap.select_menu_option("production"));
    assert_eq!(views(&recap), views(&scene_at(9)), "production view");
}

#[test]
fn population_toggle_adds_and_removes_the_overlay() {
    let mut recap = scene_at(MAX_STEP);
    assert_eq!(recap.population_toggle(), Some(false));
    assert!(recap.markers().is_empty());

    assert!(recap.set_population_overlay(true));
    assert_eq!(recap.markers().len(), recap.regions().len());
    // Largest share paints first so small circles stay visible.
    let radii: Vec<f64> = recap.markers().iter().map(|m| m.radius).collect();
    assert!(radii.windows(2).all(|pair| pair[0] >= pair[1]));

    assert!(recap.set_population_overlay(false));
    assert!(recap.markers().is_empty());
}

#[test]
fn toggle_is_refused_outside_the_final_step() {
    let mut scene = scene_at(8);
    assert_eq!(scene.population_toggle(), None);
    assert!(!scene.set_population_overlay(true));
    assert!(scene.markers().is_empty());
}

#[test]
fn leaving_and_reentering_the_recap_resets_it() {
    let mut recap = scene_at(MAX_STEP);
    recap.select_menu_option("production");
    recap.set_population_overlay(true);

    assert!(recap.advance(-1));
    assert!(recap.advance(1));

    assert_eq!(recap.menu().unwrap().selected, "zone");
    assert_eq!(recap.population_toggle(), Some(false));
    assert!(recap.markers().is_empty());
}
