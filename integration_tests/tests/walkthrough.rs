mod common;

use atlas_core::{FeatureView, PanelId, MAX_STEP};

/// Expected shape of each narrative step, front to back.
const EXPECTED_NAMES: [&str; 11] = [
    "initial",
    "intro",
    "zone",
    "zone-presentation",
    "transition",
    "population",
    "zone-recap",
    "consumption",
    "ratio-enr",
    "production",
    "final",
];

#[test]
fn forward_walk_visits_every_step_in_order() {
    let mut scene = common::test_scene();
    assert_eq!(scene.step_name(), EXPECTED_NAMES[0]);
    for expected in EXPECTED_NAMES.iter().skip(1) {
        assert!(scene.advance(1));
        assert_eq!(scene.step_name(), *expected);
    }
    assert_eq!(scene.step(), MAX_STEP);
}

#[test]
fn panels_follow_the_narrative() {
    let mut scene = common::test_scene();
    let expected_panels: [Option<PanelId>; 11] = [
        None,
        Some(PanelId::Intro),
        None,
        Some(PanelId::Presentation),
        Some(PanelId::Transition),
        Some(PanelId::Population),
        None,
        Some(PanelId::Heatmap),
        Some(PanelId::RatioEnr),
        Some(PanelId::Production),
        None,
    ];
    for (step, expected) in expected_panels.iter().enumerate() {
        assert_eq!(
            scene.panel().map(|(id, _)| id),
            *expected,
            "panel at step {step}"
        );
        if step < MAX_STEP {
            scene.advance(1);
        }
    }
}

#[test]
fn intro_text_is_hidden_at_step_zero_and_visible_at_step_one() {
    let mut scene = common::test_scene();
    assert!(scene.panel().is_none());
    scene.advance(1);
    let (id, text) = scene.panel().expect("intro panel should be visible");
    assert_eq!(id, PanelId::Intro);
    assert_eq!(text.body, "intro body");
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut scene = common::test_scene();
    assert!(!scene.advance(-1), "previous at step 0 is a no-op");
    assert_eq!(scene.step(), 0);

    for _ in 0..MAX_STEP {
        assert!(scene.advance(1));
    }
    assert!(!scene.advance(1), "next at the last step is a no-op");
    assert_eq!(scene.step(), MAX_STEP);
    // A rejected move leaves the whole scene untouched.
    let before: Vec<FeatureView> = scene.feature_views().to_vec();
    assert!(!scene.advance(1));
    assert_eq!(scene.feature_views(), before.as_slice());
}

#[test]
fn markers_appear_only_during_the_population_chapter() {
    let mut scene = common::test_scene();
    for step in 0..=MAX_STEP {
        let expected = step == 5 || step == 6;
        assert_eq!(
            !scene.markers().is_empty(),
            expected,
            "markers at step {step}"
        );
        if step < MAX_STEP {
            scene.advance(1);
        }
    }
}

#[test]
fn one_step_forward_then_back_restores_the_view() {
    for start in 0..MAX_STEP {
        let mut scene = common::test_scene();
        for _ in 0..start {
            scene.advance(1);
        }
        let features: Vec<FeatureView> = scene.feature_views().to_vec();
        let panel = scene.panel().map(|(id, _)| id);
        let marker_count = scene.markers().len();
        let menu = scene.menu().cloned();

        assert!(scene.advance(1));
        assert!(scene.advance(-1));

        assert_eq!(scene.feature_views(), features.as_slice(), "step {start}");
        assert_eq!(scene.panel().map(|(id, _)| id), panel, "step {start}");
        assert_eq!(scene.markers().len(), marker_count, "step {start}");
        assert_eq!(scene.menu().cloned(), menu, "step {start}");
    }
}
