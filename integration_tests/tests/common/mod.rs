use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn ensure_test_fixtures() {
    INIT.call_once(|| {
        let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures");
        let config_path = fixtures.join("test_viz_config.json");
        let regions_path = fixtures.join("test_regions.geojson");

        debug_assert!(
            config_path.exists(),
            "missing test viz config at {}",
            config_path.display()
        );
        debug_assert!(
            regions_path.exists(),
            "missing test regions at {}",
            regions_path.display()
        );

        std::env::set_var("ATLAS_VIZ_CONFIG_PATH", &config_path);
        std::env::set_var("ATLAS_REGIONS_PATH", &regions_path);
    });
}

pub fn test_scene() -> atlas_core::SceneState {
    ensure_test_fixtures();
    let (config, _) = atlas_core::load_viz_config_from_env();
    let (regions, _) = atlas_data::load_regions_from_env();
    atlas_core::SceneState::new(regions, config)
}
