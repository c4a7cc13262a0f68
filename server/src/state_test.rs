use super::*;

#[test]
fn load_catalog_without_path_uses_builtin() {
    assert_eq!(load_catalog(None), Catalog::builtin());
}

#[test]
fn load_catalog_reads_yaml_file() {
    let path = std::env::temp_dir().join(format!("storefront-server-catalog-{}.yml", std::process::id()));
    std::fs::write(&path, "- id: toys\n  name: Toys\n  featured: true\n").unwrap();

    let catalog = load_catalog(Some(&path));
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.featured().map(|c| c.id.as_str()), Some("toys"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn load_catalog_falls_back_on_invalid_file() {
    let path = std::env::temp_dir().join(format!("storefront-server-catalog-bad-{}.json", std::process::id()));
    std::fs::write(&path, r#"[{"id":"a","name":"A","featured":true},{"id":"b","name":"B","featured":true}]"#).unwrap();

    assert_eq!(load_catalog(Some(&path)), Catalog::builtin());

    let _ = std::fs::remove_file(path);
}

#[test]
fn from_config_maps_reduced_motion() {
    let config = ServerConfig { port: 3000, catalog_path: None, reduced_motion: true, leptos_config: None };
    let state = AppState::from_config(&config);
    assert_eq!(state.motion, MotionHints::Static);
    assert_eq!(state.catalog.len(), 6);
}
