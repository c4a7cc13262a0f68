use super::*;

fn category(id: &str, featured: bool) -> Category {
    Category {
        id: id.to_owned(),
        name: id.to_uppercase(),
        description: String::new(),
        image: None,
        icon: None,
        product_count: "10+ Products".to_owned(),
        gradient: "from-gray-500 to-gray-700".to_owned(),
        featured,
    }
}

// =============================================================
// Built-in catalog
// =============================================================

#[test]
fn builtin_has_six_entries_in_order() {
    let catalog = Catalog::builtin();
    let ids: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["electronics", "fashion", "home-garden", "sports", "beauty", "books"]);
}

#[test]
fn builtin_features_only_electronics() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.featured().map(|c| c.id.as_str()), Some("electronics"));
    for c in catalog.iter() {
        let expected = if c.id == "electronics" { CardSize::Featured } else { CardSize::Standard };
        assert_eq!(c.card_size(), expected, "card size for {}", c.id);
    }
}

#[test]
fn builtin_passes_validation() {
    let catalog = Catalog::builtin();
    let revalidated = Catalog::new(catalog.as_slice().to_vec()).unwrap();
    assert_eq!(revalidated, catalog);
}

#[test]
fn builtin_entries_carry_image_and_icon() {
    for c in Catalog::builtin().iter() {
        assert!(c.image.as_deref().is_some_and(|img| img.ends_with(".jpg")));
        assert!(c.icon.is_some());
        assert!(!c.product_count.is_empty());
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn new_accepts_empty_list() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert!(catalog.featured().is_none());
}

#[test]
fn new_rejects_duplicate_ids() {
    let err = Catalog::new(vec![category("a", false), category("b", false), category("a", false)]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
}

#[test]
fn new_rejects_second_featured_entry() {
    let err = Catalog::new(vec![category("a", true), category("b", false), category("c", true)]).unwrap_err();
    match err {
        CatalogError::MultipleFeatured { first, second } => {
            assert_eq!(first, "a");
            assert_eq!(second, "c");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn new_rejects_empty_and_unsafe_ids() {
    assert!(matches!(Catalog::new(vec![category("", false)]), Err(CatalogError::InvalidId(_))));
    assert!(matches!(Catalog::new(vec![category("a b", false)]), Err(CatalogError::InvalidId(_))));
    assert!(matches!(Catalog::new(vec![category("a?x=1", false)]), Err(CatalogError::InvalidId(_))));
    assert!(Catalog::new(vec![category("home_garden-2", false)]).is_ok());
}

#[test]
fn get_finds_by_id() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get("books").map(|c| c.name.as_str()), Some("Books & Media"));
    assert!(catalog.get("missing").is_none());
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn from_yaml_str_applies_defaults_for_optional_fields() {
    let raw = r"
- id: toys
  name: Toys
  featured: true
- id: garden
  name: Garden
  icon: leaf
";
    let catalog = Catalog::from_yaml_str(raw).unwrap();
    assert_eq!(catalog.len(), 2);
    let toys = catalog.get("toys").unwrap();
    assert!(toys.featured);
    assert!(toys.icon.is_none());
    assert!(toys.image.is_none());
    assert_eq!(toys.description, "");
    assert_eq!(catalog.get("garden").unwrap().icon.as_deref(), Some("leaf"));
}

#[test]
fn from_yaml_str_validates() {
    let raw = "- id: a\n  name: A\n- id: a\n  name: B\n";
    assert!(matches!(Catalog::from_yaml_str(raw), Err(CatalogError::DuplicateId(_))));
}

#[test]
fn from_json_str_parses_array() {
    let raw = r#"[{"id":"a","name":"A","featured":true},{"id":"b","name":"B"}]"#;
    let catalog = Catalog::from_json_str(raw).unwrap();
    assert_eq!(catalog.featured().map(|c| c.id.as_str()), Some("a"));
    assert_eq!(catalog.get("b").unwrap().card_size(), CardSize::Standard);
}

#[test]
fn from_json_str_rejects_malformed_input() {
    assert!(matches!(Catalog::from_json_str("{not json"), Err(CatalogError::Json(_))));
}

#[test]
fn load_picks_parser_from_extension() {
    let dir = std::env::temp_dir();
    let yaml_path = dir.join(format!("storefront-catalog-{}.yaml", std::process::id()));
    let json_path = dir.join(format!("storefront-catalog-{}.json", std::process::id()));
    std::fs::write(&yaml_path, "- id: y\n  name: Yaml\n").unwrap();
    std::fs::write(&json_path, r#"[{"id":"j","name":"Json"}]"#).unwrap();

    assert!(Catalog::load(&yaml_path).unwrap().get("y").is_some());
    assert!(Catalog::load(&json_path).unwrap().get("j").is_some());

    let _ = std::fs::remove_file(yaml_path);
    let _ = std::fs::remove_file(json_path);
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("storefront-catalog-surely-missing-7731.yaml");
    assert!(matches!(Catalog::load(&path), Err(CatalogError::Io(_))));
}

// =============================================================
// Script embedding
// =============================================================

#[test]
fn to_script_json_escapes_closing_tags() {
    let mut hostile = category("x", false);
    hostile.description = "</script><script>alert(1)</script>".to_owned();
    let catalog = Catalog::new(vec![hostile]).unwrap();
    let json = catalog.to_script_json().unwrap();
    assert!(!json.contains('<'));
    let restored = Catalog::from_json_str(&json).unwrap();
    assert_eq!(restored, catalog);
}

#[test]
fn to_script_json_is_a_plain_array() {
    let json = Catalog::builtin().to_script_json().unwrap();
    assert!(json.starts_with('['));
    assert_eq!(Catalog::from_json_str(&json).unwrap(), Catalog::builtin());
}
