//! Unit tests for the crate's feature wiring.

const MANIFEST: &str = include_str!("../../Cargo.toml");

fn manifest() -> toml::Table {
    MANIFEST.parse().expect("Failed to parse Cargo.toml")
}

/// Test that no library feature selects a critical-section implementation.
#[test]
fn test_features_leave_critical_section_impl_to_the_binary() {
    let manifest = manifest();
    let features = manifest["features"].as_table().expect("features table");

    for (name, enables) in features {
        let enables = enables.as_array().expect("feature list");
        for entry in enables {
            let entry = entry.as_str().expect("feature entry");
            assert_ne!(
                entry, "critical-section/std",
                "feature `{}` selects a critical-section implementation",
                name
            );
        }
    }

    let dependency = &manifest["dependencies"]["critical-section"];
    assert!(dependency.is_str(), "library dependency must not enable features");
}

/// Test that tests and the demo still get a host implementation.
#[test]
fn test_dev_dependency_provides_host_critical_section() {
    let manifest = manifest();
    let features = manifest["dev-dependencies"]["critical-section"]["features"]
        .as_array()
        .expect("dev-dependency features");

    assert!(features.iter().any(|f| f.as_str() == Some("std")));
}
