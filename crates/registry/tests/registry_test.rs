#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the path registry.

use signpost_registry::{PathArg, PathDefinition, PathEntry, PathRegistry, SharedPathRegistry};

/// The canonical usage scenario: register during startup, then build
/// navigation from filtered views.
#[test]
fn test_navigation_scenario() {
    let mut registry = PathRegistry::new();

    registry.register(PathEntry::new("home", |_| "/".to_string(), "Home").in_navs(["main"]));
    registry.register(
        PathEntry::new(
            "profile",
            |args: &[PathArg]| {
                let id = args.first().map(ToString::to_string).unwrap_or_default();
                format!("/user/{id}")
            },
            "Profile",
        )
        .in_navs(["main"])
        .grouped("user"),
    );

    // Main nav lists both links, in registration order.
    let main: Vec<String> = registry
        .nav_links("main")
        .into_iter()
        .map(|l| l.label)
        .collect();
    assert_eq!(main, vec!["Home", "Profile"]);

    // The "user" group holds only the profile link.
    let user = registry.group_links("user");
    assert_eq!(user.len(), 1);
    assert_eq!(user[0].label, "Profile");

    // Keyed lookups render through the stored callables.
    assert_eq!(registry.get("home").unwrap().path(&[]), "/");
    assert_eq!(
        registry.get("profile").unwrap().path(&["42".into()]),
        "/user/42"
    );

    // A miss is a normal outcome.
    assert!(registry.get("missing").is_none());
    assert!(registry.nav_links("nonexistent-nav").is_empty());
    assert!(registry.group_links("nonexistent-group").is_empty());
}

#[test]
fn test_snapshot_is_independent_of_the_registry() {
    let mut registry = PathRegistry::new();
    registry.register(PathEntry::new("home", |_| "/".to_string(), "Home").in_navs(["main"]));

    let mut snapshot = registry.snapshot();

    // Mutating the snapshot does not reach back into the registry.
    if let Some(entry) = snapshot.get_mut("home") {
        entry.label = "Mutated".to_string();
        entry.navs.clear();
    }
    assert_eq!(registry.get("home").unwrap().label, "Home");
    assert_eq!(registry.nav_links("main").len(), 1);

    // Registrations after the snapshot was taken do not appear in it.
    registry.register(PathEntry::new("late", |_| "/late".to_string(), "Late"));
    assert_eq!(snapshot.len(), 1);
    assert!(!snapshot.contains_key("late"));
}

#[test]
fn test_registry_from_definition_sources() {
    let site = r#"[
        {"key": "home", "path": "/", "label": "Home", "navs": ["main"]},
        {"key": "legal", "path": "/legal", "label": "Legal", "navs": ["footer"]}
    ]"#;
    let user = r#"[
        {"key": "profile", "path": "/user/:id", "label": "Profile", "navs": ["main"], "group": "user"}
    ]"#;

    let registry = PathRegistry::from_definition_sources(vec![
        ("site".to_string(), site.to_string()),
        ("user".to_string(), user.to_string()),
    ]);

    assert_eq!(registry.len(), 3);

    let main: Vec<String> = registry
        .nav_links("main")
        .into_iter()
        .map(|l| l.label)
        .collect();
    assert_eq!(main, vec!["Home", "Profile"]);

    assert_eq!(
        registry.get("profile").unwrap().path(&["42".into()]),
        "/user/42"
    );
}

#[test]
fn test_definitions_round_trip_through_serde() {
    let def = PathDefinition {
        key: "profile".to_string(),
        path: "/user/:id".to_string(),
        label: "Profile".to_string(),
        navs: vec!["main".to_string()],
        group: Some("user".to_string()),
    };

    let json = serde_json::to_string(&vec![def]).unwrap();
    let parsed = signpost_registry::parse_definitions(&json).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].path, "/user/:id");
}

#[test]
fn test_shared_registry_across_threads() {
    let shared = SharedPathRegistry::new();

    // Startup phase: several loaders register concurrently.
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                let key = format!("section-{i}");
                let path = format!("/section/{i}");
                shared.register(
                    PathEntry::new(key, move |_| path.clone(), format!("Section {i}"))
                        .in_navs(["main"]),
                );
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Read phase: every registration is visible through any clone.
    assert_eq!(shared.len(), 4);
    assert_eq!(shared.nav_links("main").len(), 4);
    assert_eq!(shared.get("section-2").unwrap().path(&[]), "/section/2");
}
