#[test]
fn cargo_toml_has_release_profile() {
    let cargo_toml = include_str!("../Cargo.toml");
    assert!(
        cargo_toml.contains("[profile.release]"),
        "Cargo.toml must have a [profile.release] section"
    );
    assert!(
        cargo_toml.contains("lto = true"),
        "Release profile must enable LTO"
    );
    assert!(
        cargo_toml.contains("strip = true"),
        "Release profile must strip symbols"
    );
    assert!(
        cargo_toml.contains("opt-level = \"z\""),
        "Release profile must optimize for size"
    );
}

#[test]
fn cargo_toml_names_the_binary() {
    let cargo_toml = include_str!("../Cargo.toml");
    assert!(cargo_toml.contains("name = \"initiator\""));
}
