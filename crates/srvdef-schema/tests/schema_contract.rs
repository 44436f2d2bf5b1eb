//! Integration test: the structural contract of server definition files,
//! exercised through YAML text the way files arrive on disk.
//!
//! Each case parses a YAML document with [`parse_document`] and checks it
//! against [`ServerDefinitionSchema`]. Rejections must point at the first
//! failing element with a dotted path.

use srvdef_schema::{parse_document, DocumentError, ServerDefinitionSchema};

/// Validate YAML text; `Ok(())` if it conforms, else the dotted element path
/// (empty for the top-level element).
fn check(yaml: &str) -> Result<(), String> {
    let doc = parse_document(yaml).unwrap_or_else(|e| panic!("YAML should parse: {e}\n{yaml}"));
    let schema = ServerDefinitionSchema::new().expect("built-in schema compiles");
    schema.validate(&doc).map_err(|v| v.element.dotted())
}

#[test]
fn test_empty_file_fails_on_top_level() {
    assert_eq!(check(""), Err(String::new()));
}

#[test]
fn test_top_level_list_fails_on_top_level() {
    assert_eq!(check("- servers: {}\n- server_groups: {}\n"), Err(String::new()));
}

#[test]
fn test_missing_servers_fails_on_top_level() {
    assert_eq!(check("server_groups: {}\n"), Err(String::new()));
}

#[test]
fn test_unknown_top_level_property_fails() {
    assert_eq!(check("servers: {}\nextra: 1\n"), Err(String::new()));
}

#[test]
fn test_servers_must_be_mapping() {
    assert_eq!(check("servers:\n  - foo\n"), Err("servers".to_string()));
    assert_eq!(check("servers: bla\n"), Err("servers".to_string()));
}

#[test]
fn test_server_groups_must_be_mapping() {
    assert_eq!(check("servers: {}\nserver_groups: []\n"), Err("server_groups".to_string()));
    assert_eq!(check("servers: {}\nserver_groups: bla\n"), Err("server_groups".to_string()));
}

#[test]
fn test_server_requires_description_and_details() {
    assert_eq!(
        check("servers:\n  srv1:\n    details: {}\n"),
        Err("servers.srv1".to_string())
    );
    assert_eq!(
        check("servers:\n  srv1:\n    description: s1\n"),
        Err("servers.srv1".to_string())
    );
}

#[test]
fn test_server_field_types() {
    assert_eq!(
        check("servers:\n  srv1:\n    description: 42\n    details: {}\n"),
        Err("servers.srv1.description".to_string())
    );
    assert_eq!(
        check("servers:\n  srv1:\n    description: s1\n    contact_name: [a]\n    details: {}\n"),
        Err("servers.srv1.contact_name".to_string())
    );
    assert_eq!(
        check("servers:\n  srv1:\n    description: s1\n    access_via: {}\n    details: {}\n"),
        Err("servers.srv1.access_via".to_string())
    );
}

#[test]
fn test_group_as_list_is_rejected() {
    assert_eq!(
        check("servers: {}\nserver_groups:\n  grp1:\n    - srv1\n"),
        Err("server_groups.grp1".to_string())
    );
}

#[test]
fn test_group_as_string_is_rejected() {
    assert_eq!(
        check("servers: {}\nserver_groups:\n  grp1: srv1\n"),
        Err("server_groups.grp1".to_string())
    );
}

#[test]
fn test_group_members_must_be_strings() {
    let yaml = "servers: {}\n\
                server_groups:\n  grp1:\n    description: g1\n    members:\n      - srv1: {}\n";
    assert_eq!(check(yaml), Err("server_groups.grp1.members.0".to_string()));
}

#[test]
fn test_group_members_must_be_list() {
    let yaml = "servers: {}\nserver_groups:\n  grp1:\n    description: g1\n    members: srv1\n";
    assert_eq!(check(yaml), Err("server_groups.grp1.members".to_string()));
}

#[test]
fn test_default_must_be_string() {
    assert_eq!(check("servers: {}\ndefault: {a: 1}\n"), Err("default".to_string()));
}

#[test]
fn test_arbitrary_details_are_accepted() {
    let yaml = "servers:\n  srv1:\n    description: s1\n    details:\n      host: 10.11.12.13\n      \
                ports: [5988, 5989]\n      creds: {user: admin, vault: null}\n";
    assert_eq!(check(yaml), Ok(()));
}

#[test]
fn test_complete_file_is_valid() {
    let yaml = r#"
servers:
  srv1:
    description: "Server one"
    contact_name: "Jane Doe"
    access_via: "lab VPN"
    details:
      host: 10.0.0.1
  srv2:
    description: "Server two"
    details: {}
server_groups:
  grp1:
    description: "Group one"
    members: [srv1, srv2]
  grp2:
    description: "Nested group"
    members: [grp1]
  none:
    description: "Empty group"
    members: []
default: grp2
"#;
    assert_eq!(check(yaml), Ok(()));
}

#[test]
fn test_invalid_yaml_is_reported_before_validation() {
    let err = parse_document("servers:\n  - foo\n  bar:\n").unwrap_err();
    assert!(matches!(err, DocumentError::Syntax(_)));
}

#[test]
fn test_shallowest_violation_wins() {
    let yaml = "servers:\n  srv1: {description: s1}\nserver_groups: 5\n";
    assert_eq!(check(yaml), Err("server_groups".to_string()));

    let yaml = "servers: {}\nserver_groups: {g: {members: [1]}}\ndefault: 3\n";
    assert_eq!(check(yaml), Err("default".to_string()));
}
