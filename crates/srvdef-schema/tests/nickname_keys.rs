//! Property tests: server and group nicknames are the keys of their
//! mappings and must match `^[a-zA-Z0-9_]+$`.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use srvdef_schema::ServerDefinitionSchema;

const FOREIGN: [char; 8] = ['-', '.', ' ', '@', '/', '~', 'é', '$'];

fn with_server(key: &str) -> Value {
    let mut servers = Map::new();
    servers.insert(key.to_string(), json!({"description": "s", "details": {}}));
    json!({ "servers": servers })
}

fn with_group(key: &str) -> Value {
    let mut groups = Map::new();
    groups.insert(key.to_string(), json!({"description": "g", "members": []}));
    json!({ "servers": {}, "server_groups": groups })
}

fn foreign_key() -> impl Strategy<Value = String> {
    ("[a-zA-Z0-9_]{0,8}", prop::sample::select(FOREIGN.to_vec()), "[a-zA-Z0-9_]{0,8}")
        .prop_map(|(head, c, tail)| format!("{head}{c}{tail}"))
}

proptest! {
    #[test]
    fn valid_keys_are_accepted(key in "[a-zA-Z0-9_]{1,16}") {
        let schema = ServerDefinitionSchema::new().unwrap();
        prop_assert!(schema.validate(&with_server(&key)).is_ok());
        prop_assert!(schema.validate(&with_group(&key)).is_ok());
    }

    #[test]
    fn foreign_character_is_rejected_at_the_mapping(key in foreign_key()) {
        let schema = ServerDefinitionSchema::new().unwrap();
        let v = schema.validate(&with_server(&key)).unwrap_err();
        prop_assert_eq!(v.element.dotted(), "servers");
        let v = schema.validate(&with_group(&key)).unwrap_err();
        prop_assert_eq!(v.element.dotted(), "server_groups");
    }
}
