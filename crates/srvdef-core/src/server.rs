//! # Server Definitions
//!
//! A [`ServerDefinition`] describes one server that end-to-end tests run
//! against. It is built fresh on every lookup from the entry stored in a
//! loaded server definition file and is never mutated afterwards. Two
//! definitions built from the same entry compare equal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::nickname::Nickname;

/// Prefix of the label that identifies one test execution per server.
pub const FIXTURE_ID_PREFIX: &str = "server_definition";

/// Definition of a single server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDefinition {
    nickname: Nickname,
    description: String,
    #[serde(default)]
    contact_name: Option<String>,
    #[serde(default)]
    access_via: Option<String>,
    details: Value,
}

impl ServerDefinition {
    /// Create a server definition.
    pub fn new(
        nickname: Nickname,
        description: impl Into<String>,
        contact_name: Option<String>,
        access_via: Option<String>,
        details: Value,
    ) -> Self {
        Self {
            nickname,
            description: description.into(),
            contact_name,
            access_via,
            details,
        }
    }

    /// Nickname of the server.
    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    /// Short description of the server.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Name of the technical contact for the server.
    pub fn contact_name(&self) -> Option<&str> {
        self.contact_name.as_deref()
    }

    /// Short reminder on the network/firewall/proxy/VPN used to reach the server.
    pub fn access_via(&self) -> Option<&str> {
        self.access_via.as_deref()
    }

    /// User-defined details of the server, such as its address.
    ///
    /// The structure is arbitrary and not interpreted here.
    pub fn details(&self) -> &Value {
        &self.details
    }

    /// Label of the test execution that runs against this server,
    /// e.g. `server_definition=srv1`.
    pub fn fixture_id(&self) -> String {
        format!("{FIXTURE_ID_PREFIX}={}", self.nickname)
    }
}

impl std::fmt::Display for ServerDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.nickname, self.description)?;
        match (&self.contact_name, &self.access_via) {
            (Some(c), Some(a)) => write!(f, " [contact: {c}, via: {a}]")?,
            (Some(c), None) => write!(f, " [contact: {c}]")?,
            (None, Some(a)) => write!(f, " [via: {a}]")?,
            (None, None) => {}
        }
        write!(f, " details: {}", self.details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn srv1() -> ServerDefinition {
        ServerDefinition::new(
            Nickname::new("srv1").unwrap(),
            "s1",
            None,
            None,
            json!({"x": 1}),
        )
    }

    #[test]
    fn accessors_return_fields() {
        let sd = ServerDefinition::new(
            Nickname::new("myserver").unwrap(),
            "my description",
            Some("Jane".to_string()),
            Some("corporate VPN".to_string()),
            json!({"host": "10.11.12.13", "ports": [5988, 5989]}),
        );
        assert_eq!(sd.nickname().as_str(), "myserver");
        assert_eq!(sd.description(), "my description");
        assert_eq!(sd.contact_name(), Some("Jane"));
        assert_eq!(sd.access_via(), Some("corporate VPN"));
        assert_eq!(sd.details()["ports"][1], 5989);
    }

    #[test]
    fn optional_fields_default_to_none() {
        let sd = srv1();
        assert_eq!(sd.contact_name(), None);
        assert_eq!(sd.access_via(), None);
    }

    #[test]
    fn fixture_id_uses_nickname() {
        assert_eq!(srv1().fixture_id(), "server_definition=srv1");
    }

    #[test]
    fn display_lists_every_attribute() {
        assert_eq!(srv1().to_string(), r#"srv1 (s1) details: {"x":1}"#);
        let sd = ServerDefinition::new(
            Nickname::new("srv2").unwrap(),
            "s2",
            Some("Joe".to_string()),
            None,
            json!({}),
        );
        assert_eq!(sd.to_string(), "srv2 (s2) [contact: Joe] details: {}");

        let sd = ServerDefinition::new(
            Nickname::new("srv3").unwrap(),
            "s3",
            Some("Ann".to_string()),
            Some("lab VPN".to_string()),
            json!({"host": "10.0.0.3"}),
        );
        assert_eq!(
            sd.to_string(),
            r#"srv3 (s3) [contact: Ann, via: lab VPN] details: {"host":"10.0.0.3"}"#
        );
    }

    #[test]
    fn equal_when_built_from_same_entry() {
        assert_eq!(srv1(), srv1());
    }

    #[test]
    fn deserializes_from_yaml_with_missing_optionals() {
        let sd: ServerDefinition = serde_yaml::from_str(
            "nickname: srv1\ndescription: s1\ndetails:\n  x: 1\n",
        )
        .unwrap();
        assert_eq!(sd, srv1());
    }
}
