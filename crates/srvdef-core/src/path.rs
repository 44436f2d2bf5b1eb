//! # Element Paths
//!
//! Locates an element inside a server definition file. Segments are object
//! keys or zero-based array indexes, joined with `.` for display
//! (e.g. `server_groups.grp1.members.0`).

/// Path to an element of a server definition file.
///
/// The empty path denotes the top-level element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ElementPath(Vec<String>);

impl ElementPath {
    /// The top-level element.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from its segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Convert an RFC 6901 JSON Pointer (`/servers/srv1/details`) into a path.
    ///
    /// `~1` and `~0` escapes are decoded. The empty pointer is the root.
    pub fn from_json_pointer(pointer: &str) -> Self {
        if pointer.is_empty() {
            return Self::root();
        }
        Self(
            pointer
                .split('/')
                .skip(1)
                .map(|seg| seg.replace("~1", "/").replace("~0", "~"))
                .collect(),
        )
    }

    /// True for the top-level element.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The individual segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Segments joined with `.`; empty for the root.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl std::fmt::Display for ElementPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            f.write_str("top-level element")
        } else {
            write!(f, "element '{}'", self.dotted())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_display() {
        assert_eq!(ElementPath::root().to_string(), "top-level element");
        assert!(ElementPath::from_json_pointer("").is_root());
    }

    #[test]
    fn pointer_to_dotted() {
        let p = ElementPath::from_json_pointer("/server_groups/grp1/members/0");
        assert_eq!(p.dotted(), "server_groups.grp1.members.0");
        assert_eq!(p.to_string(), "element 'server_groups.grp1.members.0'");
        assert_eq!(p.segments().len(), 4);
    }

    #[test]
    fn pointer_escapes_are_decoded() {
        let p = ElementPath::from_json_pointer("/servers/a~1b/c~0d");
        assert_eq!(p.segments(), ["servers", "a/b", "c~d"]);
    }

    #[test]
    fn escaped_tilde_one_is_not_double_decoded() {
        // "~01" is the escape for the literal "~1".
        let p = ElementPath::from_json_pointer("/x~01");
        assert_eq!(p.segments(), ["x~1"]);
    }
}
