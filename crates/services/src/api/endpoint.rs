use std::fmt;

/// Closed set of backend services the gateway can address.
///
/// Each variant maps to the path segment appended to the configured base URL.
/// Keeping the set closed means a typo is a compile error instead of a
/// malformed URL on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Test definition: categories and their questions.
    TestData,
    Login,
    /// Per-user form definition; takes an appended user id.
    UserForm,
    /// Form-result submission.
    FormResults,
    /// Results catalog for a completed test.
    UserTest,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::TestData => "getTestData",
            Endpoint::Login => "login",
            Endpoint::UserForm => "user/getUserForm",
            Endpoint::FormResults => "setFormResults",
            Endpoint::UserTest => "getUserTest",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_endpoint_has_a_stable_path() {
        assert_eq!(Endpoint::TestData.path(), "getTestData");
        assert_eq!(Endpoint::Login.path(), "login");
        assert_eq!(Endpoint::UserForm.path(), "user/getUserForm");
        assert_eq!(Endpoint::FormResults.path(), "setFormResults");
        assert_eq!(Endpoint::UserTest.path(), "getUserTest");
    }

    #[test]
    fn display_matches_path() {
        assert_eq!(Endpoint::UserTest.to_string(), "getUserTest");
    }
}
