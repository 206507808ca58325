/// Identifies the operator on whose behalf audit columns are stamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    user_name: String,
}

impl UserContext {
    pub fn new(user_name: impl Into<String>) -> UserContext {
        UserContext {
            user_name: user_name.into(),
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

impl Default for UserContext {
    fn default() -> UserContext {
        UserContext::new("admin")
    }
}
