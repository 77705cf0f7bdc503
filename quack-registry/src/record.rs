/// Stored data for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// The name exactly as it was submitted.
    pub display_name: String,
    /// Stored verbatim.
    pub password: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

impl UserRecord {
    pub fn new(display_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            password: password.into(),
            status: None,
            created_at: None,
        }
    }
}
