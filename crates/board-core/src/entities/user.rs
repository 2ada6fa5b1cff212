//! User entity - account that authors posts and reactions

/// User entity with its denormalized reaction counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Count of reactions authored by this user, kept in sync by the store
    pub total_reactions: i64,
}

impl User {
    /// Create a new User with a zeroed reaction counter
    pub fn new(id: i64, first_name: String, last_name: String, email: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            total_reactions: 0,
        }
    }

    /// Full display name: "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
