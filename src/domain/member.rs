/// Membership tier. Determines discount eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Basic,
    Vip,
}

/// Represents a registered member in the system.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub grade: Grade,
}

impl Member {
    /// Creates a new Member instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier chosen by the caller
    /// * `name` - Member's display name
    /// * `grade` - Membership tier
    pub fn new(id: u64, name: impl Into<String>, grade: Grade) -> Self {
        Self {
            id,
            name: name.into(),
            grade,
        }
    }
}
