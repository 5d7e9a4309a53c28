//! The signed-in display user

use crate::recipe::Author;
use serde::{Deserialize, Serialize};

/// Avatar used when nobody has signed in with a different name
pub(crate) const DEFAULT_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=John";

/// Display user, fabricated entirely on the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
}

impl UserProfile {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    /// Up to two uppercase initials for the avatar fallback
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// This user as a recipe/comment author
    #[inline]
    #[must_use]
    pub fn as_author(&self) -> Author {
        Author::new(self.name.clone(), self.avatar.clone())
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new("John Doe", DEFAULT_AVATAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials() {
        assert_eq!(UserProfile::default().initials(), "JD");
        assert_eq!(UserProfile::new("maria", "").initials(), "M");
        assert_eq!(UserProfile::new("Ana Lucia de Souza", "").initials(), "AL");
        assert_eq!(UserProfile::new("", "").initials(), "");
    }
}
