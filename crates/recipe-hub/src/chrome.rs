//! Header and footer

use chrono::{Datelike, Utc};
use recipe_model::UserProfile;
use serde::Serialize;

/// Header state: the search box and the signed-in badge
#[derive(Debug, Clone, Default)]
pub struct Header {
    /// Text typed into the search box, not yet submitted
    pub search_input: String,
}

impl Header {
    /// Query to forward on submit; the box keeps its text
    #[inline]
    #[must_use]
    pub fn submit_search(&self) -> String {
        self.search_input.clone()
    }
}

/// What the right-hand side of the header shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum AccountBadge {
    /// "Login" and "Sign Up" buttons
    Anonymous,
    SignedIn {
        name: String,
        avatar: String,
        initials: String,
    },
}

impl AccountBadge {
    #[must_use]
    pub fn for_user(logged_in: bool, user: &UserProfile) -> Self {
        if logged_in {
            Self::SignedIn {
                name: user.name.clone(),
                avatar: user.avatar.clone(),
                initials: user.initials(),
            }
        } else {
            Self::Anonymous
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub title: String,
    pub href: String,
}

impl FooterLink {
    fn new(title: &str, href: &str) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

const QUICK_LINK_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub company_name: String,
    pub links: Vec<FooterLink>,
    pub contact: ContactInfo,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            company_name: "Recipe World".into(),
            links: vec![
                FooterLink::new("About Us", "/about"),
                FooterLink::new("Privacy Policy", "/privacy"),
                FooterLink::new("Terms of Service", "/terms"),
                FooterLink::new("FAQ", "/faq"),
                FooterLink::new("Blog", "/blog"),
                FooterLink::new("Careers", "/careers"),
            ],
            contact: ContactInfo {
                email: "contact@recipeworld.com".into(),
                phone: "+1 (555) 123-4567".into(),
                address: "123 Culinary Street, Foodville, FC 12345".into(),
            },
        }
    }
}

impl Footer {
    /// First three links
    #[must_use]
    pub fn quick_links(&self) -> &[FooterLink] {
        &self.links[..self.links.len().min(QUICK_LINK_COUNT)]
    }

    /// Everything after the quick links
    #[must_use]
    pub fn resources(&self) -> &[FooterLink] {
        &self.links[self.links.len().min(QUICK_LINK_COUNT)..]
    }

    #[must_use]
    pub fn copyright_for(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.company_name)
    }

    #[must_use]
    pub fn copyright(&self) -> String {
        self.copyright_for(Utc::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn links_split_three_and_rest() {
        let footer = Footer::default();
        let titles = |links: &[FooterLink]| links.iter().map(|l| l.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(footer.quick_links()), vec!["About Us", "Privacy Policy", "Terms of Service"]);
        assert_eq!(titles(footer.resources()), vec!["FAQ", "Blog", "Careers"]);
    }

    #[test]
    fn short_link_lists() {
        let footer = Footer {
            links: vec![FooterLink::new("FAQ", "/faq")],
            ..Footer::default()
        };
        assert_eq!(footer.quick_links().len(), 1);
        assert!(footer.resources().is_empty());
    }

    #[test]
    fn copyright_line() {
        assert_eq!(
            Footer::default().copyright_for(2026),
            "© 2026 Recipe World. All rights reserved."
        );
    }

    #[test]
    fn badge_uses_initials() {
        let user = UserProfile::new("abeba tesfaye", "a.svg");
        assert_eq!(AccountBadge::for_user(false, &user), AccountBadge::Anonymous);
        match AccountBadge::for_user(true, &user) {
            AccountBadge::SignedIn { initials, .. } => assert_eq!(initials, "AT"),
            AccountBadge::Anonymous => panic!("expected signed-in badge"),
        }
    }
}
