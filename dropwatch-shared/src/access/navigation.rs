use super::{AccessRule, Audience, Page};

/// Sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Target page.
    pub page: Page,
    /// Translation key of the label.
    pub label_key: &'static str,
}

const fn link(page: Page, label_key: &'static str) -> NavLink {
    NavLink { page, label_key }
}

const GUEST_LINKS: &[NavLink] = &[
    link(Page::Root, "nav.welcome"),
    link(Page::Login, "nav.login"),
    link(Page::Signup, "nav.signup"),
];

const USER_LINKS: &[NavLink] = &[
    link(Page::Root, "nav.home"),
    link(Page::Dashboard, "nav.dashboard"),
    link(Page::Analytics, "nav.analytics"),
    link(Page::Services, "nav.services"),
    link(Page::Predict, "nav.predict"),
    link(Page::AtRisk, "nav.at_risk"),
    link(Page::Counselor, "nav.counselor"),
    link(Page::Contact, "nav.contact"),
];

const ADMIN_LINKS: &[NavLink] = &[
    link(Page::AdminDashboard, "nav.admin_dashboard"),
    link(Page::AdminSubmissions, "nav.admin_submissions"),
];

/// Sidebar links shown to `audience`, in display order.
#[must_use]
pub fn navigation(audience: Audience) -> Vec<NavLink> {
    let links = match audience {
        Audience::Guest => GUEST_LINKS,
        Audience::User => USER_LINKS,
        Audience::Admin => ADMIN_LINKS,
    };
    let rule = AccessRule::for_audience(audience);
    links
        .iter()
        .copied()
        .filter(|link| rule.allows(link.page))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_stay_inside_the_access_table() {
        for audience in [Audience::Guest, Audience::User, Audience::Admin] {
            let links = navigation(audience);
            assert!(!links.is_empty());
            let rule = AccessRule::for_audience(audience);
            assert!(links.iter().all(|link| rule.allows(link.page)));
        }
    }

    #[test]
    fn user_links_cover_every_user_page() {
        let pages: Vec<_> = navigation(Audience::User)
            .into_iter()
            .map(|link| link.page)
            .collect();
        for page in AccessRule::for_audience(Audience::User).allowed {
            assert!(pages.contains(page), "{page:?} missing from sidebar");
        }
        assert_eq!(pages.first(), Some(&Page::Root));
    }

    #[test]
    fn admin_links() {
        let keys: Vec<_> = navigation(Audience::Admin)
            .into_iter()
            .map(|link| link.label_key)
            .collect();
        assert_eq!(keys, vec!["nav.admin_dashboard", "nav.admin_submissions"]);
    }
}
