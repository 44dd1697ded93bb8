use strum::{EnumIter, IntoEnumIterator};

/// Every path the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Page {
    /// `/`, rendered differently per audience.
    Root,
    /// `/login`
    Login,
    /// `/signup`
    Signup,
    /// `/forgot-password`
    ForgotPassword,
    /// `/reset-password`
    ResetPassword,
    /// `/auth/success`, landing page of the external token exchange.
    AuthCallback,
    /// `/predict`
    Predict,
    /// `/analytics`
    Analytics,
    /// `/services`
    Services,
    /// `/dashboard`
    Dashboard,
    /// `/at-risk`
    AtRisk,
    /// `/counselor`
    Counselor,
    /// `/contact`
    Contact,
    /// `/admin-dashboard`
    AdminDashboard,
    /// `/admin/submissions`
    AdminSubmissions,
    /// Any path not listed above.
    NotFound,
}

impl Page {
    /// Canonical path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
            Self::AuthCallback => "/auth/success",
            Self::Predict => "/predict",
            Self::Analytics => "/analytics",
            Self::Services => "/services",
            Self::Dashboard => "/dashboard",
            Self::AtRisk => "/at-risk",
            Self::Counselor => "/counselor",
            Self::Contact => "/contact",
            Self::AdminDashboard => "/admin-dashboard",
            Self::AdminSubmissions => "/admin/submissions",
            Self::NotFound => "/404",
        }
    }

    /// Resolve a browser path. Query strings, fragments and trailing
    /// slashes are ignored; anything unrecognised is [`Page::NotFound`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };

        Self::iter()
            .filter(|page| *page != Self::NotFound)
            .find(|page| page.path() == path)
            .unwrap_or(Self::NotFound)
    }

    /// Pages reachable without a session.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(
            self,
            Self::Root
                | Self::Login
                | Self::Signup
                | Self::ForgotPassword
                | Self::ResetPassword
                | Self::AuthCallback
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = Page::iter().map(Page::path).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn every_page_parses_from_its_path() {
        for page in Page::iter().filter(|page| *page != Page::NotFound) {
            assert_eq!(Page::from_path(page.path()), page, "{page:?}");
        }
    }

    #[test_case("" => Page::Root ; "empty")]
    #[test_case("/" => Page::Root ; "root")]
    #[test_case("/dashboard/" => Page::Dashboard ; "trailing slash")]
    #[test_case("/reset-password?token=abc" => Page::ResetPassword ; "query")]
    #[test_case("/auth/success#token=abc" => Page::AuthCallback ; "fragment")]
    #[test_case("/admin" => Page::NotFound ; "prefix of admin path")]
    #[test_case("/Dashboard" => Page::NotFound ; "case sensitive")]
    #[test_case("/404" => Page::NotFound ; "not found path")]
    fn from_path_normalizes(path: &str) -> Page {
        Page::from_path(path)
    }

    #[test]
    fn public_pages() {
        let public: Vec<_> = Page::iter().filter(|page| page.is_public()).collect();
        assert_eq!(
            public,
            vec![
                Page::Root,
                Page::Login,
                Page::Signup,
                Page::ForgotPassword,
                Page::ResetPassword,
                Page::AuthCallback
            ]
        );
    }
}
