use crate::models::Role;
use crate::session::Session;

use super::Page;

/// Who is asking, as far as routing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    /// No session.
    Guest,
    /// Authenticated with [`Role::User`].
    User,
    /// Authenticated with [`Role::Admin`].
    Admin,
}

impl Audience {
    /// Reduce a session to its audience.
    #[must_use]
    pub fn of(session: &Session) -> Self {
        match session.role() {
            None => Self::Guest,
            Some(Role::User) => Self::User,
            Some(Role::Admin) => Self::Admin,
        }
    }
}

/// Pages an audience may reach and where everything else is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRule {
    /// Audience the rule applies to.
    pub audience: Audience,
    /// Reachable pages.
    pub allowed: &'static [Page],
    /// Redirect target for every other request.
    pub default: Page,
}

const GUEST_RULE: AccessRule = AccessRule {
    audience: Audience::Guest,
    allowed: &[
        Page::Root,
        Page::Login,
        Page::Signup,
        Page::ForgotPassword,
        Page::ResetPassword,
        Page::AuthCallback,
    ],
    default: Page::Root,
};

const USER_RULE: AccessRule = AccessRule {
    audience: Audience::User,
    allowed: &[
        Page::Root,
        Page::Predict,
        Page::Analytics,
        Page::Services,
        Page::Dashboard,
        Page::AtRisk,
        Page::Counselor,
        Page::Contact,
    ],
    default: Page::Root,
};

const ADMIN_RULE: AccessRule = AccessRule {
    audience: Audience::Admin,
    allowed: &[Page::AdminDashboard, Page::AdminSubmissions],
    default: Page::AdminDashboard,
};

impl AccessRule {
    /// The rule for `audience`.
    #[must_use]
    pub const fn for_audience(audience: Audience) -> Self {
        match audience {
            Audience::Guest => GUEST_RULE,
            Audience::User => USER_RULE,
            Audience::Admin => ADMIN_RULE,
        }
    }

    /// Whether `page` is reachable under this rule.
    #[must_use]
    pub fn allows(&self, page: Page) -> bool {
        self.allowed.contains(&page)
    }
}

/// Page tree actually mounted once access is granted. Differs from
/// [`Page`] only at the root, which is the welcome screen for guests and
/// the home screen for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Landing screen for guests at `/`.
    Welcome,
    /// Sign-in form.
    Login,
    /// Account registration.
    Signup,
    /// Reset link request.
    ForgotPassword,
    /// New password form for a reset token.
    ResetPassword,
    /// Token exchange after an external sign-in.
    AuthCallback,
    /// Signed-in landing screen at `/`.
    Home,
    /// Single student prediction form.
    Predict,
    /// Report builder.
    Analytics,
    /// Service overview.
    Services,
    /// Monthly statistics.
    Dashboard,
    /// Students flagged at risk.
    AtRisk,
    /// Counselor chat and scheduling.
    Counselor,
    /// Support contact form.
    Contact,
    /// Admin overview and user management.
    AdminDashboard,
    /// Prediction submission log.
    AdminSubmissions,
}

impl View {
    fn resolve(audience: Audience, page: Page) -> Option<Self> {
        let view = match page {
            Page::Root => match audience {
                Audience::Guest => Self::Welcome,
                Audience::User => Self::Home,
                Audience::Admin => return None,
            },
            Page::Login => Self::Login,
            Page::Signup => Self::Signup,
            Page::ForgotPassword => Self::ForgotPassword,
            Page::ResetPassword => Self::ResetPassword,
            Page::AuthCallback => Self::AuthCallback,
            Page::Predict => Self::Predict,
            Page::Analytics => Self::Analytics,
            Page::Services => Self::Services,
            Page::Dashboard => Self::Dashboard,
            Page::AtRisk => Self::AtRisk,
            Page::Counselor => Self::Counselor,
            Page::Contact => Self::Contact,
            Page::AdminDashboard => Self::AdminDashboard,
            Page::AdminSubmissions => Self::AdminSubmissions,
            Page::NotFound => return None,
        };
        Some(view)
    }
}

/// Outcome of an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render this view.
    Granted(View),
    /// Replace the current location with this page.
    Redirect(Page),
}

impl Access {
    /// Redirect target, if the request was not granted.
    #[must_use]
    pub const fn redirect_target(self) -> Option<Page> {
        match self {
            Self::Redirect(page) => Some(page),
            Self::Granted(_) => None,
        }
    }

    /// Whether the request was granted.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted(_))
    }
}

/// Decide what a request for `page` shows under `session`.
#[must_use]
pub fn authorize(session: &Session, page: Page) -> Access {
    let audience = Audience::of(session);
    let rule = AccessRule::for_audience(audience);
    if rule.allows(page) {
        if let Some(view) = View::resolve(audience, page) {
            return Access::Granted(view);
        }
    }
    Access::Redirect(rule.default)
}

/// [`authorize`] for a raw browser path.
#[must_use]
pub fn authorize_path(session: &Session, path: &str) -> Access {
    authorize(session, Page::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserId, UserRecord};
    use crate::session::SessionStore;
    use crate::storage::MemoryStorage;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    const USER_PAGES: [Page; 7] = [
        Page::Predict,
        Page::Analytics,
        Page::Services,
        Page::Dashboard,
        Page::AtRisk,
        Page::Counselor,
        Page::Contact,
    ];
    const ADMIN_PAGES: [Page; 2] = [Page::AdminDashboard, Page::AdminSubmissions];
    const AUTH_PAGES: [Page; 5] = [
        Page::Login,
        Page::Signup,
        Page::ForgotPassword,
        Page::ResetPassword,
        Page::AuthCallback,
    ];

    fn session_for(role: Option<Role>) -> Session {
        role.map_or_else(Session::empty, |role| {
            let user = UserRecord::new(
                UserId::Text("id".into()),
                "Someone",
                "someone@example.com",
                role,
            );
            Session::authenticated(user, role)
        })
    }

    #[test]
    fn audience_of_session() {
        assert_eq!(Audience::of(&session_for(None)), Audience::Guest);
        assert_eq!(Audience::of(&session_for(Some(Role::User))), Audience::User);
        assert_eq!(Audience::of(&session_for(Some(Role::Admin))), Audience::Admin);
    }

    #[test]
    fn guest_only_reaches_public_pages() {
        let guest = session_for(None);
        for page in Page::iter() {
            let access = authorize(&guest, page);
            if page.is_public() {
                assert!(access.is_granted(), "{page:?}");
            } else {
                assert_eq!(access, Access::Redirect(Page::Root), "{page:?}");
            }
        }
    }

    #[test]
    fn admin_is_sent_to_admin_dashboard() {
        let admin = session_for(Some(Role::Admin));
        for page in USER_PAGES.iter().chain(&AUTH_PAGES).chain(&[Page::Root, Page::NotFound]) {
            assert_eq!(
                authorize(&admin, *page),
                Access::Redirect(Page::AdminDashboard),
                "{page:?}"
            );
        }
        assert_eq!(
            authorize(&admin, Page::AdminDashboard),
            Access::Granted(View::AdminDashboard)
        );
        assert_eq!(
            authorize(&admin, Page::AdminSubmissions),
            Access::Granted(View::AdminSubmissions)
        );
    }

    #[test]
    fn user_is_sent_to_root() {
        let user = session_for(Some(Role::User));
        for page in ADMIN_PAGES.iter().chain(&AUTH_PAGES).chain(&[Page::NotFound]) {
            assert_eq!(authorize(&user, *page), Access::Redirect(Page::Root), "{page:?}");
        }
        for page in USER_PAGES {
            assert!(authorize(&user, page).is_granted(), "{page:?}");
        }
    }

    #[test]
    fn root_resolves_per_audience() {
        assert_eq!(
            authorize(&session_for(None), Page::Root),
            Access::Granted(View::Welcome)
        );
        assert_eq!(
            authorize(&session_for(Some(Role::User)), Page::Root),
            Access::Granted(View::Home)
        );
        assert_eq!(
            authorize(&session_for(Some(Role::Admin)), Page::Root),
            Access::Redirect(Page::AdminDashboard)
        );
    }

    #[test]
    fn no_page_is_shared_between_roles() {
        let user = AccessRule::for_audience(Audience::User);
        let admin = AccessRule::for_audience(Audience::Admin);
        let guest = AccessRule::for_audience(Audience::Guest);
        for page in Page::iter().filter(|page| *page != Page::Root) {
            let reachable = [user, admin, guest]
                .iter()
                .filter(|rule| rule.allows(page))
                .count();
            assert!(reachable <= 1, "{page:?} reachable by {reachable} audiences");
        }
    }

    #[test]
    fn defaults_never_redirect_again() {
        for role in [None, Some(Role::User), Some(Role::Admin)] {
            let session = session_for(role);
            let rule = AccessRule::for_audience(Audience::of(&session));
            assert_eq!(rule.audience, Audience::of(&session));
            assert!(authorize(&session, rule.default).is_granted(), "{role:?}");
        }
    }

    #[test_case(None, "/dashboard" => Access::Redirect(Page::Root) ; "guest deep link")]
    #[test_case(Some(Role::Admin), "/login" => Access::Redirect(Page::AdminDashboard) ; "admin to login")]
    #[test_case(Some(Role::User), "/admin-dashboard" => Access::Redirect(Page::Root) ; "user to admin")]
    #[test_case(Some(Role::User), "/at-risk/" => Access::Granted(View::AtRisk) ; "user trailing slash")]
    #[test_case(None, "/reset-password?token=t" => Access::Granted(View::ResetPassword) ; "guest reset link")]
    #[test_case(Some(Role::Admin), "/nowhere" => Access::Redirect(Page::AdminDashboard) ; "admin unknown")]
    fn path_scenarios(role: Option<Role>, path: &str) -> Access {
        authorize_path(&session_for(role), path)
    }

    #[test]
    fn redirect_target_accessor() {
        assert_eq!(Access::Redirect(Page::Root).redirect_target(), Some(Page::Root));
        assert_eq!(Access::Granted(View::Home).redirect_target(), None);
    }

    #[test]
    fn rehydrated_session_decides_the_same() {
        let storage = MemoryStorage::new();
        for role in [Role::User, Role::Admin] {
            let mut store = SessionStore::rehydrate(storage.clone());
            store.login(
                UserRecord::new(UserId::Number(1), "R", "r@example.com", role),
                role,
            );
            let restored = SessionStore::rehydrate(storage.clone());
            for page in Page::iter() {
                assert_eq!(
                    authorize(restored.session(), page),
                    authorize(store.session(), page),
                    "{role:?} {page:?}"
                );
            }
        }
    }
}
