//! Tests for the routing table
//!
//! The browser routes must agree with the shared page table, since the
//! access check runs on [`Page`] while the router matches on paths.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use shared::Page;
    use strum::IntoEnumIterator;
    use test_case::test_case;
    use yew_router::Routable;

    #[test]
    fn every_route_maps_to_a_page_with_the_same_path() {
        for route in MainRoute::iter() {
            let page = Page::from(route);
            assert_eq!(route.to_path(), page.path(), "{route:?}");
        }
    }

    #[test]
    fn page_conversion_round_trips() {
        for page in Page::iter() {
            assert_eq!(Page::from(MainRoute::from(page)), page);
        }
        assert_eq!(MainRoute::iter().count(), Page::iter().count());
    }

    #[test_case("/", MainRoute::Root)]
    #[test_case("/admin/submissions", MainRoute::AdminSubmissions)]
    #[test_case("/auth/success", MainRoute::AuthCallback)]
    #[test_case("/at-risk", MainRoute::AtRisk)]
    fn recognizes_paths(path: &str, expected: MainRoute) {
        assert_eq!(MainRoute::recognize(path), Some(expected));
    }

    #[test]
    fn not_found_is_registered() {
        assert_eq!(MainRoute::not_found_route(), Some(MainRoute::NotFound));
    }
}
