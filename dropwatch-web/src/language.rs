use std::collections::HashMap;

/// Language selected when the browser preference is unknown.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Translation bundles keyed by language code.
pub fn translations() -> HashMap<&'static str, &'static str> {
    HashMap::from([("en", include_str!("../translations/en.json"))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use shared::Audience;
    use shared::access::navigation;

    fn lookup<'a>(bundle: &'a Value, key: &str) -> Option<&'a Value> {
        key.split('.').try_fold(bundle, |node, part| node.get(part))
    }

    #[test]
    fn default_bundle_is_valid_json() {
        let bundles = translations();
        let raw = bundles.get(DEFAULT_LANGUAGE).unwrap();
        let bundle: Value = serde_json::from_str(raw).unwrap();
        assert!(lookup(&bundle, "app.title").is_some());
    }

    #[test]
    fn every_navigation_label_is_translated() {
        let bundle: Value = serde_json::from_str(translations()[DEFAULT_LANGUAGE]).unwrap();
        for audience in [Audience::Guest, Audience::User, Audience::Admin] {
            for link in navigation(audience) {
                assert!(
                    lookup(&bundle, link.label_key).is_some_and(Value::is_string),
                    "missing translation for {}",
                    link.label_key
                );
            }
        }
    }
}
