/// Resolved state for one scope. The two kinds are mutually exclusive per
/// page load: a real-user variant never renders on a crawler request path and
/// a crawler variant never renders for a real user, so the randomized
/// experience stays out of crawler indexes.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    RealUser {
        versions: Vec<String>,
        assigned: String,
    },
    Crawler {
        designated: Option<String>,
    },
}

impl Variant {
    pub fn should_render(&self, query_versions: &[&str], for_crawler_path: bool) -> bool {
        match self {
            Variant::RealUser { assigned, .. } => {
                !for_crawler_path && query_versions.contains(&assigned.as_str())
            }
            Variant::Crawler { designated } => {
                for_crawler_path
                    && designated
                        .as_deref()
                        .is_some_and(|d| query_versions.contains(&d))
            }
        }
    }

    /// The version this scope resolved to, if any. A crawler variant with no
    /// designated version has none.
    pub fn resolved_version(&self) -> Option<&str> {
        match self {
            Variant::RealUser { assigned, .. } => Some(assigned),
            Variant::Crawler { designated } => designated.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real_user(assigned: &str) -> Variant {
        Variant::RealUser {
            versions: vec!["a".to_string(), "b".to_string()],
            assigned: assigned.to_string(),
        }
    }

    #[test]
    fn real_user_renders_assigned_version() {
        assert!(real_user("a").should_render(&["a"], false));
        assert!(real_user("a").should_render(&["a", "b"], false));
    }

    #[test]
    fn real_user_does_not_render_other_versions() {
        assert!(!real_user("a").should_render(&["b"], false));
        assert!(!real_user("a").should_render(&[], false));
    }

    #[test]
    fn real_user_never_renders_on_crawler_path() {
        assert!(!real_user("a").should_render(&["a"], true));
    }

    #[test]
    fn crawler_renders_designated_version_on_crawler_path() {
        let v = Variant::Crawler {
            designated: Some("b".to_string()),
        };
        assert!(v.should_render(&["b"], true));
        assert!(!v.should_render(&["a"], true));
    }

    #[test]
    fn crawler_never_renders_on_real_user_path() {
        let v = Variant::Crawler {
            designated: Some("b".to_string()),
        };
        assert!(!v.should_render(&["b"], false));
    }

    #[test]
    fn crawler_without_designated_version_never_renders() {
        let v = Variant::Crawler { designated: None };
        assert!(!v.should_render(&["a", "b"], true));
        assert!(!v.should_render(&["a", "b"], false));
        assert_eq!(v.resolved_version(), None);
    }

    #[test]
    fn resolved_version_reports_assignment() {
        assert_eq!(real_user("b").resolved_version(), Some("b"));
    }
}
