use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// How long approved rows are left on screen to play their exit animation.
pub const DEFAULT_APPROVE_DELAY: Duration = Duration::from_millis(1000);

/// Settings for the recommendations page, provided as context by `App`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Scheme and host of the recommendations API, without a trailing path
    pub api_base: String,
    /// Employee to load when the route does not name one
    pub default_employee_id: Option<String>,
    pub approve_delay: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("RECOMMENDATIONS_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            default_employee_id: option_env!("RECOMMENDATIONS_EMPLOYEE_ID")
                .filter(|id| !id.trim().is_empty())
                .map(|id| id.trim().to_string()),
            approve_delay: DEFAULT_APPROVE_DELAY,
        }
    }
}

impl ViewConfig {
    /// URL of the recommendations resource.
    ///
    /// With no employee (neither routed nor configured) this is the
    /// endpoint's built-in subject: `{base}/api/recommendations`. The
    /// employee id is percent-encoded into a single path segment.
    pub fn endpoint(&self, employee_id: Option<&str>) -> String {
        let base = self.api_base.trim_end_matches('/');
        let employee = employee_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or(self.default_employee_id.as_deref());

        match employee {
            Some(id) => format!(
                "{}/api/recommendations/{}",
                base,
                urlencoding::encode(id)
            ),
            None => format!("{}/api/recommendations", base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str, default_employee: Option<&str>) -> ViewConfig {
        ViewConfig {
            api_base: base.to_string(),
            default_employee_id: default_employee.map(str::to_string),
            approve_delay: DEFAULT_APPROVE_DELAY,
        }
    }

    #[test]
    fn test_endpoint_without_employee() {
        let cfg = config("http://localhost:8000/", None);
        assert_eq!(cfg.endpoint(None), "http://localhost:8000/api/recommendations");
        assert_eq!(cfg.endpoint(Some("  ")), "http://localhost:8000/api/recommendations");
    }

    #[test]
    fn test_routed_employee_beats_default() {
        let cfg = config("https://hr.example.com", Some("11707953"));
        assert_eq!(
            cfg.endpoint(Some("42")),
            "https://hr.example.com/api/recommendations/42"
        );
        assert_eq!(
            cfg.endpoint(None),
            "https://hr.example.com/api/recommendations/11707953"
        );
    }

    #[test]
    fn test_employee_id_stays_one_path_segment() {
        let cfg = config("http://localhost:8000", None);
        assert_eq!(
            cfg.endpoint(Some("../admin?x=1#top")),
            "http://localhost:8000/api/recommendations/..%2Fadmin%3Fx%3D1%23top"
        );
        assert_eq!(
            cfg.endpoint(Some("Dana Reyes")),
            "http://localhost:8000/api/recommendations/Dana%20Reyes"
        );
    }

    #[test]
    fn test_default_delay_is_one_second() {
        assert_eq!(ViewConfig::default().approve_delay, Duration::from_secs(1));
    }
}
