use std::time::Duration;

/// Business routes targeted by every traffic class.
pub const ROUTES: [&str; 3] = ["/users", "/comments", "/posts"];

/// A group of synthetic targets sharing an expected outcome and a fixed
/// pacing delay. Static configuration, never mutated at runtime.
#[derive(Debug, Clone)]
pub struct TrafficClass {
    pub name: &'static str,
    pub trigger: Option<&'static str>,
    pub delay: Duration,
}

impl TrafficClass {
    /// Full target URLs for this class against the given base URL.
    pub fn urls(&self, base_url: &str) -> Vec<String> {
        ROUTES
            .iter()
            .map(|route| match self.trigger {
                Some(trigger) => format!("{base_url}{route}?test={trigger}"),
                None => format!("{base_url}{route}"),
            })
            .collect()
    }
}

/// The four reference traffic classes: expected-success plus the three
/// trigger-forced error outcomes, each with its own pacing.
pub fn default_classes() -> Vec<TrafficClass> {
    vec![
        TrafficClass {
            name: "ok",
            trigger: None,
            delay: Duration::from_secs(1),
        },
        TrafficClass {
            name: "not_found",
            trigger: Some("trigger-not-found"),
            delay: Duration::from_secs(2),
        },
        TrafficClass {
            name: "forbidden",
            trigger: Some("trigger-forbidden"),
            delay: Duration::from_secs(3),
        },
        TrafficClass {
            name: "server_error",
            trigger: Some("trigger-server-error"),
            delay: Duration::from_secs(4),
        },
    ]
}
