use crate::model::Alert;
use serde::{Deserialize, Serialize};

/// Selector for the alerts tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertFilter {
    #[default]
    All,
    Unresolved,
    Resolved,
}

impl AlertFilter {
    pub const ALL: [AlertFilter; 3] = [AlertFilter::All, AlertFilter::Unresolved, AlertFilter::Resolved];

    pub fn label(&self) -> &'static str {
        match self {
            AlertFilter::All => "전체",
            AlertFilter::Unresolved => "미해결",
            AlertFilter::Resolved => "해결됨",
        }
    }

    pub fn matches(&self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Unresolved => !alert.resolved,
            AlertFilter::Resolved => alert.resolved,
        }
    }

    /// Matching alerts in their original order.
    pub fn apply<'a>(&self, alerts: &'a [Alert]) -> Vec<&'a Alert> {
        alerts.iter().filter(|alert| self.matches(alert)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DataProvider, MockProvider};

    fn seeded() -> Vec<Alert> {
        MockProvider::new().alerts().unwrap()
    }

    fn ids(alerts: &[&Alert]) -> Vec<String> {
        alerts.iter().map(|alert| alert.id.clone()).collect()
    }

    #[test]
    fn resolved_filter_yields_the_single_resolved_record() {
        let alerts = seeded();
        assert_eq!(ids(&AlertFilter::Resolved.apply(&alerts)), vec!["2"]);
    }

    #[test]
    fn unresolved_filter_keeps_original_order() {
        let alerts = seeded();
        assert_eq!(ids(&AlertFilter::Unresolved.apply(&alerts)), vec!["1", "3", "4"]);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let alerts = seeded();
        for filter in AlertFilter::ALL {
            let once: Vec<Alert> = filter.apply(&alerts).into_iter().cloned().collect();
            let twice: Vec<Alert> = filter.apply(&once).into_iter().cloned().collect();
            assert_eq!(once, twice, "{filter:?}");
        }
    }

    #[test]
    fn unresolved_and_resolved_partition_all() {
        let mut alerts = seeded();
        alerts.extend(seeded().into_iter().map(|mut alert| {
            alert.id = format!("{}-copy", alert.id);
            alert.resolved = !alert.resolved;
            alert
        }));

        let all = ids(&AlertFilter::All.apply(&alerts));
        let unresolved = ids(&AlertFilter::Unresolved.apply(&alerts));
        let resolved = ids(&AlertFilter::Resolved.apply(&alerts));

        assert!(unresolved.iter().all(|id| !resolved.contains(id)));
        let mut union: Vec<String> = unresolved.iter().chain(resolved.iter()).cloned().collect();
        union.sort();
        let mut expected = all.clone();
        expected.sort();
        assert_eq!(union, expected);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        for filter in AlertFilter::ALL {
            assert!(filter.apply(&[]).is_empty());
        }
    }
}
