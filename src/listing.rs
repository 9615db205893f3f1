use crate::api::Api;
use crate::models::School;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Schools,
    ComingSoon,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Schools => "Schools",
            Tab::ComingSoon => "Student Says Times",
        }
    }
}

/// Fetched once on mount. Failures leave the list empty.
pub async fn load_schools(api: &dyn Api) -> Vec<School> {
    match api.schools_with_reviews().await {
        Ok(list) => list,
        Err(e) => {
            log::error!("Error fetching schools: {e}");
            Vec::new()
        }
    }
}

/// Case-insensitive substring match on the school name.
pub fn filter_schools<'a>(schools: &'a [School], term: &str) -> Vec<&'a School> {
    let needle = term.to_lowercase();
    schools
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn school_route(id: &str) -> String {
    format!("/school/{id}")
}

pub fn count_label(n: usize) -> String {
    if n == 1 {
        "1 School".to_string()
    } else {
        format!("{n} Schools")
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::error::ClientError;
    use crate::testing::{Call, FakeApi};

    fn school(id: &str, name: &str) -> School {
        School {
            id: id.into(),
            name: name.into(),
            city: "Delhi".into(),
            state: "DL".into(),
            review_count: 3,
        }
    }

    fn sample() -> Vec<School> {
        vec![
            school("1", "Delhi Public School"),
            school("2", "Kendriya Vidyalaya"),
            school("3", "St. Xavier's"),
        ]
    }

    #[test]
    fn filter_ignores_case() {
        let all = sample();
        let hits = filter_schools(&all, "PUBLIC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let hits = filter_schools(&all, "vi");
        let ids: Vec<&str> = hits.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn no_match_then_cleared_term_restores_everything() {
        let all = sample();
        assert!(filter_schools(&all, "zzz").is_empty());
        assert_eq!(filter_schools(&all, "").len(), all.len());
    }

    #[test]
    fn route_and_labels() {
        assert_eq!(school_route("65f0a1"), "/school/65f0a1");
        assert_eq!(count_label(1), "1 School");
        assert_eq!(count_label(0), "0 Schools");
        assert_eq!(count_label(12), "12 Schools");
    }

    #[test]
    fn load_failure_yields_empty_list() {
        let api = FakeApi {
            schools: Err(ClientError::Network("offline".into())),
            ..FakeApi::default()
        };
        assert!(block_on(load_schools(&api)).is_empty());
        assert_eq!(api.calls(), vec![Call::SchoolsWithReviews]);
    }

    #[test]
    fn load_returns_server_list() {
        let api = FakeApi {
            schools: Ok(sample()),
            ..FakeApi::default()
        };
        assert_eq!(block_on(load_schools(&api)), sample());
    }
}
