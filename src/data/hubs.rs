use std::collections::HashSet;

use super::model::{Entry, Hub, HubKind};

pub(super) fn grouping_value(entry: &Entry, kind: HubKind) -> Option<&str> {
    match kind {
        HubKind::Category => entry.category.as_deref(),
        HubKind::Continent => entry.continent.as_deref(),
        HubKind::Country => entry.country.as_deref(),
        HubKind::Topics => entry.topics.as_deref(),
    }
}

/// One hub per distinct non-empty value per grouping, in first-seen order.
pub(super) fn synthesize_hubs(entries: &[Entry]) -> Vec<Hub> {
    let mut hubs = Vec::new();

    for kind in HubKind::ALL {
        let mut seen = HashSet::new();
        for entry in entries {
            let Some(value) = grouping_value(entry, kind) else {
                continue;
            };
            if seen.insert(value) {
                hubs.push(Hub::new(kind, value));
            }
        }
    }

    hubs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, continent: &str, country: &str, topics: &str) -> Entry {
        let field = |value: &str| (!value.is_empty()).then(|| value.to_owned());
        Entry {
            name: "test".to_owned(),
            category: field(category),
            continent: field(continent),
            country: field(country),
            topics: field(topics),
            completed: false,
        }
    }

    #[test]
    fn one_hub_per_distinct_value_per_grouping() {
        let entries = vec![
            entry("Adventure", "Asia", "Japan", "Food"),
            entry("Adventure", "Asia", "Japan", "Food"),
            entry("Skill", "Asia", "Nepal", ""),
        ];

        let hubs = synthesize_hubs(&entries);
        let count = |kind| hubs.iter().filter(|hub| hub.kind == kind).count();

        assert_eq!(count(HubKind::Category), 2);
        assert_eq!(count(HubKind::Continent), 1);
        assert_eq!(count(HubKind::Country), 2);
        assert_eq!(count(HubKind::Topics), 1);
    }

    #[test]
    fn hub_ids_carry_the_grouping_and_never_collide_across_groupings() {
        // "Peru" as both a country and a topic must yield two distinct hubs.
        let entries = vec![entry("", "", "Peru", "Peru")];
        let hubs = synthesize_hubs(&entries);

        assert_eq!(hubs.len(), 2);
        let ids: Vec<&str> = hubs.iter().map(|hub| hub.id.as_str()).collect();
        assert!(ids.contains(&"hub-country-Peru"));
        assert!(ids.contains(&"hub-topics-Peru"));
    }

    #[test]
    fn hubs_preserve_first_seen_order_within_a_grouping() {
        let entries = vec![
            entry("Skill", "", "", ""),
            entry("Adventure", "", "", ""),
            entry("Skill", "", "", ""),
        ];

        let hubs = synthesize_hubs(&entries);
        let names: Vec<&str> = hubs.iter().map(|hub| hub.name.as_str()).collect();
        assert_eq!(names, ["Skill", "Adventure"]);
    }

    #[test]
    fn no_hubs_from_absent_values() {
        let entries = vec![entry("", "", "", "")];
        assert!(synthesize_hubs(&entries).is_empty());
    }
}
