use std::collections::HashMap;

use super::hubs::grouping_value;
use super::model::{Entry, Hub, HubKind, Link, NodeRef};

/// Category value that continent hubs seed-link to. Case-sensitive, so a
/// dataset whose categories are capitalized will not match it.
const ADVENTURE_CATEGORY: &str = "adventure";

/// Categories whose entries always gain a direct category link, on top of
/// whatever the per-entry rules already produced.
const SECONDARY_CATEGORIES: [&str; 3] = ["project", "skill", "experience"];

/// Value-to-hub-index lookup, one map per grouping.
pub(super) struct HubLookup<'a> {
    by_value: HashMap<(HubKind, &'a str), usize>,
}

impl<'a> HubLookup<'a> {
    pub(super) fn new(hubs: &'a [Hub]) -> Self {
        let by_value = hubs
            .iter()
            .enumerate()
            .map(|(index, hub)| ((hub.kind, hub.name.as_str()), index))
            .collect();
        Self { by_value }
    }

    fn hub(&self, kind: HubKind, value: Option<&str>) -> Option<usize> {
        value.and_then(|value| self.by_value.get(&(kind, value)).copied())
    }

    fn hub_for(&self, entry: &Entry, kind: HubKind) -> Option<usize> {
        self.hub(kind, grouping_value(entry, kind))
    }
}

type EntryRule = fn(&Entry, &HubLookup) -> Option<usize>;

/// Per-entry link rules, applied independently and in this order. Each rule
/// is a pure function from (entry, hub lookup) to the hub it links to, if
/// any; overlapping rules may attach duplicate links on purpose.
const ENTRY_RULES: [EntryRule; 5] = [
    topic_rule,
    country_rule,
    continent_rule,
    category_fallback_rule,
    secondary_category_rule,
];

fn topic_rule(entry: &Entry, lookup: &HubLookup) -> Option<usize> {
    lookup.hub_for(entry, HubKind::Topics)
}

fn country_rule(entry: &Entry, lookup: &HubLookup) -> Option<usize> {
    lookup.hub_for(entry, HubKind::Country)
}

// The continent link is suppressed only when country and topic both matched.
fn continent_rule(entry: &Entry, lookup: &HubLookup) -> Option<usize> {
    let continent = lookup.hub_for(entry, HubKind::Continent)?;
    let country = lookup.hub_for(entry, HubKind::Country);
    let topic = lookup.hub_for(entry, HubKind::Topics);
    (country.is_none() || topic.is_none()).then_some(continent)
}

fn category_fallback_rule(entry: &Entry, lookup: &HubLookup) -> Option<usize> {
    if lookup.hub_for(entry, HubKind::Topics).is_some()
        || lookup.hub_for(entry, HubKind::Country).is_some()
        || lookup.hub_for(entry, HubKind::Continent).is_some()
    {
        return None;
    }
    lookup.hub_for(entry, HubKind::Category)
}

fn secondary_category_rule(entry: &Entry, lookup: &HubLookup) -> Option<usize> {
    let category = entry.category.as_deref()?;
    if !SECONDARY_CATEGORIES.contains(&category) {
        return None;
    }
    lookup.hub_for(entry, HubKind::Category)
}

/// Builds the full link set: continent seed links, then the per-entry rules
/// over entries in row order, then one country-to-continent link per country
/// hub. Nothing is deduplicated.
pub(super) fn build_links(entries: &[Entry], hubs: &[Hub]) -> Vec<Link> {
    let lookup = HubLookup::new(hubs);
    let mut links = Vec::new();

    match lookup.hub(HubKind::Category, Some(ADVENTURE_CATEGORY)) {
        Some(adventure) => {
            for (index, hub) in hubs.iter().enumerate() {
                if hub.kind == HubKind::Continent {
                    links.push(Link::new(NodeRef::Hub(index), NodeRef::Hub(adventure)));
                }
            }
        }
        None => log::warn!("adventure category hub not found; skipping continent seed links"),
    }

    for (entry_index, entry) in entries.iter().enumerate() {
        for rule in ENTRY_RULES {
            if let Some(hub_index) = rule(entry, &lookup) {
                links.push(Link::new(NodeRef::Entry(entry_index), NodeRef::Hub(hub_index)));
            }
        }
    }

    for (country_index, hub) in hubs.iter().enumerate() {
        if hub.kind != HubKind::Country {
            continue;
        }

        let witness = entries.iter().find(|entry| {
            entry.country.as_deref() == Some(hub.name.as_str()) && entry.continent.is_some()
        });
        if let Some(entry) = witness
            && let Some(continent_index) = lookup.hub(HubKind::Continent, entry.continent.as_deref())
        {
            links.push(Link::new(
                NodeRef::Hub(country_index),
                NodeRef::Hub(continent_index),
            ));
        }
    }

    links
}
