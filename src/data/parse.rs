use std::io::Read;

use anyhow::{Context, Result};
use csv::StringRecord;
use serde::Deserialize;

use super::model::Entry;

/// One raw CSV row, matched to the dataset's headers by exact name. Every
/// column is optional; rows never fail to parse because a field is absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub(super) struct RawRecord {
    #[serde(default, rename = "Place or Region")]
    pub(super) place: Option<String>,
    #[serde(default, rename = "Activity")]
    pub(super) activity: Option<String>,
    #[serde(default, rename = "Category")]
    pub(super) category: Option<String>,
    #[serde(default, rename = "Continent")]
    pub(super) continent: Option<String>,
    #[serde(default, rename = "Country")]
    pub(super) country: Option<String>,
    #[serde(default, rename = "Topics")]
    pub(super) topics: Option<String>,
    #[serde(default, rename = "Completed")]
    pub(super) completed: Option<String>,
}

pub(super) fn parse_entries(input: impl Read) -> Result<Vec<Entry>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = StringRecord::from_byte_record_lossy(
        reader
            .byte_headers()
            .context("could not read CSV header row")?
            .clone(),
    );

    let mut entries = Vec::new();
    for record in reader.byte_records() {
        let record = match record {
            Ok(record) => StringRecord::from_byte_record_lossy(record),
            Err(error) => {
                log::debug!("skipping unreadable row: {error}");
                continue;
            }
        };

        match record.deserialize::<RawRecord>(Some(&headers)) {
            Ok(raw) => entries.push(entry_from_record(raw)),
            Err(error) => log::debug!("skipping malformed row: {error}"),
        }
    }

    Ok(entries)
}

pub(super) fn entry_from_record(record: RawRecord) -> Entry {
    let completed = record.completed.as_deref().map(str::trim) == Some("yes");

    Entry {
        name: compose_name(record.place.as_deref(), record.activity.as_deref()),
        category: non_empty(record.category),
        continent: non_empty(record.continent),
        country: non_empty(record.country),
        topics: non_empty(record.topics),
        completed,
    }
}

fn compose_name(place: Option<&str>, activity: Option<&str>) -> String {
    let place = place.map(str::trim).filter(|value| !value.is_empty());
    let activity = activity.map(str::trim).filter(|value| !value.is_empty());

    match (place, activity) {
        (Some(place), Some(activity)) => format!("{place} — {activity}"),
        (Some(place), None) => place.to_owned(),
        (None, Some(activity)) => activity.to_owned(),
        (None, None) => "Unnamed".to_owned(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(place: &str, activity: &str, completed: &str) -> RawRecord {
        RawRecord {
            place: Some(place.to_owned()),
            activity: Some(activity.to_owned()),
            completed: Some(completed.to_owned()),
            ..RawRecord::default()
        }
    }

    #[test]
    fn name_joins_place_and_activity_with_em_dash() {
        let entry = entry_from_record(record("Kyoto  ", " see the temples", "no"));
        assert_eq!(entry.name, "Kyoto — see the temples");
    }

    #[test]
    fn name_falls_back_to_single_present_field() {
        assert_eq!(entry_from_record(record("Kyoto", "", "")).name, "Kyoto");
        assert_eq!(entry_from_record(record("", "surf", "")).name, "surf");
    }

    #[test]
    fn name_is_unnamed_when_both_fields_missing() {
        assert_eq!(entry_from_record(record("", "  ", "")).name, "Unnamed");
        assert_eq!(entry_from_record(RawRecord::default()).name, "Unnamed");
    }

    #[test]
    fn completed_requires_exact_yes_after_trim() {
        assert!(entry_from_record(record("x", "", "yes")).completed);
        assert!(entry_from_record(record("x", "", "  yes ")).completed);
        assert!(!entry_from_record(record("x", "", "Yes")).completed);
        assert!(!entry_from_record(record("x", "", "YES")).completed);
        assert!(!entry_from_record(record("x", "", "no")).completed);
        assert!(!entry_from_record(RawRecord::default()).completed);
    }

    #[test]
    fn empty_grouping_fields_become_absent_markers() {
        let entry = entry_from_record(RawRecord {
            category: Some(String::new()),
            continent: None,
            country: Some("Japan".to_owned()),
            ..RawRecord::default()
        });
        assert_eq!(entry.category, None);
        assert_eq!(entry.continent, None);
        assert_eq!(entry.country.as_deref(), Some("Japan"));
    }

    #[test]
    fn parses_rows_by_header_name_and_skips_short_rows_gracefully() {
        let csv = "\
Place or Region,Activity,Category,Continent,Country,Topics,Completed
Kyoto,,Adventure,Asia,Japan,,yes
,learn pottery,Skill
Lima,eat ceviche,Experience,South America,Peru,Food,no
";
        let entries = parse_entries(csv.as_bytes()).expect("csv parses");
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].name, "Kyoto");
        assert!(entries[0].completed);
        assert_eq!(entries[0].country.as_deref(), Some("Japan"));

        assert_eq!(entries[1].name, "learn pottery");
        assert_eq!(entries[1].category.as_deref(), Some("Skill"));
        assert_eq!(entries[1].country, None);
        assert!(!entries[1].completed);

        assert_eq!(entries[2].name, "Lima — eat ceviche");
        assert_eq!(entries[2].topics.as_deref(), Some("Food"));
    }
}
