use std::fs::File;

use anyhow::{Context, Result};

use super::hubs::synthesize_hubs;
use super::links::build_links;
use super::model::BucketGraph;
use super::parse::parse_entries;

pub fn load_bucket_graph(path: &str) -> Result<BucketGraph> {
    let file = File::open(path).with_context(|| format!("failed to open dataset {path}"))?;
    let entries =
        parse_entries(file).with_context(|| format!("failed to read dataset rows from {path}"))?;
    let hubs = synthesize_hubs(&entries);
    let links = build_links(&entries, &hubs);

    log::info!(
        "loaded {} entries, {} hubs, {} links from {path}",
        entries.len(),
        hubs.len(),
        links.len()
    );

    Ok(BucketGraph {
        entries,
        hubs,
        links,
    })
}

#[cfg(test)]
mod tests {
    use super::super::model::HubKind;
    use super::*;

    #[test]
    fn assembles_a_graph_from_parsed_rows() {
        let csv = "\
Place or Region,Activity,Category,Continent,Country,Topics,Completed
Kyoto,,Adventure,Asia,Japan,,yes
,learn pottery,skill,,,,no
";
        let entries = parse_entries(csv.as_bytes()).expect("csv parses");
        let hubs = synthesize_hubs(&entries);
        let links = build_links(&entries, &hubs);
        let graph = BucketGraph {
            entries,
            hubs,
            links,
        };

        assert_eq!(graph.entries.len(), 2);
        assert_eq!(graph.completed_count(), 1);
        assert_eq!(graph.hub_count(HubKind::Category), 2);
        assert_eq!(graph.hub_count(HubKind::Country), 1);
        // Kyoto: country + continent; pottery: category fallback + secondary
        // category; Japan hub: one continent link.
        assert_eq!(graph.links.len(), 5);
    }
}
