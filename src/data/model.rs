/// One bucket-list goal parsed from a CSV row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub category: Option<String>,
    pub continent: Option<String>,
    pub country: Option<String>,
    pub topics: Option<String>,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HubKind {
    Category,
    Continent,
    Country,
    Topics,
}

impl HubKind {
    pub const ALL: [HubKind; 4] = [
        HubKind::Category,
        HubKind::Continent,
        HubKind::Country,
        HubKind::Topics,
    ];

    pub fn grouping(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Continent => "continent",
            Self::Country => "country",
            Self::Topics => "topics",
        }
    }
}

/// A synthetic node clustering entries that share one value of a grouping
/// attribute. Identity is unique per (grouping, value) pair.
#[derive(Clone, Debug)]
pub struct Hub {
    pub id: String,
    pub kind: HubKind,
    pub name: String,
}

impl Hub {
    pub fn new(kind: HubKind, value: &str) -> Self {
        Self {
            id: format!("hub-{}-{value}", kind.grouping()),
            kind,
            name: value.to_owned(),
        }
    }
}

/// Typed reference into `BucketGraph::entries` or `BucketGraph::hubs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Entry(usize),
    Hub(usize),
}

/// An unordered connection between two nodes. Duplicates are allowed; the
/// link policy never deduplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub source: NodeRef,
    pub target: NodeRef,
}

impl Link {
    pub fn new(source: NodeRef, target: NodeRef) -> Self {
        Self { source, target }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BucketGraph {
    pub entries: Vec<Entry>,
    pub hubs: Vec<Hub>,
    pub links: Vec<Link>,
}

impl BucketGraph {
    pub fn node_count(&self) -> usize {
        self.entries.len() + self.hubs.len()
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.completed).count()
    }

    pub fn hub_count(&self, kind: HubKind) -> usize {
        self.hubs.iter().filter(|hub| hub.kind == kind).count()
    }
}
