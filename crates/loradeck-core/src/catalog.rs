use crate::model::ModelRecord;

/// In-memory catalog store: the full record set plus the live search term.
///
/// The filtered view is always derived fresh from both; nothing here is
/// cached or patched incrementally.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ModelRecord>,
    query: String,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full record set, keeping the current query.
    pub fn load(&mut self, records: Vec<ModelRecord>) {
        self.records = records;
    }

    /// Store the search term, lowercased. An empty term matches everything.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_lowercase();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose display name or any tag contains the query as a
    /// case-insensitive substring, in load order. Both sides are
    /// normalized, so mixed-case tags match the same as mixed-case names.
    pub fn filtered(&self) -> Vec<&ModelRecord> {
        self.records
            .iter()
            .filter(|record| {
                record.display_name.to_lowercase().contains(&self.query)
                    || record
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&self.query))
            })
            .collect()
    }
}
