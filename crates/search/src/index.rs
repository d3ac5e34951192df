use pattern_catalog::PatternRecord;

/// One distinct tool name, deduplicated case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    /// Stable identifier: the first-seen row index rendered as a string.
    pub key: String,

    /// Display name as first encountered in the catalog.
    pub label: String,

    /// Row indices of every record sharing this tool name.
    pub records: Vec<usize>,
}

/// Deduplicated tool-name lookup built once from the full catalog.
pub struct SearchIndex {
    records: Vec<PatternRecord>,
    entries: Vec<SearchEntry>,
}

const PLACEHOLDER_LABEL: &str = "Unknown Tool";

impl SearchIndex {
    /// Build the index: one entry per distinct normalized tool name,
    /// first-seen order. Rows with a blank tool get a synthetic
    /// `unknown-<row>` key so they stay addressable without colliding.
    #[must_use]
    pub fn build(catalog: &[PatternRecord]) -> Self {
        let mut entries: Vec<SearchEntry> = Vec::new();
        let mut normalized_keys: Vec<String> = Vec::new();

        for (row, record) in catalog.iter().enumerate() {
            let normalized = if record.tool.is_empty() {
                format!("unknown-{row}")
            } else {
                record.tool.to_lowercase()
            };

            match normalized_keys.iter().position(|key| *key == normalized) {
                Some(pos) => entries[pos].records.push(row),
                None => {
                    normalized_keys.push(normalized);
                    entries.push(SearchEntry {
                        key: row.to_string(),
                        label: if record.tool.is_empty() {
                            PLACEHOLDER_LABEL.to_string()
                        } else {
                            record.tool.clone()
                        },
                        records: vec![row],
                    });
                }
            }
        }

        log::debug!(
            "Search index: {} entries over {} records",
            entries.len(),
            catalog.len()
        );
        Self {
            records: catalog.to_vec(),
            entries,
        }
    }

    /// The deduplicated suggestion list, first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Every catalog record whose tool name contains `text` as a
    /// case-insensitive substring, in catalog order. Empty or
    /// whitespace-only text yields no matches; the caller tracks whether a
    /// query is active, since "not searching" and "no matches" both render
    /// empty.
    #[must_use]
    pub fn query(&self, text: &str) -> Vec<&PatternRecord> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|record| record.tool.to_lowercase().contains(&needle))
            .collect()
    }

    /// Look up an entry by its stable key, for callers selecting a
    /// suggestion by identity rather than retyping text. The caller makes
    /// the label the active query and records a frequency event for it.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&SearchEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Records behind an entry, in catalog order.
    #[must_use]
    pub fn records_for(&self, entry: &SearchEntry) -> Vec<&PatternRecord> {
        entry.records.iter().map(|&row| &self.records[row]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(tool: &str, requirement: &str) -> PatternRecord {
        PatternRecord {
            tool: tool.to_string(),
            requirement: requirement.to_string(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<PatternRecord> {
        vec![
            record("Azure", "HA"),
            record("Dynatrace", "monitoring"),
            record("SCOM", "monitoring"),
            record("dynatrace", "logging"),
            record("", "unlabeled"),
        ]
    }

    #[test]
    fn dedupes_case_insensitively_preserving_first_seen_label() {
        let index = SearchIndex::build(&catalog());
        let labels: Vec<&str> = index.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Azure", "Dynatrace", "SCOM", "Unknown Tool"]);

        let dynatrace = &index.entries()[1];
        assert_eq!(dynatrace.key, "1");
        assert_eq!(dynatrace.records, vec![1, 3]);
    }

    #[test]
    fn query_is_a_pure_substring_predicate() {
        let index = SearchIndex::build(&catalog());

        let matches = index.query("dyna");
        let tools: Vec<&str> = matches.iter().map(|r| r.tool.as_str()).collect();
        assert_eq!(tools, vec!["Dynatrace", "dynatrace"]);

        assert_eq!(index.query("zzz").len(), 0);
    }

    #[test]
    fn empty_and_whitespace_queries_match_nothing() {
        let index = SearchIndex::build(&catalog());
        assert_eq!(index.query("").len(), 0);
        assert_eq!(index.query("   ").len(), 0);
    }

    #[test]
    fn resolve_finds_entries_by_stable_key() {
        let index = SearchIndex::build(&catalog());
        let entry = index.resolve("2").unwrap();
        assert_eq!(entry.label, "SCOM");

        let records = index.records_for(entry);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].requirement, "monitoring");

        assert!(index.resolve("99").is_none());
    }

    #[test]
    fn blank_tools_get_synthetic_placeholder_entries() {
        let index = SearchIndex::build(&catalog());
        let entry = index.resolve("4").unwrap();
        assert_eq!(entry.label, "Unknown Tool");
        assert_eq!(entry.records, vec![4]);

        // Placeholders are not reachable by substring search.
        assert_eq!(index.query("unknown").len(), 0);
    }
}
