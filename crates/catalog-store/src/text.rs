//! Full-text index over product names.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Split text into lowercase alphanumeric terms.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Inverted index from term to the rows whose name contains it.
#[derive(Debug, Default, Clone)]
pub struct TextIndex {
    postings: BTreeMap<String, BTreeSet<usize>>,
}

impl TextIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `text` under row `row`.
    pub fn insert(&mut self, row: usize, text: &str) {
        for term in tokenize(text) {
            self.postings.entry(term).or_default().insert(row);
        }
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Rows matching `query`, best first, at most `limit`.
    ///
    /// A row scores one point per distinct query term it contains. The final
    /// query term also matches any name term it is a prefix of, so partially
    /// typed words still hit. Ties keep row order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<usize> {
        let mut terms = tokenize(query);
        let mut seen = BTreeSet::new();
        terms.retain(|t| seen.insert(t.clone()));

        let Some(last) = terms.len().checked_sub(1) else {
            return Vec::new();
        };

        let mut scores: HashMap<usize, usize> = HashMap::new();
        for (i, term) in terms.iter().enumerate() {
            let mut hits: BTreeSet<usize> = BTreeSet::new();
            if i == last {
                for (_, rows) in self
                    .postings
                    .range(term.clone()..)
                    .take_while(|(k, _)| k.starts_with(term.as_str()))
                {
                    hits.extend(rows);
                }
            } else if let Some(rows) = self.postings.get(term) {
                hits.extend(rows);
            }

            for row in hits {
                *scores.entry(row).or_default() += 1;
            }
        }

        let mut ranked: Vec<(usize, usize)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.into_iter().take(limit).map(|(row, _)| row).collect()
    }
}
