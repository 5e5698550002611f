//! Suggestion ranking for reference-target type-ahead

use crate::model::NodeId;

/// A node offered for reference-target completion. Deduplication and any
/// pre-filtering (e.g. "exclude nodes already present in the target
/// variant") happen before candidates reach the ranker.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub node_id: NodeId,
    pub label: String,
}

/// One ranked completion, carrying its edit distance from the query.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub node_id: NodeId,
    pub label: String,
    pub distance: usize,
}

/// Rank candidates by Levenshtein distance from `query`, ascending, ties
/// broken by lexicographic label order.
///
/// Pure: identical inputs always yield the identical ordered output. An
/// empty query degenerates to label length + lexicographic; an empty
/// candidate list yields an empty ranking.
pub fn rank(query: &str, candidates: &[Candidate]) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = candidates
        .iter()
        .map(|c| Suggestion {
            node_id: c.node_id,
            label: c.label.clone(),
            distance: levenshtein(query, &c.label),
        })
        .collect();
    suggestions.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.label.cmp(&b.label)));
    suggestions
}

/// Unit-cost Levenshtein edit distance over Unicode scalar values.
///
/// Standard O(|a|×|b|) dynamic program, kept to two rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            let delete = prev[j + 1] + 1;
            let insert = curr[j] + 1;
            curr[j + 1] = substitute.min(delete).min(insert);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
