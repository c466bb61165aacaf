use super::keywords::KeywordSet;

/// Weighted keyword hit score for one record.
///
/// Every keyword that occurs (case-insensitively, as a substring) in a field
/// adds that field's weight. A keyword can hit several fields of the same
/// record and the weights add up. Zero means no hit.
pub fn score(fields: &[(&str, u32)], keywords: &KeywordSet) -> u32 {
    if keywords.is_empty() {
        return 0;
    }

    let mut total: u32 = 0;
    for (text, weight) in fields {
        let haystack = text.to_lowercase();
        for keyword in keywords.iter() {
            if haystack.contains(keyword) {
                total = total.saturating_add(*weight);
            }
        }
    }
    total
}
