use crate::core::Row;

/// Score added for each query term found in a row.
pub const TERM_WEIGHT: u32 = 10;

/// Lowercases the query and splits it on whitespace. Repeated terms are kept.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Returns `(score, matches)` for `text` against pre-lowercased `terms`.
pub fn score_text(terms: &[String], text: &str) -> (u32, usize) {
    terms
        .iter()
        .filter(|term| text.contains(term.as_str()))
        .fold((0, 0), |(score, matches), _| (score + TERM_WEIGHT, matches + 1))
}

/// Ranks rows by how many query terms occur as substrings of their search
/// text, dropping rows with no match.
///
/// Despite the name this is flat term matching: no term frequency, IDF or
/// length normalization. Equal scores keep their input order.
pub fn bm25_score(query: &str, rows: Vec<Row>) -> Vec<Row> {
    let terms = query_terms(query);

    let mut scored: Vec<(u32, Row)> = rows
        .into_iter()
        .filter_map(|row| {
            let (score, matches) = score_text(&terms, row.search_text());
            (matches > 0).then_some((score, row))
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!("{} rows matched {} terms", scored.len(), terms.len());
    scored.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(name: &str, keywords: &str) -> Row {
        let mut data = HashMap::new();
        data.insert("Name".to_string(), name.to_string());
        data.insert("Keywords".to_string(), keywords.to_string());
        Row::new(data, &["Name", "Keywords"])
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().filter_map(|r| r.get("Name")).collect()
    }

    #[test]
    fn test_query_terms() {
        assert_eq!(query_terms("  Dark  MODE\tdark "), vec!["dark", "mode", "dark"]);
        assert!(query_terms("   ").is_empty());
    }

    #[test]
    fn test_repeated_terms_score_each_occurrence() {
        let terms = query_terms("dark dark");
        assert_eq!(score_text(&terms, "a dark theme"), (20, 2));
    }

    #[test]
    fn test_substring_match() {
        let terms = query_terms("min");
        assert_eq!(score_text(&terms, "minimal"), (10, 1));
        assert_eq!(score_text(&terms, "maximal"), (0, 0));
    }

    #[test]
    fn test_excludes_rows_without_matches() {
        let rows = vec![row("Minimal", "clean simple"), row("Bold", "vibrant loud")];
        let ranked = bm25_score("clean", rows);
        assert_eq!(names(&ranked), vec!["Minimal"]);
    }

    #[test]
    fn test_orders_by_score_descending() {
        let rows = vec![
            row("One", "dark"),
            row("Two", "dark glass"),
            row("Three", "dark glass neon"),
        ];
        let ranked = bm25_score("neon glass dark", rows);
        assert_eq!(names(&ranked), vec!["Three", "Two", "One"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let rows = vec![
            row("A", "flat"),
            row("B", "flat glass"),
            row("C", "flat"),
            row("D", "flat"),
        ];
        let ranked = bm25_score("Flat GLASS", rows);
        assert_eq!(names(&ranked), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let rows = vec![row("A", "flat")];
        assert!(bm25_score("", rows).is_empty());
    }
}
