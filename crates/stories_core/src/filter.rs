use crate::Story;

/// Stories whose title contains `query`, ignoring case, in their original order.
///
/// An empty query matches everything. Only the title is searched.
pub fn visible(items: &[Story], query: &str) -> Vec<Story> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_titles_fold_case() {
        let items = vec![Story::new("1", "Über Rust"), Story::new("2", "Go")];
        let hits = visible(&items, "üBER");
        assert_eq!(hits, vec![Story::new("1", "Über Rust")]);
    }

    #[test]
    fn author_is_not_searched() {
        let mut story = Story::new("1", "Title");
        story.author = "react-fan".to_string();
        assert!(visible(&[story], "react").is_empty());
    }
}
