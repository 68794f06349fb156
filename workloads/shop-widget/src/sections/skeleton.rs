//! Loading placeholders for the grid.

/// Render `count` placeholder cards.
pub fn render_skeletons(count: usize) -> String {
    (0..count)
        .map(|_| {
            r#"<div class="card product skeleton" aria-hidden="true">
    <div class="skeleton-image"></div>
    <div class="skeleton-text"></div>
    <div class="skeleton-text short"></div>
</div>"#
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(render_skeletons(3).matches("skeleton-image").count(), 3);
        assert!(render_skeletons(0).is_empty());
    }
}
