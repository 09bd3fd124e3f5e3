use bookrev_core::CleanedReviewRow;

/// Joins every row's content with `\n`, in row order.
///
/// An empty slice yields an empty string.
#[must_use]
pub fn aggregate_content(rows: &[CleanedReviewRow]) -> String {
    rows.iter()
        .map(|row| row.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
