//! Reference string helpers: parsing, formatting and random generation.

use rand::Rng;

use crate::common::{Error, PageId, Result};

/// Parse comma- and/or whitespace-separated page numbers.
///
/// # Errors
/// `Error::MalformedReference` naming the first token that is not a
/// non-negative integer.
///
/// # Example
/// ```
/// use pagesim::{parse_reference_string, PageId};
///
/// let pages = parse_reference_string("1, 2 3,4").unwrap();
/// assert_eq!(pages, vec![PageId(1), PageId(2), PageId(3), PageId(4)]);
/// assert!(parse_reference_string("1,-2").is_err());
/// ```
pub fn parse_reference_string(input: &str) -> Result<Vec<PageId>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map(PageId)
                .map_err(|_| Error::MalformedReference(format!("invalid page number '{}'", token)))
        })
        .collect()
}

/// Render pages as `1,2,3`.
pub fn format_reference_string(pages: &[PageId]) -> String {
    pages
        .iter()
        .map(|p| p.0.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// `length` pages drawn uniformly from `1..=max_page`.
///
/// # Errors
/// `Error::MalformedReference` if `max_page` is 0.
pub fn generate_reference_string<R: Rng>(
    rng: &mut R,
    length: usize,
    max_page: u32,
) -> Result<Vec<PageId>> {
    if max_page == 0 {
        return Err(Error::MalformedReference(
            "max page must be at least 1".to_string(),
        ));
    }
    Ok((0..length)
        .map(|_| PageId(rng.gen_range(1..=max_page)))
        .collect())
}
