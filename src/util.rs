//! Small helpers shared by the renderers.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Pad `items` with `fill` until it holds at least `length` elements.
///
/// Never truncates. When `items` is already long enough it is returned
/// borrowed, so no copy is made.
///
/// # Example
///
/// ```
/// use mdgen::util::fill_array;
///
/// let row = ["a".to_string()];
/// let filled = fill_array(&row, 3, String::new());
/// assert_eq!(filled.as_ref(), ["a", "", ""]);
/// ```
pub fn fill_array<T: Clone>(items: &[T], length: usize, fill: T) -> Cow<'_, [T]> {
    if items.len() >= length {
        return Cow::Borrowed(items);
    }

    let mut result = items.to_vec();
    result.resize(length, fill);
    Cow::Owned(result)
}

/// Split multi-line text on `\r\n`, `\r` or `\n`.
pub fn split_lines(text: &str) -> Vec<String> {
    static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
    let re = LINE_BREAK.get_or_init(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern"));

    re.split(text).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_array_with_empty_string() {
        let empty: Vec<String> = Vec::new();
        let result = fill_array(&empty, 10, String::new());
        assert_eq!(result.len(), 10);
        assert!(result.iter().all(String::is_empty));
    }

    #[test]
    fn test_fill_array_with_zeroes() {
        let result = fill_array(&[7, 8], 5, 0);
        assert_eq!(result.as_ref(), [7, 8, 0, 0, 0]);
    }

    #[test]
    fn test_fill_array_sufficient_size_is_borrowed() {
        let items = ["", "", ""];
        let result = fill_array(&items, 3, "");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), items);

        let result = fill_array(&items, 0, "x");
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb\rc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("single"), vec!["single"]);
    }
}
