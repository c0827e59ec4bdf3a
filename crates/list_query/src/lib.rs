//! Filtering and ordering for in-memory list views.
//!
//! [`query`] is the single entry point: given a slice, a free-text
//! search term, and a sort specification it returns the filtered,
//! ordered view the caller renders. The input is never mutated.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort direction for a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Applies the direction to an ascending ordering.
    ///
    /// Descending is the exact reverse of the ascending comparator, not
    /// a separately specified one.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

/// Active sort for a list view: a field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort<F> {
    /// Field the list is ordered by.
    pub field: F,
    /// Direction applied to the field's ascending order.
    pub direction: SortDirection,
}

impl<F> Sort<F> {
    /// Ascending sort on `field`.
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }
}

impl<F: PartialEq> Sort<F> {
    /// Applies the sort-toggle policy: selecting the active field flips
    /// the direction; selecting a new field resets to ascending.
    pub fn toggle(self, field: F) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(field)
        }
    }
}

/// Case-folded lexicographic comparison.
pub fn compare_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Numeric comparison with a total order over floats.
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Returns the filtered, ordered view of `items`.
///
/// An item is retained when any string produced by `match_text`
/// contains `search_term` case-insensitively; the empty term retains
/// everything. The sort is stable and compares with `compare` on the
/// active field, reversed for [`SortDirection::Desc`].
pub fn query<'a, T, F, M, C>(
    items: &'a [T],
    search_term: &str,
    sort: Sort<F>,
    match_text: M,
    compare: C,
) -> Vec<T>
where
    T: Clone,
    F: Copy,
    M: Fn(&'a T) -> Vec<&'a str>,
    C: Fn(&T, &T, F) -> Ordering,
{
    let needle = search_term.to_lowercase();
    let mut selected: Vec<T> = items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || match_text(item)
                    .iter()
                    .any(|haystack| haystack.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    selected.sort_by(|a, b| sort.direction.apply(compare(a, b, sort.field)));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        Name,
        Score,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        tag: &'static str,
        score: f64,
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "Coffee Shop", tag: "downtown", score: 4.5 },
            Item { name: "Bookstore", tag: "midtown", score: 4.8 },
            Item { name: "Tech Gadgets", tag: "uptown", score: 4.2 },
            Item { name: "bistro", tag: "Downtown", score: 4.5 },
        ]
    }

    fn run(term: &str, sort: Sort<Field>) -> Vec<Item> {
        query(
            &items(),
            term,
            sort,
            |item| vec![item.name, item.tag],
            |a, b, field| match field {
                Field::Name => compare_str(a.name, b.name),
                Field::Score => compare_f64(a.score, b.score),
            },
        )
    }

    #[test]
    fn test_empty_term_retains_everything() {
        let result = run("", Sort::ascending(Field::Name));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_match_is_case_insensitive_over_any_field() {
        let result = run("DOWNTOWN", Sort::ascending(Field::Name));
        let names: Vec<&str> = result.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["bistro", "Coffee Shop"]);

        let result = run("book", Sort::ascending(Field::Name));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bookstore");
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(run("plumbing", Sort::ascending(Field::Name)).is_empty());
    }

    #[test]
    fn test_desc_is_exact_reverse_of_asc() {
        // Names are unique, so the descending sequence is the literal
        // reverse of the ascending one.
        let asc = run("", Sort::ascending(Field::Name));
        let desc = run(
            "",
            Sort { field: Field::Name, direction: SortDirection::Desc },
        );
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = run("", Sort::ascending(Field::Name));
        let twice = query(
            &once,
            "",
            Sort::ascending(Field::Name),
            |item| vec![item.name, item.tag],
            |a, b, _| compare_str(a.name, b.name),
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // Both downtown items share score 4.5 and keep input order.
        let result = run("", Sort::ascending(Field::Score));
        let names: Vec<&str> = result.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Tech Gadgets", "Coffee Shop", "bistro", "Bookstore"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let original = items();
        let _ = query(
            &original,
            "b",
            Sort::ascending(Field::Score),
            |item| vec![item.name],
            |a, b, _| compare_f64(a.score, b.score),
        );
        assert_eq!(original, items());
    }

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let sort = Sort::ascending(Field::Name);
        let flipped = sort.toggle(Field::Name);
        assert_eq!(flipped.field, Field::Name);
        assert_eq!(flipped.direction, SortDirection::Desc);

        // Toggling twice returns to the original direction.
        assert_eq!(flipped.toggle(Field::Name), sort);
    }

    #[test]
    fn test_toggle_new_field_resets_to_ascending() {
        let sort = Sort { field: Field::Name, direction: SortDirection::Desc };
        let switched = sort.toggle(Field::Score);
        assert_eq!(switched.field, Field::Score);
        assert_eq!(switched.direction, SortDirection::Asc);
    }
}
