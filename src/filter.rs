//! Filter Utilities
//!
//! Category filtering for the fixture lists. `None` is the "All" sentinel
//! and yields the full fixture; a concrete category yields the matching
//! subsequence in original order.

/// Filter `items` by an optional category, preserving fixture order.
///
/// `category` projects each item onto its category field. An unmatched
/// category yields an empty result, never an error.
pub fn filter_by_category<T, C>(
    items: &'static [T],
    selected: Option<C>,
    category: impl Fn(&T) -> C,
) -> Vec<&'static T>
where
    C: PartialEq + Copy,
{
    match selected {
        None => items.iter().collect(),
        Some(wanted) => items.iter().filter(|&item| category(item) == wanted).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, ProjectCategory};

    const SAMPLE: &[Project] = &[
        make_project(1, ProjectCategory::FullStack),
        make_project(2, ProjectCategory::Frontend),
        make_project(3, ProjectCategory::Frontend),
        make_project(4, ProjectCategory::FullStack),
    ];

    const fn make_project(id: u32, category: ProjectCategory) -> Project {
        Project {
            id,
            title: "Sample",
            description: "",
            long_description: "",
            image: "",
            technologies: &[],
            live_url: "",
            github_url: "",
            category,
            date: "2023",
            features: &[],
        }
    }

    #[test]
    fn all_yields_full_fixture_in_order() {
        let out = filter_by_category(SAMPLE, None, |p| p.category);
        let ids: Vec<u32> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn category_yields_exact_subset_in_order() {
        let out = filter_by_category(SAMPLE, Some(ProjectCategory::Frontend), |p| p.category);
        let ids: Vec<u32> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let out = filter_by_category(SAMPLE, Some(ProjectCategory::FullStack), |p| p.category);
        let ids: Vec<u32> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn unmatched_category_yields_empty() {
        let out = filter_by_category(SAMPLE, Some(ProjectCategory::Backend), |p| p.category);
        assert!(out.is_empty());
    }
}
