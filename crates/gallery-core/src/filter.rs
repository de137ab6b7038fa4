//! Gallery listing filters
//!
//! A listing request may carry several facets at once (`search`, `featured`,
//! `type`, `category`). Exactly one of them is applied, chosen in a fixed order:
//! search, then featured, then type, then category, then the unfiltered list.

use serde::Deserialize;
use utoipa::IntoParams;

/// Value of `type`/`category` meaning "no filter on this facet".
pub const ALL_SENTINEL: &str = "all";

/// Raw query parameters of a gallery listing request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GalleryQuery {
    /// Exact category match (`all` disables the facet)
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive substring over title, description and category
    #[serde(default)]
    pub search: Option<String>,
    /// Exact type match, `image` or `video` (`all` disables the facet)
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    /// Only the literal `true` selects featured items
    #[serde(default)]
    pub featured: Option<String>,
}

/// The single store query a listing request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryFilter {
    Search(String),
    Featured,
    Type(String),
    Category(String),
    All,
}

fn facet(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
}

impl GalleryQuery {
    /// Resolve the competing facets to one filter; first match wins.
    pub fn resolve(&self) -> GalleryFilter {
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            return GalleryFilter::Search(search.to_string());
        }
        if self.featured.as_deref() == Some("true") {
            return GalleryFilter::Featured;
        }
        if let Some(item_type) = facet(&self.item_type) {
            return GalleryFilter::Type(item_type.to_string());
        }
        if let Some(category) = facet(&self.category) {
            return GalleryFilter::Category(category.to_string());
        }
        GalleryFilter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        category: Option<&str>,
        search: Option<&str>,
        item_type: Option<&str>,
        featured: Option<&str>,
    ) -> GalleryQuery {
        GalleryQuery {
            category: category.map(String::from),
            search: search.map(String::from),
            item_type: item_type.map(String::from),
            featured: featured.map(String::from),
        }
    }

    #[test]
    fn search_overrides_every_other_facet() {
        let q = query(Some("art"), Some("x"), Some("video"), Some("true"));
        assert_eq!(q.resolve(), GalleryFilter::Search("x".to_string()));
    }

    #[test]
    fn featured_beats_type_and_category() {
        let q = query(Some("art"), None, Some("video"), Some("true"));
        assert_eq!(q.resolve(), GalleryFilter::Featured);
    }

    #[test]
    fn featured_requires_literal_true() {
        for value in ["false", "1", "TRUE", "yes", ""] {
            let q = query(None, None, None, Some(value));
            assert_eq!(q.resolve(), GalleryFilter::All, "featured={value:?}");
        }
    }

    #[test]
    fn type_beats_category() {
        let q = query(Some("art"), None, Some("video"), None);
        assert_eq!(q.resolve(), GalleryFilter::Type("video".to_string()));
    }

    #[test]
    fn all_sentinel_disables_a_facet() {
        let q = query(Some("art"), None, Some("all"), None);
        assert_eq!(q.resolve(), GalleryFilter::Category("art".to_string()));

        let q = query(Some("all"), None, Some("all"), None);
        assert_eq!(q.resolve(), GalleryFilter::All);
    }

    #[test]
    fn empty_values_count_as_absent() {
        let q = query(Some(""), Some(""), Some(""), None);
        assert_eq!(q.resolve(), GalleryFilter::All);
    }

    #[test]
    fn no_parameters_lists_everything() {
        assert_eq!(GalleryQuery::default().resolve(), GalleryFilter::All);
    }
}
