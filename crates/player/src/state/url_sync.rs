//! URL state synchronizer
//!
//! `BrowseQuery` maps `BrowseFilters` to and from the query component of the
//! list route (`?search=char&type=fire,water`). Encoding always restates
//! both parameters so a write never drops the other filter.

use std::fmt;

use url::form_urlencoded;

use pokedex_domain::{BrowseFilters, CategoryName};

pub const SEARCH_PARAM: &str = "search";
pub const TYPE_PARAM: &str = "type";

const TYPE_SEPARATOR: &str = ",";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseQuery(BrowseFilters);

impl BrowseQuery {
    pub fn new(filters: BrowseFilters) -> Self {
        Self(filters)
    }

    pub fn filters(&self) -> &BrowseFilters {
        &self.0
    }

    /// Read filters from a query string, with or without the leading `?`.
    ///
    /// Absent parameters read as empty. Category tokens that are empty or
    /// invalid are skipped, as are repeats.
    pub fn decode(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut search = String::new();
        let mut categories = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                SEARCH_PARAM => search = value.into_owned(),
                TYPE_PARAM => {
                    categories = value
                        .split(TYPE_SEPARATOR)
                        .filter(|token| !token.trim().is_empty())
                        .filter_map(|token| match CategoryName::new(token) {
                            Ok(name) => Some(name),
                            Err(e) => {
                                tracing::debug!(token, error = %e, "Ignoring category in address");
                                None
                            }
                        })
                        .collect();
                }
                _ => {}
            }
        }

        Self(BrowseFilters::new(search, categories))
    }

    /// Write both parameters, even when empty.
    pub fn encode(&self) -> String {
        let types = self
            .0
            .categories()
            .iter()
            .map(CategoryName::as_str)
            .collect::<Vec<_>>()
            .join(TYPE_SEPARATOR);

        form_urlencoded::Serializer::new(String::new())
            .append_pair(SEARCH_PARAM, self.0.search())
            .append_pair(TYPE_PARAM, &types)
            .finish()
    }
}

impl From<BrowseFilters> for BrowseQuery {
    fn from(filters: BrowseFilters) -> Self {
        Self(filters)
    }
}

// Route query segments are parsed through `From<&str>` and written through
// `Display`.
impl From<&str> for BrowseQuery {
    fn from(query: &str) -> Self {
        Self::decode(query)
    }
}

impl fmt::Display for BrowseQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str) -> CategoryName {
        CategoryName::new(name).unwrap()
    }

    fn names(query: &BrowseQuery) -> Vec<&str> {
        query.filters().categories().iter().map(CategoryName::as_str).collect()
    }

    #[test]
    fn absent_parameters_decode_to_empty_filters() {
        assert_eq!(BrowseQuery::decode(""), BrowseQuery::default());
        assert_eq!(BrowseQuery::decode("?"), BrowseQuery::default());
        assert_eq!(BrowseQuery::decode("page=2"), BrowseQuery::default());
    }

    #[test]
    fn decodes_search_and_ordered_types() {
        let query = BrowseQuery::decode("?search=char&type=water,fire");
        assert_eq!(query.filters().search(), "char");
        assert_eq!(names(&query), ["water", "fire"]);
    }

    #[test]
    fn decodes_percent_encoded_values() {
        let query = BrowseQuery::decode("search=mr.%20mime&type=psychic%2Cfairy");
        assert_eq!(query.filters().search(), "mr. mime");
        assert_eq!(names(&query), ["psychic", "fairy"]);
    }

    #[test]
    fn skips_empty_invalid_and_repeated_types() {
        let query = BrowseQuery::decode("type=fire,,bad/token,fire,Water");
        assert_eq!(names(&query), ["fire", "water"]);
    }

    #[test]
    fn encode_always_writes_both_parameters() {
        assert_eq!(BrowseQuery::default().encode(), "search=&type=");

        let only_search = BrowseQuery::new(BrowseFilters::new("pika", []));
        assert_eq!(only_search.encode(), "search=pika&type=");

        let only_types = BrowseQuery::new(BrowseFilters::new("", [cat("grass")]));
        assert_eq!(only_types.encode(), "search=&type=grass");
    }

    #[test]
    fn category_list_survives_the_address_bar() {
        let query = BrowseQuery::new(BrowseFilters::new("", [cat("fire"), cat("water")]));
        let decoded = BrowseQuery::decode(&query.to_string());
        assert_eq!(names(&decoded), ["fire", "water"]);
        assert_eq!(decoded, query);
    }

    #[test]
    fn search_with_reserved_characters_survives_the_address_bar() {
        let query = BrowseQuery::new(BrowseFilters::new("a&b=c ?", [cat("ice")]));
        assert_eq!(BrowseQuery::from(query.to_string().as_str()), query);
    }

    #[test]
    fn editing_one_field_restates_the_other() {
        let query = BrowseQuery::decode("search=saur&type=grass");
        let next = BrowseQuery::new(query.filters().with_category(cat("poison"), true));
        assert_eq!(next.encode(), "search=saur&type=grass%2Cpoison");
    }
}
