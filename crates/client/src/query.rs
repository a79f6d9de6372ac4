//! Query-parameter types for the product listing endpoint.

use shoplite_core::CategoryId;

/// Sort order for product listings.
///
/// The remote's default ordering is expressed by omitting the parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl ProductSort {
    const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::PriceAsc => Some("price_asc"),
            Self::PriceDesc => Some("price_desc"),
        }
    }
}

/// Filters for `GET /products`. All fields are optional; absent or empty
/// values are omitted from the request entirely rather than sent empty.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Restrict to one category.
    pub category: Option<CategoryId>,
    pub sort: ProductSort,
    /// Free-text search.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl ProductQuery {
    /// Render the query as key/value pairs, skipping everything unset.
    #[must_use]
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(sort) = self.sort.as_param() {
            pairs.push(("sort", sort.to_string()));
        }
        if let Some(search) = self.search.as_deref()
            && !search.is_empty()
        {
            pairs.push(("search", search.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}
