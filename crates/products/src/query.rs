//! Shop query engine: filter + sort over a borrowed catalog.
//!
//! Filtering is conjunctive and sorting is stable, so equal keys keep catalog
//! order. The catalog itself is never touched; results borrow from it.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::text::SearchTerm;
use storefront_core::{DomainError, DomainResult, Money, ValueObject};

use crate::catalog::Catalog;
use crate::product::Product;

/// Inclusive price bounds. Deserialization goes through [`PriceRange::new`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceRange")]
pub struct PriceRange {
    lower: Money,
    upper: Money,
}

#[derive(Deserialize)]
struct RawPriceRange {
    lower: Money,
    upper: Money,
}

impl TryFrom<RawPriceRange> for PriceRange {
    type Error = DomainError;

    fn try_from(raw: RawPriceRange) -> Result<Self, Self::Error> {
        PriceRange::new(raw.lower, raw.upper)
    }
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub const UNBOUNDED: PriceRange = PriceRange {
        lower: Money::ZERO,
        upper: Money::MAX,
    };

    pub fn new(lower: Money, upper: Money) -> DomainResult<Self> {
        if lower > upper {
            return Err(DomainError::validation(format!(
                "price range lower bound {} exceeds upper bound {}",
                lower.minor(),
                upper.minor()
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> Money {
        self.lower
    }

    pub fn upper(&self) -> Money {
        self.upper
    }

    pub fn contains(&self, price: Money) -> bool {
        self.lower <= price && price <= self.upper
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Shop sort options.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Rating => "rating",
            SortOption::Newest => "newest",
        }
    }

    /// Lenient parse used for URL parameters: anything unknown is `Featured`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            None => SortOption::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(sort = raw, "unknown sort option, using featured");
                SortOption::default()
            }),
        }
    }
}

impl FromStr for SortOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "featured" => Ok(SortOption::Featured),
            "price-asc" => Ok(SortOption::PriceAsc),
            "price-desc" => Ok(SortOption::PriceDesc),
            "rating" => Ok(SortOption::Rating),
            "newest" => Ok(SortOption::Newest),
            other => Err(DomainError::validation(format!("unknown sort option '{other}'"))),
        }
    }
}

/// User-selected shop criteria. Replaced wholesale on every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub category: Option<String>,
    pub search: String,
    pub price: PriceRange,
    pub in_stock_only: bool,
    /// Ignored when `<= 0`.
    pub min_rating: f64,
    pub sort: SortOption,
}

impl FilterConfig {
    fn matches(&self, product: &Product, term: Option<&SearchTerm>) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }

        if let Some(term) = term {
            let fields = [
                product.name.as_str(),
                product.description.as_str(),
                product.category.as_str(),
            ];
            if !term.matches_any(fields) {
                return false;
            }
        }

        if !self.price.contains(product.price) {
            return false;
        }

        if self.in_stock_only && !product.in_stock() {
            return false;
        }

        if self.min_rating > 0.0 && product.rating < self.min_rating {
            return false;
        }

        true
    }
}

/// Filter and order the catalog for the shop page.
pub fn query<'a>(catalog: &'a Catalog, config: &FilterConfig) -> Vec<&'a Product> {
    let term = SearchTerm::new(&config.search);

    let mut result: Vec<&Product> = catalog
        .iter()
        .filter(|p| config.matches(p, term.as_ref()))
        .collect();

    match config.sort {
        SortOption::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::Featured => result.sort_by_key(|p| !p.featured),
        SortOption::Newest => {}
    }

    tracing::debug!(
        catalog = catalog.len(),
        matched = result.len(),
        sort = config.sort.as_str(),
        "catalog query"
    );

    result
}
