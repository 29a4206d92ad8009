use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money};
use storefront_products::{query, FilterConfig, PriceRange, SortOption};

use crate::context::StoreContext;
use crate::pages::{split_pair, ProductCard};

/// Raw shop query parameters, as they arrive from the URL or form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShopParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock: Option<String>,
    pub min_rating: Option<String>,
    pub sort: Option<String>,
}

impl ShopParams {
    /// Collect `key=value` pairs (`category=tools`, `max-price=50`, ...).
    ///
    /// Keys accept kebab-case or the camelCase used in URLs. Values are kept
    /// raw; [`ShopParams::to_filter`] validates them.
    pub fn from_pairs<I, S>(pairs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::default();
        for pair in pairs {
            let (key, value) = split_pair(pair.as_ref())?;
            let slot = match key {
                "category" => &mut params.category,
                "search" => &mut params.search,
                "min-price" | "minPrice" => &mut params.min_price,
                "max-price" | "maxPrice" => &mut params.max_price,
                "in-stock" | "inStock" => &mut params.in_stock,
                "min-rating" | "minRating" => &mut params.min_rating,
                "sort" => &mut params.sort,
                other => {
                    return Err(DomainError::validation(format!(
                        "unknown shop parameter '{other}'"
                    )));
                }
            };
            *slot = Some(value.to_string());
        }
        Ok(params)
    }

    /// Validate into a [`FilterConfig`].
    ///
    /// Price bounds default to `0..=slider_max` and are clamped to it;
    /// non-numeric bounds or ratings are rejected rather than guessed at.
    pub fn to_filter(&self, slider_max: Money) -> DomainResult<FilterConfig> {
        let bound = |raw: &Option<String>, default: Money| -> DomainResult<Money> {
            match raw.as_deref().map(str::trim) {
                None | Some("") => Ok(default),
                Some(raw) => Ok(Money::parse_decimal(raw)?.min(slider_max)),
            }
        };
        let lower = bound(&self.min_price, Money::ZERO)?;
        let upper = bound(&self.max_price, slider_max)?;

        let min_rating = match self.min_rating.as_deref().map(str::trim) {
            None | Some("") => 0.0,
            Some(raw) => {
                let rating: f64 = raw
                    .parse()
                    .map_err(|_| DomainError::validation(format!("invalid rating '{raw}'")))?;
                if !(0.0..=5.0).contains(&rating) {
                    return Err(DomainError::validation(format!(
                        "rating {rating} outside 0-5"
                    )));
                }
                rating
            }
        };

        let in_stock_only = match self.in_stock.as_deref().map(str::trim) {
            None | Some("") | Some("false") | Some("0") | Some("off") => false,
            Some("true") | Some("1") | Some("on") => true,
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "invalid in-stock flag '{other}'"
                )));
            }
        };

        Ok(FilterConfig {
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            search: self.search.clone().unwrap_or_default(),
            price: PriceRange::new(lower, upper)?,
            in_stock_only,
            min_rating,
            sort: SortOption::parse_or_default(self.sort.as_deref()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopView {
    pub filter: FilterConfig,
    pub categories: Vec<String>,
    pub products: Vec<ProductCard>,
}

impl ShopView {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

pub fn shop_page(ctx: &StoreContext, params: &ShopParams) -> DomainResult<ShopView> {
    let filter = params.to_filter(ctx.config.price_slider_max)?;
    let currency = ctx.config.currency;

    let products = query(&ctx.catalog, &filter)
        .into_iter()
        .map(|p| ProductCard::new(p, currency))
        .collect();

    Ok(ShopView {
        categories: ctx.catalog.categories().into_iter().map(str::to_string).collect(),
        products,
        filter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max() -> Money {
        Money::from_major_minor(200, 0)
    }

    #[test]
    fn empty_params_give_default_filter_within_slider() {
        let filter = ShopParams::default().to_filter(max()).unwrap();
        assert_eq!(filter.category, None);
        assert_eq!(filter.price, PriceRange::new(Money::ZERO, max()).unwrap());
        assert_eq!(filter.sort, SortOption::Featured);
        assert!(!filter.in_stock_only);
    }

    #[test]
    fn bounds_are_parsed_and_clamped() {
        let params = ShopParams {
            min_price: Some("10".into()),
            max_price: Some("999.99".into()),
            ..Default::default()
        };
        let filter = params.to_filter(max()).unwrap();
        assert_eq!(filter.price.lower(), Money::from_minor(1_000));
        assert_eq!(filter.price.upper(), max());
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let bad_price = ShopParams {
            max_price: Some("cheap".into()),
            ..Default::default()
        };
        assert!(bad_price.to_filter(max()).is_err());

        let bad_rating = ShopParams {
            min_rating: Some("six".into()),
            ..Default::default()
        };
        assert!(bad_rating.to_filter(max()).is_err());

        let out_of_range = ShopParams {
            min_rating: Some("5.5".into()),
            ..Default::default()
        };
        assert!(out_of_range.to_filter(max()).is_err());
    }

    #[test]
    fn pairs_fill_params_and_reject_unknown_keys() {
        let params =
            ShopParams::from_pairs(["category=tools", "maxPrice=50", "sort=price-desc"]).unwrap();
        assert_eq!(params.category.as_deref(), Some("tools"));
        assert_eq!(params.max_price.as_deref(), Some("50"));
        assert_eq!(params.sort.as_deref(), Some("price-desc"));
        assert_eq!(params.search, None);

        assert!(ShopParams::from_pairs(["colour=red"]).is_err());
        assert!(ShopParams::from_pairs(["tools"]).is_err());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let params = ShopParams {
            min_price: Some("150".into()),
            max_price: Some("50".into()),
            ..Default::default()
        };
        assert!(params.to_filter(max()).is_err());
    }

    #[test]
    fn blank_category_means_all_and_flags_parse() {
        let params = ShopParams {
            category: Some("  ".into()),
            in_stock: Some("on".into()),
            sort: Some("rating".into()),
            ..Default::default()
        };
        let filter = params.to_filter(max()).unwrap();
        assert_eq!(filter.category, None);
        assert!(filter.in_stock_only);
        assert_eq!(filter.sort, SortOption::Rating);

        let bad_flag = ShopParams {
            in_stock: Some("perhaps".into()),
            ..Default::default()
        };
        assert!(bad_flag.to_filter(max()).is_err());
    }
}
