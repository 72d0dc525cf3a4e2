//! Product Filtering
//!
//! Title search + category selection over a product list, and the
//! distinct category list for the selector.

use std::collections::HashSet;

use crate::domain::{CategoryOption, Product};

/// Category selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// No category filter
    #[default]
    All,
    /// Only products of this category id
    Only(u32),
}

impl CategorySelection {
    /// Wire value of the "all" sentinel in the `<select>`
    pub const ALL_VALUE: &'static str = "all";

    /// Parse a `<select>` value; anything that is not a category id means `All`
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(id) => CategorySelection::Only(id),
            Err(_) => CategorySelection::All,
        }
    }

    pub fn as_value(&self) -> String {
        match self {
            CategorySelection::All => Self::ALL_VALUE.to_string(),
            CategorySelection::Only(id) => id.to_string(),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(id) => product.category.id == *id,
        }
    }
}

/// Free-text title query combined with a category selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub query: String,
    pub category: CategorySelection,
}

impl ProductFilter {
    pub fn new(query: impl Into<String>, category: CategorySelection) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Products passing both predicates, in input order
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let needle = self.query.to_lowercase();
        products
            .iter()
            .filter(|p| title_matches(&p.title, &needle) && self.category.matches(p))
            .collect()
    }
}

fn title_matches(title: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || title.to_lowercase().contains(needle_lower)
}

/// Owned variant of `ProductFilter::apply` for view state
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    filter.apply(products).into_iter().cloned().collect()
}

/// First-seen name per category id, in first-seen order
pub fn distinct_categories(products: &[Product]) -> Vec<CategoryOption> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.id))
        .map(|p| CategoryOption {
            id: p.category.id,
            name: p.category.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn make_product(id: u32, title: &str, category_id: u32, category_name: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 1.0,
            description: String::new(),
            images: vec![],
            category: Category {
                id: category_id,
                name: category_name.to_string(),
                image: String::new(),
            },
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            make_product(1, "Classic Red Hoodie", 1, "Clothes"),
            make_product(2, "Sleek Wireless Mouse", 2, "Electronics"),
            make_product(3, "Red Running Shoes", 4, "Shoes"),
            make_product(4, "Classic Blue Jeans", 1, "Clothes"),
            make_product(5, "Gaming Headset", 2, "Gadgets"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_title_search_is_case_insensitive() {
        let products = catalog();
        let filter = ProductFilter::new("rEd", CategorySelection::All);
        assert_eq!(ids(&filter.apply(&products)), vec![1, 3]);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let products = catalog();
        let filter = ProductFilter::default();
        assert_eq!(filter.apply(&products).len(), products.len());
    }

    #[test]
    fn test_category_and_title_combine() {
        let products = catalog();
        let filter = ProductFilter::new("classic", CategorySelection::Only(1));
        assert_eq!(ids(&filter.apply(&products)), vec![1, 4]);

        let filter = ProductFilter::new("red", CategorySelection::Only(1));
        assert_eq!(ids(&filter.apply(&products)), vec![1]);
    }

    #[test]
    fn test_all_equals_title_only_search() {
        let products = catalog();
        for query in ["", "a", "classic", "mouse", "zzz"] {
            let with_all = filter_products(&products, &ProductFilter::new(query, CategorySelection::All));
            let title_only: Vec<Product> = products
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&query.to_lowercase()))
                .cloned()
                .collect();
            assert_eq!(with_all, title_only, "query {:?}", query);
        }
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(CategorySelection::parse("all"), CategorySelection::All);
        assert_eq!(CategorySelection::parse("12"), CategorySelection::Only(12));
        assert_eq!(CategorySelection::parse("bogus"), CategorySelection::All);
        assert_eq!(CategorySelection::Only(3).as_value(), "3");
        assert_eq!(CategorySelection::All.as_value(), "all");
    }

    #[test]
    fn test_distinct_categories_first_seen() {
        let products = catalog();
        let categories = distinct_categories(&products);
        let pairs: Vec<(u32, &str)> = categories.iter().map(|c| (c.id, c.name.as_str())).collect();
        // Category 2 keeps its first-seen name "Electronics"
        assert_eq!(pairs, vec![(1, "Clothes"), (2, "Electronics"), (4, "Shoes")]);
    }

    #[test]
    fn test_distinct_categories_empty() {
        assert!(distinct_categories(&[]).is_empty());
    }
}
