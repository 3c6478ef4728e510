//! Products grouped under their categories.

use std::collections::HashMap;

use crate::category::Category;
use crate::ids::CategoryId;
use crate::product::Product;

/// Products keyed by category id, in category order.
///
/// Only categories present in the category list get a key. Products whose
/// category reference is missing or unknown are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsByCategory {
    groups: Vec<(CategoryId, Vec<Product>)>,
    index: HashMap<CategoryId, usize>,
}

impl ProductsByCategory {
    /// Group `products` under `categories`, keeping product order within each group.
    pub fn group(categories: &[Category], products: impl IntoIterator<Item = Product>) -> Self {
        let mut grouped = Self::default();
        for category in categories {
            if !grouped.index.contains_key(&category.id) {
                grouped.index.insert(category.id, grouped.groups.len());
                grouped.groups.push((category.id, Vec::new()));
            }
        }

        for product in products {
            let Some(slot) = product.category_id().and_then(|id| grouped.index.get(&id).copied()) else {
                continue;
            };
            grouped.groups[slot].1.push(product);
        }

        grouped
    }

    /// Products in a category; empty for unknown ids.
    pub fn get(&self, id: CategoryId) -> &[Product] {
        self.index
            .get(&id)
            .map(|&slot| self.groups[slot].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.index.contains_key(&id)
    }

    /// Groups in category order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &[Product])> {
        self.groups.iter().map(|(id, products)| (*id, products.as_slice()))
    }

    /// Number of category keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of products kept across all groups.
    pub fn product_count(&self) -> usize {
        self.groups.iter().map(|(_, products)| products.len()).sum()
    }
}
