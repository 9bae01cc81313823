//! Equality join of products → categories → users.

use std::collections::HashMap;

use crate::model::{Category, CategoryId, EnrichedProduct, Product, ProductId, User, UserId};

/// Errors raised while joining the base relations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    #[error("product {product_id} references missing category {category_id}")]
    MissingCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },
}

/// Join products with their category and the category's owner.
///
/// Categories and users are indexed by id once, then every product is
/// resolved by lookup. When ids repeat, the first record wins.
/// Output order matches `products`.
pub fn join(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Result<Vec<EnrichedProduct>, JoinError> {
    let mut category_index: HashMap<CategoryId, &Category> = HashMap::new();
    for category in categories {
        category_index.entry(category.id).or_insert(category);
    }

    let mut user_index: HashMap<UserId, &User> = HashMap::new();
    for user in users {
        user_index.entry(user.id).or_insert(user);
    }

    let enriched = products
        .iter()
        .map(|product| -> Result<EnrichedProduct, JoinError> {
            let category = category_index
                .get(&product.category_id)
                .copied()
                .ok_or(JoinError::MissingCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                })?;

            let user = user_index.get(&category.owner_id).map(|u| (*u).clone());
            if user.is_none() {
                tracing::warn!(
                    "Category {} references missing owner {}; product {} has no user",
                    category.id,
                    category.owner_id,
                    product.id
                );
            }

            Ok(EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category: category.clone(),
                user,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Joined {} products", enriched.len());
    Ok(enriched)
}
