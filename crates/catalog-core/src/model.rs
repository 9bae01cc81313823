//! Core catalog record types.

use serde::{Deserialize, Serialize};

/// A user identifier.
pub type UserId = u32;

/// A category identifier.
pub type CategoryId = u32;

/// A product identifier.
pub type ProductId = u32;

/// Sex of a user, as stored in the fixture (`"m"` / `"f"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// A user that may own categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

/// A product category, owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

impl Category {
    /// Label shown in the category cell, e.g. `"🍞 - Grocery"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

/// A product as it comes from the fixture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

/// A product joined with its category and (optionally) the category's owner.
///
/// `category` is always resolved; `user` is `None` when the owning user is
/// missing from the fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Category,
    pub user: Option<User>,
}

impl EnrichedProduct {
    /// Id of the owning user, if resolved.
    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }
}
