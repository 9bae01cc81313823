//! Fixture loading.
//!
//! The catalog ships with a small demo data set embedded at compile time.
//! Alternative data sets can be read from a directory holding
//! `users.json`, `categories.json` and `products.json`.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::join::{join, JoinError};
use crate::model::{Category, EnrichedProduct, Product, User};

const BUILTIN_USERS: &str = include_str!("../data/users.json");
const BUILTIN_CATEGORIES: &str = include_str!("../data/categories.json");
const BUILTIN_PRODUCTS: &str = include_str!("../data/products.json");

/// Errors that can occur while loading a fixture.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error reading {file}: {message}")]
    Io { file: String, message: String },

    #[error("JSON parse error in {relation}: {message}")]
    Parse { relation: &'static str, message: String },
}

/// The three base relations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Fixture {
    /// The embedded demo data set.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::from_json(BUILTIN_USERS, BUILTIN_CATEGORIES, BUILTIN_PRODUCTS)
    }

    /// Parse the three relations from JSON text.
    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, FixtureError> {
        Ok(Self {
            users: parse_relation("users", users)?,
            categories: parse_relation("categories", categories)?,
            products: parse_relation("products", products)?,
        })
    }

    /// Read `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, FixtureError> {
        let users = read_file(&dir.join("users.json"))?;
        let categories = read_file(&dir.join("categories.json"))?;
        let products = read_file(&dir.join("products.json"))?;

        tracing::debug!("Loaded fixture from {:?}", dir);
        Self::from_json(&users, &categories, &products)
    }

    /// Join the relations into enriched records.
    pub fn join(&self) -> Result<Vec<EnrichedProduct>, JoinError> {
        join(&self.products, &self.categories, &self.users)
    }
}

fn read_file(path: &Path) -> Result<String, FixtureError> {
    std::fs::read_to_string(path).map_err(|e| FixtureError::Io {
        file: path.display().to_string(),
        message: e.to_string(),
    })
}

fn parse_relation<T: DeserializeOwned>(relation: &'static str, json: &str) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(json).map_err(|e| FixtureError::Parse {
        relation,
        message: e.to_string(),
    })
}
