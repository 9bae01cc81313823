//! `data-cy` hook names for UI automation. These strings are a stable
//! contract; do not rename them.

use serde::Serialize;

pub const PRODUCT_TABLE: &str = "ProductTable";
pub const PRODUCT_ROW: &str = "Product";
pub const PRODUCT_ID: &str = "ProductId";
pub const PRODUCT_NAME: &str = "ProductName";
pub const PRODUCT_CATEGORY: &str = "ProductCategory";
pub const PRODUCT_USER: &str = "ProductUser";
pub const SEARCH_FIELD: &str = "SearchField";
pub const CLEAR_BUTTON: &str = "ClearButton";
pub const FILTER_ALL_USERS: &str = "FilterAllUsers";
pub const FILTER_USER: &str = "FilterUser";
pub const CATEGORY: &str = "Category";
pub const ALL_CATEGORIES: &str = "AllCategories";
pub const RESET_ALL_BUTTON: &str = "ResetAllButton";
pub const SORT_ICON: &str = "SortIcon";
pub const NO_MATCHING_MESSAGE: &str = "NoMatchingMessage";

/// The hook names as a template value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HookNames {
    pub product_table: &'static str,
    pub product_row: &'static str,
    pub product_id: &'static str,
    pub product_name: &'static str,
    pub product_category: &'static str,
    pub product_user: &'static str,
    pub search_field: &'static str,
    pub clear_button: &'static str,
    pub filter_all_users: &'static str,
    pub filter_user: &'static str,
    pub category: &'static str,
    pub all_categories: &'static str,
    pub reset_all_button: &'static str,
    pub sort_icon: &'static str,
    pub no_matching_message: &'static str,
}

pub const HOOKS: HookNames = HookNames {
    product_table: PRODUCT_TABLE,
    product_row: PRODUCT_ROW,
    product_id: PRODUCT_ID,
    product_name: PRODUCT_NAME,
    product_category: PRODUCT_CATEGORY,
    product_user: PRODUCT_USER,
    search_field: SEARCH_FIELD,
    clear_button: CLEAR_BUTTON,
    filter_all_users: FILTER_ALL_USERS,
    filter_user: FILTER_USER,
    category: CATEGORY,
    all_categories: ALL_CATEGORIES,
    reset_all_button: RESET_ALL_BUTTON,
    sort_icon: SORT_ICON,
    no_matching_message: NO_MATCHING_MESSAGE,
};
