//! Categories module - spending categories grouped into needs, wants and misc.

mod categories_model;
mod categories_service;
mod categories_traits;

#[cfg(test)]
mod categories_service_tests;

pub use categories_model::{
    find_category_by_name, sort_categories, Category, NewCategory, Supercategory,
};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
