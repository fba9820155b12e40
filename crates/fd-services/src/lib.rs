//! # fd-services
//!
//! Business-logic layer sitting between the storage plugins and the HTTP
//! boundary.

pub mod food_service;

pub use food_service::{FoodServiceImpl, REPOSITORY_FAILURE};
