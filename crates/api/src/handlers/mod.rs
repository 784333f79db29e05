pub mod catalog;
pub mod companies;
pub mod dataset;
pub mod models;
