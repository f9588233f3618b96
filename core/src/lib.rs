pub mod db;
pub mod models;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;
pub mod view;
