pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod ops;
pub mod routes;
pub mod server;
pub mod store;
pub mod validate;
