pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod logic;
pub mod models;
pub mod storage;

pub use error::{CropWiseError, Result};
