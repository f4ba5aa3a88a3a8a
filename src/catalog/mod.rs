pub mod csv;
pub mod loader;
pub mod normalize;

pub use loader::Catalog;
pub use normalize::{normalize_name, parse_salary, split_name_and_jersey};
