pub mod catalog;

pub use catalog::FieldCatalog;

#[cfg(test)]
mod catalog_test;
