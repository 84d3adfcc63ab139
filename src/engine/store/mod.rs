pub mod sqlite;

pub use sqlite::{PolicyStore, ResultSet};
