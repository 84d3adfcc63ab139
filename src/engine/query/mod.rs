pub mod compiler;

pub use compiler::{CompiledQuery, compile};
