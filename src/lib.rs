pub mod command;
pub mod engine;
pub mod frontend;
pub mod logging;
pub mod shared;
