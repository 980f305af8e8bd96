pub mod config;
pub mod instrument;
pub mod path;
pub mod time;
