pub mod commands;
pub mod handler;

pub use handler::run;
