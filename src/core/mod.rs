pub mod engine;
pub mod errors;
pub mod services;
pub mod time;
pub mod utils;
