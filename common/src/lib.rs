pub mod config;
pub mod defaults;
pub mod logger;
pub mod games;
