pub mod config;
pub mod configure;
pub mod stack;
