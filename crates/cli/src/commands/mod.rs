pub mod compare;
pub mod confidence;
pub mod config;
pub mod mutate;
pub mod reads;
