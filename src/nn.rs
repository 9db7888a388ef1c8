pub mod activation;
pub mod builder;
pub mod config;
pub mod connection;
pub mod initializers;
pub mod layer;
pub mod learning_rate;
pub mod network;
pub mod trainer;
pub mod unit;
