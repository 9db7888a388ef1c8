//! A small feed-forward network of individually wired units, trained with the delta rule.

pub mod cost_functions;
pub mod error;
pub mod nn;
pub mod partition;
pub mod partitioner;
pub mod statistics;

pub use error::{NetworkError, Result};
pub use nn::activation::Activation;
pub use nn::builder::NetworkBuilder;
pub use nn::config::NetworkConfig;
pub use nn::connection::{delta_rule, Connection, ConnectionId, ConnectionView};
pub use nn::layer::{Layer, LayerId};
pub use nn::network::Network;
pub use nn::unit::{Unit, UnitId};
