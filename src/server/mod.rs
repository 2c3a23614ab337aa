//! Server module: host, builder and protocol exposures

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::GraphQLExposure;
pub use host::ServerHost;
