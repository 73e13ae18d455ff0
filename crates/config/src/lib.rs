pub mod env;
pub mod tracing_init;

pub use env::{env_or, env_parse_or, AppConfig};
pub use tracing_init::init_tracing;
