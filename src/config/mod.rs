pub mod config_load;
pub mod config_types;
pub mod error;

pub use config_load::Config;
pub use config_types::{
    color_to_rgba, ColorConfig, GridConfig, HeroConfig, StyleConfig, WindowConfig,
};
pub use error::ConfigError;
