pub mod params;

pub use params::load_config;
