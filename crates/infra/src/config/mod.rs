//! Configuration loading
//!
//! Loads [`mindset_domain::Config`] from JSON or TOML files with environment
//! overrides applied on top.

pub mod loader;

pub use loader::{
    apply_env_overrides, load, load_from_env, load_from_file, load_with, probe_config_paths,
};
