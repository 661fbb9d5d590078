mod renumber_config;

pub use renumber_config::RenumberConfiguration;
