pub mod environment;

pub use environment::default_log_file;
