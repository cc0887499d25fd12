//! Host environment details for the Zellij sandbox, where the host filesystem
//! is mounted under `/host`.

pub mod paths;

pub use paths::get_data_dir;
