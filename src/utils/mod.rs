pub mod environment;
pub mod paths;

pub use environment::{get_base_dir, get_output_file};
pub use paths::{format_path_with_tilde, validate_file_size};
