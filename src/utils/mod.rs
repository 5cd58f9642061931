pub mod error;
pub mod validation;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult, PathError, ValidationError};
pub use validation::validate_settings;
pub use fs::{get_file_size, validate_input_path, write_atomically};

/// Extracts the file name component of `path` for log output.
pub fn extract_filename(path: &std::path::Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}
