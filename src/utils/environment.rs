use std::env;
use std::path::PathBuf;

/// Base directory used when neither a flag nor the environment provides one.
pub const DEFAULT_BASE_DIR: &str = "interview/questions";

/// Output file used when neither a flag nor the environment provides one.
pub const DEFAULT_OUTPUT_FILE: &str = "questions_output.txt";

pub const BASE_DIR_ENV: &str = "QUESTION_CATALOG_BASE_DIR";
pub const OUTPUT_FILE_ENV: &str = "QUESTION_CATALOG_OUT";

/// Resolves the base directory: explicit flag, then `QUESTION_CATALOG_BASE_DIR`, then the default.
pub fn get_base_dir(flag: Option<PathBuf>) -> PathBuf {
    resolve_setting(flag, env::var(BASE_DIR_ENV).ok(), DEFAULT_BASE_DIR)
}

/// Resolves the output file: explicit flag, then `QUESTION_CATALOG_OUT`, then the default.
pub fn get_output_file(flag: Option<PathBuf>) -> PathBuf {
    resolve_setting(flag, env::var(OUTPUT_FILE_ENV).ok(), DEFAULT_OUTPUT_FILE)
}

fn resolve_setting(flag: Option<PathBuf>, from_env: Option<String>, default: &str) -> PathBuf {
    flag.or_else(|| from_env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}
