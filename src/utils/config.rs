use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}

/// Reads a boolean toggle: only a case-insensitive `true` switches it on
pub fn get_env_flag(env_var: &str) -> bool {
    env::var(env_var)
        .map(|val| val.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Gets a non-empty string variable, falling back to `fallback` when unset or blank
pub fn get_env_string_or(env_var: &str, fallback: &str) -> String {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => fallback.to_string(),
    }
}
