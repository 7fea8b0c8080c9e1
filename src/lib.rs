//! Cragline Client Helpers Library
//!
//! This library provides the thin client layer used by the Cragline
//! climbing-route site. It wraps the Sirv media-hosting REST API
//! (authentication, search, upload, delete, directory management) and bundles
//! the small presentational utilities the site needs for rendering climb and
//! user pages.
//!
//! # Modules
//!
//! - `config` - Configuration management and environment variables
//! - `debounce` - Cancellable debounce handle for coalescing rapid calls
//! - `sirv` - Sirv media API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Presentation utilities and helpers
//!
//! # Example
//!
//! ```
//! use cragline::{config::SirvConfig, sirv::SirvClient};
//!
//! #[tokio::main]
//! async fn main() -> cragline::Res<()> {
//!     cragline::config::load_env().await?;
//!     let client = SirvClient::new(SirvConfig::from_env());
//!     let (images, ids) = client.get_user_images("some-user-uuid", 40, None).await?;
//!     println!("{} images", images.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod debounce;
pub mod sirv;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the library
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use cragline::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the library.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Fetching user images...");
/// info!("Found {} images", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Uploaded {}", filename);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require failing the
/// current operation. Used for recoverable issues or important information
/// that callers should notice.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Sirv read-only credentials are not configured");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
