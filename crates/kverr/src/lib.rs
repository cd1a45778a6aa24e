//! # kverr
//!
//! Structured error wrapping with ordered key/value attributes.
//!
//! ## Design Philosophy
//!
//! - **One cause**: an [`Error`] wraps exactly one underlying error, preserved
//!   verbatim through any number of wraps — a flat attribute list, not a tree
//!   of causes.
//! - **Ordered attributes**: diagnostic context is an alternating key, value
//!   sequence. Insertion order is kept; deduplication happens only when a map
//!   or string view is rendered.
//! - **Call-site breadcrumbs**: every wrap appends `location` and `function`
//!   attributes, so the map view reads like a trail of where the error passed.
//! - **Total operations**: malformed input (odd field lists, dangling keys,
//!   wrapping nothing) degrades to diagnostic attributes and `tracing`
//!   warnings, never a panic.
//!
//! ## Usage
//!
//! ```rust
//! use kverr::{wrap, Severity};
//!
//! fn read_config() -> kverr::Result<String> {
//!     let err = std::io::Error::other("config.toml not found");
//!     let mut err = wrap!(err, "path", "config.toml", "attempt", 1);
//!     err.set_user_message("Configuration is missing", Severity::Error);
//!     Err(err)
//! }
//!
//! let err = read_config().unwrap_err();
//! assert_eq!(err.message(), "config.toml not found");
//! assert_eq!(err.attrs_map()["path"], "config.toml");
//! assert!(err.attrs_map().contains_key("location"));
//! ```
//!
//! ## Principles
//!
//! - Wrapping an error produces a new value; the two mutating accessors
//!   ([`Error::append_attrs`], [`Error::set_user_message`]) carry no internal
//!   locking, so share-then-mutate needs external synchronization.
//! - An [`Error`] is also a plain [`std::error::Error`]; any consumer that
//!   only wants a message never has to know about the attributes.
//! - Consumers that do want structure call [`Error::attrs_map`] or
//!   [`Error::raw_attrs`] and hand the result to their logger.

pub mod attr;
pub mod error;
pub mod render;
pub mod severity;
pub mod site;

pub use attr::{AttrValue, MSG_KEY, WARNING_KEY};
pub use error::{Error, wrap_opt};
pub use render::{render_pairs, summarize_list};
pub use severity::{
    Severity, USER_MSG_KEY, USER_MSG_SEVERITY_KEY, string_from_err, user_message_or,
};
pub use site::{CallSite, FUNCTION_KEY, LOCATION_KEY};

/// Any boxed error that can serve as a cause.
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias using the structured [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
