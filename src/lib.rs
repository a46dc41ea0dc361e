//! # imagecraft
//!
//! A small interactive image editor. An image is loaded into a session,
//! transformed by simple per-pixel filters (negative, brighten, colorize,
//! black-and-white threshold, red-green colorblindness simulation, naive
//! edge detection), cropped or scaled down, viewed and saved.
//!
//! ## Example
//!
//! ```no_run
//! use imagecraft::filters::Filter;
//! use imagecraft::{Session, SessionConfig};
//!
//! # fn main() -> imagecraft::Result<()> {
//! let mut session = Session::new(SessionConfig::default())?;
//! session.load("photo.png")?;
//! session.apply(Filter::Brighten { delta: 40 })?;
//!
//! let stdin = std::io::stdin();
//! session.run(stdin.lock(), std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filters;
pub mod image;
pub mod session;
pub mod viewer;

pub use error::{Error, Result};
pub use session::{Session, SessionConfig};
