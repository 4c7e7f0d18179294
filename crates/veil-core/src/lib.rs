//! # Veil Core API
//!
//! Hides a text message in the least significant bits of an RGB image and
//! unveils it again. The building blocks are
//! - [`bits`] turning text into a sentinel terminated bitstream and back
//! - [`capacity`] deciding if a bitstream fits into a carrier
//! - [`embed`][mod@embed] writing a bitstream into a [`PixelBuffer`]
//! - [`extract`][mod@extract] scanning a [`PixelBuffer`] for a message
//!
//! Files are handled by [`media`] and the builders in [`api`].
//!
//! # Usage Examples
//!
//! ## Hide and unveil in memory
//!
//! ```rust
//! use veil_core::{extract, hide_message, NoProgress, PixelBuffer};
//!
//! let mut carrier = PixelBuffer::new(4, 4, vec![128; 48]);
//! hide_message(&mut carrier, "Hi", &mut NoProgress).expect("Failed to hide message");
//!
//! let message = extract(&carrier, &mut NoProgress).expect("Failed to scan carrier");
//! assert_eq!(message.as_deref(), Some("Hi"));
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust,no_run
//! veil_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("carrier.jpg")
//!     .with_output("image-with-a-secret.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod capacity;
pub mod embed;
pub mod error;
pub mod extract;
pub mod media;
pub mod pixels;
pub mod progress;
pub mod result;
pub mod task;

pub use crate::bits::{deserialize, serialize, Bitstream, SENTINEL};
pub use crate::embed::{embed, hide_message};
pub use crate::error::{Fault, SteganoError};
pub use crate::extract::{extract, lsb_bytes};
pub use crate::pixels::PixelBuffer;
pub use crate::progress::{NoProgress, ProgressReporter, SharedProgress, Throttled};
pub use crate::result::Result;
pub use crate::task::Job;
