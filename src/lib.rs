//! bytesep
//!
//! Small helpers for working with sequences of byte arrays.
//!
//! `bytesep` covers three recurring chores in byte-oriented code:
//!
//! - measuring a list of byte arrays ([`total_length`])
//! - joining a list of byte arrays into one buffer ([`concat`], [`concat_into`])
//! - finding a separator inside a byte array, optionally within a sub-range
//!   ([`index_of`], [`index_of_in`], [`index_of_range`])
//!
//! The crate intentionally:
//! - does NOT stream or keep state between calls
//! - does NOT preprocess needles (plain sliding-window search)
//! - does NOT encode or decode anything
//!
//! Every function is pure. Index arguments are checked and reported as
//! [`ByteError`] instead of panicking.
//!
//! # Example
//!
//! ```
//! use bytesep::{concat, index_of, index_of_in, total_length};
//!
//! let parts: [&[u8]; 3] = [b"GET / HTTP/1.1", b"\r\n", b"Host: a\r\n"];
//! let request = concat(&parts);
//! assert_eq!(request.len(), total_length(&parts));
//!
//! let line_end = index_of(&request, b"\r\n").unwrap();
//! assert_eq!(&request[..line_end], b"GET / HTTP/1.1");
//!
//! let next = index_of_in(&request, line_end + 2, request.len(), b"\r\n")?;
//! assert_eq!(next, Some(request.len() - 2));
//! # Ok::<(), bytesep::ByteError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod join;
mod range;
mod search;

//
// Public surface
//

pub use error::ByteError;
pub use join::{concat, concat_into, total_length};
pub use range::SearchRange;
pub use search::{index_of, index_of_in, index_of_range};
