//! Response decoder module
//!
//! Turns the JSON body of a list endpoint into a [`Page`](crate::pagination::Page).
//!
//! # Envelope
//!
//! ```json
//! {
//!   "limit": 50,
//!   "total_count": 120,
//!   "first": { "href": "https://.../reports?limit=50" },
//!   "next":  { "href": "https://.../reports?limit=50&start=abc", "start": "abc" },
//!   "reports": [ ... ]
//! }
//! ```
//!
//! The item array's field name differs per endpoint; the continuation token is
//! always read from `next`.

mod envelope;

pub use envelope::{extract_next_start, PageDecoder};
