//! # stencil-parser
//!
//! Token primitives for the stencil template format.
//!
//! A stencil source interleaves literal text with delimited constructs:
//! `{{ ... }}` outputs and `<!-- ... -->` tags in the stock dialect. The
//! scanner that discovers construct boundaries and the parser that assembles
//! templates both live elsewhere; this crate owns the token values that flow
//! between them: span bookkeeping over the caller's source buffer, row/column
//! computation for diagnostics, and the whitespace-control trimming applied
//! to delimited payloads.
//!
//! Tokens borrow the source buffer instead of copying it, so location
//! information stays byte-accurate from the scanner all the way to error
//! reporting, and the buffer-outlives-tokens ownership policy is enforced by
//! the compiler.

pub mod stencil;
