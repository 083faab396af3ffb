//! Core reorientation algorithms.
//!
//! ## Modules
//!
//! - [`intervals`]: Merging and subtracting closed integer ranges
//! - [`intergenic`]: Non-coding regions derived from a gene annotation
//! - [`terminal_repeat`]: Detection of duplicated sequence ends
//!
//! ## Algorithm Overview
//!
//! A circular sequence is reoriented in three steps:
//!
//! 1. **Trimming**: Optionally drop a terminal segment that repeats the start
//! 2. **Candidate Selection**: Rank the intergenic regions by length
//! 3. **Rotation**: Rotate the sequence to the midpoint of each candidate in
//!    turn until the oracle no longer reports a gene cut by the sequence ends

pub mod intergenic;
pub mod intervals;
pub mod terminal_repeat;
