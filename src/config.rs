//! Settings document schema and loader.
//!
//! This module exposes the rendering settings that drive the external
//! spectrogram renderer, and the loader that parses the on-disk document
//! while fingerprinting the exact bytes it parsed.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
