//! Structural analysis of slide Markdown and layout inference.
//!
//! [`analyze`] fingerprints a slide's raw text; [`classify`] maps that
//! fingerprint and the slide's position to a [`Layout`].

pub mod layout;
pub mod profile;

pub use layout::{Layout, classify};
pub use profile::{ContentProfile, analyze};
