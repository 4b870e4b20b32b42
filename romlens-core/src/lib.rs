//! Shared types for the romlens workspace.
//!
//! Everything here is platform-neutral: the analysis error type, the
//! `ReadSeek` reader alias, the video standard carried by region data, and
//! small text/size formatting helpers.

use std::io::{Read, Seek};

pub mod error;
pub mod util;
pub mod video;

pub use error::AnalysisError;
pub use video::VideoStandard;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}
