//! Reference-string and frame-count handling for the presentation layer.
//!
//! The simulators accept any sequence and any capacity of at least one; the
//! bounds enforced here belong to the application, not the core.

pub mod error;

use log::warn;
use rand::Rng;

use crate::common::types::PageId;

pub use error::{InputError, Result};

/// Sample input shown when the application starts
pub const DEFAULT_REFERENCE_STRING: &str = "7, 0, 1, 2, 0, 3, 0, 4";
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Bounds for user input and random reference strings
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Largest frame count accepted
    pub max_frames: usize,
    /// Shortest random reference string
    pub random_min_len: usize,
    /// Longest random reference string
    pub random_max_len: usize,
    /// Largest page number in a random reference string
    pub max_page: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_frames: 10,
            random_min_len: 10,
            random_max_len: 19,
            max_page: 9,
        }
    }
}

/// Splits a comma-separated list into pages, dropping tokens that are not
/// non-negative integers.
pub fn parse_reference_string(input: &str) -> Vec<PageId> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    input
        .split(',')
        .map(str::trim)
        .filter_map(|token| match token.parse::<u32>() {
            Ok(page) => Some(PageId(page)),
            Err(err) => {
                if !token.is_empty() {
                    warn!("Skipping reference '{}': {}", token, err);
                }
                None
            }
        })
        .collect()
}

/// Rejects an empty sequence; the application needs something to step through
pub fn validate_reference_string(references: &[PageId]) -> Result<()> {
    if references.is_empty() {
        return Err(InputError::EmptyReferenceString);
    }
    Ok(())
}

pub fn validate_frame_count(frames: usize, config: &InputConfig) -> Result<usize> {
    if frames < 1 || frames > config.max_frames {
        return Err(InputError::InvalidFrameCount {
            value: frames,
            max: config.max_frames,
        });
    }
    Ok(frames)
}

pub fn parse_frame_count(input: &str, config: &InputConfig) -> Result<usize> {
    let input = input.trim();
    let frames = input
        .parse::<usize>()
        .map_err(|_| InputError::UnparseableFrameCount(input.to_string()))?;
    validate_frame_count(frames, config)
}

/// Random reference string with length and page range taken from `config`
pub fn random_reference_string<R: Rng + ?Sized>(rng: &mut R, config: &InputConfig) -> Vec<PageId> {
    let len = rng.gen_range(config.random_min_len..=config.random_max_len.max(config.random_min_len));
    (0..len)
        .map(|_| PageId(rng.gen_range(0..=config.max_page)))
        .collect()
}

/// Comma-separated form accepted by [`parse_reference_string`]
pub fn format_reference_string(references: &[PageId]) -> String {
    references
        .iter()
        .map(PageId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
