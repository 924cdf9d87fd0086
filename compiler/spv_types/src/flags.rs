//! Validation strictness flags.
//!
//! The defaults enforce every check. Tools that load partially supported
//! modules relax them through `SPV_VALIDATE`, a comma-separated list:
//! - `word-count` - serialized word count must match the fields
//! - `recursive` - validate referenced types too
//! - `strict-images` - images must use the OpenCL subset
//! - `all` / `none`
//!
//! Example: `SPV_VALIDATE=word-count,recursive cargo test`

use std::sync::OnceLock;

use bitflags::bitflags;

bitflags! {
    /// Which checks `validate` performs.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ValidationFlags: u32 {
        /// Recorded word count must equal what the fields serialize to.
        const CHECK_WORD_COUNT = 1 << 0;
        /// Follow referenced types and validate them as well.
        const RECURSIVE = 1 << 1;
        /// Images must have sampled == 0 and an Unknown format.
        const STRICT_OPENCL_IMAGES = 1 << 2;
    }
}

impl ValidationFlags {
    /// Every check enabled.
    pub const DEFAULT: Self = Self::all();

    /// Parse flags from a comma-separated list. Unknown names are ignored.
    pub fn parse(s: &str) -> Self {
        let mut flags = Self::empty();
        for part in s.split(',') {
            match part.trim().to_lowercase().as_str() {
                "word-count" => flags |= Self::CHECK_WORD_COUNT,
                "recursive" => flags |= Self::RECURSIVE,
                "strict-images" => flags |= Self::STRICT_OPENCL_IMAGES,
                "all" => flags |= Self::all(),
                _ => {}
            }
        }
        flags
    }

    /// Flags from `SPV_VALIDATE`, read once and cached.
    ///
    /// Unset means [`ValidationFlags::DEFAULT`].
    pub fn from_env() -> Self {
        static FLAGS: OnceLock<ValidationFlags> = OnceLock::new();
        *FLAGS.get_or_init(|| {
            std::env::var("SPV_VALIDATE")
                .ok()
                .map_or(Self::DEFAULT, |s| Self::parse(&s))
        })
    }
}

impl Default for ValidationFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests;
