//! File-backed content for character-core.
//!
//! Provides loaders that read character creation settings from TOML. The
//! core crate never touches the filesystem; hosts load a
//! [`CharacterConfig`](character_core::CharacterConfig) here and pass it in.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
