//! # sitekit
//!
//! Page-script enhancements compiled to WebAssembly: a URL-driven preview
//! flag that tells analytics loaders to stand down, and a light/dark theme
//! switcher that follows the OS color scheme until the user overrides it.
//!
//! The state holders are plain Rust, generic over a storage backend, a
//! color-scheme source, and a rendering surface, so they run natively under
//! `cargo test`. The `browser` feature adds the `web-sys` implementations and
//! the `#[wasm_bindgen(start)]` entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`preview`] | Preview flag persisted from the `preview` query parameter |
//! | [`toggle`] | Two-state light/dark toggle with double-click reset to auto |
//! | [`cycle`] | Three-state `auto → light → dark` cycle |
//! | [`theme`] | Theme and preference types plus button display text |
//! | [`storage`] | Key/value storage seam and the in-memory backend |
//! | [`scheme`] | System color-scheme seam and a fixed fake |
//! | [`surface`] | Document rendering seam for theme markers and the button |
//! | [`config`] | Page configuration parsed from JSON |
//! | [`error`] | Error types |
//! | [`consts`] | Default keys, selectors, and timings |
//! | `browser` | `web-sys` glue and the wasm entry point (feature `browser`) |

pub mod config;
pub mod consts;
pub mod cycle;
pub mod error;
pub mod preview;
pub mod scheme;
pub mod storage;
pub mod surface;
pub mod theme;
pub mod toggle;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(test)]
pub(crate) mod testing;
