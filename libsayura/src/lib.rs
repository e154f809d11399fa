//! # libsayura
//!
//! Sayura phonetic Sinhala input engine built on libsinhala-core.
//!
//! Latin key presses become Sinhala code points in a small pending buffer;
//! the combination rules rewrite that buffer as each key arrives (vowel
//! signs, aspiration, prenasalization, glide clusters) and decide when the
//! pending syllable becomes final output.

pub mod config;
pub mod engine;
pub mod tables;

// Re-export the shared plumbing so hosts only need one crate.
pub use libsinhala_core::{
    EncodeError, ImeContext, KeyEvent, KeySym, Modifiers, PreeditBuffer, TextEncoder, Utf8Encoder,
};

pub use config::{ConfigError, SayuraConfig};
pub use engine::{Action, Engine};
pub use tables::{Consonant, Vowel, CONSONANTS, VOWELS};
