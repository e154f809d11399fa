//! libsinhala-core
//!
//! Language-agnostic input-method plumbing shared by Sinhala input engines:
//! the pending (preedit) buffer, the key-event model, the host-facing
//! context, and the text-encoder seam between UTF-32 code points and the
//! UTF-8 text a host commits.
//!
//! Public API:
//! - `PreeditBuffer` - ordered buffer of not-yet-committed code points
//! - `KeyEvent` / `KeySym` / `Modifiers` - key presses as the host delivers them
//! - `ImeContext` - plain data the platform reads after each key
//! - `TextEncoder` / `Utf8Encoder` - code points to committed text

pub mod buffer;
pub use buffer::PreeditBuffer;

pub mod context;
pub use context::ImeContext;

pub mod encoder;
pub use encoder::{EncodeError, TextEncoder, Utf8Encoder};

pub mod key;
pub use key::{KeyEvent, KeySym, Modifiers};
