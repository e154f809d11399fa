//! The Sayura transliteration engine.
//!
//! One engine instance serves one input context. A key event is fully
//! processed before the next arrives: the pending buffer is rewritten by
//! the consonant/vowel combination rules, a commit may fire, and the
//! returned [`Action`] tells the host what to do with the event. The
//! engine never calls into the host framework; every side effect is data
//! in the return value.

use libsinhala_core::{
    ImeContext, KeyEvent, KeySym, Modifiers, PreeditBuffer, TextEncoder, Utf8Encoder,
};
use tracing::{debug, error, trace};

use crate::config::SayuraConfig;
use crate::tables::{self, RAYANNA, VIRAMA, YAYANNA, ZWJ};

/// What the host must do with the key it just handed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Key consumed, nothing changed.
    Ignored,
    /// The engine declined the event; deliver it through the normal path.
    PassThrough,
    /// The preedit changed (or was deliberately left alone); re-render the
    /// preview. When `forward` is set, also deliver the raw key downstream
    /// after the update.
    Update { forward: bool },
    /// `text` is final output for the application. The preedit may have
    /// been restarted in the same step (glide clusters), so it must be
    /// re-rendered as well.
    Commit { text: String, forward: bool },
    /// Escape: clear the preedit UI, call [`Engine::reset`], and forward
    /// the key.
    ResetAndForward,
}

/// Phonetic transliteration engine for the Sayura romanization.
pub struct Engine<E: TextEncoder = Utf8Encoder> {
    buffer: PreeditBuffer,
    encoder: E,
    config: SayuraConfig,
}

impl Engine<Utf8Encoder> {
    /// Engine with the default encoder and configuration.
    pub fn new() -> Self {
        Self::with_encoder(Utf8Encoder)
    }

    /// Engine with the default encoder and the given configuration.
    pub fn with_config(config: SayuraConfig) -> Self {
        Self::with_encoder_and_config(Utf8Encoder, config)
    }
}

impl Default for Engine<Utf8Encoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextEncoder> Engine<E> {
    /// Engine with a custom encoder and the default configuration.
    pub fn with_encoder(encoder: E) -> Self {
        Self::with_encoder_and_config(encoder, SayuraConfig::default())
    }

    /// Engine with a custom encoder and configuration.
    pub fn with_encoder_and_config(encoder: E, config: SayuraConfig) -> Self {
        Self {
            buffer: PreeditBuffer::new(),
            encoder,
            config,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SayuraConfig {
        &self.config
    }

    /// The pending code points, in order.
    pub fn pending(&self) -> &[char] {
        self.buffer.as_slice()
    }

    /// Check if a syllable is in progress.
    pub fn is_composing(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Encode the pending buffer for display without clearing it.
    pub fn preedit(&self) -> String {
        match self.encoder.encode(self.buffer.as_slice()) {
            Ok(text) => text,
            Err(err) => {
                error!(%err, "preedit encoding failed");
                String::new()
            }
        }
    }

    /// Drop all pending state. Called by the host on focus loss, after an
    /// Escape, and on context teardown.
    pub fn reset(&mut self) {
        trace!(pending = self.buffer.len(), "reset");
        self.buffer.clear();
    }

    /// Write the current preview into a host context.
    pub fn sync_to_context(&self, context: &mut ImeContext) {
        context.preedit_text = self.preedit();
    }

    /// Process one key event and report the required host action.
    pub fn process_key(&mut self, event: KeyEvent) -> Action {
        trace!(sym = event.sym.0, modifiers = event.modifiers.0, "key");

        if event.sym == KeySym::ESCAPE {
            return Action::ResetAndForward;
        }

        if event.sym == KeySym::BACKSPACE {
            return if self.buffer.pop().is_some() {
                Action::Update { forward: false }
            } else {
                Action::PassThrough
            };
        }

        if event.sym == KeySym::SPACE {
            return match self.commit_pending() {
                Some(text) => Action::Commit {
                    text,
                    forward: self.config.forward_commit_trigger,
                },
                None => Action::PassThrough,
            };
        }

        // Chorded keys belong to the application.
        if event.modifiers.intersects(Modifiers::ACTION_MASK) {
            return Action::PassThrough;
        }

        if let Some(c) = tables::find_consonant_by_key(event.sym) {
            return self.handle_consonant(c);
        }
        if let Some(v) = tables::find_vowel_by_key(event.sym) {
            return self.handle_vowel(v);
        }

        // Unmapped key: flush whatever is pending and let the key through.
        if self.config.commit_on_unknown {
            match self.commit_pending() {
                Some(text) => Action::Commit {
                    text,
                    forward: true,
                },
                None => Action::Update { forward: true },
            }
        } else {
            Action::PassThrough
        }
    }

    /// Consonant rule.
    ///
    /// A consonant key normally flushes the pending syllable and starts
    /// the next one, except when it is really a modifier on the syllable
    /// already in progress. The marker roles only apply when the head of
    /// the buffer is itself a recognized consonant. The markers inspect
    /// the *first* code point but rewrite the *last*; with more than one
    /// code point pending those differ.
    fn handle_consonant(&mut self, c: usize) -> Action {
        let consonant = &tables::CONSONANTS[c];

        let Some(first) = self.buffer.first() else {
            self.buffer.push(consonant.base);
            return Action::Update { forward: false };
        };

        if let Some(l1) = tables::find_consonant(first) {
            match consonant.key {
                // Kill the inherent vowel; the conjunct continues below.
                'w' => {
                    self.buffer.push(VIRAMA);
                    return Action::Update { forward: false };
                }
                // Touching wayanna: flush the killed cluster, restart
                // behind a joiner so the halves render joined.
                'W' => {
                    self.buffer.push(VIRAMA);
                    let text = self.commit_pending();
                    self.buffer.push(ZWJ);
                    return self.commit_or_update(text, false);
                }
                'H' => {
                    if let Some(mahaprana) = tables::CONSONANTS[l1].mahaprana {
                        debug!(glyph = %mahaprana, "aspirate");
                        return if self.buffer.replace_last(mahaprana) {
                            Action::Update { forward: false }
                        } else {
                            Action::Ignored
                        };
                    }
                    // No aspirated form: H behaves as a plain consonant.
                }
                'G' => {
                    if let Some(sagngnaka) = tables::CONSONANTS[l1].sagngnaka {
                        debug!(glyph = %sagngnaka, "prenasalize");
                        return if self.buffer.replace_last(sagngnaka) {
                            Action::Update { forward: false }
                        } else {
                            Action::Ignored
                        };
                    }
                }
                // Rakaransaya: rayanna joins the flushed cluster.
                'R' => {
                    self.buffer.push(VIRAMA);
                    self.buffer.push(ZWJ);
                    let text = self.commit_pending();
                    self.buffer.push(RAYANNA);
                    return self.commit_or_update(text, false);
                }
                // Yansaya: same shape with yayanna.
                'Y' => {
                    self.buffer.push(VIRAMA);
                    self.buffer.push(ZWJ);
                    let text = self.commit_pending();
                    self.buffer.push(YAYANNA);
                    return self.commit_or_update(text, false);
                }
                _ => {}
            }
        }

        // A new syllable: flush the pending one and start over.
        let text = self.commit_pending();
        self.buffer.push(consonant.base);
        self.commit_or_update(text, false)
    }

    /// Vowel rule.
    fn handle_vowel(&mut self, v: usize) -> Action {
        let vowel = &tables::VOWELS[v];

        let Some(last) = self.buffer.last() else {
            // Nothing precedes: the vowel renders as its own letter.
            self.buffer.push(vowel.standalone);
            return Action::Update { forward: false };
        };

        if tables::is_consonant(last) {
            // The common case: attach the combining sign.
            if let Some(sign) = vowel.sign {
                self.buffer.push(sign);
            }
        } else if vowel.sign == Some(last) {
            // Second press lengthens the sign.
            if let Some(long_sign) = vowel.long_sign {
                self.buffer.replace_last(long_sign);
            }
        } else if last == vowel.standalone {
            self.buffer.replace_last(vowel.long_standalone);
        } else if (last == '\u{0D86}' || last == '\u{0D87}') && vowel.sign.is_none() {
            // Irregular lengthening: an ā/æ tail meeting a vowel that has
            // no combining sign bumps to the next standalone letter.
            if let Some(bumped) = char::from_u32(vowel.standalone as u32 + 1) {
                self.buffer.replace_last(bumped);
            }
        }
        // Anything else leaves the buffer untouched but still counts as an
        // update: uncombinable vowels are swallowed, not flushed.
        Action::Update { forward: false }
    }

    /// Encode and clear the pending buffer.
    ///
    /// `None` when there is nothing to commit or when encoding fails; the
    /// buffer is discarded either way, so a half-formed commit can never
    /// reach the application.
    fn commit_pending(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let result = self.encoder.encode(self.buffer.as_slice());
        self.buffer.clear();
        match result {
            Ok(text) => {
                debug!(%text, "commit");
                Some(text)
            }
            Err(err) => {
                error!(%err, "commit encoding failed; discarding pending input");
                None
            }
        }
    }

    /// Wrap an optional commit into the action the host sees.
    fn commit_or_update(&self, text: Option<String>, forward: bool) -> Action {
        match text {
            Some(text) => Action::Commit { text, forward },
            None => Action::Update { forward },
        }
    }
}
