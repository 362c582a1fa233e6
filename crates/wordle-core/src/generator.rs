//! Secret word generation.
//!
//! A secret is a random base word padded on both sides with random
//! characters from the classes its [`Preferences`] enable. For every
//! missing byte a fair coin decides whether it goes in front of or behind
//! the base word, so the base word lands somewhere in the middle.

use rand::Rng;
use rand::seq::IndexedRandom;
use wordle_types::Preferences;

use crate::word_store::WordStore;

/// Generate a secret for `prefs` from a random base word in `store`.
pub fn generate<R: Rng + ?Sized>(store: &WordStore, prefs: &Preferences, rng: &mut R) -> String {
    let base = store.random_word(rng);
    pad_word(base, prefs, rng)
}

/// Pad `base` out to `prefs.length` bytes.
///
/// With `prefs.length == 0` the base word is returned unmodified. A base
/// word longer than `prefs.length` gets no padding and is cut to its first
/// `prefs.length` bytes.
pub fn pad_word<R: Rng + ?Sized>(base: &str, prefs: &Preferences, rng: &mut R) -> String {
    if prefs.length == 0 {
        return base.to_owned();
    }

    let alphabet = prefs.alphabet();
    let deficit = prefs.length.saturating_sub(base.len());

    let mut word = vec![0_u8; prefs.length];
    // Half-open window [begin, end) still waiting for the base word.
    let mut begin = 0_usize;
    let mut end = prefs.length;

    for _ in 0..deficit {
        let filler = random_char(&alphabet, rng);
        if rng.random_bool(0.5) {
            if let Some(slot) = word.get_mut(begin) {
                *slot = filler;
            }
            begin = begin.saturating_add(1);
        } else {
            end = end.saturating_sub(1);
            if let Some(slot) = word.get_mut(end) {
                *slot = filler;
            }
        }
    }

    if let Some(middle) = word.get_mut(begin..end) {
        for (slot, &byte) in middle.iter_mut().zip(base.as_bytes()) {
            *slot = byte;
        }
    }

    String::from_utf8(word)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Draw one byte uniformly from `alphabet`.
fn random_char<R: Rng + ?Sized>(alphabet: &[u8], rng: &mut R) -> u8 {
    alphabet.choose(rng).copied().unwrap_or(b'a')
}
