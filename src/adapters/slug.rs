//! Slug generator adapters.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::rngs::OsRng;
use rand::Rng;

use crate::domain::project::{PublicSlug, SLUG_ALPHABET, SLUG_LENGTH};
use crate::ports::SlugGenerator;

/// Draws slugs from the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSlugGenerator;

impl SlugGenerator for RandomSlugGenerator {
    fn generate(&self) -> PublicSlug {
        let mut rng = OsRng;
        let mut positions = [0usize; SLUG_LENGTH];
        for position in positions.iter_mut() {
            *position = rng.gen_range(0..SLUG_ALPHABET.len());
        }
        PublicSlug::from_alphabet(positions)
    }
}

/// Replays a fixed list of slugs, then falls back to random ones.
///
/// Lets tests force slug collisions deterministically.
#[derive(Debug, Default)]
pub struct ScriptedSlugGenerator {
    queue: Mutex<VecDeque<PublicSlug>>,
}

impl ScriptedSlugGenerator {
    pub fn new(slugs: impl IntoIterator<Item = PublicSlug>) -> Self {
        Self {
            queue: Mutex::new(slugs.into_iter().collect()),
        }
    }
}

impl SlugGenerator for ScriptedSlugGenerator {
    fn generate(&self) -> PublicSlug {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| RandomSlugGenerator.generate())
    }
}
