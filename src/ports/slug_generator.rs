//! Public slug generation port.

use crate::domain::project::PublicSlug;

/// Draws candidate slugs. Uniqueness is not the generator's concern; the
/// project registry retries on collision.
pub trait SlugGenerator: Send + Sync {
    fn generate(&self) -> PublicSlug;
}
