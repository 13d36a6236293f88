//! Display identity assignment for new connections.
//!
//! Names combine a random adjective, noun and the first four characters of the
//! connection id. Two connections may end up with the same name; that is
//! cosmetic only.

use rand::Rng;

use super::value_object::{ConnectionId, DisplayIdentity};

const ADJECTIVES: [&str; 5] = ["Happy", "Cheerful", "Kind", "Clever", "Brave"];
const NOUNS: [&str; 5] = ["Lion", "Tiger", "Elephant", "Giraffe", "Penguin"];
const AVATARS: [&str; 10] = ["😀", "😎", "🤩", "🥳", "😇", "🚀", "💡", "🌟", "🌈", "🤖"];

/// Assign a display identity using the thread-local RNG.
pub fn assign(connection_id: &ConnectionId) -> DisplayIdentity {
    assign_with(connection_id, &mut rand::rng())
}

/// Assign a display identity drawing randomness from `rng`.
pub fn assign_with<R: Rng>(connection_id: &ConnectionId, rng: &mut R) -> DisplayIdentity {
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let avatar = AVATARS[rng.random_range(0..AVATARS.len())];

    DisplayIdentity::new(
        format!("{} {} {}", adjective, noun, connection_id.short()),
        avatar,
    )
}
