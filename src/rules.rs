//! The fixed assertions the grader applies.
//!
//! The artist names and id below come from the Chinook seed data the
//! student program prints; they are the exercise's configuration constants,
//! not tunables.

/// An ordering assertion: the first line containing `first` must come
/// before the first line containing `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRule {
    pub first: &'static str,
    pub second: &'static str,
}

/// The artist whose printed line must carry its ArtistId.
pub const ARTIST_ID_TARGET: &str = "Metallica";

/// The ArtistId expected on the [`ARTIST_ID_TARGET`] line.
pub const ARTIST_ID_EXPECTED: &str = "50";

/// Alphabetical spot-checks, applied in sequence after the id check.
pub const ORDER_RULES: &[OrderRule] = &[
    OrderRule {
        first: "AC/DC",
        second: "Metallica",
    },
    OrderRule {
        first: "Aaron Goldberg",
        second: "Alanis Morissette",
    },
    OrderRule {
        first: "Aaron Copland & London Symphony Orchestra",
        second: "Metallica",
    },
];
