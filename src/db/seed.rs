//! Seed data for the demo catalog.
//!
//! Runs once at startup, before the server accepts traffic: 10 authors and
//! 100 books with generated names, titles and publication dates. Uses
//! INSERT OR IGNORE so re-runs against a persistent database are idempotent
//! (existing rows are preserved).

use anyhow::Result;
use chrono::{Days, Utc};
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use super::{AuthorRecord, BookRecord, Database};

const AUTHOR_COUNT: usize = 10;
const BOOK_COUNT: usize = 100;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Barbara", "Frances", "Margaret", "Dennis", "Brian", "Niklaus", "Edsger",
    "Donald", "Alan", "John",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Liskov", "Allen", "Hamilton", "Ritchie", "Kernighan", "Wirth",
    "Dijkstra", "Knuth", "Turing", "McCarthy",
];

const TITLE_WORDS: &[&str] = &[
    "The", "Silent", "Garden", "of", "Forgotten", "Rivers", "Winter", "a", "Distant", "Shore",
    "Glass", "Letters", "Mountain", "House", "Last", "Echoes", "Beneath", "Crimson", "Sky",
    "Paper", "Moons",
];

/// Populate the catalog with generated authors and books.
pub async fn run(db: &Database) -> Result<()> {
    let authors = db.authors();
    let books = db.books();
    let today = Utc::now().date_naive();
    let mut rng = rand::thread_rng();

    for i in 0..AUTHOR_COUNT {
        authors
            .insert(&AuthorRecord {
                id: format!("author-{i}"),
                first_name: FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string(),
                last_name: LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())].to_string(),
            })
            .await?;
    }

    for i in 0..BOOK_COUNT {
        let title = (0..rng.gen_range(2..5))
            .map(|_| TITLE_WORDS[rng.gen_range(0..TITLE_WORDS.len())])
            .collect::<Vec<_>>()
            .join(" ");

        books
            .insert(&BookRecord {
                id: format!("book-{i:03}"),
                title,
                isbn10: Uuid::new_v4().to_string()[..10].to_string(),
                publication_date: today - Days::new(rng.gen_range(1..5000)),
                author_id: format!("author-{}", rng.gen_range(0..AUTHOR_COUNT)),
            })
            .await?;
    }

    info!(
        authors = AUTHOR_COUNT,
        books = BOOK_COUNT,
        "Catalog seeded"
    );

    Ok(())
}
