//! Prints a JSON comment list, as answered by the knowledge base for one page

use chrono::{Duration, Utc};
use kb_comments_api::{Comment, CommentId, UserId};
use rand::{seq::SliceRandom, Rng};

const NUM_USERS: i64 = 4;
const NUM_COMMENTS: i64 = 25;
const COMMENT_WORD_COUNT: usize = 30;
const MAX_AGE_DAYS: i64 = 60;

const NAMES: &[(&str, &str)] = &[
    ("alice", "Alice Martin"),
    ("bob", "Bob Chen"),
    ("carol", "Carol Dubois"),
    ("dave", "Dave Okafor"),
];

fn main() {
    let mut rng = rand::thread_rng();

    let mut comments = (1..=NUM_COMMENTS)
        .map(|id| {
            let user = rng.gen_range(1..=NUM_USERS);
            let (login, name) = NAMES[(user - 1) as usize % NAMES.len()];
            let age = Duration::minutes(rng.gen_range(0..MAX_AGE_DAYS * 24 * 60));
            Comment {
                id: CommentId(id),
                user_id: UserId(user),
                login_name: String::from(login),
                real_name: String::from(name),
                user_image_url: None,
                comment: lipsum::lipsum_words(rng.gen_range(1..=COMMENT_WORD_COUNT)),
                last_update_date: Some(Utc::now() - age),
                object_version_number: rng.gen_range(1..5),
            }
        })
        .collect::<Vec<_>>();

    // a few comments with weird bodies to exercise rendering
    if let Some(c) = comments.choose_mut(&mut rng) {
        c.comment = String::from("<script>alert('not html')</script>");
    }
    if let Some(c) = comments.choose_mut(&mut rng) {
        c.comment = String::from("line one\nline two\n\n  indented");
    }
    comments.sort_by_key(|c| c.last_update_date);

    println!(
        "{}",
        serde_json::to_string_pretty(&comments).expect("serializing comment list")
    );
}
