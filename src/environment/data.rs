//! The bundled feed used on first start and on reset.

use super::types::{Comment, Post, PostCollection, Timestamp, User};

const MINUTE: i64 = 60_000;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

const IMAGE: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600&h=600&fit=crop&crop=center";

pub fn current_user() -> User {
    User::new("u123", "Ayush", "https://i.pravatar.cc/150?img=3")
}

fn alice() -> User {
    User::new("u1", "Alice", "https://i.pravatar.cc/150?img=1")
}

fn bob() -> User {
    User::new("u2", "Bob", "https://i.pravatar.cc/150?img=2")
}

fn charlie() -> User {
    User::new("u3", "Charlie", "https://i.pravatar.cc/150?img=4")
}

/// Everyone that appears in the bundled feed, current user included
pub fn users() -> Vec<User> {
    vec![alice(), bob(), charlie(), current_user()]
}

fn comment(id: &str, user: User, text: &str, timestamp: Timestamp) -> Comment {
    Comment {
        id: super::types::CommentId(id.to_string()),
        user,
        text: text.to_string(),
        timestamp,
    }
}

/// Timestamps are relative to `now`, so the feed always looks recent.
pub fn default_posts(now: Timestamp) -> PostCollection {
    im::vector![
        Post {
            id: "p1".into(),
            author: alice(),
            image: IMAGE.to_string(),
            caption: "First post!".to_string(),
            likes: vec!["u123".into()],
            comments: vec![comment("c1", bob(), "Nice!", now)],
            timestamp: now.minus_millis(DAY),
        },
        Post {
            id: "p2".into(),
            author: bob(),
            image: IMAGE.to_string(),
            caption: "Beautiful sunset today! 🌅".to_string(),
            likes: vec!["u123".into(), "u1".into()],
            comments: vec![
                comment("c2", alice(), "Stunning!", now.minus_millis(HOUR)),
                comment(
                    "c3",
                    current_user(),
                    "Where is this?",
                    now.minus_millis(30 * MINUTE)
                ),
            ],
            timestamp: now.minus_millis(2 * HOUR),
        },
        Post {
            id: "p3".into(),
            author: charlie(),
            image: IMAGE.to_string(),
            caption: "Coffee and code ☕️💻".to_string(),
            likes: vec!["u123".into(), "u1".into(), "u2".into()],
            comments: vec![comment(
                "c4",
                current_user(),
                "The perfect combination!",
                now.minus_millis(2 * HOUR)
            )],
            timestamp: now.minus_millis(30 * MINUTE),
        },
    ]
}
