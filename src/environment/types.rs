use chrono::Utc;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

// Identifiers

#[derive(Debug, Eq, PartialEq, Hash, Clone, Default, Serialize, Deserialize)]
pub struct UserId(pub String);

#[derive(Debug, Eq, PartialEq, Hash, Clone, Default, Serialize, Deserialize)]
pub struct PostId(pub String);

#[derive(Debug, Eq, PartialEq, Hash, Clone, Default, Serialize, Deserialize)]
pub struct CommentId(pub String);

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("PostID:{}", self.0))
    }
}

impl CommentId {
    /// `comment-<millis>-<9 random chars>`, unique enough for a single
    /// local feed.
    pub fn generate(timestamp: Timestamp) -> Self {
        let random = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("comment-{}-{}", timestamp.0, &random[..9]))
    }
}

/// Milliseconds since the unix epoch
#[derive(
    Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, Default, Serialize, Deserialize,
)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Saturates instead of overflowing; saved feeds are not validated.
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn minus_millis(&self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }
}

// Feed Types

#[derive(Default, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Avatar image URI
    pub avatar: String,
}

impl User {
    pub fn new(id: &str, name: &str, avatar: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            avatar: avatar.to_string(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user: User,
    pub text: String,
    pub timestamp: Timestamp,
}

impl Comment {
    /// Build a fresh comment by `user`. The text is trimmed; checking that
    /// it is not empty is up to the caller.
    pub fn new(user: User, text: &str) -> Self {
        let timestamp = Timestamp::now();
        Self {
            id: CommentId::generate(timestamp),
            user,
            text: text.trim().to_string(),
            timestamp,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: User,
    /// Image URI
    pub image: String,
    pub caption: String,
    /// User ids that liked this post. Never contains duplicates.
    pub likes: Vec<UserId>,
    /// Append-only, in creation order
    pub comments: Vec<Comment>,
    pub timestamp: Timestamp,
}

impl Post {
    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.contains(user_id)
    }
}

/// The ordered feed. Backed by a persistent vector so that every
/// transition shares structure with the previous state.
pub type PostCollection = im::Vector<Post>;

// Preferences

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Default, Display, EnumString, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
