use std::collections::HashMap;

use itertools::Itertools;

use crate::environment::types::*;
use crate::helper::{format_relative, likes_summary};

/// How many comments a post card shows before `View all N comments`
const COMMENT_PREVIEW_COUNT: usize = 2;

/// Resolves user ids to users for everything that only stores ids
#[derive(Clone, Debug, Default)]
pub struct UserDirectory {
    users: HashMap<UserId, User>,
}

impl UserDirectory {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self { users }
    }

    /// Everyone who authored or commented on a post, plus `current_user`
    pub fn from_posts<'a>(posts: impl IntoIterator<Item = &'a Post>, current_user: &User) -> Self {
        let mut directory = Self::default();
        for post in posts {
            directory.insert(post.author.clone());
            for comment in post.comments.iter() {
                directory.insert(comment.user.clone());
            }
        }
        directory.insert(current_user.clone());
        directory
    }

    pub fn insert(&mut self, user: User) {
        self.users.entry(user.id.clone()).or_insert(user);
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentViewModel {
    pub id: CommentId,
    pub user: User,
    pub text: String,
    pub created: Timestamp,
    pub created_human: String,
}

impl CommentViewModel {
    pub fn new(comment: &Comment, now: Timestamp) -> Self {
        Self {
            id: comment.id.clone(),
            user: comment.user.clone(),
            text: comment.text.clone(),
            created: comment.timestamp,
            created_human: format_relative(comment.timestamp, now),
        }
    }

    /// Newest first
    pub fn sorted(comments: &[Comment], now: Timestamp) -> Vec<Self> {
        comments
            .iter()
            .sorted_by(|a, b| b.timestamp.cmp(&a.timestamp))
            .map(|c| Self::new(c, now))
            .collect()
    }

    pub fn list_title(count: usize) -> String {
        format!("Comments ({count})")
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LikerViewModel {
    pub user: User,
    pub is_you: bool,
}

impl LikerViewModel {
    /// One entry per like that resolves to a known user, in like order
    pub fn list(post: &Post, current_user_id: &UserId, directory: &UserDirectory) -> Vec<Self> {
        post.likes
            .iter()
            .filter_map(|id| directory.get(id))
            .map(|user| LikerViewModel {
                user: user.clone(),
                is_you: &user.id == current_user_id,
            })
            .collect()
    }

    pub fn list_title(count: usize) -> String {
        format!("Likes ({count})")
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostViewModel {
    pub id: PostId,
    pub author: User,
    pub image: String,
    pub caption: String,
    pub created: Timestamp,
    pub created_human: String,
    /// Has the *current user* liked this
    pub is_liked: bool,
    pub like_count: usize,
    pub likes_text: String,
    pub likes_title: String,
    pub comment_count: usize,
    /// All comments, newest first
    pub comments: Vec<CommentViewModel>,
    /// Only set if there are more comments than the preview shows
    pub view_all_title: Option<String>,
}

impl PostViewModel {
    pub fn new(post: &Post, current_user_id: &UserId, directory: &UserDirectory, now: Timestamp) -> Self {
        let comments = CommentViewModel::sorted(&post.comments, now);
        let comment_count = comments.len();
        let view_all_title = (comment_count > COMMENT_PREVIEW_COUNT)
            .then(|| format!("View all {comment_count} comments"));

        Self {
            id: post.id.clone(),
            author: post.author.clone(),
            image: post.image.clone(),
            caption: post.caption.clone(),
            created: post.timestamp,
            created_human: format_relative(post.timestamp, now),
            is_liked: post.is_liked_by(current_user_id),
            like_count: post.likes.len(),
            likes_text: likes_summary(&post.likes, directory),
            likes_title: LikerViewModel::list_title(post.likes.len()),
            comment_count,
            comments,
            view_all_title,
        }
    }

    /// The newest comments shown on the card itself
    pub fn comment_preview(&self) -> &[CommentViewModel] {
        let count = self.comments.len().min(COMMENT_PREVIEW_COUNT);
        &self.comments[..count]
    }

    /// View models for the whole feed, in feed order
    pub fn feed(posts: &PostCollection, current_user: &User, now: Timestamp) -> Vec<Self> {
        let directory = UserDirectory::from_posts(posts.iter(), current_user);
        posts
            .iter()
            .map(|post| Self::new(post, &current_user.id, &directory, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::data;
    use pretty_assertions::assert_eq;

    const NOW: Timestamp = Timestamp(1_700_000_000_000);

    fn directory() -> UserDirectory {
        UserDirectory::new(data::users())
    }

    #[test]
    fn post_view_model_for_bundled_feed() {
        let posts = data::default_posts(NOW);
        let me = data::current_user();
        let vm = PostViewModel::new(&posts[1], &me.id, &directory(), NOW);
        assert!(vm.is_liked);
        assert_eq!(vm.like_count, 2);
        assert_eq!(vm.likes_text, "Liked by Ayush and Alice");
        assert_eq!(vm.likes_title, "Likes (2)");
        assert_eq!(vm.created_human, "2h ago");
        // newest first
        assert_eq!(vm.comments[0].text, "Where is this?");
        assert_eq!(vm.comments[0].created_human, "30m ago");
        assert_eq!(vm.comments[1].text, "Stunning!");
        assert_eq!(vm.view_all_title, None);
    }

    #[test]
    fn preview_shows_two_newest() {
        let mut post = data::default_posts(NOW)[0].clone();
        for (idx, text) in ["a", "b", "c"].iter().enumerate() {
            let mut comment = Comment::new(data::current_user(), text);
            comment.timestamp = NOW.minus_millis(10_000 - idx as i64);
            post.comments.push(comment);
        }
        let vm = PostViewModel::new(&post, &"u123".into(), &directory(), NOW);
        let preview: Vec<_> = vm.comment_preview().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(preview, vec!["Nice!", "c"]);
        assert_eq!(vm.view_all_title.as_deref(), Some("View all 4 comments"));
    }

    #[test]
    fn likers_skip_unknown_users_and_flag_you() {
        let mut post = data::default_posts(NOW)[2].clone();
        post.likes.push("ghost".into());
        let likers = LikerViewModel::list(&post, &"u123".into(), &directory());
        let names: Vec<_> = likers.iter().map(|l| l.user.name.as_str()).collect();
        assert_eq!(names, vec!["Ayush", "Alice", "Bob"]);
        assert!(likers[0].is_you);
        assert!(!likers[1].is_you);
    }

    #[test]
    fn directory_from_posts_knows_commenters() {
        let posts = data::default_posts(NOW);
        let directory = UserDirectory::from_posts(posts.iter(), &data::current_user());
        assert_eq!(directory.get(&"u2".into()).map(|u| u.name.as_str()), Some("Bob"));
        assert_eq!(directory.get(&"u3".into()).map(|u| u.name.as_str()), Some("Charlie"));
        assert!(directory.get(&"ghost".into()).is_none());
    }

    #[test]
    fn feed_renders_restored_extreme_timestamps() {
        let mut posts = data::default_posts(NOW);
        posts[0].timestamp = Timestamp(i64::MIN);
        posts[0].comments[0].timestamp = Timestamp(i64::MAX);
        let feed = PostViewModel::feed(&posts, &data::current_user(), NOW);
        assert_eq!(feed[0].created_human, "3558399705mo ago");
        assert_eq!(feed[0].comments[0].created_human, "Just now");
    }

    #[test]
    fn feed_keeps_post_order() {
        let posts = data::default_posts(NOW);
        let feed = PostViewModel::feed(&posts, &data::current_user(), NOW);
        let ids: Vec<_> = feed.iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
        assert_eq!(feed[2].likes_text, "Liked by Ayush, Alice and 1 other");
    }
}
