use crate::environment::types::{Comment, PostCollection, PostId, UserId};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeedAction {
    ToggleLike { post_id: PostId, user_id: UserId },
    AddComment { post_id: PostId, comment: Comment },
    /// Replace the whole feed, used for restoring saved data and for reset
    Load(PostCollection),
}
