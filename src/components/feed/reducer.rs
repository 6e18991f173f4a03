use crate::environment::types::{Post, PostCollection, PostId};

use super::FeedAction;

/// Computes the next feed. `state` is never touched; unchanged posts are
/// shared with the result.
pub(super) fn reduce(action: FeedAction, state: &PostCollection) -> PostCollection {
    log::trace!("{action:?}");

    match action {
        FeedAction::ToggleLike { post_id, user_id } => update_post(state, &post_id, |post| {
            if let Some(idx) = post.likes.iter().position(|id| id == &user_id) {
                post.likes.remove(idx);
            } else {
                post.likes.push(user_id);
            }
        }),
        FeedAction::AddComment { post_id, comment } => {
            update_post(state, &post_id, |post| post.comments.push(comment))
        }
        FeedAction::Load(posts) => posts,
    }
}

/// Replaces the first post with `id` by a mutated copy. Unknown ids leave
/// the feed as it is.
fn update_post(
    state: &PostCollection,
    id: &PostId,
    action: impl FnOnce(&mut Post),
) -> PostCollection {
    let Some(idx) = state.iter().position(|post| &post.id == id) else {
        return state.clone();
    };
    let mut post = state[idx].clone();
    action(&mut post);
    state.update(idx, post)
}
