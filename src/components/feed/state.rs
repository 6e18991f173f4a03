use crate::environment::types::{Comment, Post, PostCollection, PostId, User, UserId};
use crate::environment::Repository;

use super::{FeedAction, FeedReducer};
use crate::components::Reducer;

type ChangeHandler = Box<dyn Fn(&PostCollection)>;

/// Owns the feed. All changes go through [`PostStore::dispatch`], which
/// runs the pure reducer and then notifies the change handler (usually
/// the repository) with the complete new feed.
pub struct PostStore {
    posts: PostCollection,
    defaults: PostCollection,
    current_user: User,
    on_change: Option<ChangeHandler>,
}

impl std::fmt::Debug for PostStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostStore")
            .field("posts", &self.posts.len())
            .field("current_user", &self.current_user.id)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl PostStore {
    /// A store without persistence that starts from `defaults`
    pub fn new(current_user: User, defaults: PostCollection) -> Self {
        Self {
            posts: defaults.clone(),
            defaults,
            current_user,
            on_change: None,
        }
    }

    /// Restores the saved feed from `repository` if there is one, and
    /// saves the feed after every change from then on.
    pub fn with_repository(
        current_user: User,
        defaults: PostCollection,
        repository: Repository,
    ) -> Self {
        let mut store = Self::new(current_user, defaults);
        if let Some(saved) = repository.load_posts() {
            log::debug!("Restoring {} saved posts", saved.len());
            store.load_collection(saved);
        }
        store.on_change(move |posts| repository.save_posts(posts))
    }

    pub fn on_change(mut self, handler: impl Fn(&PostCollection) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Applies `action` and hands the resulting feed to the change
    /// handler, also when the action left the feed as it was.
    pub fn dispatch(&mut self, action: FeedAction) {
        self.posts = FeedReducer::reduce(action, &self.posts);
        if let Some(handler) = self.on_change.as_ref() {
            handler(&self.posts);
        }
    }

    pub fn toggle_like(&mut self, post_id: &PostId, user_id: &UserId) {
        self.dispatch(FeedAction::ToggleLike {
            post_id: post_id.clone(),
            user_id: user_id.clone(),
        });
    }

    /// Comments as the current user. `text` must not be blank; that is
    /// checked by whoever collects the input.
    pub fn add_comment(&mut self, post_id: &PostId, text: &str) {
        let comment = Comment::new(self.current_user.clone(), text);
        self.dispatch(FeedAction::AddComment {
            post_id: post_id.clone(),
            comment,
        });
    }

    pub fn load_collection(&mut self, posts: PostCollection) {
        self.dispatch(FeedAction::Load(posts));
    }

    pub fn reset(&mut self) {
        log::debug!("Resetting feed to defaults");
        self.load_collection(self.defaults.clone());
    }

    pub fn posts(&self) -> &PostCollection {
        &self.posts
    }

    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn defaults(&self) -> &PostCollection {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::types::Timestamp;
    use crate::environment::{data, Config, KeyValueStore, MemoryStore, POSTS_KEY};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store() -> PostStore {
        PostStore::new(
            data::current_user(),
            data::default_posts(Timestamp(1_700_000_000_000)),
        )
    }

    #[test]
    fn add_comment_uses_current_user_and_now() {
        let mut store = store();
        let id = PostId::from("p1");
        let without_comments: PostCollection = store
            .posts()
            .iter()
            .cloned()
            .map(|mut post| {
                post.comments.clear();
                post
            })
            .collect();
        store.load_collection(without_comments);
        let before = Timestamp::now();
        store.add_comment(&id, "hello");

        let post = store.post(&id).unwrap();
        assert_eq!(post.comments.len(), 1);
        let comment = &post.comments[0];
        assert_eq!(comment.text, "hello");
        assert_eq!(&comment.user, store.current_user());
        assert!(comment.timestamp >= before);
    }

    #[test]
    fn load_then_read_yields_exactly_the_input() {
        let mut store = store();
        store.toggle_like(&"p1".into(), &"u9".into());
        let replacement = data::default_posts(Timestamp(42));
        store.load_collection(replacement.clone());
        assert_eq!(store.posts(), &replacement);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = store();
        store.toggle_like(&"p3".into(), &"u123".into());
        store.add_comment(&"p2".into(), "hi");
        assert_ne!(store.posts(), store.defaults());
        store.reset();
        assert_eq!(store.posts(), store.defaults());
    }

    #[test]
    fn change_handler_sees_every_change() {
        let seen: Rc<RefCell<Vec<PostCollection>>> = Rc::default();
        let cloned = seen.clone();
        let mut store = store().on_change(move |posts| cloned.borrow_mut().push(posts.clone()));

        store.toggle_like(&"p1".into(), &"u123".into());
        store.toggle_like(&"missing".into(), &"u123".into());
        store.add_comment(&"p1".into(), "first");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], seen[1]);
        assert_eq!(seen.last(), Some(store.posts()));
    }

    #[test]
    fn reset_overwrites_unreadable_saved_feed() {
        let backend = MemoryStore::new();
        backend.set(POSTS_KEY, "{not json").unwrap();
        let repository = Repository::new(backend.clone(), &Config::default());
        let mut store = PostStore::with_repository(
            data::current_user(),
            data::default_posts(Timestamp::now()),
            repository.clone(),
        );
        assert_eq!(store.posts(), store.defaults());

        store.reset();
        assert_ne!(backend.get(POSTS_KEY).unwrap().as_deref(), Some("{not json"));
        assert_eq!(repository.load_posts().as_ref(), Some(store.defaults()));
    }

    #[test]
    fn unknown_post_still_saves_the_feed() {
        let backend = MemoryStore::new();
        let repository = Repository::new(backend.clone(), &Config::default());
        let mut store = PostStore::with_repository(
            data::current_user(),
            data::default_posts(Timestamp::now()),
            repository.clone(),
        );
        store.toggle_like(&"nope".into(), &"u123".into());
        assert_eq!(repository.load_posts().as_ref(), Some(store.posts()));
    }

    #[test]
    fn repository_backed_store_restores_saved_feed() {
        let backend = MemoryStore::new();
        let repository = Repository::new(backend.clone(), &Config::default());
        let mut first = PostStore::with_repository(
            data::current_user(),
            data::default_posts(Timestamp::now()),
            repository.clone(),
        );
        first.add_comment(&"p3".into(), "saved");

        let second = PostStore::with_repository(
            data::current_user(),
            data::default_posts(Timestamp::now()),
            repository,
        );
        assert_eq!(second.posts(), first.posts());
        assert_eq!(second.post(&"p3".into()).unwrap().comments.len(), 2);
    }
}
