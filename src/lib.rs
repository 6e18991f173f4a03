//! Feed state for the Sociogram demo.
//!
//! The [`PostStore`] owns the posts and changes them only through a pure
//! reducer; after every change the full feed is handed to the
//! [`Repository`], which writes it to a string-keyed store and swallows
//! any failure. View models turn posts into what a feed screen shows.

mod app;
mod components;
mod environment;
mod helper;
mod view_model;

pub use app::{init_logging, Sociogram};
pub use components::feed::{FeedAction, FeedReducer, PostStore};
pub use components::theme::ThemeStore;
pub use components::Reducer;
pub use environment::types::{
    Comment, CommentId, Post, PostCollection, PostId, Theme, Timestamp, User, UserId,
};
pub use environment::{
    data, Config, Environment, FileStore, KeyValueStore, MemoryStore, Repository, StorageError,
    POSTS_KEY, THEME_KEY,
};
pub use helper::{format_relative, likes_summary};
pub use view_model::{CommentViewModel, LikerViewModel, PostViewModel, UserDirectory};
