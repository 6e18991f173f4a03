use crate::components::feed::PostStore;
use crate::components::theme::ThemeStore;
use crate::environment::types::{PostCollection, Timestamp, User};
use crate::environment::{data, Config, Environment};
use crate::view_model::PostViewModel;

/// Install the logger used by the app. Safe to call more than once.
pub fn init_logging() {
    use env_logger::Env;
    use std::io::Write;
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .try_init();
}

/// Everything the feed screen needs: the posts, who is looking at them,
/// and the theme.
#[derive(Debug)]
pub struct Sociogram {
    pub environment: Environment,
    pub posts: PostStore,
    pub theme: ThemeStore,
}

impl Sociogram {
    /// Opens the bundled feed for the bundled user, restoring whatever
    /// was saved in the configured data directory.
    pub fn open(config: Config, prefers_dark: bool) -> Self {
        Self::with_environment(
            Environment::new(config),
            data::current_user(),
            data::default_posts(Timestamp::now()),
            prefers_dark,
        )
    }

    pub fn with_environment(
        environment: Environment,
        current_user: User,
        defaults: PostCollection,
        prefers_dark: bool,
    ) -> Self {
        log::trace!("open feed for {:?}", current_user.id);
        let posts =
            PostStore::with_repository(current_user, defaults, environment.repository.clone());
        let theme = ThemeStore::new(environment.repository.clone(), prefers_dark);
        Self {
            environment,
            posts,
            theme,
        }
    }

    pub fn feed(&self) -> Vec<PostViewModel> {
        PostViewModel::feed(
            self.posts.posts(),
            self.posts.current_user(),
            Timestamp::now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MemoryStore;

    #[test]
    fn open_with_memory_store() {
        init_logging();
        let environment = Environment::with_store(Config::default(), MemoryStore::new());
        let mut app = Sociogram::with_environment(
            environment,
            data::current_user(),
            data::default_posts(Timestamp::now()),
            true,
        );
        assert!(app.theme.is_dark());
        assert_eq!(app.feed().len(), 3);

        let me = app.posts.current_user().id.clone();
        app.posts.toggle_like(&"p1".into(), &me);
        assert!(!app.feed()[0].is_liked);
        assert_eq!(
            app.environment.repository.load_posts().as_ref(),
            Some(app.posts.posts())
        );
    }
}
