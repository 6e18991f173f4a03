mod action;
mod reducer;
mod state;

pub use action::FeedAction;
pub use state::PostStore;

pub struct FeedReducer;
use super::Reducer;

impl Reducer for FeedReducer {
    type Action = action::FeedAction;

    type State = crate::environment::types::PostCollection;

    fn reduce(action: Self::Action, state: &Self::State) -> Self::State {
        reducer::reduce(action, state)
    }
}
