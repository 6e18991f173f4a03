pub mod feed;
pub mod theme;

/// A pure state transition: the next state is computed from the current
/// one and an action, without side effects.
pub trait Reducer {
    type Action;

    type State;

    fn reduce(action: Self::Action, state: &Self::State) -> Self::State;
}
