//! Effect-aware state store with reducer pattern
//!
//! The widget's reducer is a plain function `fn(&mut S, A) -> DispatchResult<E>`.
//! It mutates state and returns declarative effects (e.g. "notify the change
//! callback"); the host runs the effects after dispatch. Keeping the callbacks
//! out of the reducer keeps it testable without closures.
//!
//! ```ignore
//! let mut store = Store::new(PhoneInputState::new(catalog, formatter), reducer);
//! let result = store.dispatch(PhoneAction::InputChange("+442071838750".into()));
//! for effect in result.effects {
//!     match effect {
//!         PhoneEffect::Changed { country_code, national_number } => { /* ... */ }
//!         PhoneEffect::Blurred => { /* ... */ }
//!     }
//! }
//! ```

use std::marker::PhantomData;

use crate::action::Action;

/// Result of dispatching an action: whether state changed and the effects to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified (re-render needed)
    pub changed: bool,
    /// Effects to be processed after dispatch
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with a single effect
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Add an effect to this result
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Returns true if there are any effects to process
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that mutates state and declares effects
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Hooks around every dispatch
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer ran
    fn after(&mut self, action: &A, state_changed: bool);
}

/// A middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that traces every action at debug level
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Log after dispatch only
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Log before and after dispatch
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                state_changed = state_changed,
                "Action processed"
            );
        }
    }
}

/// Centralized widget state with an effect reducer and middleware
///
/// Holds the state, the reducer and a middleware that observes every action.
/// `Store::new` uses [`NoopMiddleware`]; use [`Store::with_middleware`] to
/// attach logging.
pub struct Store<S, A, E, M = NoopMiddleware>
where
    A: Action,
    M: Middleware<A>,
{
    state: S,
    reducer: EffectReducer<S, A, E>,
    middleware: M,
    _marker: PhantomData<(A, E)>,
}

impl<S, A: Action, E> Store<S, A, E, NoopMiddleware> {
    /// Create a store without middleware
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<S, A, E, M> Store<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    /// Create a store with middleware
    pub fn with_middleware(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
            _marker: PhantomData,
        }
    }

    /// Get a reference to the current state
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a mutable reference to the state
    ///
    /// Use sparingly - prefer dispatching actions for state changes.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Get a reference to the middleware
    #[inline]
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Dispatch an action through middleware and reducer
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum TestAction {
        Type(char),
        Clear,
        Noop,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Type(_) => "Type",
                TestAction::Clear => "Clear",
                TestAction::Noop => "Noop",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEffect {
        Notify(String),
    }

    #[derive(Default)]
    struct TestState {
        text: String,
    }

    fn test_reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Type(c) => {
                state.text.push(c);
                DispatchResult::changed_with(TestEffect::Notify(state.text.clone()))
            }
            TestAction::Clear => {
                if state.text.is_empty() {
                    return DispatchResult::unchanged();
                }
                state.text.clear();
                DispatchResult::changed()
            }
            TestAction::Noop => DispatchResult::unchanged(),
        }
    }

    #[test]
    fn test_dispatch_result_builders() {
        let r: DispatchResult<TestEffect> = DispatchResult::unchanged();
        assert!(!r.changed);
        assert!(!r.has_effects());

        let r = DispatchResult::effect(TestEffect::Notify("x".into()));
        assert!(!r.changed);
        assert!(r.has_effects());

        let r: DispatchResult<TestEffect> =
            DispatchResult::changed().with(TestEffect::Notify("y".into()));
        assert!(r.changed);
        assert_eq!(r.effects, vec![TestEffect::Notify("y".into())]);
    }

    #[test]
    fn test_store_dispatch_returns_effects() {
        let mut store = Store::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::Type('4'));
        assert!(result.changed);
        assert_eq!(result.effects, vec![TestEffect::Notify("4".into())]);

        let result = store.dispatch(TestAction::Type('4'));
        assert_eq!(result.effects, vec![TestEffect::Notify("44".into())]);
        assert_eq!(store.state().text, "44");
    }

    #[test]
    fn test_store_unchanged() {
        let mut store = Store::new(TestState::default(), test_reducer);
        assert!(!store.dispatch(TestAction::Noop).changed);
        assert!(!store.dispatch(TestAction::Clear).changed);
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        changed_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            if state_changed {
                self.changed_count += 1;
            }
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = Store::with_middleware(
            TestState::default(),
            test_reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(TestAction::Type('1'));
        store.dispatch(TestAction::Noop);
        store.dispatch(TestAction::Clear);

        assert_eq!(store.middleware().before_count, 3);
        assert_eq!(store.middleware().changed_count, 2);
        assert!(store.state().text.is_empty());
    }

    #[test]
    fn test_state_mut() {
        let mut store = Store::new(TestState::default(), test_reducer);
        store.state_mut().text = "(44)".into();
        assert_eq!(store.state().text, "(44)");
    }
}
