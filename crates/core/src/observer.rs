/// Receives solver events and optionally steers the iteration.
///
/// Returning `Some(action)` asks the solver to carry out a solver-specific
/// action; `None` lets it continue. Observers are how callers trace iterates,
/// log progress, or stop a run without the solver printing anything itself.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, `()` is the
/// no-op observer, and a pair `(first, second)` calls both in order and
/// returns the first action requested.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, O1, O2> Observer<E, A> for (O1, O2)
where
    O1: Observer<E, A>,
    O2: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}
