/// Control actions supported by the relaxation solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current iterate.
    StopEarly,
}
