use chrono::TimeDelta;

/// Lifecycle contract between a simulation module and the scheduler driving it.
///
/// Both hooks are infallible by contract: a module reports problems through its own
/// logger and keeps producing (possibly held) outputs so the host can continue ticking.
pub trait SysModule {
    fn type_name(&self) -> &'static str;
    /// Validates configuration and connections and clears per-run state.
    fn reset(&mut self, now: TimeDelta);
    /// Runs one update for the tick at simulation time `now`.
    fn update_state(&mut self, now: TimeDelta);
}
