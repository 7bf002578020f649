//! Applying vote outcomes to the page

use crate::outcome::VoteOutcome;
use crate::reaction::Counters;

#[cfg(test)]
use mockall::automock;

/// The single UI step taken for an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Overwrite the displayed counters with server values
    UpdateCounters(Counters),
    /// Send the browser to another page
    Redirect(String),
    /// Show a blocking notification
    Notify(String),
    Nothing,
}

/// Side effects available to the reaction handler for one clicked control
#[cfg_attr(test, automock)]
pub trait ReactionSurface {
    /// Replace the likes/dislikes counters next to the clicked control
    fn update_counters(&self, counters: Counters);

    fn redirect(&self, path: &str);

    fn notify(&self, message: &str);
}

/// Decide what an outcome does to the page
pub fn plan(outcome: &VoteOutcome, login_path: &str) -> Reconciliation {
    match outcome {
        VoteOutcome::Success { counters } => Reconciliation::UpdateCounters(*counters),
        VoteOutcome::Unauthorized => Reconciliation::Redirect(login_path.to_string()),
        VoteOutcome::Failure(failure) if failure.should_notify() => {
            Reconciliation::Notify(failure.to_string())
        }
        VoteOutcome::Failure(_) | VoteOutcome::Empty => Reconciliation::Nothing,
    }
}

/// Perform a planned step against a surface
pub fn apply<S: ReactionSurface + ?Sized>(step: &Reconciliation, surface: &S) {
    match step {
        Reconciliation::UpdateCounters(counters) => surface.update_counters(*counters),
        Reconciliation::Redirect(path) => surface.redirect(path),
        Reconciliation::Notify(message) => surface.notify(message),
        Reconciliation::Nothing => {}
    }
}
