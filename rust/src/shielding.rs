//! Shielding crossing strategy: sorted disposal of the two slowest people.

use crate::models::{CrossingEvent, CrossingPlan, Roster};
use crate::{log_candidates, log_trace};

/// Solver implementing the sort-based strategy.
///
/// After sorting by speed, each loop pass sends the two slowest remaining
/// people across using the cheaper of two local plans:
///
/// - *shielding*: the two fastest cross, the fastest returns, the two slowest
///   cross together, the second-fastest returns. The slow pair shares one
///   crossing, so the second-slowest speed never enters the total.
/// - *pairwise*: the slowest crosses with the fastest, the fastest returns,
///   the second-slowest crosses with the fastest, the fastest returns.
///
/// With 0-3 people remaining the sequence is closed-form. O(N log N),
/// dominated by the sort. For every input the total is less than or equal to
/// the greedy total.
pub struct ShieldingSolver {
    roster: Roster,
    verbosity: u8,
}

impl ShieldingSolver {
    /// Create a solver owning its copy of the roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            verbosity: 0,
        }
    }

    /// Set the verbosity level for progress output.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Run the shielding strategy, consuming the solver.
    pub fn solve(self) -> CrossingPlan {
        let mut plan = CrossingPlan::new("shielding");
        let mut people = self.roster.into_people();

        // Stable sort: equal speeds keep their input order.
        people.sort_by_key(|person| person.speed);
        log_trace!(self.verbosity, "Sorted roster: {:?}", people);

        while people.len() >= 4 {
            let n = people.len();
            let shielding = u64::from(people[1].speed)
                + u64::from(people[0].speed)
                + u64::from(people[n - 1].speed)
                + u64::from(people[1].speed);
            let pairwise = u64::from(people[n - 1].speed)
                + u64::from(people[0].speed)
                + u64::from(people[n - 2].speed)
                + u64::from(people[0].speed);
            log_candidates!(
                self.verbosity,
                "{} remaining: shielding cost {}, pairwise cost {}",
                n,
                shielding,
                pairwise
            );

            if pairwise < shielding {
                plan.record(CrossingEvent::pair(&people[n - 1], &people[0]));
                plan.record(CrossingEvent::back(&people[0]));
                plan.record(CrossingEvent::pair(&people[n - 2], &people[0]));
                plan.record(CrossingEvent::back(&people[0]));
            } else {
                // Exact ties cost the same either way; prefer shielding.
                plan.record(CrossingEvent::pair(&people[1], &people[0]));
                plan.record(CrossingEvent::back(&people[0]));
                plan.record(CrossingEvent::pair(&people[n - 1], &people[n - 2]));
                plan.record(CrossingEvent::back(&people[1]));
            }

            // The two slowest are across for good.
            people.pop();
            people.pop();
        }

        match people.len() {
            0 => {}
            1 => plan.record(CrossingEvent::solo(&people[0])),
            2 => plan.record(CrossingEvent::pair(&people[1], &people[0])),
            3 => {
                plan.record(CrossingEvent::pair(&people[2], &people[0]));
                plan.record(CrossingEvent::back(&people[0]));
                plan.record(CrossingEvent::pair(&people[1], &people[0]));
            }
            _ => unreachable!("loop leaves at most 3 people"),
        }

        plan
    }
}
