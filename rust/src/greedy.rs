//! Greedy crossing strategy: pair everyone with the single fastest person.

use std::collections::VecDeque;

use crate::log_decisions;
use crate::models::{CrossingEvent, CrossingPlan, Person, Roster};

/// Solver implementing the naive strategy.
///
/// Every remaining person crosses paired with the overall fastest person, who
/// then ferries the torch back for the next pair. This minimizes the return
/// journeys and runs in O(N) after one scan to find the fastest, but it does
/// not always yield the fastest total: for every input its total is greater
/// than or equal to the shielding total, and tests rely on exactly that.
pub struct GreedySolver {
    roster: Roster,
    verbosity: u8,
}

impl GreedySolver {
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

    /// Run the naive strategy, consuming the solver.
    ///
    /// If several people tie for the fastest speed, the first one in roster
    /// order is picked. The choice is visible in the event log but never in
    /// the total, since only the winning speed enters the arithmetic.
    pub fn solve(self) -> CrossingPlan {
        let mut plan = CrossingPlan::new("naive");
        let people = self.roster.into_people();

        if people.is_empty() {
            return plan;
        }
        if people.len() == 1 {
            plan.record(CrossingEvent::solo(&people[0]));
            return plan;
        }

        // One scan for the fastest; strict comparison keeps the first of any tie.
        let mut fastest_index = 0;
        for (index, person) in people.iter().enumerate() {
            if person.speed < people[fastest_index].speed {
                fastest_index = index;
            }
        }
        let fastest = people[fastest_index].clone();
        log_decisions!(self.verbosity, "Fastest overall person: {}", fastest);

        // Everyone else waits in input order.
        let mut queue: VecDeque<&Person> = people
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != fastest_index)
            .map(|(_, person)| person)
            .collect();

        while let Some(person) = queue.pop_front() {
            // The queued person is always the slower half of the pair.
            plan.record(CrossingEvent::pair(person, &fastest));
            if !queue.is_empty() {
                plan.record(CrossingEvent::back(&fastest));
            }
        }

        plan
    }
}
