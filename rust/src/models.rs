//! Core data types for the bridge crossing solvers.

use rustc_hash::FxHashMap;
use std::fmt;

/// A person waiting to cross the bridge.
///
/// `speed` is the time in minutes the person needs to cross alone, and the
/// time they contribute when they are the slower member of a pair. The loader
/// guarantees it is strictly positive. Names need not be unique; a person has
/// no identity beyond value equality of its fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub speed: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, speed: u32) -> Self {
        Self {
            name: name.into(),
            speed,
        }
    }
}

impl fmt::Display for Person {
    // Prints as (Fred,12)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.name, self.speed)
    }
}

/// The ordered collection of people who have not yet crossed.
///
/// Built once per run by the loader, then handed to each solver by value.
/// Solvers consume their roster destructively (sorting or draining it), so a
/// caller comparing solvers clones the roster per run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, person: Person) {
        self.people.push(person);
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Consume the roster, yielding the people in input order.
    pub fn into_people(self) -> Vec<Person> {
        self.people
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self {
            people: iter.into_iter().collect(),
        }
    }
}

/// A single step in a crossing sequence.
///
/// Events are purely an output artifact: solvers record them in order and the
/// caller renders or inspects them after the run. Nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossingEvent {
    /// One or two people cross; the cost is the slower member's speed.
    Cross {
        first: Person,
        second: Option<Person>,
        minutes: u32,
    },
    /// One person ferries the torch back.
    Return { person: Person, minutes: u32 },
}

impl CrossingEvent {
    /// Two people cross together at the slower member's pace.
    pub fn pair(first: &Person, second: &Person) -> Self {
        Self::Cross {
            minutes: first.speed.max(second.speed),
            first: first.clone(),
            second: Some(second.clone()),
        }
    }

    /// A single person crosses alone.
    pub fn solo(person: &Person) -> Self {
        Self::Cross {
            minutes: person.speed,
            first: person.clone(),
            second: None,
        }
    }

    /// A single person returns with the torch.
    pub fn back(person: &Person) -> Self {
        Self::Return {
            minutes: person.speed,
            person: person.clone(),
        }
    }

    /// Time cost of this event in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            Self::Cross { minutes, .. } | Self::Return { minutes, .. } => *minutes,
        }
    }
}

impl fmt::Display for CrossingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cross {
                first,
                second: Some(second),
                ..
            } => write!(f, "{} and {} cross", first, second),
            Self::Cross {
                first,
                second: None,
                ..
            } => write!(f, "{} crosses", first),
            Self::Return { person, .. } => write!(f, "{} returns", person),
        }
    }
}

/// Result of one solver run: the ordered events plus the accumulated total.
///
/// Events are only added through [`CrossingPlan::record`], so `total_minutes`
/// always equals the sum of the event costs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrossingPlan {
    pub events: Vec<CrossingEvent>,
    pub total_minutes: u64,
    pub algorithm_metadata: FxHashMap<String, String>,
}

impl CrossingPlan {
    /// Create an empty plan tagged with the producing algorithm's name.
    pub fn new(algorithm: &str) -> Self {
        let mut algorithm_metadata = FxHashMap::default();
        algorithm_metadata.insert("algorithm".to_string(), algorithm.to_string());
        Self {
            events: Vec::new(),
            total_minutes: 0,
            algorithm_metadata,
        }
    }

    /// Record an event, adding its cost to the running total.
    pub fn record(&mut self, event: CrossingEvent) {
        self.total_minutes += u64::from(event.minutes());
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, speed: u32) -> Person {
        Person::new(name, speed)
    }

    #[test]
    fn test_pair_cost_is_slower_member() {
        let a = person("A", 1);
        let d = person("D", 10);
        assert_eq!(CrossingEvent::pair(&d, &a).minutes(), 10);
        assert_eq!(CrossingEvent::pair(&a, &d).minutes(), 10);
    }

    #[test]
    fn test_solo_and_return_costs() {
        let c = person("C", 5);
        assert_eq!(CrossingEvent::solo(&c).minutes(), 5);
        assert_eq!(CrossingEvent::back(&c).minutes(), 5);
    }

    #[test]
    fn test_event_display() {
        let a = person("A", 1);
        let b = person("B", 2);
        assert_eq!(
            CrossingEvent::pair(&b, &a).to_string(),
            "(B,2) and (A,1) cross"
        );
        assert_eq!(CrossingEvent::solo(&a).to_string(), "(A,1) crosses");
        assert_eq!(CrossingEvent::back(&a).to_string(), "(A,1) returns");
    }

    #[test]
    fn test_person_display() {
        assert_eq!(person("Fred", 12).to_string(), "(Fred,12)");
    }

    #[test]
    fn test_plan_total_tracks_recorded_events() {
        let a = person("A", 1);
        let b = person("B", 2);
        let mut plan = CrossingPlan::new("naive");
        assert_eq!(plan.total_minutes, 0);

        plan.record(CrossingEvent::pair(&b, &a));
        plan.record(CrossingEvent::back(&a));
        plan.record(CrossingEvent::solo(&b));

        // 2 + 1 + 2
        assert_eq!(plan.total_minutes, 5);
        let summed: u64 = plan.events.iter().map(|e| u64::from(e.minutes())).sum();
        assert_eq!(plan.total_minutes, summed);
        assert_eq!(
            plan.algorithm_metadata.get("algorithm"),
            Some(&"naive".to_string())
        );
    }

    #[test]
    fn test_roster_from_iterator_preserves_order() {
        let roster: Roster = vec![person("B", 2), person("A", 1)].into_iter().collect();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.people()[0].name, "B");
        assert_eq!(roster.into_people()[1].name, "A");
    }
}
