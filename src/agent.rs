//! The immutable agent record: a name and a current health condition.

use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// A named member of the population.
///
/// Agents are plain immutable values. A round never mutates an agent in
/// place; it produces a new `Agent` with the same name and, possibly, a
/// different condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    name: String,
    condition: Condition,
}

impl Agent {
    pub fn new<S: Into<String>>(name: S, condition: Condition) -> Agent {
        Agent {
            name: name.into(),
            condition,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Returns this agent holding `condition` instead. The name carries
    /// over unchanged.
    #[must_use]
    pub fn with_condition(&self, condition: Condition) -> Agent {
        Agent {
            name: self.name.clone(),
            condition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Agent;
    use crate::condition::Condition;

    #[test]
    fn with_condition_preserves_name() {
        let agent = Agent::new("ada", Condition::Sick);
        let recovered = agent.with_condition(Condition::Healthy);
        assert_eq!(recovered.name(), "ada");
        assert_eq!(recovered.condition(), Condition::Healthy);
        // The original value is untouched.
        assert_eq!(agent.condition(), Condition::Sick);
    }

    #[test]
    fn deserializes_from_a_population_record() {
        let roster: Vec<Agent> = serde_json::from_str(
            r#"[
                {"name": "ada", "condition": "CURE"},
                {"name": "grace", "condition": "DYING"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            roster,
            vec![
                Agent::new("ada", Condition::Cure),
                Agent::new("grace", Condition::Dying),
            ]
        );
    }
}
