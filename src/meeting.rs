//! The round transition engine: who sits a round out, what happens when
//! two agents meet, and how one full round of pairings is applied to a
//! population.

use crate::agent::Agent;
use crate::condition::Condition;
use crate::log::trace;

/// True if `agent` sits this round out: the healthy have nothing to gain
/// from a meeting and the dead cannot attend one.
#[must_use]
pub fn is_excluded(agent: &Agent) -> bool {
    matches!(agent.condition(), Condition::Healthy | Condition::Dead)
}

/// The outcome of one meeting.
///
/// A cure carrier on either side improves both conditions by one step;
/// without one, the meeting worsens both by one step. Names carry over and
/// the outputs come back in argument order.
#[must_use]
pub fn meet(a1: &Agent, a2: &Agent) -> (Agent, Agent) {
    if a1.condition() == Condition::Cure || a2.condition() == Condition::Cure {
        (
            a1.with_condition(a1.condition().improve()),
            a2.with_condition(a2.condition().improve()),
        )
    } else {
        (
            a1.with_condition(a1.condition().worsen()),
            a2.with_condition(a2.condition().worsen()),
        )
    }
}

/// Applies one round of pairwise meetings to a population.
///
/// The round runs in three steps:
/// 1. Partition the population into excluded and eligible agents (see
///    [`is_excluded`]), each group keeping the input's relative order.
/// 2. Pair the eligible group off two at a time, in order, and put each
///    pair through [`meet`]. An odd group leaves its last agent without a
///    partner; that agent comes through unchanged.
/// 3. Concatenate: the excluded group first, then the meeting outcomes in
///    pairing order.
///
/// The concatenation means the output interleaving differs from the
/// input's whenever both groups are non-empty; only the relative order
/// *within* each group is preserved. Callers must not rely on positional
/// correspondence between input and output.
///
/// The population may have any length, including zero and odd. Every
/// agent in the input appears in the output exactly once, under the same
/// name.
#[must_use]
pub fn apply_round(agents: &[Agent]) -> Vec<Agent> {
    let excluded: Vec<Agent> = agents.iter().filter(|a| is_excluded(a)).cloned().collect();
    let eligible: Vec<Agent> = agents.iter().filter(|a| !is_excluded(a)).cloned().collect();
    trace!(
        "applying a round to {} agents: {} sitting out, {} meeting",
        agents.len(),
        excluded.len(),
        eligible.len()
    );

    let mut updated = excluded;
    for pair in eligible.chunks(2) {
        match pair {
            [a1, a2] => {
                let (b1, b2) = meet(a1, a2);
                trace!(
                    "{} ({}) meets {} ({}): now {} and {}",
                    a1.name(),
                    a1.condition(),
                    a2.name(),
                    a2.condition(),
                    b1.condition(),
                    b2.condition()
                );
                updated.push(b1);
                updated.push(b2);
            }
            [odd_one_out] => {
                trace!("{} has no partner this round", odd_one_out.name());
                updated.push(odd_one_out.clone());
            }
            _ => unreachable!("chunks(2) yields windows of one or two agents"),
        }
    }
    updated
}
