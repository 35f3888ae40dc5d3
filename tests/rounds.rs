//! Drives the public API the way an external round driver would.

use mingle::prelude::*;

fn roster_names(agents: &[Agent]) -> Vec<&str> {
    let mut names: Vec<&str> = agents.iter().map(Agent::name).collect();
    names.sort_unstable();
    names
}

fn find(agents: &[Agent], name: &str) -> Condition {
    agents
        .iter()
        .find(|a| a.name() == name)
        .unwrap_or_else(|| panic!("{name} missing from the roster"))
        .condition()
}

#[test]
fn a_round_preserves_the_roster() {
    // Odd length, all five conditions represented.
    let roster = vec![
        Agent::new("ada", Condition::Cure),
        Agent::new("grace", Condition::Healthy),
        Agent::new("edsger", Condition::Sick),
        Agent::new("alan", Condition::Dying),
        Agent::new("kurt", Condition::Dead),
        Agent::new("emmy", Condition::Sick),
        Agent::new("alonzo", Condition::Dying),
    ];
    let updated = apply_round(&roster);

    assert_eq!(updated.len(), roster.len());
    assert_eq!(roster_names(&updated), roster_names(&roster));
}

#[test]
fn a_cure_carrier_heals_its_partner() {
    let roster = vec![
        Agent::new("ada", Condition::Cure),
        Agent::new("grace", Condition::Sick),
    ];
    let updated = apply_round(&roster);

    assert_eq!(find(&updated, "ada"), Condition::Cure);
    assert_eq!(find(&updated, "grace"), Condition::Healthy);
}

#[test]
fn two_sick_agents_worsen_each_other() {
    let roster = vec![
        Agent::new("ada", Condition::Sick),
        Agent::new("grace", Condition::Sick),
    ];
    let updated = apply_round(&roster);

    assert_eq!(find(&updated, "ada"), Condition::Dying);
    assert_eq!(find(&updated, "grace"), Condition::Dying);
}

#[test]
fn output_leads_with_excluded_group() {
    let roster = vec![
        Agent::new("ada", Condition::Sick),
        Agent::new("grace", Condition::Healthy),
        Agent::new("edsger", Condition::Dying),
        Agent::new("alan", Condition::Dead),
    ];
    let updated = apply_round(&roster);

    // Excluded agents first, in their original relative order, then the
    // meeting outcomes in pairing order.
    let names: Vec<&str> = updated.iter().map(Agent::name).collect();
    assert_eq!(names, vec!["grace", "alan", "ada", "edsger"]);
    assert_eq!(find(&updated, "grace"), Condition::Healthy);
    assert_eq!(find(&updated, "alan"), Condition::Dead);
    assert_eq!(find(&updated, "ada"), Condition::Dying);
    assert_eq!(find(&updated, "edsger"), Condition::Dead);
}

#[test]
fn a_lone_eligible_agent_keeps_its_condition() {
    let roster = vec![Agent::new("ada", Condition::Sick)];
    assert_eq!(apply_round(&roster), roster);
}

#[test]
fn an_empty_roster_is_a_no_op() {
    assert_eq!(apply_round(&[]), vec![]);
}

#[test]
fn the_dead_do_not_meet() {
    let roster = vec![
        Agent::new("ada", Condition::Dead),
        Agent::new("grace", Condition::Dead),
    ];
    assert_eq!(apply_round(&roster), roster);
}

#[test]
fn rounds_are_deterministic() {
    let roster = vec![
        Agent::new("ada", Condition::Cure),
        Agent::new("grace", Condition::Dying),
        Agent::new("edsger", Condition::Sick),
    ];
    assert_eq!(apply_round(&roster), apply_round(&roster));
}

#[test]
fn a_json_roster_round_trips_through_the_engine() {
    let roster: Vec<Agent> = serde_json::from_str(
        r#"[
            {"name": "ada", "condition": "SICK"},
            {"name": "grace", "condition": "CURE"}
        ]"#,
    )
    .expect("roster should deserialize");
    let updated = apply_round(&roster);

    assert_eq!(find(&updated, "ada"), Condition::Healthy);
    assert_eq!(find(&updated, "grace"), Condition::Cure);
}
