//! A pairwise-meeting model of agents in discrete health conditions
//!
//! Mingle models a population of named agents, each holding one of five
//! health conditions, across rounds of pairwise meetings. In each round,
//! agents with nothing to gain from a meeting (the healthy) or no way to
//! attend one (the dead) sit out; the rest pair off in order and each
//! meeting moves both participants one step along the severity scale,
//! toward health if a cure carrier is present and away from it otherwise.
//!
//! The crate is the round engine only. Driving it across multiple rounds,
//! loading an initial population and doing something with the result are
//! left to the caller:
//!
//! ```rust
//! use mingle::prelude::*;
//!
//! let roster = vec![
//!     Agent::new("ada", Condition::Cure),
//!     Agent::new("grace", Condition::Sick),
//!     Agent::new("edsger", Condition::Healthy),
//! ];
//! let updated = apply_round(&roster);
//! assert_eq!(updated.len(), roster.len());
//! ```
//!
//! [`apply_round`](meeting::apply_round) is a pure function of its input:
//! it holds no state between calls and the same population always produces
//! the same result.
pub mod agent;
pub mod condition;
pub mod error;
pub mod log;
pub mod meeting;
pub mod prelude;
