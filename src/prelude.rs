pub use crate::agent::Agent;
pub use crate::condition::Condition;
pub use crate::error::MingleError;
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::meeting::{apply_round, is_excluded, meet};
