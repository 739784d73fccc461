/// Prisoner body simulation report command.
pub mod body_sim;
/// Generic property decode command.
pub mod get;
/// Occurrence listing command.
pub mod scan;
/// Property rewrite command.
pub mod set;
/// Clock conversion command.
pub mod time;

mod util;

/// Boxed error returned by command entry points.
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Result type of command entry points.
pub type CmdResult = Result<(), DynError>;
