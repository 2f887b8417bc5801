//! Build-time limits shared by the shell helpers.

/// Highest shell angular momentum supported by the basis-set code (k functions).
pub const MAX_SHELL_TYPE: i64 = 7;

/// Spectroscopic labels indexed by angular momentum, up to `MAX_SHELL_TYPE`.
pub const SHELL_LABELS: [char; MAX_SHELL_TYPE as usize + 1] =
    ['s', 'p', 'd', 'f', 'g', 'h', 'i', 'k'];
