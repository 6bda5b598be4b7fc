

/// Shifts and `LUI`.
pub mod shifts;
