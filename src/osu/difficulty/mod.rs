/// Per-object difficulty evaluation.
pub mod evaluators;

/// A single preprocessed hit object.
pub mod object;

/// Sequences of preprocessed hit objects.
pub mod objects;

/// Skills that evaluate full sequences.
pub mod skills;
