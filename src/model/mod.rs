/// The kind of a hit object.
pub mod hit_object;

/// The tail of a slider.
pub mod slider_tail;
