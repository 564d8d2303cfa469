use crate::{any::difficulty::object::IDifficultyObject, model::hit_object::HitObjectKind};

use super::objects::DifficultyObjectInput;

/// A hit object whose geometry has already been derived.
///
/// All distances are normalized to a circle radius of
/// [`NORMALIZED_RADIUS`](Self::NORMALIZED_RADIUS) and all times are in
/// milliseconds.
///
/// Instances are only created through
/// [`DifficultyObjects`](super::objects::DifficultyObjects) which validates
/// them and never mutates them afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct OsuDifficultyObject {
    pub idx: usize,
    pub kind: HitObjectKind,
    pub start_time: f64,
    /// Distance from the end of the previous object to this object.
    pub jump_dist: f64,
    /// Distance from the end of the previous slider's path to this object.
    pub movement_dist: f64,
    pub movement_time: f64,
    /// Distance along this object's own slider path.
    pub travel_dist: f64,
    pub travel_time: f64,
    pub strain_time: f64,
    pub angle: Option<f64>,
}

impl OsuDifficultyObject {
    pub const NORMALIZED_RADIUS: i32 = 50;
    pub const NORMALIZED_DIAMETER: i32 = Self::NORMALIZED_RADIUS * 2;

    pub const MIN_DELTA_TIME: f64 = 25.0;

    /// How many previous objects are visible to an object.
    pub const HISTORY_LEN: usize = 2;

    pub(crate) const fn new(idx: usize, input: DifficultyObjectInput) -> Self {
        let DifficultyObjectInput {
            kind,
            start_time,
            jump_dist,
            movement_dist,
            movement_time,
            travel_dist,
            travel_time,
            strain_time,
            angle,
        } = input;

        Self {
            idx,
            kind,
            start_time,
            jump_dist,
            movement_dist,
            movement_time: match movement_time {
                Some(time) => time,
                None => Self::MIN_DELTA_TIME,
            },
            travel_dist,
            travel_time: match travel_time {
                Some(time) => time,
                None => Self::MIN_DELTA_TIME,
            },
            strain_time,
            angle,
        }
    }

    /// Amount of available previous objects, at most
    /// [`HISTORY_LEN`](Self::HISTORY_LEN).
    pub const fn history_count(&self) -> usize {
        if self.idx < Self::HISTORY_LEN {
            self.idx
        } else {
            Self::HISTORY_LEN
        }
    }

    pub const fn is_slider(&self) -> bool {
        self.kind.is_slider()
    }

    pub const fn is_spinner(&self) -> bool {
        self.kind.is_spinner()
    }
}

impl IDifficultyObject for OsuDifficultyObject {
    fn idx(&self) -> usize {
        self.idx
    }
}
