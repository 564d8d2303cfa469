use std::{f64::consts::PI, ops::Index, slice::Iter};

use crate::model::hit_object::HitObjectKind;

use super::object::OsuDifficultyObject;

/// Derived attributes of a hit object before they're validated.
///
/// Movement and travel times that are not specified default to
/// [`OsuDifficultyObject::MIN_DELTA_TIME`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct DifficultyObjectInput {
    pub(crate) kind: HitObjectKind,
    pub(crate) start_time: f64,
    pub(crate) jump_dist: f64,
    pub(crate) movement_dist: f64,
    pub(crate) movement_time: Option<f64>,
    pub(crate) travel_dist: f64,
    pub(crate) travel_time: Option<f64>,
    pub(crate) strain_time: f64,
    pub(crate) angle: Option<f64>,
}

impl DifficultyObjectInput {
    pub const fn new(kind: HitObjectKind, start_time: f64, jump_dist: f64, strain_time: f64) -> Self {
        Self {
            kind,
            start_time,
            jump_dist,
            movement_dist: 0.0,
            movement_time: None,
            travel_dist: 0.0,
            travel_time: None,
            strain_time,
            angle: None,
        }
    }

    /// Specify the distance and time from the end of the previous slider's
    /// path to this object.
    pub const fn movement(mut self, dist: f64, time: f64) -> Self {
        self.movement_dist = dist;
        self.movement_time = Some(time);

        self
    }

    /// Specify the distance and time along this slider's path.
    pub const fn travel(mut self, dist: f64, time: f64) -> Self {
        self.travel_dist = dist;
        self.travel_time = Some(time);

        self
    }

    /// Specify the angle in radians between this object and the two previous
    /// objects.
    pub const fn angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);

        self
    }

    fn validate(self, idx: usize) -> Result<Self, PreprocessError> {
        if !(self.strain_time.is_finite() && self.strain_time > 0.0) {
            return Err(PreprocessError::NonPositiveStrainTime {
                idx,
                strain_time: self.strain_time,
            });
        }

        let times = [
            ("movement time", self.movement_time),
            ("travel time", self.travel_time),
        ];

        for (field, time) in times {
            if let Some(value) = time.filter(|time| !(time.is_finite() && *time > 0.0)) {
                return Err(PreprocessError::NonPositiveTime { idx, field, value });
            }
        }

        let dists = [
            ("jump distance", self.jump_dist),
            ("movement distance", self.movement_dist),
            ("travel distance", self.travel_dist),
        ];

        for (field, value) in dists {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PreprocessError::InvalidDistance { idx, field, value });
            }
        }

        if !self.kind.is_slider() && self.travel_dist > 0.0 {
            return Err(PreprocessError::TravelOnNonSlider { idx });
        }

        match self.angle {
            Some(_) if idx < OsuDifficultyObject::HISTORY_LEN => {
                Err(PreprocessError::UnexpectedAngle { idx })
            }
            Some(angle) if !(0.0..=PI).contains(&angle) => {
                Err(PreprocessError::AngleOutOfRange { idx, angle })
            }
            _ => Ok(self),
        }
    }
}

/// Preprocessed attributes that violate the invariants of
/// [`OsuDifficultyObject`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PreprocessError {
    #[error("object {idx}: strain time must be positive and finite, got {strain_time}")]
    NonPositiveStrainTime { idx: usize, strain_time: f64 },
    #[error("object {idx}: {field} must be positive and finite, got {value}")]
    NonPositiveTime {
        idx: usize,
        field: &'static str,
        value: f64,
    },
    #[error("object {idx}: {field} must be non-negative and finite, got {value}")]
    InvalidDistance {
        idx: usize,
        field: &'static str,
        value: f64,
    },
    #[error("object {idx}: only sliders can have a travel distance")]
    TravelOnNonSlider { idx: usize },
    #[error("object {idx}: angle requires two previous objects")]
    UnexpectedAngle { idx: usize },
    #[error("object {idx}: angle {angle} is not within [0, π]")]
    AngleOutOfRange { idx: usize, angle: f64 },
}

/// An ordered and immutable sequence of [`OsuDifficultyObject`]s.
///
/// Every object's index matches its position so that looking back from an
/// object always yields its actual predecessors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DifficultyObjects {
    objects: Box<[OsuDifficultyObject]>,
}

impl DifficultyObjects {
    /// Validate all inputs and assign their indices.
    ///
    /// Fails on the first input that violates an invariant.
    pub fn new<I>(inputs: I) -> Result<Self, PreprocessError>
    where
        I: IntoIterator<Item = DifficultyObjectInput>,
    {
        let objects = inputs
            .into_iter()
            .enumerate()
            .map(|(idx, input)| {
                input
                    .validate(idx)
                    .map(|input| OsuDifficultyObject::new(idx, input))
            })
            .collect::<Result<Box<[_]>, _>>();

        match objects {
            Ok(objects) => Ok(Self { objects }),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Rejected preprocessed hit objects: {err}");

                Err(err)
            }
        }
    }

    pub fn as_slice(&self) -> &[OsuDifficultyObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&OsuDifficultyObject> {
        self.objects.get(idx)
    }

    pub fn iter(&self) -> Iter<'_, OsuDifficultyObject> {
        self.objects.iter()
    }
}

impl Index<usize> for DifficultyObjects {
    type Output = OsuDifficultyObject;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.objects[idx]
    }
}

impl<'a> IntoIterator for &'a DifficultyObjects {
    type Item = &'a OsuDifficultyObject;
    type IntoIter = Iter<'a, OsuDifficultyObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::any::difficulty::object::IDifficultyObject;

    use super::*;

    fn circle(strain_time: f64) -> DifficultyObjectInput {
        DifficultyObjectInput::new(HitObjectKind::Circle, 0.0, 50.0, strain_time)
    }

    #[test]
    fn assigns_indices_and_defaults() {
        let objects = DifficultyObjects::new([
            circle(100.0),
            circle(100.0),
            DifficultyObjectInput::new(HitObjectKind::Slider, 200.0, 80.0, 100.0)
                .travel(40.0, 60.0)
                .angle(1.0),
        ])
        .unwrap();

        assert_eq!(objects.len(), 3);

        for (i, obj) in objects.iter().enumerate() {
            assert_eq!(obj.idx, i);
            assert_eq!(obj.history_count(), i);
        }

        let slider = &objects[2];
        assert!(slider.is_slider());
        assert_eq!(slider.travel_time, 60.0);
        assert_eq!(slider.movement_time, OsuDifficultyObject::MIN_DELTA_TIME);
        assert_eq!(slider.angle, Some(1.0));

        let prev = slider.previous(0, objects.as_slice()).unwrap();
        let prev_prev = slider.previous(1, objects.as_slice()).unwrap();
        assert_eq!((prev.idx, prev_prev.idx), (1, 0));
    }

    #[test]
    fn history_count_is_capped() {
        let objects = DifficultyObjects::new((0..5).map(|_| circle(50.0))).unwrap();

        assert_eq!(objects[4].history_count(), OsuDifficultyObject::HISTORY_LEN);
    }

    #[test]
    fn empty_sequence() {
        let objects = DifficultyObjects::new([]).unwrap();

        assert!(objects.is_empty());
        assert!(objects.get(0).is_none());
    }

    #[test]
    fn rejects_non_positive_strain_time() {
        let err = DifficultyObjects::new([circle(100.0), circle(0.0)]).unwrap_err();

        assert_eq!(
            err,
            PreprocessError::NonPositiveStrainTime {
                idx: 1,
                strain_time: 0.0
            }
        );

        assert!(DifficultyObjects::new([circle(f64::NAN)]).is_err());
    }

    #[test]
    fn rejects_non_positive_travel_time() {
        let slider =
            DifficultyObjectInput::new(HitObjectKind::Slider, 0.0, 0.0, 100.0).travel(10.0, -5.0);

        assert!(matches!(
            DifficultyObjects::new([slider]),
            Err(PreprocessError::NonPositiveTime {
                idx: 0,
                field: "travel time",
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_distance() {
        let input = DifficultyObjectInput::new(HitObjectKind::Circle, 0.0, -1.0, 100.0);

        assert!(matches!(
            DifficultyObjects::new([input]),
            Err(PreprocessError::InvalidDistance {
                field: "jump distance",
                ..
            })
        ));
    }

    #[test]
    fn rejects_travel_on_circle() {
        let input = circle(100.0).travel(10.0, 50.0);

        assert_eq!(
            DifficultyObjects::new([input]),
            Err(PreprocessError::TravelOnNonSlider { idx: 0 })
        );
    }

    #[test]
    fn rejects_early_angle() {
        let err = DifficultyObjects::new([circle(100.0), circle(100.0).angle(1.0)]).unwrap_err();

        assert_eq!(err, PreprocessError::UnexpectedAngle { idx: 1 });
    }

    #[test]
    fn rejects_angle_out_of_range() {
        let inputs = [circle(100.0), circle(100.0), circle(100.0).angle(4.0)];

        assert!(matches!(
            DifficultyObjects::new(inputs),
            Err(PreprocessError::AngleOutOfRange { idx: 2, .. })
        ));
    }

    #[test]
    fn error_message() {
        let err = PreprocessError::TravelOnNonSlider { idx: 7 };

        assert_eq!(err.to_string(), "object 7: only sliders can have a travel distance");
    }
}
