use crate::osu::difficulty::{
    evaluators::{AimEvaluator, BonusGating},
    object::OsuDifficultyObject,
    objects::DifficultyObjects,
};

/// Aim skill that records the strain of each processed object.
///
/// Strains are not decayed or weighed; that's up to the consumer.
#[derive(Clone, Debug)]
pub struct Aim {
    evaluator: AimEvaluator,
    object_strains: Vec<f64>,
}

impl Aim {
    pub fn new(include_sliders: bool) -> Self {
        Self::with_gating(include_sliders, BonusGating::default())
    }

    pub fn with_gating(include_sliders: bool, gating: BonusGating) -> Self {
        Self {
            evaluator: AimEvaluator::new()
                .with_sliders(include_sliders)
                .gating(gating),
            object_strains: Vec::with_capacity(256),
        }
    }

    /// Evaluate and record the strain of `curr`.
    pub fn process(&mut self, curr: &OsuDifficultyObject, objects: &[OsuDifficultyObject]) -> f64 {
        let strain = self.evaluator.evaluate_diff_of(curr, objects);
        self.object_strains.push(strain);

        strain
    }

    pub const fn include_sliders(&self) -> bool {
        self.evaluator.includes_sliders()
    }

    pub fn object_strains(&self) -> &[f64] {
        &self.object_strains
    }

    pub fn into_object_strains(self) -> Vec<f64> {
        self.object_strains
    }
}

/// Strains of both aim variants for every object of a sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AimStrains {
    /// Strains including slider paths.
    pub aim: Vec<f64>,
    /// Strains without slider paths.
    pub aim_no_sliders: Vec<f64>,
}

impl AimStrains {
    pub fn calculate(objects: &DifficultyObjects, gating: BonusGating) -> Self {
        let mut aim = Aim::with_gating(true, gating);
        let mut aim_no_sliders = Aim::with_gating(false, gating);

        for curr in objects {
            aim.process(curr, objects.as_slice());
            aim_no_sliders.process(curr, objects.as_slice());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(objects = objects.len(), "Evaluated aim strains");

        Self {
            aim: aim.into_object_strains(),
            aim_no_sliders: aim_no_sliders.into_object_strains(),
        }
    }

    pub fn len(&self) -> usize {
        self.aim.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aim.is_empty()
    }
}
