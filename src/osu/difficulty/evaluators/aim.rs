use std::f64::consts::PI;

use crate::{any::difficulty::object::IDifficultyObject, osu::difficulty::object::OsuDifficultyObject};

use super::angle::{calc_acute_angle_bonus, calc_wide_angle_bonus};

/// Decides when the angle, velocity change, and slider bonuses of
/// [`AimEvaluator`] are applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BonusGating {
    /// Bonuses are only applied if the object two positions back is a slider
    /// and sliders are considered. Otherwise, the strain is the plain
    /// velocity to the current object.
    ///
    /// Reproduces existing difficulty values.
    #[default]
    Nested,
    /// Bonuses are applied regardless of the kind of the object two positions
    /// back.
    Hoisted,
}

/// Evaluates the difficulty of aiming an object based on
/// - cursor velocity to the current object,
/// - angle difficulty,
/// - sharp velocity increases,
/// - and slider difficulty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct AimEvaluator {
    with_sliders: bool,
    gating: BonusGating,
}

impl AimEvaluator {
    const WIDE_ANGLE_MULTIPLIER: f64 = 1.5;
    const ACUTE_ANGLE_MULTIPLIER: f64 = 2.0;
    const SLIDER_MULTIPLIER: f64 = 1.5;
    const VELOCITY_CHANGE_MULTIPLIER: f64 = 0.75;

    const RADIUS: f64 = OsuDifficultyObject::NORMALIZED_RADIUS as f64;
    const DIAMETER: f64 = OsuDifficultyObject::NORMALIZED_DIAMETER as f64;

    /// Create a new evaluator that considers sliders and uses
    /// [`BonusGating::Nested`].
    pub const fn new() -> Self {
        Self {
            with_sliders: true,
            gating: BonusGating::Nested,
        }
    }

    /// Whether slider paths should contribute to the strain.
    ///
    /// Defaults to `true`.
    pub const fn with_sliders(mut self, with_sliders: bool) -> Self {
        self.with_sliders = with_sliders;

        self
    }

    /// Specify when bonuses are applied.
    ///
    /// Defaults to [`BonusGating::Nested`].
    pub const fn gating(mut self, gating: BonusGating) -> Self {
        self.gating = gating;

        self
    }

    pub const fn includes_sliders(&self) -> bool {
        self.with_sliders
    }

    pub const fn get_gating(&self) -> BonusGating {
        self.gating
    }

    /// Evaluate the aim strain of `curr`.
    ///
    /// `diff_objects` must be the sequence that contains `curr`.
    pub fn evaluate_diff_of(
        &self,
        curr: &OsuDifficultyObject,
        diff_objects: &[OsuDifficultyObject],
    ) -> f64 {
        if curr.is_spinner() || curr.history_count() <= 1 {
            return 0.0;
        }

        let (Some(osu_last_obj), Some(osu_last_last_obj)) =
            (curr.previous(0, diff_objects), curr.previous(1, diff_objects))
        else {
            return 0.0;
        };

        if osu_last_obj.is_spinner() {
            return 0.0;
        }

        let osu_curr_obj = curr;

        // * Calculate the velocity to the current hitobject, which starts
        // * with a base distance / time assuming the last object is a hitcircle.
        let mut curr_vel = osu_curr_obj.jump_dist / osu_curr_obj.strain_time;

        // * But if the last object is a slider, then we extend the travel
        // * velocity through the slider into the current object.
        if osu_last_obj.is_slider() && self.with_sliders {
            curr_vel = curr_vel.max(Self::slider_path_vel(osu_curr_obj));
        }

        // * As above, do the same for the previous hitobject.
        let mut prev_vel = osu_last_obj.jump_dist / osu_last_obj.strain_time;

        let extend_prev = osu_last_last_obj.is_slider() && self.with_sliders;

        if extend_prev {
            prev_vel = prev_vel.max(Self::slider_path_vel(osu_last_obj));
        } else if self.gating == BonusGating::Nested {
            return curr_vel;
        }

        // * Start strain with regular velocity.
        let mut aim_strain = curr_vel;

        let strain_time1 = osu_curr_obj.strain_time.max(osu_last_obj.strain_time);
        let strain_time2 = osu_curr_obj.strain_time.min(osu_last_obj.strain_time);

        // * If rhythms are the same.
        if strain_time1 >= 1.25 * strain_time2 {
            return aim_strain;
        }

        let (Some(curr_angle), Some(last_angle), Some(last_last_angle)) = (
            osu_curr_obj.angle,
            osu_last_obj.angle,
            osu_last_last_obj.angle,
        ) else {
            return aim_strain;
        };

        // * Rewarding angles, take the smaller velocity as base.
        let angle_bonus = curr_vel.min(prev_vel);

        let mut wide_angle_bonus = calc_wide_angle_bonus(curr_angle);
        let mut acute_angle_bonus = calc_acute_angle_bonus(curr_angle);

        // * Only buff deltaTime exceeding 300 bpm 1/2.
        if osu_curr_obj.strain_time > 100.0 {
            acute_angle_bonus = 0.0;
        } else {
            // * Multiply by previous angle, we don't want to buff unless this is a wiggle type pattern.
            acute_angle_bonus *= calc_acute_angle_bonus(last_angle);

            // * The maximum velocity we buff is equal to 125 / strainTime.
            acute_angle_bonus *= angle_bonus.min(125.0 / osu_curr_obj.strain_time);

            // * Scale buff from 150 bpm 1/4 to 200 bpm 1/4.
            acute_angle_bonus *= f64::powf(
                f64::sin(PI / 2.0 * f64::min(1.0, (100.0 - osu_curr_obj.strain_time) / 25.0)),
                2.0,
            );

            // * Buff distance exceeding 50 (radius) up to 100 (diameter).
            acute_angle_bonus *= f64::powf(
                f64::sin(
                    PI / 2.0 * (osu_curr_obj.jump_dist.clamp(Self::RADIUS, Self::DIAMETER) - Self::RADIUS)
                        / Self::RADIUS,
                ),
                2.0,
            );
        }

        // * Penalize wide angles if they're repeated, reducing the penalty as the lastAngle gets more acute.
        wide_angle_bonus *= angle_bonus
            * (1.0 - wide_angle_bonus.min(f64::powf(calc_wide_angle_bonus(last_angle), 3.0)));

        // * Penalize acute angles if they're repeated, reducing the penalty as the lastLastAngle gets more obtuse.
        acute_angle_bonus *= 0.5
            + 0.5
                * (1.0
                    - acute_angle_bonus
                        .min(f64::powf(calc_acute_angle_bonus(last_last_angle), 3.0)));

        let mut velocity_change_bonus = 0.0;

        if prev_vel.max(curr_vel) != 0.0 {
            // * We want to use the average velocity over the whole object when awarding differences, not the individual jump and slider path velocities.
            prev_vel = (osu_last_obj.jump_dist + osu_last_obj.travel_dist) / osu_last_obj.strain_time;
            curr_vel = (osu_curr_obj.jump_dist + osu_curr_obj.travel_dist) / osu_curr_obj.strain_time;

            let vel_diff = (prev_vel - curr_vel).abs();

            // * Scale with ratio of difference compared to 0.5 * max dist.
            let dist_ratio = if vel_diff > 0.0 {
                f64::powf(f64::sin(PI / 2.0 * vel_diff / prev_vel.max(curr_vel)), 2.0)
            } else {
                0.0
            };

            // * Reward for % distance up to 125 / strainTime for overlaps where velocity is still changing.
            let overlap_vel_buff = f64::min(
                125.0 / osu_curr_obj.strain_time.min(osu_last_obj.strain_time),
                vel_diff,
            );

            velocity_change_bonus = overlap_vel_buff * dist_ratio;

            // * Penalize for rhythm changes.
            velocity_change_bonus *= f64::powf(
                osu_curr_obj.strain_time.min(osu_last_obj.strain_time)
                    / osu_curr_obj.strain_time.max(osu_last_obj.strain_time),
                2.0,
            );
        }

        // * Reward sliders based on velocity.
        // Chained sliders are already part of `curr_vel`
        let slider_bonus = if osu_last_obj.is_slider() {
            0.0
        } else {
            osu_curr_obj.travel_dist / osu_curr_obj.travel_time
        };

        // * Add in acute angle bonus or wide angle bonus + velocity change bonus, whichever is larger.
        aim_strain += f64::max(
            acute_angle_bonus * Self::ACUTE_ANGLE_MULTIPLIER,
            wide_angle_bonus * Self::WIDE_ANGLE_MULTIPLIER
                + velocity_change_bonus * Self::VELOCITY_CHANGE_MULTIPLIER,
        );

        // * Add in additional slider velocity bonus.
        if self.with_sliders {
            aim_strain += slider_bonus * Self::SLIDER_MULTIPLIER;
        }

        aim_strain
    }

    /// Velocity from the slider end to `obj` plus the velocity along the
    /// slider path.
    fn slider_path_vel(obj: &OsuDifficultyObject) -> f64 {
        // * Calculate the movement velocity from slider end to current object
        let movement_vel = obj.movement_dist / obj.movement_time;

        // * Calculate the slider velocity from slider head to slider end.
        let travel_vel = obj.travel_dist / obj.travel_time;

        movement_vel + travel_vel
    }
}

impl Default for AimEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
