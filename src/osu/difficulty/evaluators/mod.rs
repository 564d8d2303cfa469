pub use self::{
    aim::{AimEvaluator, BonusGating},
    angle::{calc_acute_angle_bonus, calc_wide_angle_bonus},
};

mod aim;
mod angle;
