#![allow(unused)]

use rosu_aim::{
    model::hit_object::HitObjectKind,
    osu::difficulty::objects::{DifficultyObjectInput, DifficultyObjects},
};

pub const TOLERANCE: f64 = 1e-9;

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

/// Five objects whose last object has a slider two positions back, the same
/// rhythm as its predecessor, and a short acute jump.
pub fn slider_pattern() -> DifficultyObjects {
    DifficultyObjects::new([
        DifficultyObjectInput::new(HitObjectKind::Circle, 0.0, 0.0, 100.0),
        DifficultyObjectInput::new(HitObjectKind::Circle, 100.0, 90.0, 100.0),
        DifficultyObjectInput::new(HitObjectKind::Slider, 190.0, 80.0, 90.0)
            .travel(40.0, 60.0)
            .angle(1.5),
        DifficultyObjectInput::new(HitObjectKind::Circle, 275.0, 70.0, 85.0)
            .movement(60.0, 50.0)
            .angle(1.0),
        DifficultyObjectInput::new(HitObjectKind::Slider, 355.0, 75.0, 80.0)
            .travel(30.0, 50.0)
            .angle(0.8),
    ])
    .unwrap()
}
