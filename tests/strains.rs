use proptest::prelude::*;
use rosu_aim::{
    model::hit_object::HitObjectKind,
    osu::difficulty::{
        evaluators::{AimEvaluator, BonusGating},
        objects::{DifficultyObjectInput, DifficultyObjects},
        skills::AimStrains,
    },
};

use self::common::*;

mod common;

fn kind() -> impl Strategy<Value = HitObjectKind> {
    prop_oneof![
        Just(HitObjectKind::Circle),
        Just(HitObjectKind::Slider),
        Just(HitObjectKind::Spinner),
    ]
}

prop_compose! {
    fn input()(
        kind in kind(),
        jump_dist in 0.0..400.0,
        strain_time in 25.0..500.0,
        movement in (0.0..300.0, 25.0..300.0),
        travel in (0.0..300.0, 25.0..300.0),
        angle in proptest::option::of(0.0..=std::f64::consts::PI),
    ) -> (DifficultyObjectInput, Option<f64>) {
        let mut input = DifficultyObjectInput::new(kind, 0.0, jump_dist, strain_time)
            .movement(movement.0, movement.1);

        if kind.is_slider() {
            input = input.travel(travel.0, travel.1);
        }

        (input, angle)
    }
}

fn objects(inputs: Vec<(DifficultyObjectInput, Option<f64>)>) -> DifficultyObjects {
    let inputs = inputs
        .into_iter()
        .enumerate()
        .map(|(i, (input, angle))| match angle {
            Some(angle) if i >= 2 => input.angle(angle),
            _ => input,
        });

    DifficultyObjects::new(inputs).unwrap()
}

proptest! {
    #[test]
    fn non_negative_and_finite(inputs in prop::collection::vec(input(), 0..24), hoisted: bool) {
        let objects = objects(inputs);
        let gating = if hoisted { BonusGating::Hoisted } else { BonusGating::Nested };
        let strains = AimStrains::calculate(&objects, gating);

        prop_assert_eq!(strains.len(), objects.len());

        for strain in strains.aim.iter().chain(strains.aim_no_sliders.iter()) {
            prop_assert!(strain.is_finite() && *strain >= 0.0, "{}", strain);
        }
    }

    #[test]
    fn spinners_are_zero(inputs in prop::collection::vec(input(), 0..24)) {
        let objects = objects(inputs);
        let evaluator = AimEvaluator::new().gating(BonusGating::Hoisted);

        for curr in &objects {
            let prev_is_spinner = curr.idx > 0 && objects[curr.idx - 1].is_spinner();

            if curr.is_spinner() || curr.idx < 2 || prev_is_spinner {
                prop_assert_eq!(evaluator.evaluate_diff_of(curr, objects.as_slice()), 0.0);
            }
        }
    }
}

#[test]
fn slider_pattern_strains() {
    let objects = slider_pattern();
    let strains = AimStrains::calculate(&objects, BonusGating::Nested);

    assert_eq!(&strains.aim[..2], &[0.0, 0.0]);
    assert_close(strains.aim[4], 2.489_957_887_669_656);
    assert_close(strains.aim_no_sliders[4], 75.0 / 80.0);
}
