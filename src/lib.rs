//! Aim strain evaluation for osu!standard.
//!
//! Given a sequence of preprocessed hit objects, i.e. objects whose jump
//! distances, travel times, and angles have already been derived, this crate
//! computes the aim strain of every object. Those strains are meant to be fed
//! into a strain aggregator which decays and weighs them into a skill value.
//!
//! ## Usage
//!
//! ```
//! use rosu_aim::{
//!     model::hit_object::HitObjectKind,
//!     osu::difficulty::{
//!         evaluators::AimEvaluator,
//!         objects::{DifficultyObjectInput, DifficultyObjects},
//!     },
//! };
//!
//! let inputs = vec![
//!     DifficultyObjectInput::new(HitObjectKind::Circle, 0.0, 0.0, 25.0),
//!     DifficultyObjectInput::new(HitObjectKind::Circle, 150.0, 120.0, 150.0),
//!     DifficultyObjectInput::new(HitObjectKind::Circle, 300.0, 90.0, 150.0).angle(2.1),
//! ];
//!
//! let objects = DifficultyObjects::new(inputs)?;
//! let evaluator = AimEvaluator::new().with_sliders(true);
//!
//! let strains: Vec<f64> = objects
//!     .iter()
//!     .map(|curr| evaluator.evaluate_diff_of(curr, objects.as_slice()))
//!     .collect();
//!
//! assert_eq!(strains.len(), 3);
//! # Ok::<_, rosu_aim::osu::difficulty::objects::PreprocessError>(())
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features enabled |
//! | `tracing` | Any warnings or trace events will be emitted through [`tracing`]. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]
#![warn(
    clippy::missing_const_for_fn,
    clippy::pedantic,
    missing_debug_implementations,
    unused_qualifications
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

/// Types shared between rulesets.
pub mod any;

/// Hit object data that is independent of difficulty calculation.
pub mod model;

/// Everything about osu!standard.
pub mod osu;

pub use rosu_map::util::Pos;
