use rosu_map::{
    section::hit_objects::{
        hit_samples::{HitSampleInfo, HitSoundType},
        HitObjectType,
    },
    util::Pos,
};

/// The terminal control point of a slider's path.
///
/// A tail is created alongside its slider and lives as long as the slider
/// does. It refers back to its slider by index into the hit object list of
/// the beatmap.
///
/// There is no [`Clone`] implementation; use [`SliderTail::duplicate`] to
/// get a copy with its own sample storage.
#[derive(Debug, PartialEq)]
pub struct SliderTail {
    /// Index of the owning slider.
    pub slider: usize,
    pub pos: Pos,
    pub start_time: f64,
    pub hit_type: HitObjectType,
    pub hit_sound: HitSoundType,
    pub samples: Vec<HitSampleInfo>,
    pub kiai: bool,
    pub stack_height: i32,
    pub scale: f32,
}

impl SliderTail {
    /// Create a new tail for the slider at index `slider`.
    pub fn new(slider: usize, pos: Pos, start_time: f64) -> Self {
        Self {
            slider,
            pos,
            start_time,
            hit_type: HitObjectType::from(HitObjectType::SLIDER),
            hit_sound: HitSoundType::from(0_u8),
            samples: Vec::new(),
            kiai: false,
            stack_height: 0,
            scale: 1.0,
        }
    }

    /// Copy all fields into a new tail.
    ///
    /// The samples of the returned tail are separate from `self`'s samples so
    /// modifying either list does not affect the other.
    pub fn duplicate(&self) -> Self {
        Self {
            slider: self.slider,
            pos: self.pos,
            start_time: self.start_time,
            hit_type: self.hit_type,
            hit_sound: self.hit_sound,
            samples: self.samples.iter().map(HitSampleInfo::clone).collect(),
            kiai: self.kiai,
            stack_height: self.stack_height,
            scale: self.scale,
        }
    }
}
