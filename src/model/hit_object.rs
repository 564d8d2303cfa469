/// The kind of a hit object.
///
/// The set is closed; difficulty calculation only ever branches on which kind
/// an object is, never on behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HitObjectKind {
    #[default]
    Circle,
    Slider,
    Spinner,
}

impl HitObjectKind {
    /// Whether the hitobject is a circle.
    pub const fn is_circle(self) -> bool {
        matches!(self, Self::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(self) -> bool {
        matches!(self, Self::Slider)
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(self) -> bool {
        matches!(self, Self::Spinner)
    }
}
