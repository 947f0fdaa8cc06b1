use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// What a floating text is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Role name above a box.
    Label,
    /// Expression above the result box.
    Formula,
    /// Number resting in (or dropping into, or rising out of) a box.
    Glyph,
    /// Operand copy flying towards the result box.
    Flyer,
}

#[derive(Component, Clone, Debug)]
/// Floating 3D text, drawn centred on its world position.
pub struct FloatingText {
    /// The text content to render.
    pub content: String,
    pub kind: TextKind,
    /// Height of the text in world units.
    pub height: f32,
    /// Vertical shift of the text centre relative to the entity position.
    pub baseline: f32,
    pub color: Color,
    /// Multiplier on `color.a`, animated by fades.
    pub opacity: f32,
    /// Bumped whenever the text is superseded; tweens carrying an older value
    /// stop acting on it.
    pub generation: u32,
}

impl FloatingText {
    /// Creates a new FloatingText component.
    pub fn new(content: impl Into<String>, kind: TextKind, color: Color) -> Self {
        Self {
            content: content.into(),
            kind,
            height: 0.5,
            baseline: 0.0,
            color,
            opacity: 1.0,
            generation: 0,
        }
    }

    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = baseline;
        self
    }

    /// Mark this text as superseded and return the new generation.
    pub fn retire(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Colour with the current opacity folded into alpha.
    pub fn effective_color(&self) -> Color {
        let mut c = self.color;
        c.a = (c.a as f32 * self.opacity.clamp(0.0, 1.0)).round() as u8;
        c
    }
}
