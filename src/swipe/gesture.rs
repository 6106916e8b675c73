/// Horizontal travel (CSS px) a release must exceed to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 100.0;

const ROTATION_PER_PX: f64 = 0.1;
const OPACITY_FALLOFF: f64 = 0.002;
const SCALE_FALLOFF: f64 = 0.0005;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging { start_x: f64, offset: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeGesture {
    state: DragState,
}

impl SwipeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn offset(&self) -> f64 {
        match self.state {
            DragState::Idle => 0.0,
            DragState::Dragging { offset, .. } => offset,
        }
    }

    /// Pointer down / touch start.
    pub fn begin(&mut self, x: f64) {
        self.state = DragState::Dragging { start_x: x, offset: 0.0 };
    }

    /// Pointer move. Returns `false` when no drag is in progress so the
    /// caller can leave the event alone.
    pub fn update(&mut self, x: f64) -> bool {
        match &mut self.state {
            DragState::Idle => false,
            DragState::Dragging { start_x, offset } => {
                *offset = x - *start_x;
                true
            }
        }
    }

    /// Pointer up, touch end or pointer leaving the card. Always returns to
    /// idle with a zero offset.
    pub fn release(&mut self) -> Option<SwipeDirection> {
        let offset = match std::mem::take(&mut self.state) {
            DragState::Idle => return None,
            DragState::Dragging { offset, .. } => offset,
        };

        if offset.abs() > SWIPE_THRESHOLD {
            Some(if offset > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left })
        } else {
            None
        }
    }

    pub fn transform(&self) -> CardTransform {
        CardTransform::from_offset(self.offset())
    }
}

/// Visual feedback for a card dragged `offset` px. Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl CardTransform {
    pub fn from_offset(offset: f64) -> Self {
        Self {
            translate_x: offset,
            rotation_deg: offset * ROTATION_PER_PX,
            opacity: 1.0 - offset.abs() * OPACITY_FALLOFF,
            scale: 1.0 - offset.abs() * SCALE_FALLOFF,
        }
    }

    /// Value for the CSS `transform` property.
    pub fn css(&self) -> String {
        format!(
            "translateX({}px) rotateY({}deg) scale({})",
            self.translate_x, self.rotation_deg, self.scale
        )
    }
}
