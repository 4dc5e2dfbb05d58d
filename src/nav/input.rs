//! Input events, navigation outcomes and the animation gate

/// Edge-triggered directional move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Parse a scripted move token (`l`, `left`, `h`, ...)
    pub fn from_token(token: &str) -> Option<Direction> {
        match token.trim().to_ascii_lowercase().as_str() {
            "l" | "left" | "h" => Some(Direction::Left),
            "r" | "right" => Some(Direction::Right),
            "u" | "up" | "k" => Some(Direction::Up),
            "d" | "down" | "j" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Discrete input delivered to a panel, at most one per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    Confirm,
    Cancel,
}

impl InputEvent {
    /// Parse a scripted input token; `enter`/`esc` map to confirm/cancel
    pub fn from_token(token: &str) -> Option<InputEvent> {
        match token.trim().to_ascii_lowercase().as_str() {
            "enter" | "confirm" | "ok" => Some(InputEvent::Confirm),
            "esc" | "cancel" | "back" => Some(InputEvent::Cancel),
            other => Direction::from_token(other).map(InputEvent::Move),
        }
    }
}

/// What a directional input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Focus moved inside the visible slots
    FocusMoved { from: Option<usize>, to: usize },
    /// A new chunked page was bound
    PageChanged { page: usize, focus: usize },
    /// The sliding window moved
    WindowSlid { top: usize, focus: usize },
    /// Move hit an edge that does not page or wrap
    Blocked,
    /// Nothing to navigate (empty catalog or a single page/window)
    Ignored,
    /// Held back until the running animation finishes
    Deferred,
}

impl NavOutcome {
    /// Whether the bound slice of the catalog changed
    pub fn rebound(&self) -> bool {
        matches!(
            self,
            NavOutcome::PageChanged { .. } | NavOutcome::WindowSlid { .. }
        )
    }
}

/// Navigator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Ready,
    Animating,
}

/// Holds input back while a panel transition plays
#[derive(Debug, Clone, Default)]
pub struct InputGate {
    state: NavState,
    deferred: Option<Direction>,
}

impl InputGate {
    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == NavState::Animating
    }

    pub fn begin(&mut self) {
        self.state = NavState::Animating;
    }

    /// Keep only the latest input
    pub fn defer(&mut self, direction: Direction) {
        self.deferred = Some(direction);
    }

    /// Back to ready, handing back the input held during the animation
    pub fn finish(&mut self) -> Option<Direction> {
        self.state = NavState::Ready;
        self.deferred.take()
    }

    /// Abandon a running animation and its held input
    pub fn reset(&mut self) {
        self.state = NavState::Ready;
        self.deferred = None;
    }
}
