use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::daemon::{PlayerCommand, Status};
use crate::ui::{ControlZone, HitGeometry, WindowSize};

/// Seconds moved per wheel notch
const WHEEL_SEEK_SECONDS: i64 = 5;

/// Seconds moved per arrow key press
const KEY_SEEK_SECONDS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Primary button went down inside the seek bar and has not been released
    Dragging,
}

/// Maps terminal input to player commands.
///
/// Commands are computed against the status snapshot passed in by the
/// caller; the state machine never talks to the daemon itself. Only the
/// drag state and the seek-bar hover flag survive between events, everything
/// else is hit-tested from the event coordinates and the current window size.
#[derive(Debug, Clone)]
pub struct InteractionStateMachine {
    state: InteractionState,
    geometry: HitGeometry,
    window: WindowSize,
    /// Pointer last moved over the seek band while not dragging
    hovering: bool,
}

impl InteractionStateMachine {
    pub fn new(geometry: HitGeometry, window: WindowSize) -> Self {
        Self {
            state: InteractionState::Idle,
            geometry,
            window,
            hovering: false,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == InteractionState::Dragging
    }

    /// Seek bar should be emphasized: hovered or being dragged
    pub fn is_seek_highlighted(&self) -> bool {
        self.hovering || self.is_dragging()
    }

    pub fn geometry(&self) -> &HitGeometry {
        &self.geometry
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.window = WindowSize::new(width, height);
    }

    /// Process one input event; returns the command to issue, if any
    pub fn handle_event(&mut self, event: &Event, status: &Status) -> Option<PlayerCommand> {
        match event {
            Event::Key(key) => self.handle_key_event(key, status),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, status),
            Event::Resize(width, height) => {
                self.resize(*width, *height);
                None
            }
            _ => None,
        }
    }

    pub fn handle_key_event(&self, key: &KeyEvent, status: &Status) -> Option<PlayerCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Right => Some(PlayerCommand::Seek(
                status.position.saturating_add(KEY_SEEK_SECONDS),
            )),
            KeyCode::Left => Some(PlayerCommand::Seek(
                status.position.saturating_sub(KEY_SEEK_SECONDS).max(0),
            )),
            KeyCode::Home => Some(PlayerCommand::Seek(0)),
            KeyCode::End => Some(PlayerCommand::Seek(status.duration)),
            KeyCode::Char(' ') => Some(PlayerCommand::TogglePausePlay),
            KeyCode::Char('n') => Some(PlayerCommand::Next),
            KeyCode::Char('p') => Some(PlayerCommand::Previous),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(PlayerCommand::VolumeUp),
            KeyCode::Char('-') | KeyCode::Char('_') => Some(PlayerCommand::VolumeDown),
            _ => None,
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: &MouseEvent, status: &Status) -> Option<PlayerCommand> {
        let x = i32::from(mouse.column);
        let y = i32::from(mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollUp => Some(PlayerCommand::Seek(
                status.position.saturating_add(WHEEL_SEEK_SECONDS),
            )),
            MouseEventKind::ScrollDown => Some(PlayerCommand::Seek(
                status.position.saturating_sub(WHEEL_SEEK_SECONDS),
            )),
            MouseEventKind::Moved if !self.is_dragging() => {
                self.hovering = self.geometry.in_seek_band(self.window, y);
                None
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                if self.is_dragging() {
                    Some(PlayerCommand::Seek(self.seek_target(x, status)))
                } else {
                    None
                }
            }
            MouseEventKind::Down(button) => {
                self.state = if button == MouseButton::Left
                    && self.geometry.in_seek_band(self.window, y)
                {
                    InteractionState::Dragging
                } else {
                    InteractionState::Idle
                };
                None
            }
            MouseEventKind::Up(button) => {
                self.state = InteractionState::Idle;
                if button != MouseButton::Left {
                    return None;
                }
                self.handle_release(x, y, status)
            }
            _ => None,
        }
    }

    fn handle_release(&self, x: i32, y: i32, status: &Status) -> Option<PlayerCommand> {
        if self.geometry.in_seek_band(self.window, y) {
            return Some(PlayerCommand::Seek(self.seek_target(x, status)));
        }

        match self.geometry.control_at(self.window, x, y)? {
            ControlZone::Previous => Some(PlayerCommand::Previous),
            ControlZone::PlayPause => Some(PlayerCommand::TogglePausePlay),
            ControlZone::Next => Some(PlayerCommand::Next),
        }
    }

    /// Absolute position for a pointer column; not clamped, the daemon bounds it
    fn seek_target(&self, x: i32, status: &Status) -> i64 {
        if self.window.width == 0 {
            return 0;
        }
        let target = f64::from(x) * status.duration as f64 / f64::from(self.window.width);
        target.round() as i64
    }
}
