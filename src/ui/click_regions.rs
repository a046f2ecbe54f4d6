use serde::{Deserialize, Serialize};

/// Current window dimensions, in the unit pointer events are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u16,
    pub height: u16,
}

impl WindowSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Horizontal midpoint that control zones are anchored to
    pub fn mid_x(&self) -> i32 {
        i32::from(self.width) / 2
    }

    pub fn bottom(&self) -> i32 {
        i32::from(self.height)
    }
}

/// Inclusive offset range relative to an anchor coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub lo: i32,
    pub hi: i32,
}

impl Extent {
    pub const fn new(lo: i32, hi: i32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, anchor: i32, value: i32) -> bool {
        value >= anchor + self.lo && value <= anchor + self.hi
    }

    /// Absolute start coordinate for the given anchor
    pub fn start(&self, anchor: i32) -> i32 {
        anchor + self.lo
    }

    pub fn len(&self) -> i32 {
        (self.hi - self.lo + 1).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Control buttons hit-tested on release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlZone {
    Previous,
    PlayPause,
    Next,
}

/// Where the seek bar and control buttons sit.
///
/// Bands are vertical ranges anchored at the bottom edge of the window;
/// zones are horizontal ranges anchored at its midpoint. The renderer and
/// the interaction state machine read the same geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitGeometry {
    pub seek_band: Extent,
    pub control_band: Extent,
    pub previous: Extent,
    pub play_pause: Extent,
    pub next: Extent,
}

impl Default for HitGeometry {
    /// Terminal cell layout
    fn default() -> Self {
        Self {
            seek_band: Extent::new(-4, -4),
            control_band: Extent::new(-2, -2),
            previous: Extent::new(-6, -4),
            play_pause: Extent::new(-1, 1),
            next: Extent::new(4, 6),
        }
    }
}

impl HitGeometry {
    /// Pixel layout of a graphical window: the seek bar sits at 418..=423 and
    /// the controls at 450..=470 in a 500px window.
    pub fn pixels() -> Self {
        Self {
            seek_band: Extent::new(-82, -77),
            control_band: Extent::new(-50, -30),
            previous: Extent::new(-65, -50),
            play_pause: Extent::new(-10, 10),
            next: Extent::new(50, 65),
        }
    }

    pub fn in_seek_band(&self, window: WindowSize, y: i32) -> bool {
        self.seek_band.contains(window.bottom(), y)
    }

    pub fn in_control_band(&self, window: WindowSize, y: i32) -> bool {
        self.control_band.contains(window.bottom(), y)
    }

    /// Control zone under the pointer, if any
    pub fn control_at(&self, window: WindowSize, x: i32, y: i32) -> Option<ControlZone> {
        if !self.in_control_band(window, y) {
            return None;
        }

        let mid = window.mid_x();
        if self.previous.contains(mid, x) {
            Some(ControlZone::Previous)
        } else if self.play_pause.contains(mid, x) {
            Some(ControlZone::PlayPause)
        } else if self.next.contains(mid, x) {
            Some(ControlZone::Next)
        } else {
            None
        }
    }

    /// Row of the seek bar as drawn by the renderer
    pub fn seek_row(&self, window: WindowSize) -> i32 {
        self.seek_band.start(window.bottom())
    }

    /// Row of the control buttons as drawn by the renderer
    pub fn control_row(&self, window: WindowSize) -> i32 {
        self.control_band.start(window.bottom())
    }
}
