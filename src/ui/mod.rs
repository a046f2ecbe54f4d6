mod app;
mod click_regions;
mod draw;
mod palette;
mod terminal;
mod widgets;

pub use app::App;
pub use click_regions::{ControlZone, Extent, HitGeometry, WindowSize};
pub use draw::draw;
pub use palette::{Palette, DEFAULT_BG, DEFAULT_FG};
pub use terminal::TerminalGuard;
pub use widgets::{format_clock, truncate_label};
