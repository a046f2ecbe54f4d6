mod controls;
mod now_playing;
mod seek_bar;

pub use controls::draw_controls;
pub use now_playing::{draw_now_playing, truncate_label};
pub use seek_bar::{draw_seek_bar, format_clock};
