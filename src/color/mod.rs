mod order;

pub use order::{ChannelOrder, DEFAULT_CHANNEL_ORDER};
use smart_leds::RGB8;

/// Colour triple.
///
/// Inside the palette the fields carry red, green and blue. Inside a frame
/// buffer they carry the three wire slots, first transmitted byte in `r`.
pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
