pub mod color;
pub mod palette;
pub mod stats;

/// The number of colors a [palette::Palette] can hold.
pub const MAX_PALETTE_COLORS: usize = 10;
