pub mod console;
pub mod palettes;
