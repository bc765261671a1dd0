pub mod color;
pub mod config;
pub mod constants;
pub mod contact;
pub mod display;
pub mod field;
pub mod i18n;
pub mod pointer;
pub mod prefs;
pub mod uniforms;

pub static WAVEFIELD_WGSL: &str = include_str!("../shaders/wavefield.wgsl");

pub use color::*;
pub use config::*;
pub use constants::*;
pub use contact::*;
pub use display::*;
pub use field::*;
pub use i18n::*;
pub use pointer::*;
pub use prefs::*;
pub use uniforms::*;
