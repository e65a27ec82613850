use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 255 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ADDRESS: Color = Color::TrueColor { r: 140, g: 230, b: 140 };
