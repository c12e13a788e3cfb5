// Eye-care dark palette, based on Nord
use egui::Color32;

pub const BG_MAIN: Color32 = Color32::from_rgb(46, 52, 64); // #2e3440
pub const BG_TEXT: Color32 = Color32::from_rgb(59, 66, 82); // #3b4252
pub const BG_DIM: Color32 = Color32::from_rgb(67, 76, 94); // #434c5e
pub const BG_INPUT: Color32 = Color32::from_rgb(76, 86, 106); // #4c566a
pub const FG_MAIN: Color32 = Color32::from_rgb(216, 222, 233); // #d8dee9
pub const FG_BRIGHT: Color32 = Color32::from_rgb(236, 239, 244); // #eceff4
pub const ACCENT: Color32 = Color32::from_rgb(94, 129, 172); // #5e81ac
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(129, 161, 193); // #81a1c1
pub const SUCCESS: Color32 = Color32::from_rgb(163, 190, 140); // #a3be8c
pub const WARNING: Color32 = Color32::from_rgb(235, 203, 139); // #ebcb8b
pub const ERR: Color32 = Color32::from_rgb(191, 97, 106); // #bf616a
pub const INFO: Color32 = Color32::from_rgb(136, 192, 208); // #88c0d0
