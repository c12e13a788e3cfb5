// Currently egui doesn't support automatically load system font to cover missing
// glyph
// Issue to track: https://github.com/emilk/egui/issues/5233

use egui::{Context, FontData, FontDefinitions, FontFamily};
use font_kit::{
    family_name::FamilyName, handle::Handle, properties::Properties, source::SystemSource,
};
use tracing::{debug, info, warn};
use std::sync::Arc;

const CJK_FONT_NAME: &str = "system-cjk";

// Reference: https://github.com/woelper/oculante/blob/66e00785f13ef008e516d790b88ec34436188d24/src/ui/theme.rs#L110-L133
/// Attempt to load a system font by any of the given `family_names`, returning the first match.
fn load_font_family(family_names: &[&str]) -> Option<FontData> {
    let system_source = SystemSource::new();
    for &name in family_names {
        let font_handle = system_source.select_best_match(
            &[FamilyName::Title(name.to_string())],
            &Properties::new(),
        );
        match font_handle {
            Ok(h) => match h {
                Handle::Memory { bytes, font_index } => {
                    info!("Loaded {name} from memory.");
                    let mut data = FontData::from_owned(bytes.to_vec());
                    data.index = font_index;
                    return Some(data);
                }
                Handle::Path { path, font_index } => {
                    info!("Loaded {name} from path: {:?}", path);
                    if let Ok(bytes) = std::fs::read(&path) {
                        let mut data = FontData::from_owned(bytes);
                        data.index = font_index;
                        return Some(data);
                    }
                }
            },
            Err(e) => debug!("Could not load {}: {:?}", name, e),
        }
    }
    None
}

fn load_system_chinese_font() -> Option<FontData> {
    debug!("Attempting to load sys fonts");

    let font_families = [
        "Noto Sans CJK SC",
        "Microsoft YaHei",
        "Noto Sans SC",
        "WenQuanYi Zen Hei",
        "PingFang SC",
        "Heiti SC",
        "Songti SC",
        "SimSun",
        "Source Han Sans CN",
    ];

    load_font_family(&font_families)
}

/// Keep egui's bundled fonts for Latin text and append a system CJK font as
/// fallback, so chapter titles in Chinese render instead of showing tofu.
pub fn setup_fonts(ctx: &Context) {
    let mut fonts = FontDefinitions::default();

    let Some(chinese_font_data) = load_system_chinese_font() else {
        warn!("Couldn't load a Chinese font, CJK text may not render");
        return;
    };

    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_string(), Arc::new(chinese_font_data));

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_string());
    }

    ctx.set_fonts(fonts);
}
