use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use ttf_parser::Face;

static TEXT_MEASURER: Lazy<Mutex<TextMeasurer>> = Lazy::new(|| Mutex::new(TextMeasurer::new()));

/// Measures the rendered width of `text` in CSS pixels. Returns `None` when
/// no matching system font can be resolved; callers fall back to leaving the
/// text untruncated.
pub fn measure_text_width(text: &str, font_size: f32, font_family: &str) -> Option<f32> {
    if text.is_empty() || font_size <= 0.0 {
        return Some(0.0);
    }
    let mut guard = TEXT_MEASURER.lock().ok()?;
    guard.measure(text, font_size, font_family)
}

struct TextMeasurer {
    db: Database,
    loaded_system_fonts: bool,
    cache: HashMap<String, Option<FontMetrics>>,
}

/// Per-font advance tables extracted once at load time. ASCII glyphs get
/// exact advances; everything else uses the face's average advance.
struct FontMetrics {
    units_per_em: f32,
    ascii_advances: [u16; 128],
    average_advance: f32,
}

impl FontMetrics {
    fn from_face(face: &Face<'_>) -> Self {
        let units_per_em = face.units_per_em().max(1) as f32;
        let mut ascii_advances = [0u16; 128];
        let mut sum = 0u32;
        let mut count = 0u32;
        for byte in 0u8..=127 {
            if let Some(glyph_id) = face.glyph_index(byte as char) {
                let advance = face.glyph_hor_advance(glyph_id).unwrap_or(0);
                ascii_advances[byte as usize] = advance;
                if byte.is_ascii_graphic() && advance > 0 {
                    sum += advance as u32;
                    count += 1;
                }
            }
        }
        let average_advance = if count > 0 {
            sum as f32 / count as f32
        } else {
            units_per_em * 0.56
        };
        Self {
            units_per_em,
            ascii_advances,
            average_advance,
        }
    }

    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        let scale = font_size / self.units_per_em;
        let fallback = font_size * 0.56;
        let mut width = 0.0f32;
        for ch in text.chars() {
            if ch == '\n' {
                continue;
            }
            if ch.is_ascii() {
                let advance = self.ascii_advances[ch as usize];
                if advance == 0 {
                    width += fallback;
                } else {
                    width += advance as f32 * scale;
                }
            } else {
                width += self.average_advance * scale;
            }
        }
        width.max(0.0)
    }
}

impl TextMeasurer {
    fn new() -> Self {
        Self {
            db: Database::new(),
            loaded_system_fonts: false,
            cache: HashMap::new(),
        }
    }

    fn measure(&mut self, text: &str, font_size: f32, font_family: &str) -> Option<f32> {
        let family_key = normalize_family_key(font_family);
        if !self.cache.contains_key(&family_key) {
            let metrics = self.load_metrics(font_family);
            self.cache.insert(family_key.clone(), metrics);
        }
        let metrics = self.cache.get(&family_key)?.as_ref()?;
        let normalized = text.replace('\t', "    ");
        Some(metrics.measure_width(&normalized, font_size))
    }

    fn load_metrics(&mut self, font_family: &str) -> Option<FontMetrics> {
        enum FamilyToken {
            Generic(Family<'static>),
            Name(usize),
        }

        let mut names: Vec<String> = Vec::new();
        let mut order: Vec<FamilyToken> = Vec::new();
        for part in font_family.split(',') {
            let raw = part.trim().trim_matches('"').trim_matches('\'');
            if raw.is_empty() {
                continue;
            }
            match raw.to_ascii_lowercase().as_str() {
                "serif" => order.push(FamilyToken::Generic(Family::Serif)),
                "sans-serif" | "system-ui" | "-apple-system" | "ui-sans-serif" => {
                    order.push(FamilyToken::Generic(Family::SansSerif))
                }
                "monospace" | "ui-monospace" => order.push(FamilyToken::Generic(Family::Monospace)),
                "cursive" => order.push(FamilyToken::Generic(Family::Cursive)),
                "fantasy" => order.push(FamilyToken::Generic(Family::Fantasy)),
                _ => {
                    let idx = names.len();
                    names.push(raw.to_string());
                    order.push(FamilyToken::Name(idx));
                }
            }
        }
        let mut ordered: Vec<Family<'_>> = Vec::with_capacity(order.len().max(1));
        for token in &order {
            match token {
                FamilyToken::Generic(family) => ordered.push(*family),
                FamilyToken::Name(idx) => ordered.push(Family::Name(names[*idx].as_str())),
            }
        }
        if ordered.is_empty() {
            ordered.push(Family::SansSerif);
        }

        if !self.loaded_system_fonts {
            self.db.load_system_fonts();
            self.loaded_system_fonts = true;
        }

        let query = Query {
            families: &ordered,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = self.db.query(&query)?;
        let mut loaded: Option<FontMetrics> = None;
        self.db.with_face_data(id, |data, index| {
            if let Ok(face) = Face::parse(data, index) {
                loaded = Some(FontMetrics::from_face(&face));
            }
        });
        loaded
    }
}

fn normalize_family_key(font_family: &str) -> String {
    let trimmed = font_family.trim();
    if trimmed.is_empty() {
        "sans-serif".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_zero_wide() {
        assert_eq!(measure_text_width("", 11.0, "sans-serif"), Some(0.0));
    }

    #[test]
    fn wider_text_measures_wider() {
        // Skip silently on systems with no fonts at all (CI containers).
        let Some(short) = measure_text_width("hi", 11.0, "sans-serif") else {
            return;
        };
        let Some(long) = measure_text_width("hi there, supervisor", 11.0, "sans-serif") else {
            return;
        };
        assert!(long > short);
    }
}
