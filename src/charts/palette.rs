//! Color Palette Module
//! Fixed palette for good charts, deliberately murky shades for bad pies,
//! and the hash-derived per-category marker color used on the map.

use egui::Color32;

/// Fill color of the fixed bar chart.
pub const STEELBLUE: Color32 = Color32::from_rgb(70, 130, 180);

/// Alpha applied to hash-derived map marker colors.
const MARKER_ALPHA: u8 = 140;

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Palette color for the i-th series or slice of a good chart.
pub fn series_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Near-indistinguishable slate shades for the bad pie.
pub fn murky_color(index: usize) -> Color32 {
    let step = (index % 5) as u8 * 8;
    Color32::from_rgb(96 + step, 104 + step, 118 + step)
}

/// FNV-1a, 64 bit. Keeps the marker color stable across runs, which a
/// RandomState-seeded hasher would not.
fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x100_0000_01b3;

    let mut hash = OFFSET;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Deterministic marker color for a map category: the low three bytes of the
/// category hash as RGB, with fixed alpha.
pub fn category_color(category: &str) -> Color32 {
    let hash = fnv1a64(category.as_bytes());
    let r = (hash & 0xff) as u8;
    let g = ((hash >> 8) & 0xff) as u8;
    let b = ((hash >> 16) & 0xff) as u8;
    Color32::from_rgba_unmultiplied(r, g, b, MARKER_ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_color_is_deterministic() {
        assert_eq!(category_color("Kuala Lumpur"), category_color("Kuala Lumpur"));
        assert_eq!(
            category_color("Kuala Lumpur"),
            Color32::from_rgba_unmultiplied(160, 115, 37, 140)
        );
        assert_eq!(
            category_color("Penang"),
            Color32::from_rgba_unmultiplied(240, 216, 34, 140)
        );
    }

    #[test]
    fn nearby_categories_get_different_colors() {
        assert_ne!(category_color("A"), category_color("B"));
    }

    #[test]
    fn series_colors_wrap_around() {
        assert_eq!(series_color(0), series_color(PALETTE.len()));
        assert_ne!(series_color(0), series_color(1));
    }
}
