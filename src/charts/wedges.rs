//! Pie and Donut Wedges
//! egui_plot has no pie primitive, so slices are painted directly as fans of
//! small convex polygons. A hole ratio of 0.0 gives a pie, 0.4 the donut.

use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Maximum angular step per painted polygon, radians.
const ARC_STEP: f32 = 0.05;
/// Side length of the allocated drawing square.
const CHART_SIZE: f32 = 320.0;

/// One slice of a pie or donut.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

/// Fraction of the whole taken by each slice. Non-positive values get a zero
/// share so they paint nothing but keep their index.
pub(crate) fn slice_fractions(slices: &[PieSlice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return vec![0.0; slices.len()];
    }
    slices
        .iter()
        .map(|s| s.value.max(0.0) / total)
        .collect()
}

fn arc_point(center: Pos2, angle: f32, radius: f32) -> Pos2 {
    center + egui::vec2(angle.cos(), angle.sin()) * radius
}

/// Paint a pie (or donut, for `hole_ratio` > 0) of the given slices.
/// Labels show `label (pct%)` at the middle of each slice.
pub fn draw_pie_chart(ui: &mut egui::Ui, slices: &[PieSlice], hole_ratio: f32, show_labels: bool) {
    let size = ui.available_width().min(CHART_SIZE);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    let painter = ui.painter_at(rect);

    let fractions = slice_fractions(slices);
    if fractions.iter().all(|f| *f <= 0.0) {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No positive values to plot",
            FontId::proportional(13.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let center = rect.center();
    let radius = size * 0.5 - 8.0;
    let hole = radius * hole_ratio.clamp(0.0, 0.95);

    // Start at 12 o'clock and sweep clockwise
    let mut angle = -FRAC_PI_2;
    for (slice, fraction) in slices.iter().zip(&fractions) {
        if *fraction <= 0.0 {
            continue;
        }
        let sweep = (*fraction as f32) * TAU;
        let steps = ((sweep / ARC_STEP).ceil() as usize).max(1);

        for step in 0..steps {
            let a0 = angle + sweep * step as f32 / steps as f32;
            let a1 = angle + sweep * (step + 1) as f32 / steps as f32;

            let points = if hole > 0.0 {
                vec![
                    arc_point(center, a0, hole),
                    arc_point(center, a0, radius),
                    arc_point(center, a1, radius),
                    arc_point(center, a1, hole),
                ]
            } else {
                vec![
                    center,
                    arc_point(center, a0, radius),
                    arc_point(center, a1, radius),
                ]
            };
            painter.add(Shape::convex_polygon(points, slice.color, Stroke::NONE));
        }

        if show_labels && !slice.label.is_empty() {
            let mid = angle + sweep / 2.0;
            let label_radius = if hole > 0.0 {
                (radius + hole) / 2.0
            } else {
                radius * 0.62
            };
            painter.text(
                arc_point(center, mid, label_radius),
                Align2::CENTER_CENTER,
                format!("{} ({:.1}%)", slice.label, fraction * 100.0),
                FontId::proportional(12.0),
                Color32::WHITE,
            );
        }

        angle += sweep;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, value: f64) -> PieSlice {
        PieSlice {
            label: label.to_string(),
            value,
            color: Color32::WHITE,
        }
    }

    #[test]
    fn fractions_sum_to_one() {
        let slices = vec![slice("a", 1.0), slice("b", 3.0)];
        let fractions = slice_fractions(&slices);
        assert_eq!(fractions, vec![0.25, 0.75]);
        assert!((fractions.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_values_get_zero_share() {
        let slices = vec![slice("a", -2.0), slice("b", 0.0), slice("c", 5.0)];
        assert_eq!(slice_fractions(&slices), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn all_zero_slices_have_no_shares() {
        let slices = vec![slice("a", 0.0), slice("b", 0.0)];
        assert_eq!(slice_fractions(&slices), vec![0.0, 0.0]);
    }
}
