use eframe::egui::{self, Color32, Pos2, Stroke};

pub const INNER_RADIUS: f32 = 25.0;
pub const OUTER_RADIUS: f32 = 35.0;
/// Gap left between the value arc and the remainder arc.
pub const PADDING_DEGREES: f32 = 5.0;
const ARC_SEGMENTS: usize = 48;
const REMAINDER_COLOR: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);

/// Angular extents of both arcs, in degrees counter-clockwise from +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeArcs {
    pub value: Option<(f32, f32)>,
    pub remainder: Option<(f32, f32)>,
}

/// Splits the 180°→0° half circle between `value` and what remains of 100.
pub fn gauge_arcs(value: f64) -> GaugeArcs {
    let fraction = (value.clamp(0.0, 100.0) / 100.0) as f32;
    let both = fraction > 0.0 && fraction < 1.0;
    let padding = if both { PADDING_DEGREES } else { 0.0 };
    let usable = 180.0 - padding;
    let value_sweep = usable * fraction;
    let value_end = 180.0 - value_sweep;
    GaugeArcs {
        value: (fraction > 0.0).then_some((180.0, value_end)),
        remainder: (fraction < 1.0).then_some((value_end - padding, 0.0)),
    }
}

/// Points along an arc from `start_deg` to `end_deg` in screen coordinates.
pub fn arc_points(center: Pos2, radius: f32, start_deg: f32, end_deg: f32) -> Vec<Pos2> {
    (0..=ARC_SEGMENTS)
        .map(|step| {
            let t = step as f32 / ARC_SEGMENTS as f32;
            let angle = (start_deg + (end_deg - start_deg) * t).to_radians();
            egui::pos2(
                center.x + radius * angle.cos(),
                center.y - radius * angle.sin(),
            )
        })
        .collect()
}

pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Half-donut proportion chart with a numeric label.
pub struct MetricsGauge<'a> {
    pub label: &'a str,
    pub value: f64,
    pub color: Color32,
}

impl<'a> MetricsGauge<'a> {
    pub fn show(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let size = egui::vec2(ui.available_width(), OUTER_RADIUS + 12.0);
                let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
                let center = egui::pos2(response.rect.center().x, response.rect.bottom() - 4.0);
                draw_arcs(&painter, center, gauge_arcs(self.value), self.color);
                ui.label(
                    egui::RichText::new(format_percent(self.value.clamp(0.0, 100.0)))
                        .size(22.0)
                        .strong(),
                );
                ui.label(egui::RichText::new(self.label.to_uppercase()).small().weak());
            });
        });
    }
}

fn draw_arcs(painter: &egui::Painter, center: Pos2, arcs: GaugeArcs, color: Color32) {
    let radius = (INNER_RADIUS + OUTER_RADIUS) / 2.0;
    let width = OUTER_RADIUS - INNER_RADIUS;
    if let Some((start, end)) = arcs.value {
        painter.add(egui::Shape::line(
            arc_points(center, radius, start, end),
            Stroke::new(width, color),
        ));
    }
    if let Some((start, end)) = arcs.remainder {
        painter.add(egui::Shape::line(
            arc_points(center, radius, start, end),
            Stroke::new(width, REMAINDER_COLOR),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arcs_leave_padding_between_segments() {
        let arcs = gauge_arcs(50.0);
        let (value_start, value_end) = arcs.value.unwrap();
        let (rest_start, rest_end) = arcs.remainder.unwrap();
        assert_relative_eq!(value_start, 180.0);
        assert_relative_eq!(value_end, 180.0 - 87.5);
        assert_relative_eq!(value_end - rest_start, PADDING_DEGREES);
        assert_relative_eq!(rest_end, 0.0);
    }

    #[test]
    fn extremes_draw_a_single_arc() {
        let empty = gauge_arcs(0.0);
        assert!(empty.value.is_none());
        assert_eq!(empty.remainder, Some((180.0, 0.0)));

        let full = gauge_arcs(100.0);
        assert_eq!(full.value, Some((180.0, 0.0)));
        assert!(full.remainder.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(gauge_arcs(140.0), gauge_arcs(100.0));
        assert_eq!(gauge_arcs(-3.0), gauge_arcs(0.0));
    }

    #[test]
    fn arc_points_follow_the_upper_half() {
        let center = egui::pos2(100.0, 100.0);
        let points = arc_points(center, 30.0, 180.0, 0.0);
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert_relative_eq!(first.x, 70.0, epsilon = 1e-3);
        assert_relative_eq!(last.x, 130.0, epsilon = 1e-3);
        let top = points[points.len() / 2];
        assert_relative_eq!(top.y, 70.0, epsilon = 1e-3);
        assert!(points.iter().all(|p| p.y <= center.y + 1e-3));
    }

    #[test]
    fn percent_label() {
        assert_eq!(format_percent(82.0), "82%");
        assert_eq!(format_percent(82.46), "82.5%");
    }
}
