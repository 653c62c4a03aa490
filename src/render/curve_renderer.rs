//! Kurven und Kontrollpunkte: Shapes werden einmal pro neuer Kurve gebaut.

use crate::core::CurveColor;
use crate::shared::{CanvasLayer, CurveOptions, CURVE_ALPHA, DOT_ALPHA};
use egui::epaint::CubicBezierShape;
use egui::{Color32, Pos2, Shape, Stroke};

/// Cache der statischen Zeichenfläche in lokalen Koordinaten.
#[derive(Default)]
pub struct CurveRenderer {
    curve_shapes: Vec<Shape>,
    dot_shapes: Vec<Shape>,
    /// Linienstärke und Punkt-Radius, mit denen der Cache gebaut wurde
    style: Option<[f32; 2]>,
}

impl CurveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut Shapes nur für neu hinzugekommene Kurven und Punkte.
    /// Geänderte Linienstärke oder Punkt-Radius verwerfen den Cache.
    pub fn sync(&mut self, canvas: &CanvasLayer, options: &CurveOptions) {
        let style = [options.curve_stroke_width, options.dot_radius_px];
        if self.style != Some(style) {
            self.curve_shapes.clear();
            self.dot_shapes.clear();
            self.style = Some(style);
        }

        for stroke in &canvas.curves()[self.curve_shapes.len()..] {
            let [p0, p1, p2, p3] = (*stroke.curve.points()).map(to_pos);
            let shape = CubicBezierShape::from_points_stroke(
                [p0, p1, p2, p3],
                false,
                Color32::TRANSPARENT,
                Stroke::new(
                    options.curve_stroke_width,
                    with_alpha(stroke.color, CURVE_ALPHA),
                ),
            );
            self.curve_shapes.push(Shape::CubicBezier(shape));
        }

        for dot in &canvas.dots()[self.dot_shapes.len()..] {
            self.dot_shapes.push(Shape::circle_filled(
                to_pos(dot.position),
                options.dot_radius_px,
                with_alpha(dot.color, DOT_ALPHA),
            ));
        }
    }

    /// Zeichnet Punkte, dann Kurven, verschoben auf den Ursprung der Zeichenfläche.
    pub fn paint(&self, painter: &egui::Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        painter.extend(
            self.dot_shapes
                .iter()
                .chain(self.curve_shapes.iter())
                .cloned()
                .map(|mut shape| {
                    shape.translate(offset);
                    shape
                }),
        );
    }

    pub fn cached_curves(&self) -> usize {
        self.curve_shapes.len()
    }

    pub fn cached_dots(&self) -> usize {
        self.dot_shapes.len()
    }
}

pub(crate) fn to_pos(v: glam::Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

pub(crate) fn with_alpha(color: CurveColor, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CubicBezier;
    use glam::Vec2;

    #[test]
    fn sync_only_builds_new_shapes() {
        let mut canvas = CanvasLayer::new();
        let options = CurveOptions::default();
        let mut renderer = CurveRenderer::new();
        let color = CurveColor::rgb(10, 20, 30);
        let curve = CubicBezier::new(Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE);

        canvas.add_dot(Vec2::ZERO, color);
        canvas.add_curve(curve, color);
        renderer.sync(&canvas, &options);
        renderer.sync(&canvas, &options);
        assert_eq!(renderer.cached_curves(), 1);
        assert_eq!(renderer.cached_dots(), 1);

        canvas.add_curve(curve, color);
        renderer.sync(&canvas, &options);
        assert_eq!(renderer.cached_curves(), 2);
    }

    #[test]
    fn style_change_rebuilds_cache() {
        let mut canvas = CanvasLayer::new();
        let mut options = CurveOptions::default();
        let mut renderer = CurveRenderer::new();
        canvas.add_dot(Vec2::ZERO, CurveColor::rgb(1, 2, 3));
        renderer.sync(&canvas, &options);

        options.dot_radius_px = 9.0;
        renderer.sync(&canvas, &options);

        assert_eq!(renderer.cached_dots(), 1);
        assert!(matches!(
            &renderer.dot_shapes[0],
            Shape::Circle(circle) if circle.radius == 9.0
        ));
    }

    #[test]
    fn alpha_is_applied_to_palette_color() {
        let c = with_alpha(CurveColor::rgb(0xff, 0x5c, 0x5c), CURVE_ALPHA);
        assert_eq!(c.a(), CURVE_ALPHA);
    }
}
