//! Marker: gefüllte Quadrate, zentriert auf die aktuelle Kurvenposition.

use super::curve_renderer::to_pos;
use crate::shared::MarkerLayer;
use egui::{Color32, Pos2, Rect, Vec2};

/// Zeichnet alle positionierten Marker.
pub fn paint_markers(painter: &egui::Painter, origin: Pos2, markers: &MarkerLayer, size: f32) {
    let offset = origin.to_vec2();
    for (_, marker) in markers.iter() {
        let Some(center) = marker.center else {
            continue;
        };
        let rect = Rect::from_center_size(to_pos(center) + offset, Vec2::splat(size));
        let color = Color32::from_rgb(marker.color.r, marker.color.g, marker.color.b);
        painter.rect_filled(rect, 0.0, color);
    }
}
