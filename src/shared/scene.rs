//! Zeichenflächen-Daten: einmalig gezeichnete Kurven/Punkte und bewegte Marker.
//!
//! Koordinaten sind Pixel relativ zur linken oberen Ecke der Zeichenfläche.

use super::capabilities::MarkerSink;
use crate::core::{CubicBezier, CurveColor, MarkerId};
use glam::Vec2;
use std::collections::BTreeMap;

/// Eine gezeichnete Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStroke {
    pub curve: CubicBezier,
    pub color: CurveColor,
}

/// Ein gezeichneter Kontrollpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub position: Vec2,
    pub color: CurveColor,
}

/// Statische Ebene: wird nur ergänzt, nie neu berechnet.
#[derive(Debug, Default, Clone)]
pub struct CanvasLayer {
    curves: Vec<CurveStroke>,
    dots: Vec<Dot>,
}

impl CanvasLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_curve(&mut self, curve: CubicBezier, color: CurveColor) {
        self.curves.push(CurveStroke { curve, color });
    }

    pub fn add_dot(&mut self, position: Vec2, color: CurveColor) {
        self.dots.push(Dot { position, color });
    }

    pub fn curves(&self) -> &[CurveStroke] {
        &self.curves
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }
}

/// Ein Marker; ohne Position bis zum ersten Tick unsichtbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub color: CurveColor,
    pub center: Option<Vec2>,
}

/// Alle Marker, geordnet nach ID. Marker werden nie entfernt.
#[derive(Debug, Default, Clone)]
pub struct MarkerLayer {
    markers: BTreeMap<MarkerId, Marker>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &Marker)> {
        self.markers.iter().map(|(id, marker)| (*id, marker))
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl MarkerSink for MarkerLayer {
    fn create(&mut self, id: MarkerId, color: CurveColor) {
        self.markers.insert(
            id,
            Marker {
                color,
                center: None,
            },
        );
    }

    fn set_position(&mut self, id: MarkerId, position: Vec2) {
        match self.markers.get_mut(&id) {
            Some(marker) => marker.center = Some(position),
            None => log::trace!("Position für unbekannten Marker {} verworfen", id),
        }
    }
}
