use std::collections::BTreeMap;
use std::rc::Rc;
use super::{CircleStyle, LineStyle, MapSurface};
use crate::models::LatLng;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(LatLng),
    Polyline(Vec<LatLng>),
    Marker(LatLng),
}

pub struct Primitive {
    pub shape: Shape,
    pub popup: Option<String>,
    pub on_click: Option<Rc<dyn Fn()>>,
}

/// In-memory surface that records every primitive currently on the map
#[derive(Default)]
pub struct RecordingSurface {
    next_id: u64,
    pub primitives: BTreeMap<u64, Primitive>,
    /// Fail every `add_*` call while set
    pub fail_adds: bool,
}

impl RecordingSurface {
    fn add(&mut self, shape: Shape) -> Result<u64, String> {
        if self.fail_adds {
            return Err("surface rejected primitive".to_string());
        }
        self.next_id += 1;
        self.primitives.insert(self.next_id, Primitive { shape, popup: None, on_click: None });
        Ok(self.next_id)
    }

    pub fn shapes(&self) -> Vec<Shape> {
        self.primitives.values().map(|p| p.shape.clone()).collect()
    }

    pub fn popups(&self) -> Vec<String> {
        self.primitives.values().filter_map(|p| p.popup.clone()).collect()
    }

    pub fn markers(&self) -> usize {
        self.primitives.values().filter(|p| matches!(p.shape, Shape::Marker(_))).count()
    }

    /// Click callback of the n-th polyline still on the map. Returned rather
    /// than invoked so the caller can release its borrow of the surface first.
    pub fn polyline_click(&self, index: usize) -> Rc<dyn Fn()> {
        let primitive = self
            .primitives
            .values()
            .filter(|p| matches!(p.shape, Shape::Polyline(_)))
            .nth(index)
            .expect("polyline exists");
        Rc::clone(primitive.on_click.as_ref().expect("polyline is clickable"))
    }
}

impl MapSurface for RecordingSurface {
    type Handle = u64;

    fn add_circle(&mut self, at: LatLng, _style: &CircleStyle) -> Result<u64, String> {
        self.add(Shape::Circle(at))
    }

    fn add_polyline(&mut self, points: &[LatLng], _style: &LineStyle) -> Result<u64, String> {
        self.add(Shape::Polyline(points.to_vec()))
    }

    fn add_marker(&mut self, at: LatLng) -> Result<u64, String> {
        self.add(Shape::Marker(at))
    }

    fn bind_popup(&mut self, handle: &mut u64, text: &str) -> Result<(), String> {
        let primitive = self.primitives.get_mut(handle).ok_or("unknown handle")?;
        primitive.popup = Some(text.to_string());
        Ok(())
    }

    fn on_click(&mut self, handle: &mut u64, callback: Box<dyn Fn()>) -> Result<(), String> {
        let primitive = self.primitives.get_mut(handle).ok_or("unknown handle")?;
        primitive.on_click = Some(Rc::from(callback));
        Ok(())
    }

    fn remove(&mut self, handle: u64) {
        self.primitives.remove(&handle);
    }

    fn layer_count(&self) -> usize {
        self.primitives.len()
    }
}
