#![allow(clippy::float_cmp)]

use super::*;

#[derive(Default)]
struct FillLog {
    fills: Vec<(f64, f64, f64, f64, String)>,
}

impl Surface for FillLog {
    fn clear_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn line_to(&mut self, _x: f64, _y: f64) {}
    fn stroke(&mut self, _color: &str) {}
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.fills.push((x, y, w, h, color.to_owned()));
    }
}

fn block(x: f64, color: &str) -> Component {
    Component::new(x, 0.0, 1.0, 1.0, color)
}

// =============================================================
// Component
// =============================================================

#[test]
fn new_sets_every_field() {
    let c = Component::new(15.0, 30.0, 2.0, 3.0, "#FF0000");
    assert_eq!(c.x, 15.0);
    assert_eq!(c.y, 30.0);
    assert_eq!(c.width, 2.0);
    assert_eq!(c.height, 3.0);
    assert_eq!(c.color, "#FF0000");
}

#[test]
fn pixel_size_scales_by_cell() {
    let c = Component::new(0.0, 0.0, 2.0, 1.0, "#FF0000");
    assert_eq!(c.pixel_size(15.0), (30.0, 15.0));
}

#[test]
fn render_fills_cell_scaled_rect() {
    let mut log = FillLog::default();
    Component::new(15.0, 45.0, 2.0, 3.0, "#00FF00").render(&mut log, 15.0);
    assert_eq!(log.fills, vec![(15.0, 45.0, 30.0, 45.0, "#00FF00".to_owned())]);
}

#[test]
fn render_passes_zero_and_negative_sizes_through() {
    let mut log = FillLog::default();
    Component::new(0.0, 0.0, 0.0, -1.0, "#00FF00").render(&mut log, 15.0);
    assert_eq!(log.fills.len(), 1);
    assert_eq!(log.fills[0].2, 0.0);
    assert_eq!(log.fills[0].3, -15.0);
}

#[test]
fn component_serializes_with_wire_field_names() {
    let c = Component::new(15.0, 0.0, 2.0, 1.0, "#FF0000");
    let value = serde_json::to_value(&c).unwrap();
    assert_eq!(value, serde_json::json!({ "x": 15, "y": 0, "width": 2, "height": 1, "color": "#FF0000" }));
}

// =============================================================
// ComponentList
// =============================================================

#[test]
fn new_list_is_empty() {
    let list = ComponentList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.snapshot().is_empty());
}

#[test]
fn append_preserves_insertion_order() {
    let mut list = ComponentList::new();
    list.append(block(0.0, "#000001"));
    list.append(block(15.0, "#000002"));
    list.append(block(30.0, "#000003"));

    let colors: Vec<&str> = list.iter().map(|c| c.color.as_str()).collect();
    assert_eq!(colors, ["#000001", "#000002", "#000003"]);
}

#[test]
fn append_allows_duplicates() {
    let mut list = ComponentList::new();
    list.append(block(0.0, "#000001"));
    list.append(block(0.0, "#000001"));
    assert_eq!(list.len(), 2);
    assert_eq!(list.snapshot()[0], list.snapshot()[1]);
}

#[test]
fn extend_appends_batch_in_order() {
    let mut list = ComponentList::new();
    list.append(block(0.0, "#000001"));
    list.extend(vec![block(15.0, "#000002"), block(30.0, "#000003")]);
    assert_eq!(list.len(), 3);
    assert_eq!(list.snapshot()[2].color, "#000003");
}

#[test]
fn clear_after_many_appends_empties_list() {
    let mut list = ComponentList::new();
    for i in 0..100 {
        list.append(block(f64::from(i) * 15.0, "#000000"));
    }
    assert_eq!(list.len(), 100);

    list.clear();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
}

#[test]
fn list_is_reusable_after_clear() {
    let mut list = ComponentList::new();
    list.append(block(0.0, "#000001"));
    list.clear();
    list.append(block(15.0, "#000002"));
    assert_eq!(list.snapshot(), &[block(15.0, "#000002")]);
}

#[test]
fn into_iterator_matches_iter() {
    let mut list = ComponentList::new();
    list.append(block(0.0, "#000001"));
    list.append(block(15.0, "#000002"));
    let mut seen = Vec::new();
    for c in &list {
        seen.push(c.x);
    }
    assert_eq!(seen, vec![0.0, 15.0]);
}

#[test]
fn list_serializes_as_plain_array() {
    let mut list = ComponentList::new();
    list.append(block(0.0, "#000001"));
    let value = serde_json::to_value(&list).unwrap();
    assert!(value.is_array());
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}
