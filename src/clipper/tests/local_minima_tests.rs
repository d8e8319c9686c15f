use crate::clipper::enums::PolyType;
use crate::clipper::local_minima::LocalMinima;
use crate::geometry::point::IntPoint;

fn filled() -> LocalMinima {
    let mut local_minima = LocalMinima::new();

    local_minima.insert(0, IntPoint::new(0, 10), PolyType::Subject, false);
    local_minima.insert(1, IntPoint::new(5, 20), PolyType::Clip, false);
    local_minima.insert(2, IntPoint::new(2, 20), PolyType::Subject, true);

    local_minima
}

#[test]
fn test_pop_in_sweep_order() {
    let mut local_minima = filled();
    local_minima.reset();

    let first = local_minima.pop(20).unwrap();
    assert_eq!(local_minima.get(first).pt, IntPoint::new(2, 20));
    assert!(local_minima.get(first).is_open);

    let second = local_minima.pop(20).unwrap();
    assert_eq!(local_minima.get(second).pt, IntPoint::new(5, 20));
    assert_eq!(local_minima.get(second).poly_type, PolyType::Clip);

    assert_eq!(local_minima.pop(20), None);

    let third = local_minima.pop(10).unwrap();
    assert_eq!(local_minima.get(third).vertex, 0);
    assert_eq!(local_minima.pop(10), None);
}

#[test]
fn test_pop_waits_for_its_scanline() {
    let mut local_minima = filled();
    local_minima.reset();

    assert_eq!(local_minima.pop(10), None);
    assert!(local_minima.pop(20).is_some());
}

#[test]
fn test_reset_rewinds() {
    let mut local_minima = filled();
    local_minima.reset();

    while local_minima.pop(20).is_some() {}
    assert!(local_minima.pop(10).is_some());

    local_minima.reset();
    assert!(local_minima.pop(20).is_some());
    assert_eq!(local_minima.len(), 3);
}

#[test]
fn test_clear() {
    let mut local_minima = filled();
    local_minima.clear();

    assert!(local_minima.is_empty());
    local_minima.reset();
    assert_eq!(local_minima.pop(20), None);
}
