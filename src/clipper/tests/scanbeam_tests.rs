use crate::clipper::scanbeam::Scanbeam;

#[test]
fn test_pop_returns_largest_first() {
    let mut scanbeam = Scanbeam::new();

    scanbeam.insert(5);
    scanbeam.insert(3);
    scanbeam.insert(7);
    scanbeam.insert(3);

    assert_eq!(scanbeam.len(), 4);
    assert_eq!(scanbeam.pop(), Some(7));
    assert_eq!(scanbeam.pop(), Some(5));
    assert_eq!(scanbeam.pop(), Some(3));
    assert!(scanbeam.is_empty());
}

#[test]
fn test_pop_empty() {
    let mut scanbeam = Scanbeam::new();

    assert_eq!(scanbeam.pop(), None);
}

#[test]
fn test_negative_values() {
    let mut scanbeam = Scanbeam::new();

    scanbeam.insert(-10);
    scanbeam.insert(0);
    scanbeam.insert(-3);

    assert_eq!(scanbeam.pop(), Some(0));
    assert_eq!(scanbeam.pop(), Some(-3));
    assert_eq!(scanbeam.pop(), Some(-10));
}

#[test]
fn test_clean() {
    let mut scanbeam = Scanbeam::new();
    scanbeam.insert(1);
    scanbeam.insert(2);
    scanbeam.clean();

    assert!(scanbeam.is_empty());
    assert_eq!(scanbeam.pop(), None);
}
