use stickycoll::{ContainerError, Dynamic, Fixed, Unique};

fn failed() -> Dynamic<i32> {
    let mut dynamic = Dynamic::from_vec(vec![1, 2, 3]);
    dynamic.at(7);
    dynamic
}

fn first_error() -> Option<ContainerError> {
    Some(ContainerError::IndexOutOfBounds {
        index: 7,
        length: 3,
    })
}

#[test]
fn test_every_operation_returns_default_after_failure() {
    let mut dynamic = failed();

    assert!(dynamic.append([4]).is_empty());
    assert_eq!(dynamic.push(4), 0);
    assert!(dynamic.fill(4, 2).is_empty());
    assert_eq!(dynamic.at(0), 0);
    assert_eq!(dynamic.find(&1), 0);
    assert!(!dynamic.contains(&1));
    assert_eq!(dynamic.set(9, 0), 0);
    assert_eq!(dynamic.delete(0), 0);
    assert_eq!(dynamic.insert(0, 9), 0);
    assert_eq!(dynamic.front(), 0);
    assert_eq!(dynamic.back(), 0);
    assert_eq!(dynamic.pop(), 0);
    dynamic.clear();
    dynamic.grow(100);

    assert_eq!(dynamic.native(), [1, 2, 3]);
    assert_eq!(dynamic.error().cloned(), first_error());
}

#[test]
fn test_later_errors_do_not_overwrite() {
    let mut dynamic = failed();
    dynamic.at(-1);
    dynamic.find(&42);
    dynamic.delete(99);
    assert_eq!(dynamic.error().cloned(), first_error());
}

#[test]
fn test_failed_container_has_no_traversal() {
    let mut dynamic = failed();
    let mut cursor = dynamic.iterating_mut().forward();
    assert!(!cursor.advance());
    assert_eq!(cursor.value_mut(), None);
    assert_eq!(dynamic.native(), [1, 2, 3]);
}

#[test]
fn test_fixed_failure_is_sticky() {
    let mut fixed = Fixed::new(1, vec![1]);
    fixed.push(2);
    assert!(fixed.error().is_some());
    assert_eq!(fixed.delete(0), 0);
    assert_eq!(fixed.native(), [1]);
}

#[test]
fn test_unique_failure_is_sticky() {
    let mut unique = Unique::from_vec(vec![1, 2]);
    unique.front();
    unique.find(&3);
    assert_eq!(unique.error(), Some(&ContainerError::ElementNotFound));
    assert_eq!(unique.push(3), 0);
    assert_eq!(unique.native(), [1, 2]);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ContainerError::IndexOutOfBounds {
            index: 4,
            length: 2
        }
        .to_string(),
        "Index out of bounds: index 4 is outside collection of length 2"
    );
    assert_eq!(
        ContainerError::CapacityExceeded {
            capacity: 2,
            requested: 3
        }
        .to_string(),
        "Capacity exceeded: at most 2 elements allowed, 3 requested"
    );
    assert_eq!(ContainerError::KeyNotFound.to_string(), "Key not found");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&ContainerError::EmptyCollection);
}
