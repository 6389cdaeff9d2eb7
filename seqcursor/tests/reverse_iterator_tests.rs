use seqcursor::{Combined, CombinedMut, CursorError, ReadonlyReverse, Reverse};

#[test]
fn test_reverse_cursor_populated_sequence() {
    let data = ["first", "second", "third"];

    let items: Vec<_> = Combined::new(&data).reverse().collect();
    assert_eq!(items, ["third", "second", "first"]);
}

#[test]
fn test_reverse_cursor_empty_sequence() {
    let data: [i64; 0] = [];
    let mut cursor = Reverse::new(&data[..]);

    assert!(!cursor.advance());
    assert_eq!(cursor.position(), -1);
}

#[test]
fn test_reverse_cursor_single_item() {
    let data = ["only"];
    let mut cursor = Combined::new(&data).reverse();

    assert!(cursor.advance());
    assert_eq!(cursor.value(), "only");
    assert!(!cursor.advance());
}

#[test]
fn test_reverse_cursor_value_before_advance() {
    let data = [1, 2, 3];
    let mut cursor = Combined::new(&data).reverse();

    assert_eq!(cursor.value(), 0);
    assert_eq!(
        cursor.error(),
        Some(&CursorError::OutOfBounds {
            position: 3,
            length: 3
        })
    );
}

#[test]
fn test_reverse_cursor_size_hint() {
    let data = [1, 2, 3];
    let mut cursor = Combined::new(&data).reverse();
    assert_eq!(cursor.size_hint(), (3, Some(3)));

    cursor.next();
    assert_eq!(cursor.size_hint(), (2, Some(2)));

    cursor.next();
    assert_eq!(cursor.size_hint(), (1, Some(1)));

    cursor.next();
    assert_eq!(cursor.size_hint(), (0, Some(0)));
}

#[test]
fn test_reverse_cursor_compare_with_forward() {
    let data = ["alpha", "beta", "gamma", "delta"];
    let combined = Combined::new(&data);

    let forward: Vec<_> = combined.forward().collect();
    let mut reverse: Vec<_> = combined.reverse().collect();
    reverse.reverse();

    assert_eq!(forward, reverse);
}

#[test]
fn test_reverse_mut_cursor() {
    let mut data = vec![1, 2, 3];
    let mut cursor = CombinedMut::new(&mut data).reverse();

    assert!(cursor.advance());
    *cursor.value_mut().unwrap() = 30;
    assert!(cursor.advance());
    assert_eq!(cursor.value(), 2);

    assert_eq!(data, [1, 2, 30]);
}

#[test]
fn test_readonly_reverse_snapshot() {
    let mut data = vec![1, 2, 3];
    let cursor = ReadonlyReverse::snapshot(&data);
    data.push(4);

    let items: Vec<_> = cursor.collect();
    assert_eq!(items, [3, 2, 1]);
}
