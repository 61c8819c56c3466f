use crate::Stack;
use alloc::vec;

#[test]
fn lifo_order() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.top(), Some(&3));

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn pop_empty() {
    let mut stack = Stack::<i32>::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.top(), None);
}

#[test]
fn from_vec_keeps_order() {
    let mut stack = Stack::from(vec![1, 2, 3]);
    assert_eq!(stack.as_slice(), &[1, 2, 3]);
    assert_eq!(stack.to_vec(), vec![1, 2, 3]);
    assert_eq!(stack.pop(), Some(3));
}
