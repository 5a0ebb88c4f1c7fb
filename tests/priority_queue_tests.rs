use metro_route::data_structures::LazyMinQueue;

#[test]
fn test_pops_lowest_priority_first() {
    let mut queue: LazyMinQueue<u64, u64> = LazyMinQueue::new();
    queue.push(1, 10);
    queue.push(2, 5);
    queue.push(3, 7);

    assert_eq!(queue.peek(), Some((2, 5)));
    assert_eq!(queue.pop(), Some((2, 5)));
    assert_eq!(queue.pop(), Some((3, 7)));
    assert_eq!(queue.pop(), Some((1, 10)));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_equal_priorities_pop_by_ascending_key() {
    let mut queue: LazyMinQueue<u64, u64> = LazyMinQueue::new();
    queue.push(9, 4);
    queue.push(2, 4);
    queue.push(5, 4);

    let keys: Vec<u64> = std::iter::from_fn(|| queue.pop()).map(|(key, _)| key).collect();
    assert_eq!(keys, vec![2, 5, 9]);
}

#[test]
fn test_superseded_entries_stay_until_popped() {
    let mut queue: LazyMinQueue<u64, u64> = LazyMinQueue::new();
    queue.push(1, 10);
    // Improved estimate for the same key
    queue.push(1, 3);

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop(), Some((1, 3)));
    assert_eq!(queue.pop(), Some((1, 10)));
    assert!(queue.is_empty());

    queue.push(4, 1);
    queue.clear();
    assert!(queue.is_empty());
}
