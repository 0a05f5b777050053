use crate::ForwardList;

#[test]
fn cursor_walks_all_states() {
    let list = ForwardList::from([10, 20]);
    let mut cur = list.cursor_before_front();

    assert_eq!(None, cur.current());
    assert_eq!(Some(&10), cur.peek_next());
    assert_eq!(false, cur.at_end());

    cur.move_next();
    assert_eq!(Some(&10), cur.current());

    cur.move_next();
    assert_eq!(Some(&20), cur.current());
    assert_eq!(None, cur.peek_next());

    cur.move_next();
    assert_eq!(true, cur.at_end());
    assert_eq!(None, cur.current());
}

#[test]
fn splice_scenario_at_front() {
    let mut list = ForwardList::from([1, 2, 3]);

    let mut cur = list.cursor_before_front_mut();
    cur.insert_after(0);
    assert_eq!(Some(&mut 0), cur.peek_next());
    assert_eq!(4, list.len());
    assert_eq!(vec![0, 1, 2, 3], list.iter().copied().collect::<Vec<_>>());

    let mut cur = list.cursor_before_front_mut();
    assert_eq!(Some(0), cur.remove_next());
    assert_eq!(Some(&mut 1), cur.peek_next());
    assert_eq!(3, list.len());
    assert_eq!(vec![1, 2, 3], list.iter().copied().collect::<Vec<_>>());
}

#[test]
fn insert_after_middle_node() {
    let mut list = ForwardList::from([1, 3]);

    let mut cur = list.cursor_before_front_mut();
    cur.move_next();
    cur.insert_after(2);
    cur.move_next();
    assert_eq!(Some(&mut 2), cur.current());
    assert_eq!(vec![1, 2, 3], list.iter().copied().collect::<Vec<_>>());
}

#[test]
fn remove_next_links_past_removed_node() {
    let mut list = ForwardList::from([1, 2, 3]);

    let mut cur = list.cursor_before_front_mut();
    cur.move_next();
    assert_eq!(Some(2), cur.remove_next());
    assert_eq!(Some(&mut 3), cur.peek_next());
    assert_eq!(2, list.len());
    assert_eq!(vec![1, 3], list.iter().copied().collect::<Vec<_>>());
}

#[test]
fn remove_next_without_successor_is_none() {
    let mut list = ForwardList::from([1]);

    let mut cur = list.cursor_before_front_mut();
    cur.move_next();
    assert_eq!(None, cur.remove_next());
    assert_eq!(1, list.len());
}

#[test]
fn remove_next_on_empty_list_is_none() {
    let mut list: ForwardList<i32> = ForwardList::new();

    let mut cur = list.cursor_before_front_mut();
    assert_eq!(None, cur.remove_next());
    assert_eq!(true, list.is_empty());
}

#[test]
fn cursor_positions_compare_by_identity() {
    let list = ForwardList::from([1, 1]);
    let mut a = list.cursor_before_front();
    let mut b = list.cursor_before_front();
    assert_eq!(a, b);

    a.move_next();
    b.move_next();
    assert_eq!(a, b);

    // Both elements hold 1; equality still tells the cells apart.
    b.move_next();
    assert_ne!(a, b);

    a.move_next();
    assert_eq!(a, b);

    a.move_next();
    b.move_next();
    assert_eq!(a, b);
    assert_eq!(true, a.at_end());
}

#[test]
fn before_front_cursors_of_different_lists_differ() {
    let a: ForwardList<i32> = ForwardList::new();
    let b: ForwardList<i32> = ForwardList::new();
    assert_ne!(a.cursor_before_front(), b.cursor_before_front());
}

#[test]
fn mutable_cursor_exposes_read_view() {
    let mut list = ForwardList::from([1, 2]);

    let mut cur = list.cursor_before_front_mut();
    cur.move_next();
    if let Some(value) = cur.current() {
        *value = 10;
    }
    assert_eq!(Some(&10), cur.as_cursor().current());
    assert_eq!(false, cur.as_cursor().at_end());
    assert_eq!(vec![10, 2], list.iter().copied().collect::<Vec<_>>());
}

#[test]
fn append_by_walking_cursor() {
    let mut list = ForwardList::new();

    let mut cur = list.cursor_before_front_mut();
    for v in [1, 2, 3, 4] {
        cur.insert_after(v);
        cur.move_next();
    }
    assert_eq!(vec![1, 2, 3, 4], list.iter().copied().collect::<Vec<_>>());
    assert_eq!(4, list.len());
}

// The past-the-end preconditions are only asserted in debug builds; in
// release the operations degrade to no-ops.
#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "advanced a past-the-end cursor")]
fn advancing_a_past_the_end_cursor_asserts() {
    let list = ForwardList::from([1]);
    let mut cur = list.cursor_before_front();
    cur.move_next();
    cur.move_next();
    cur.move_next();
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "advanced a past-the-end cursor")]
fn advancing_a_past_the_end_mut_cursor_asserts() {
    let mut list = ForwardList::from([1]);
    let mut cur = list.cursor_before_front_mut();
    cur.move_next();
    cur.move_next();
    cur.move_next();
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "inserted after a past-the-end cursor")]
fn inserting_after_a_past_the_end_cursor_asserts() {
    let mut list: ForwardList<i32> = ForwardList::new();
    let mut cur = list.cursor_before_front_mut();
    cur.move_next();
    cur.insert_after(1);
}

#[test]
fn insert_after_never_disturbs_other_elements() {
    let mut list = ForwardList::from([1, 2]);

    let mut cur = list.cursor_before_front_mut();
    cur.move_next();
    cur.move_next();
    cur.insert_after(3);
    assert_eq!(Some(&mut 2), cur.current());
    assert_eq!(vec![1, 2, 3], list.iter().copied().collect::<Vec<_>>());
}
