//! Tests for the `#[derive(Linked)]` macro.
//!
//! Element types deriving `Linked` are stored in ordinary collections which
//! then serve directly as the tree's link store.

use intrusive_rbtree::{Link, LinkStore, Linked, RbTree};
use rstest::rstest;
use std::collections::VecDeque;

// =============================================================================
// Test Structures
// =============================================================================

/// The link field is found by its type.
#[derive(Debug, Linked)]
struct Task {
    priority: u8,
    name: &'static str,
    link: Link<usize>,
}

/// Two links; the marked one is derived.
#[derive(Debug, Linked)]
struct Route {
    prefix: u32,
    metric: u32,
    #[tree_link]
    by_prefix: Link<usize>,
    by_metric: Link<usize>,
}

/// Generic element with a fully qualified link type.
#[derive(Debug, Linked)]
struct Slot<T> {
    value: T,
    link: intrusive_rbtree::Link<usize>,
}

fn task(priority: u8, name: &'static str) -> Task {
    Task {
        priority,
        name,
        link: Link::new(),
    }
}

// =============================================================================
// Field Selection Tests
// =============================================================================

#[rstest]
fn test_derived_link_returns_link_field() {
    let mut entry = task(1, "flush");
    assert!(std::ptr::eq(Linked::link(&entry), &entry.link));
    let field: *const Link<usize> = &entry.link;
    assert!(std::ptr::eq(entry.link_mut(), field));
}

#[rstest]
fn test_marked_field_is_used() {
    let route = Route {
        prefix: 0,
        metric: 0,
        by_prefix: Link::new(),
        by_metric: Link::new(),
    };
    assert!(std::ptr::eq(Linked::link(&route), &route.by_prefix));
    assert!(!std::ptr::eq(Linked::link(&route), &route.by_metric));
}

#[rstest]
fn test_generic_struct_derives() {
    let slot = Slot {
        value: "x",
        link: Link::new(),
    };
    assert!(std::ptr::eq(Linked::link(&slot), &slot.link));
    assert_eq!(slot.value, "x");
}

// =============================================================================
// Tree Integration Tests
// =============================================================================

#[rstest]
fn test_vec_of_derived_elements_is_a_store() {
    let mut tasks = vec![task(3, "compact"), task(1, "flush"), task(2, "sync")];
    let mut queue = RbTree::new();
    for handle in 0..tasks.len() {
        queue.insert(&mut tasks, handle, |tasks: &Vec<Task>, a, b| {
            tasks[a].priority < tasks[b].priority
        });
    }
    queue.validate(&tasks);

    let names: Vec<&str> = queue.iter(&tasks).map(|h| tasks[h].name).collect();
    assert_eq!(names, vec!["flush", "sync", "compact"]);
}

#[rstest]
fn test_deque_of_derived_elements_is_a_store() {
    let mut routes: VecDeque<Route> = [24, 8, 16]
        .into_iter()
        .map(|prefix| Route {
            prefix,
            metric: 32 - prefix,
            by_prefix: Link::new(),
            by_metric: Link::new(),
        })
        .collect();

    let mut table = RbTree::new();
    for handle in 0..routes.len() {
        table.insert(&mut routes, handle, |routes: &VecDeque<Route>, a, b| {
            routes[a].prefix < routes[b].prefix
        });
    }

    let hit = table.search(&routes, |routes, node| routes[node].prefix.cmp(&16));
    assert_eq!(hit.map(|h| routes[h].metric), Some(16));
    assert_eq!(routes[2].by_metric, Link::new());
    assert_ne!(LinkStore::link(&routes, 0).parent(), None);
}

#[rstest]
fn test_array_of_derived_elements_is_a_store() {
    let mut slots = [
        Slot {
            value: 'b',
            link: Link::new(),
        },
        Slot {
            value: 'a',
            link: Link::new(),
        },
    ];
    let mut tree = RbTree::new();
    for handle in 0..slots.len() {
        tree.insert(&mut slots, handle, |slots: &[Slot<char>; 2], a, b| {
            slots[a].value < slots[b].value
        });
    }
    tree.remove(&mut slots, 0);
    let values: Vec<char> = tree.iter(&slots).map(|h| slots[h].value).collect();
    assert_eq!(values, vec!['a']);
}
