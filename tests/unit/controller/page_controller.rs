use std::{cell::RefCell, rc::Rc};

use super::*;

fn recorder(c: &PageController) -> Rc<RefCell<Vec<f64>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    c.add_listener(move |p| sink.borrow_mut().push(*p));
    seen
}

#[test]
fn detached_controller_has_no_position() {
    let c = PageController::new(2);
    assert!(!c.has_clients());
    assert_eq!(c.page(), None);
    assert!(!c.set_page(1.0));
    assert!(!c.jump_to_page(1));
}

#[test]
fn attach_starts_at_initial_page_without_notifying() {
    let c = PageController::new(2);
    let seen = recorder(&c);
    c.attach(5).unwrap();
    assert_eq!(c.page(), Some(2.0));
    assert!(seen.borrow().is_empty());
}

#[test]
fn initial_page_is_clamped_to_range() {
    let c = PageController::new(9);
    c.attach(3).unwrap();
    assert_eq!(c.page(), Some(2.0));
}

#[test]
fn positions_are_clamped_and_deduplicated() {
    let c = PageController::new(0);
    let seen = recorder(&c);
    c.attach(3).unwrap();

    assert!(c.set_page(0.5));
    assert!(!c.set_page(0.5));
    assert!(c.set_page(7.0));
    assert!(c.set_page(-1.0));
    assert!(!c.set_page(f64::NAN));
    assert_eq!(*seen.borrow(), vec![0.5, 2.0, 0.0]);
}

#[test]
fn jump_moves_and_notifies() {
    let c = PageController::new(0);
    let seen = recorder(&c);
    c.attach(4).unwrap();
    assert!(c.jump_to_page(3));
    assert_eq!(c.page(), Some(3.0));
    assert_eq!(*seen.borrow(), vec![3.0]);
}

#[test]
fn removed_listener_is_not_called() {
    let c = PageController::new(0);
    c.attach(4).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = c.add_listener(move |p| sink.borrow_mut().push(*p));
    c.set_page(1.0);
    assert!(c.remove_listener(id));
    c.set_page(2.0);
    assert_eq!(*seen.borrow(), vec![1.0]);
}

#[test]
fn dispose_drops_listeners_and_blocks_reattach() {
    let c = PageController::new(0);
    recorder(&c);
    c.attach(2).unwrap();
    c.dispose();
    assert!(c.is_disposed());
    assert_eq!(c.listener_count(), 0);
    assert!(!c.set_page(1.0));
    assert!(matches!(c.attach(2), Err(CubeError::Controller(_))));

    // Second dispose only logs.
    c.dispose();
    assert!(c.is_disposed());
}

#[test]
fn detach_forgets_position() {
    let c = PageController::new(1);
    c.attach(3).unwrap();
    c.detach();
    assert!(!c.has_clients());
    assert_eq!(c.page(), None);
}

#[test]
fn clones_are_the_same_controller() {
    let a = PageController::new(0);
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&PageController::new(0)));
}

#[test]
fn reattach_reports_the_reset_position() {
    let c = PageController::new(0);
    let seen = recorder(&c);
    c.attach(4).unwrap();
    c.set_page(2.5);
    c.detach();
    c.attach(4).unwrap();
    assert_eq!(c.page(), Some(0.0));
    assert_eq!(*seen.borrow(), vec![2.5, 0.0]);

    // Same position as last reported: nothing to send.
    c.detach();
    c.attach(4).unwrap();
    assert_eq!(*seen.borrow(), vec![2.5, 0.0]);
}

#[test]
fn disposed_controller_refuses_jumps() {
    let c = PageController::new(0);
    c.attach(3).unwrap();
    c.dispose();
    assert!(c.has_clients());
    assert!(!c.jump_to_page(2));
    assert_eq!(c.page(), Some(0.0));
}
