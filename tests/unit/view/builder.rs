use super::*;

#[test]
fn explicit_children_build() {
    let view = CubePageViewBuilder::new()
        .children(["a", "b", "c"])
        .build()
        .unwrap();
    assert_eq!(view.item_count(), 3);
    assert_eq!(view.scroll_direction(), Axis::Horizontal);
    assert_eq!(view.transform_style(), TransformStyle::Outside);
    assert_eq!(view.current_position(), 0.0);
}

#[test]
fn lazy_builder_builds() {
    let view = CubePageViewBuilder::new()
        .item_count(10)
        .item_builder(|_, index, _| index * 2)
        .start_page(4)
        .scroll_direction(Axis::Vertical)
        .transform_style(TransformStyle::Inside)
        .build()
        .unwrap();
    assert_eq!(view.item_count(), 10);
    assert_eq!(view.current_position(), 4.0);
    assert_eq!(view.scroll_direction(), Axis::Vertical);
    assert_eq!(view.transform_style(), TransformStyle::Inside);
}

#[test]
fn rejects_both_sources() {
    let err = CubePageViewBuilder::new()
        .children([1usize, 2])
        .item_count(2)
        .item_builder(|_, i, _| i)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CubeError::Validation(_)));
    assert!(err.to_string().contains("both"));
}

#[test]
fn rejects_missing_source() {
    let err = CubePageViewBuilder::<u8>::new().build().err().unwrap();
    assert!(matches!(err, CubeError::Validation(_)));

    let err = CubePageViewBuilder::<u8>::new()
        .item_count(3)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CubeError::Validation(_)));
}

#[test]
fn builder_needs_a_count() {
    let err = CubePageViewBuilder::new()
        .item_builder(|_, i, _| i)
        .build()
        .err()
        .unwrap();
    assert!(err.to_string().contains("item_count"));
}

#[test]
fn children_reject_a_count() {
    let err = CubePageViewBuilder::new()
        .children([1u8])
        .item_count(1)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CubeError::Validation(_)));
}

#[test]
fn options_apply_together() {
    let options = CubeViewOptions {
        scroll_direction: Axis::Vertical,
        start_page: 1,
        transform_style: TransformStyle::Inside,
    };
    let view = CubePageViewBuilder::new()
        .children([(), ()])
        .options(options)
        .build()
        .unwrap();
    assert_eq!(*view.options(), options);
}

#[test]
fn supplied_controller_is_borrowed() {
    let c = PageController::new(0);
    let view = CubePageViewBuilder::new()
        .children([0u8; 3])
        .controller(c.clone())
        .build()
        .unwrap();
    assert!(view.controller().ptr_eq(&c));
    assert!(!view.bridge().owns_controller());
    drop(view);
    assert!(!c.is_disposed());
}
