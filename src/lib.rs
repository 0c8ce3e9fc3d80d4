//! A paged view whose pages turn like the faces of a cube.
//!
//! The crate is split into three layers:
//!
//! 1. **Transform**: [`cube_transform`] maps `(page index, scroll position,
//!    axis, style)` to a [`CubeTransform`] (rotation, perspective, pivot
//!    anchor, shading). It is pure and total.
//! 2. **Bridge**: [`PageScrollBridge`] republishes a [`PageController`]'s
//!    position through a [`ValueNotifier`], owns the controller when the caller
//!    did not supply one, and performs the one-time jump to the start page.
//! 3. **Composition**: [`CubePageView`] materializes the pages around the
//!    current position each frame and hands [`PageLayer`]s to any
//!    [`PageCompositor`].
//!
//! Everything is single-threaded: handles are `Rc`-based and callbacks run
//! synchronously on the thread that reports scroll positions.
//!
//! ```
//! use cube_page_view::{CubePageView, Size, SnapshotCompositor, render_frame};
//!
//! let mut view = CubePageView::builder()
//!     .children(["red", "green", "blue"])
//!     .build()?;
//! view.after_first_frame();
//! view.attach_surface()?;
//! view.controller().set_page(0.5);
//!
//! let mut backend = SnapshotCompositor::new();
//! render_frame(&view, Size::new(360.0, 640.0), &mut backend)?;
//! assert_eq!(backend.frames()[0].pages.len(), 3);
//! # Ok::<(), cube_page_view::CubeError>(())
//! ```
#![forbid(unsafe_code)]

mod bridge;
mod controller;
mod foundation;
mod observe;
mod view;

/// Cube face math and projection helpers.
pub mod transform;

pub use bridge::scroll_bridge::PageScrollBridge;
pub use controller::page_controller::PageController;
pub use foundation::core::{
    Anchor, Axis, HORIZONTAL_PERSPECTIVE, Point, Rgba8Premul, RotationAxis, Size, TransformStyle,
    VERTICAL_PERSPECTIVE, Vec2,
};
pub use foundation::error::{CubeError, CubeResult};
pub use observe::notifier::{ListenerId, ValueNotifier};
pub use transform::cube::{CubeTransform, DEGREES_PER_PAGE, cube_transform};
pub use view::builder::CubePageViewBuilder;
pub use view::compositor::{
    FrameSnapshot, PageCompositor, PageSnapshot, SnapshotCompositor, render_frame,
};
pub use view::frame::{BuildContext, Frame, PageContent, PageLayer, SHADE_COLOR};
pub use view::options::CubeViewOptions;
pub use view::page_view::{CubePageView, ItemBuilder, PageChanged};
