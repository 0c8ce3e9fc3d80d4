pub(crate) mod builder;
pub(crate) mod compositor;
pub(crate) mod frame;
pub(crate) mod options;
pub(crate) mod page_view;
