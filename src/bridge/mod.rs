pub(crate) mod scroll_bridge;
