pub(crate) mod page_controller;
