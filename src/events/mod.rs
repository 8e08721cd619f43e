pub mod anchors;
pub mod forms;
pub mod modal;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod tabs;
pub mod video;

pub use anchors::wire_anchor_scrolling;
pub use forms::wire_forms;
pub use modal::{wire_modal, ModalController};
pub use nav::wire_navigation;
pub use pointer::wire_pointer_offset;
pub use reveal::wire_scroll_reveal;
pub use tabs::wire_tabs;
pub use video::wire_videos;
