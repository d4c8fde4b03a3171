pub mod carousel;
pub mod header;
pub mod status_bar;

pub use carousel::CarouselWidget;
pub use header::HeaderWidget;
pub use status_bar::StatusBarWidget;
