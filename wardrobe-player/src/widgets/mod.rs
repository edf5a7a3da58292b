pub mod carousel_canvas;

pub use carousel_canvas::{CarouselCanvas, PointerState, carousel_canvas};
