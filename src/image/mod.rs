pub mod buffer;
pub mod io;
pub mod traits;

pub use self::buffer::{PixelBuffer, Rgba, SENTINEL};
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
