pub mod io;
pub mod plane;
pub mod traits;
pub mod u16;

pub use self::plane::{ColorImage, DepthImage, Plane, ResponseImage, StructureMask};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u16::ImageU16;
