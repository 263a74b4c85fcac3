mod ray;
mod viewpoint;

pub use ray::{MAX_RAYS, Ray, RayFan};
pub(crate) use ray::half_count;
pub use viewpoint::{Viewpoint, normalize_deg};
