pub(crate) mod decode;
pub(crate) mod pixels;
pub(crate) mod warp;
