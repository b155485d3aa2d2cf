pub(crate) mod quantize;
pub(crate) mod ramp;
