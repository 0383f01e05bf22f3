//! Marker types.

/// Marker type describing an arrival (check-in).
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// Marker type describing a departure (check-out).
#[derive(Clone, Copy, Debug)]
pub struct CheckOut;
