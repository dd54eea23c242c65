pub const NUM_PIXELS_X: usize = 12;

pub const NUM_PIXELS_Y: usize = 12;

pub const NUM_PIXELS: usize = NUM_PIXELS_X * NUM_PIXELS_Y;
