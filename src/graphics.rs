use druid::Color;

/// Writes a single pixel into the RGBA buffer, ignoring out-of-bounds
/// coordinates.
pub fn plot_point(x: f64, y: f64, pixel_data: &mut [u8], width: usize, height: usize, color: Color) {
    let (x, y) = (x.round() as isize, y.round() as isize);
    if x < 0 || x >= width as isize || y < 0 || y >= height as isize {
        return;
    }
    let offset = (y as usize * width + x as usize) * 4;
    let (r, g, b, a) = color.as_rgba8();
    pixel_data[offset] = r;
    pixel_data[offset + 1] = g;
    pixel_data[offset + 2] = b;
    pixel_data[offset + 3] = a;
}

/// Draws a line between two points in the pixel buffer using Bresenham's algorithm
pub fn draw_line(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    color: Color,
) {
    let (mut x0, mut y0, x1, y1) = (
        x0.round() as isize,
        y0.round() as isize,
        x1.round() as isize,
        y1.round() as isize,
    );
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy

    loop {
        if x0 >= 0 && x0 < width as isize && y0 >= 0 && y0 < height as isize {
            let offset = (y0 as usize * width + x0 as usize) * 4;
            let (r, g, b, a) = color.as_rgba8();
            pixel_data[offset] = r;
            pixel_data[offset + 1] = g;
            pixel_data[offset + 2] = b;
            pixel_data[offset + 3] = a;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
