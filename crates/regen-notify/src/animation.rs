/// Extra distance past the right screen edge where the slide starts
const OFFSCREEN_START: i32 = 50;

/// Horizontal positions for a slide-in from beyond the right edge to
/// `screen_width - width - margin`, eased out cubically
pub fn slide_in_positions(screen_width: u32, width: u32, margin: i32, frames: u32) -> Vec<i32> {
    let screen_width = screen_width as i32;
    let x_start = screen_width + OFFSCREEN_START;
    let x_end = screen_width - width as i32 - margin;

    match frames {
        0 => Vec::new(),
        1 => vec![x_end],
        _ => {
            let last = f64::from(frames - 1);
            (0..frames)
                .map(|i| {
                    let t = 1.0 - (1.0 - f64::from(i) / last).powi(3);
                    (f64::from(x_start) + t * f64::from(x_end - x_start)) as i32
                })
                .collect()
        }
    }
}
