use fmtscope_types::Id;

/// A terminal-renderable RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Background color for a node, derived from its id.
///
/// Purely a visual distinguishing aid, not a semantic encoding: the same id
/// always gets the same pastel, different ids usually get different ones.
/// Matches the producer's `hsl(id % 256, 60%, 90%)` scheme.
pub fn id_background(id: Id) -> Rgb {
    let hue = id.rem_euclid(256) as f64;
    hsl_to_rgb(hue, 0.60, 0.90)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Rgb {
        r: ((r1 + m) * 255.0).round() as u8,
        g: ((g1 + m) * 255.0).round() as u8,
        b: ((b1 + m) * 255.0).round() as u8,
    }
}
