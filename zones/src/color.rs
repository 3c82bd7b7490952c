//! Zone display colors.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use rand::Rng;

/// Pick a random opaque color as canonical lowercase `#rrggbb`.
pub fn generate_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let rgb: u32 = rng.random_range(0..=0x00ff_ffff);
    format!("#{rgb:06x}")
}

/// Pick a random color that differs from `previous`.
///
/// Colors are compared by channel value, so `#FFF` and `#ffffff` count as the same.
pub fn generate_distinct_color<R: Rng + ?Sized>(rng: &mut R, previous: &str) -> String {
    let previous = parse_hex_rgb(previous);
    loop {
        let color = generate_color(rng);
        if parse_hex_rgb(&color) != previous {
            return color;
        }
    }
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let Ok(value) = u32::from_str_radix(hex, 16) else {
        return None;
    };
    match hex.len() {
        3 => {
            let nibble = |shift: u32| ((value >> shift) & 0xf) as u8 * 0x11;
            Some((nibble(8), nibble(4), nibble(0)))
        }
        6 => Some(((value >> 16) as u8, (value >> 8) as u8, value as u8)),
        _ => None,
    }
}
