//! Cosmetic fill colors

use rand::Rng;

/// Random bright color: uniform hue, saturation in [0.4, 1], full value
pub fn random_fill<R: Rng + ?Sized>(rng: &mut R) -> [u8; 3] {
    let h = rng.random_range(0.0f32..1.0);
    let s = rng.random_range(0.4f32..=1.0);
    let (r, g, b) = hsv_to_rgb(h, s, 1.0);
    [to_byte(r), to_byte(g), to_byte(b)]
}

#[inline]
fn to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

/// HSV (all components in [0, 1]) to RGB
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 0.5), (0.5, 0.5, 0.5));
        let (r, g, b) = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!(r.abs() < 1e-5 && (g - 1.0).abs() < 1e-5 && b.abs() < 1e-5);
    }

    #[test]
    fn test_fill_is_bright() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..100 {
            let rgb = random_fill(&mut rng);
            // Value is 1, so the strongest channel is always saturated
            assert_eq!(*rgb.iter().max().unwrap(), 255);
        }
    }
}
