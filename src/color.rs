use num_traits::{Float, NumCast, ToPrimitive, clamp};

/// A color in hue/saturation/value form, each component nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Hsv { hue, saturation, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Color {
        let (r, g, b) = hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value);
        Color {
            red: scale_channel(r),
            green: scale_channel(g),
            blue: scale_channel(b),
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Color {
        Color { red, green, blue }
    }
}

/// Six-sector HSV to RGB conversion. The hue is a fraction of a full turn, so
/// `0.0` and `1.0` are both red.
///
/// Out-of-range saturation or value is not rejected; the channels may then
/// fall outside `[0, 1]`.
pub fn hsv_to_rgb<T: Float>(h: T, s: T, v: T) -> (T, T, T) {
    if s == T::zero() {
        return (v, v, v);
    }

    let one = T::one();
    let six: T = NumCast::from(6).unwrap_or_else(T::nan);

    let sector = (h * six).trunc();
    let f = h * six - sector;
    let p = v * (one - s);
    let q = v * (one - s * f);
    let t = v * (one - s * (one - f));

    match sector.to_i64().map(|i| i.rem_euclid(6)) {
        Some(0) => (v, t, p),
        Some(1) => (q, v, p),
        Some(2) => (p, v, t),
        Some(3) => (p, q, v),
        Some(4) => (t, p, v),
        Some(5) => (v, p, q),
        // NaN or infinite hue
        _ => (T::nan(), T::nan(), T::nan()),
    }
}

/// Scales a `[0, 1]` channel to a byte. Truncates toward zero, so `254.9`
/// becomes 254. Overshoot is clamped and NaN maps to 0.
pub fn scale_channel<T: Float>(c: T) -> u8 {
    let max: T = NumCast::from(u8::MAX).unwrap_or_else(T::zero);
    let scaled = (c * max).trunc();
    if scaled.is_nan() {
        return 0;
    }
    clamp(scaled, T::zero(), max).to_u8().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn primaries() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(close(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0)));
        assert!(close(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
    }

    #[test]
    fn secondaries() {
        assert!(close(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), (1.0, 1.0, 0.0)));
        assert!(close(hsv_to_rgb(0.5, 1.0, 1.0), (0.0, 1.0, 1.0)));
        assert!(close(hsv_to_rgb(5.0 / 6.0, 1.0, 1.0), (1.0, 0.0, 1.0)));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(0.3, 0.0, 0.4), (0.4, 0.4, 0.4));
    }

    #[test]
    fn hue_wraps_at_one() {
        assert!(close(hsv_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
    }

    #[test]
    fn works_for_f32() {
        let (r, g, b) = hsv_to_rgb(0.25f32, 1.0, 1.0);
        assert_eq!((scale_channel(r), scale_channel(g), scale_channel(b)), (127, 255, 0));
    }

    #[test]
    fn scale_truncates() {
        assert_eq!(scale_channel(254.9 / 255.0), 254);
        assert_eq!(scale_channel(0.5), 127);
        assert_eq!(scale_channel(0.1), 25);
        assert_eq!(scale_channel(1.0), 255);
        assert_eq!(scale_channel(0.0), 0);
    }

    #[test]
    fn scale_clamps() {
        assert_eq!(scale_channel(1.5), 255);
        assert_eq!(scale_channel(-0.2), 0);
        assert_eq!(scale_channel(f64::NAN), 0);
        assert_eq!(scale_channel(f64::INFINITY), 255);
    }

    #[test]
    fn desaturated_red() {
        let c = Color::from(Hsv::new(0.0, 0.9, 1.0));
        assert_eq!(c, Color::rgb(255, 25, 25));
        assert_eq!(c.to_bytes(), [255, 25, 25]);
    }

    #[test]
    fn from_byte_array() {
        assert_eq!(Color::from([1u8, 2, 3]), Color::rgb(1, 2, 3));
        assert_eq!(Color::from(Color::rgb(9, 8, 7).to_bytes()), Color::rgb(9, 8, 7));
    }

    #[test]
    fn out_of_range_inputs_stay_in_bytes() {
        let c = Color::from(Hsv::new(0.0, 1.5, 2.0));
        assert_eq!(c.red, 255);
        assert_eq!(c.green, 0);
    }
}
