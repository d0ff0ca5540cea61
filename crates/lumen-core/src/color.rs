//! Color values and conversions between sRGB, CIE XYZ and CIE L\*a\*b\*.
//!
//! All conversions are pure and total. sRGB values are not clamped anywhere
//! in this module; out-of-range channels pass through the math unchanged and
//! are only clamped when quantized (see [`crate::quantize`]).
//!
//! # Pipeline
//! ```text
//! sRGB ──decode──► linear RGB ──M──► XYZ ──f/normalize──► L*a*b*
//! sRGB ◄─encode─── linear RGB ◄─M⁻¹─ XYZ ◄─f⁻¹/scale──── L*a*b*
//! ```

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// Linear sRGB (D65) to CIE XYZ.
const SRGB_TO_XYZ: Mat3 = Mat3::from_cols(
    Vec3::new(0.412_456_4, 0.212_672_9, 0.019_333_9),
    Vec3::new(0.357_576_1, 0.715_152_2, 0.119_192),
    Vec3::new(0.180_437_5, 0.072_175, 0.950_304_1),
);

/// CIE XYZ to linear sRGB (D65).
const XYZ_TO_SRGB: Mat3 = Mat3::from_cols(
    Vec3::new(3.240_454_2, -0.969_266, 0.055_643_4),
    Vec3::new(-1.537_138_5, 1.876_010_8, -0.204_025_9),
    Vec3::new(-0.498_531_4, 0.041_556, 1.057_225_2),
);

/// D65 reference white used to normalize XYZ before the L\*a\*b\* mapping.
const REFERENCE_WHITE: Vec3 = Vec3::new(0.950_456, 1.0, 1.088_754);

/// Below this normalized value the L\*a\*b\* mapping switches to its linear segment.
const LAB_EPSILON: f32 = 0.008_856;
const LAB_SLOPE: f32 = 7.787;
const LAB_OFFSET: f32 = 16.0 / 116.0;

/// A gamma-encoded sRGB color. Channels are nominally in `[0, 1]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

/// A CIE 1931 XYZ tristimulus value relative to D65.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Xyz {
    /// X tristimulus.
    pub x: f32,
    /// Y tristimulus (luminance).
    pub y: f32,
    /// Z tristimulus.
    pub z: f32,
}

/// A CIE L\*a\*b\* color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Lab {
    /// Lightness, `0` for black and `100` for the reference white.
    pub l: f32,
    /// Green–red axis.
    pub a: f32,
    /// Blue–yellow axis.
    pub b: f32,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to CIE XYZ.
    pub fn to_xyz(self) -> Xyz {
        let linear = Vec3::new(srgb_decode(self.r), srgb_decode(self.g), srgb_decode(self.b));
        Xyz::from(SRGB_TO_XYZ * linear)
    }

    /// Convert to CIE L\*a\*b\* by way of XYZ.
    pub fn to_lab(self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Perceptual interpolation between two sRGB colors.
    ///
    /// Both endpoints are mapped to L\*a\*b\*, interpolated componentwise and
    /// converted back. `t` is not clamped.
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        Lab::lerp(from.to_lab(), to.to_lab(), t).to_rgb()
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl Xyz {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Convert to CIE L\*a\*b\*.
    ///
    /// ```text
    /// f(t) = t^(1/3)              t > 0.008856
    ///        7.787 × t + 16/116   otherwise
    ///
    /// L = max(116 × f(Y/Yn) − 16, 0)
    /// a = 500 × (f(X/Xn) − f(Y/Yn))
    /// b = 200 × (f(Y/Yn) − f(Z/Zn))
    /// ```
    pub fn to_lab(self) -> Lab {
        let n = Vec3::from(self) / REFERENCE_WHITE;
        let (fx, fy, fz) = (lab_f(n.x), lab_f(n.y), lab_f(n.z));

        Lab {
            l: (116.0 * fy - 16.0).max(0.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to gamma-encoded sRGB.
    pub fn to_rgb(self) -> Rgb {
        let linear = XYZ_TO_SRGB * Vec3::from(self);
        Rgb::new(srgb_encode(linear.x), srgb_encode(linear.y), srgb_encode(linear.z))
    }
}

impl From<Vec3> for Xyz {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Xyz> for Vec3 {
    fn from(xyz: Xyz) -> Self {
        Vec3::new(xyz.x, xyz.y, xyz.z)
    }
}

impl Lab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Convert to CIE XYZ, inverting [`Xyz::to_lab`].
    pub fn to_xyz(self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let n = Vec3::new(lab_f_inv(fx), lab_f_inv(fy), lab_f_inv(fz));
        Xyz::from(n * REFERENCE_WHITE)
    }

    /// Convert to gamma-encoded sRGB by way of XYZ.
    pub fn to_rgb(self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    /// Componentwise linear interpolation. `t` is not clamped.
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            l: from.l + (to.l - from.l) * t,
            a: from.a + (to.a - from.a) * t,
            b: from.b + (to.b - from.b) * t,
        }
    }
}

/// sRGB electro-optical transfer (IEC 61966-2-1).
///
/// ```text
/// V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
/// V <= 0.04045 → V / 12.92
/// ```
fn srgb_decode(encoded: f32) -> f32 {
    if encoded > 0.04045 {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// Inverse of [`srgb_decode`].
///
/// ```text
/// L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// L <= 0.0031308 → L × 12.92
/// ```
fn srgb_encode(linear: f32) -> f32 {
    if linear > 0.003_130_8 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        linear * 12.92
    }
}

fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

fn lab_f_inv(f: f32) -> f32 {
    let cube = f * f * f;
    if cube > LAB_EPSILON {
        cube
    } else {
        (f - LAB_OFFSET) / LAB_SLOPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn assert_rgb_close(actual: Rgb, expected: Rgb, tolerance: f32) {
        let diff = (actual.r - expected.r)
            .abs()
            .max((actual.g - expected.g).abs())
            .max((actual.b - expected.b).abs());
        assert!(
            diff < tolerance,
            "expected {expected:?}, got {actual:?} (max channel diff {diff})"
        );
    }

    #[test]
    fn test_srgb_transfer_known_values() {
        assert!(srgb_decode(0.0).abs() < 1e-7);
        assert!((srgb_decode(1.0) - 1.0).abs() < 1e-6);
        // Mid-gray sRGB 0.5 is ~0.214 linear
        assert!((srgb_decode(0.5) - 0.214_041).abs() < 1e-4);
        assert!((srgb_encode(0.214_041) - 0.5).abs() < 1e-4);
        // Linear toe
        assert!((srgb_decode(0.04) - 0.04 / 12.92).abs() < 1e-7);
        assert!((srgb_encode(0.002) - 0.002 * 12.92).abs() < 1e-7);
    }

    #[test]
    fn test_white_maps_to_full_lightness() {
        let lab = Rgb::new(1.0, 1.0, 1.0).to_lab();
        assert!((lab.l - 100.0).abs() < 0.01, "L = {}", lab.l);
        assert!(lab.a.abs() < 0.01, "a = {}", lab.a);
        assert!(lab.b.abs() < 0.01, "b = {}", lab.b);
    }

    #[test]
    fn test_black_maps_to_origin() {
        let lab = Rgb::BLACK.to_lab();
        assert!(lab.l.abs() < 1e-4);
        assert!(lab.a.abs() < 1e-4);
        assert!(lab.b.abs() < 1e-4);
        assert!(lab.l >= 0.0, "lightness must not go negative");
    }

    #[test]
    fn test_lab_matches_reference_implementation() {
        use ::palette::{IntoColor, Srgb};

        let samples = [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.2, 0.6, 0.9],
            [0.75, 0.5, 0.25],
            [0.5, 0.5, 0.5],
        ];
        for [r, g, b] in samples {
            let ours = Rgb::new(r, g, b).to_lab();
            let reference: ::palette::Lab = Srgb::new(r, g, b).into_color();
            // Reference white and linear-segment constants differ slightly.
            assert!((ours.l - reference.l).abs() < 0.5, "L for {r},{g},{b}");
            assert!((ours.a - reference.a).abs() < 0.5, "a for {r},{g},{b}");
            assert!((ours.b - reference.b).abs() < 0.5, "b for {r},{g},{b}");
        }
    }

    #[test]
    fn test_xyz_roundtrip_preserves_values() {
        let xyz = Xyz::new(0.3, 0.4, 0.5);
        let back = xyz.to_lab().to_xyz();
        assert!((xyz.x - back.x).abs() < 1e-5);
        assert!((xyz.y - back.y).abs() < 1e-5);
        assert!((xyz.z - back.z).abs() < 1e-5);
    }

    #[test]
    fn test_dark_colors_roundtrip_through_linear_segment() {
        // Normalized Y below 0.008856 exercises the linear branch both ways.
        for v in [0.001, 0.01, 0.02, 0.05] {
            let rgb = Rgb::new(v, v, v);
            assert_rgb_close(rgb.to_lab().to_rgb(), rgb, EPSILON);
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        let blue = Rgb::new(0.0, 0.0, 1.0);
        assert_rgb_close(Rgb::lerp(red, blue, 0.0), red, EPSILON);
        assert_rgb_close(Rgb::lerp(red, blue, 1.0), blue, EPSILON);
    }

    #[test]
    fn test_lerp_midpoint_is_lab_average() {
        let a = Rgb::new(0.9, 0.2, 0.1);
        let b = Rgb::new(0.1, 0.3, 0.8);
        let mid = Rgb::lerp(a, b, 0.5).to_lab();
        let (la, lb) = (a.to_lab(), b.to_lab());
        assert!((mid.l - (la.l + lb.l) / 2.0).abs() < 0.05);
        assert!((mid.a - (la.a + lb.a) / 2.0).abs() < 0.05);
        assert!((mid.b - (la.b + lb.b) / 2.0).abs() < 0.05);
    }

    #[test]
    fn test_rgb_array_conversion() {
        let rgb = Rgb::from([0.1, 0.2, 0.3]);
        assert_eq!(rgb, Rgb::new(0.1, 0.2, 0.3));
        assert_eq!(<[f32; 3]>::from(rgb), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_rgb_serializes_as_array() {
        let json = serde_json::to_string(&Rgb::new(1.0, 0.5, 0.0)).unwrap();
        assert_eq!(json, "[1.0,0.5,0.0]");
        let back: Rgb = serde_json::from_str("[0.25, 0.5, 0.75]").unwrap();
        assert_eq!(back, Rgb::new(0.25, 0.5, 0.75));
    }
}
