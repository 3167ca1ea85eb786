use proptest::prelude::*;

use crate::*;

proptest! {
    #[test]
    fn proptest_color_byte_roundtrip(
        r in 0.0..=1.0f32,
        g in 0.0..=1.0f32,
        b in 0.0..=1.0f32,
        a in 0.0..=1.0f32,
    ) {
        let c = Color::rgba(r, g, b, a);
        let tolerance = 1.0 / 255.0 + EPSILON;
        prop_assert!((c.ri() as Float / 255.0 - r).abs() <= tolerance);
        prop_assert!((c.gi() as Float / 255.0 - g).abs() <= tolerance);
        prop_assert!((c.bi() as Float / 255.0 - b).abs() <= tolerance);
        prop_assert!((c.ai() as Float / 255.0 - a).abs() <= tolerance);
    }

    #[test]
    fn proptest_color_bytes_clamp(v in -100.0..100.0f32) {
        let c = Color::gray_alpha(v, v);
        let expected = if v <= 0.0 { 0 } else if v >= 255.0 / 256.0 { 255 } else { c.ri() };
        prop_assert_eq!(c.ri(), expected);
        prop_assert_eq!(c.ai(), expected);
    }

    #[test]
    fn proptest_normalize_is_unit_length(
        x in -1000.0..1000.0f32,
        y in -1000.0..1000.0f32,
        z in -1000.0..1000.0f32,
    ) {
        let v = VectorF::new(x, y, z);
        prop_assume!(v.abs() > EPSILON);
        let n = v.normalize().expect("nonzero vector");
        prop_assert!((n.abs() - 1.0).abs() < EPSILON);
        prop_assert!(n.dot(v) > 0.0);
    }

    #[test]
    fn proptest_concat_is_sequential_application(
        angle in -6.0..6.0f32,
        s in 0.1..10.0f32,
        x in -10.0..10.0f32,
        y in -10.0..10.0f32,
    ) {
        let a = Matrix::rotate_z(angle);
        let b = Matrix::scale(s).concat(&Matrix::translate(VectorF::new(x, y, 1.0)));
        let p = VectorF::new(y, x, -1.0);
        let expected = b.apply(a.apply(p));
        let actual = a.concat(&b).apply(p);
        prop_assert!((expected - actual).abs() < 0.001 * (1.0 + expected.abs()));
    }
}
