//! Property-based tests for frame generation.
//! Verifies invariants hold across dimensions and formats, not just fixed examples.

use proptest::prelude::*;
use testcard::{
    encode, ChromaSiting, Circle, ColorEntry, ColorTable, Generator, PixelFormat, Rect, Region,
    Scene, Shape,
};


fn any_format() -> impl Strategy<Value = PixelFormat> {
    prop::sample::select(PixelFormat::ALL.to_vec())
}

fn any_siting() -> impl Strategy<Value = ChromaSiting> {
    prop_oneof![
        Just(ChromaSiting::Reference),
        Just(ChromaSiting::Average),
        Just(ChromaSiting::Leading),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Frame length always matches the layout formula.
    #[test]
    fn frame_length_matches_formula(w in 1u32..=600, h in 1u32..=300, format in any_format()) {
        let frame = encode(w, h, format).unwrap();
        let (w, h) = (w as usize, h as usize);
        let expected = match format {
            PixelFormat::Rgb24 => 3 * w * h,
            PixelFormat::Yuyv | PixelFormat::Uyvy | PixelFormat::Yvyu => 2 * w * h,
            PixelFormat::I420 => w * h + 2 * (w.div_ceil(2) * h.div_ceil(2)),
        };
        prop_assert_eq!(frame.len(), expected);
    }

    /// Two calls with the same arguments give identical bytes.
    #[test]
    fn generation_is_idempotent(
        w in 1u32..=520,
        h in 1u32..=260,
        format in any_format(),
        siting in any_siting(),
    ) {
        let generator = Generator::new().with_chroma_siting(siting);
        let a = generator.generate(w, h, format).unwrap();
        let b = generator.generate(w, h, format).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Chroma siting never changes luma or frame size.
    #[test]
    fn siting_only_affects_chroma(w in 1u32..=520, h in 1u32..=260) {
        let reference = Generator::new().generate(w, h, PixelFormat::I420).unwrap();
        let average = Generator::new()
            .with_chroma_siting(ChromaSiting::Average)
            .generate(w, h, PixelFormat::I420)
            .unwrap();
        let luma = (w * h) as usize;
        prop_assert_eq!(reference.len(), average.len());
        prop_assert_eq!(&reference[..luma], &average[..luma]);
    }

    /// With leading siting both luma samples of a macropixel are always equal.
    #[test]
    fn leading_macropixels_are_uniform(half_w in 1u32..=260, h in 1u32..=260) {
        let frame = Generator::new()
            .with_chroma_siting(ChromaSiting::Leading)
            .generate(half_w * 2, h, PixelFormat::Yuyv)
            .unwrap();
        for macropixel in frame.chunks_exact(4) {
            prop_assert_eq!(macropixel[0], macropixel[2]);
        }
    }

    /// Wherever a rectangle and a circle overlap, the shape drawn later wins.
    #[test]
    fn later_shape_wins_on_overlap(
        x0 in 0usize..40,
        y0 in 0usize..40,
        cx in 10usize..50,
        cy in 10usize..50,
        r in 1usize..10,
        format in any_format(),
    ) {
        let rect = Shape::Rectangle(Rect::new(x0, y0, x0 + 20, y0 + 20));
        let circle = Shape::Circle(Circle::new(cx, cy, r));
        let rect_then_circle = Generator::new().with_scene(Scene::new(vec![rect, circle]));
        let circle_then_rect = Generator::new().with_scene(Scene::new(vec![circle, rect]));

        let frame_a = rect_then_circle.generate(64, 64, format).unwrap();
        let frame_b = circle_then_rect.generate(64, 64, format).unwrap();

        // Compare luma only; chroma is shared between neighbours.
        for y in 0..64 {
            for x in 0..64 {
                if !(rect.contains(x, y) && circle.contains(x, y)) {
                    continue;
                }
                let a = decoders::luma_at(&frame_a, format, 64, 64, x, y);
                let b = decoders::luma_at(&frame_b, format, 64, 64, x, y);
                prop_assert_eq!(a, luma_of(format, Region::Circle));
                prop_assert_eq!(b, luma_of(format, Region::Rectangle));
            }
        }
    }
}

fn luma_of(format: PixelFormat, region: Region) -> ColorEntry {
    match ColorTable::entry(format, region) {
        ColorEntry::Yuv(yuv) => ColorEntry::Yuv(testcard::Yuv::new(yuv.y, 0, 0)),
        rgb => rgb,
    }
}
