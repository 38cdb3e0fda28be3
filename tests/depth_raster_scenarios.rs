//! End-to-end depth buffer scenarios for the rect filler, triangle rasterizer
//! and through-mode draws
use depth_raster::*;

const FAR: u16 = u16::MAX;

fn count_cells(buffer: &DepthBuffer, value: u16) -> usize {
    buffer.as_slice().iter().filter(|&&d| d == value).count()
}

fn scalar_and_wide() -> [DepthRasterizer; 2] {
    [
        DepthRasterizer::with_config(RasterConfig::scalar()),
        DepthRasterizer::new(),
    ]
}

#[test]
fn always_rect_covers_half_open_range() {
    for raster in scalar_and_wide() {
        let mut buffer = DepthBuffer::new(8, 8);
        let written = raster.fill_rect(&mut buffer.target(), 2, 2, 6, 5, 100, CompareMode::Always);

        assert_eq!(written, 12);
        assert_eq!(count_cells(&buffer, 100), 12);
        assert_eq!(count_cells(&buffer, FAR), 64 - 12);
        assert_eq!(buffer.get(2, 2), Some(100));
        assert_eq!(buffer.get(5, 4), Some(100));
        assert_eq!(buffer.get(6, 4), Some(FAR));
        assert_eq!(buffer.get(5, 5), Some(FAR));
    }
}

#[test]
fn zero_depth_rect_clears_to_zero() {
    for raster in scalar_and_wide() {
        let mut buffer = DepthBuffer::new(33, 4);
        raster.fill_rect(&mut buffer.target(), 0, 0, 33, 4, 0, CompareMode::Always);
        assert_eq!(count_cells(&buffer, 0), 33 * 4);
    }
}

#[test]
fn triangle_depth_ramp_into_far_buffer() {
    // (v0, v2, v1) setup order gives this input a positive area.
    let tri = [
        ScreenVert::new(0, 0, 0),
        ScreenVert::new(0, 4, 400),
        ScreenVert::new(4, 0, 0),
    ];

    for raster in scalar_and_wide() {
        let mut buffer = DepthBuffer::new(8, 8);
        let scissor = buffer.scissor();
        raster.rasterize_triangle(&mut buffer.target(), scissor, &tri, CompareMode::Always);

        assert_eq!(buffer.get(0, 0), Some(0));
        assert_eq!(buffer.get(0, 4), Some(400));
        assert_eq!(buffer.get(1, 2), Some(200));
        // Depth only grows toward the 400 corner.
        for x in 0..4 {
            for y in 0..(4 - x) {
                let here = buffer.get(x, y).unwrap();
                let below = buffer.get(x, y + 1).unwrap();
                assert!(below >= here, "({}, {}) {} > {}", x, y, here, below);
            }
        }
        assert_eq!(buffer.get(4, 4), Some(FAR));
        assert_eq!(buffer.get(7, 0), Some(FAR));
    }
}

#[test]
fn reversed_triangle_is_culled() {
    let tri = [
        ScreenVert::new(0, 0, 0),
        ScreenVert::new(4, 0, 0),
        ScreenVert::new(0, 4, 400),
    ];
    for raster in scalar_and_wide() {
        let mut buffer = DepthBuffer::new(8, 8);
        let scissor = buffer.scissor();
        let written = raster.rasterize_triangle(&mut buffer.target(), scissor, &tri, CompareMode::Always);
        assert_eq!(written, 0);
        assert_eq!(count_cells(&buffer, FAR), 64);
    }
}

#[test]
fn two_sided_draws_both_windings() {
    let front = [
        ScreenVert::new(1, 1, 1000),
        ScreenVert::new(3, 14, 5000),
        ScreenVert::new(13, 4, 9000),
    ];
    let back = [front[0], front[2], front[1]];

    let raster = DepthRasterizer::with_config(RasterConfig {
        cull: CullMode::TwoSided,
        ..RasterConfig::default()
    });

    let mut a = DepthBuffer::new(16, 16);
    let mut b = DepthBuffer::new(16, 16);
    let scissor = a.scissor();
    let wa = raster.rasterize_triangle(&mut a.target(), scissor, &front, CompareMode::Always);
    let wb = raster.rasterize_triangle(&mut b.target(), scissor, &back, CompareMode::Always);

    assert!(wa > 0);
    assert_eq!(wa, wb);
    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn redrawing_with_always_is_idempotent() {
    let tri = [
        ScreenVert::new(2, 1, 300),
        ScreenVert::new(5, 30, 60000),
        ScreenVert::new(28, 9, 12345),
    ];
    let raster = DepthRasterizer::new();
    let mut buffer = DepthBuffer::new(32, 32);
    let scissor = buffer.scissor();

    raster.rasterize_triangle(&mut buffer.target(), scissor, &tri, CompareMode::Always);
    let once = buffer.as_slice().to_vec();
    raster.rasterize_triangle(&mut buffer.target(), scissor, &tri, CompareMode::Always);
    assert_eq!(buffer.as_slice(), &once[..]);
}

#[test]
fn less_never_increases_depth() {
    let raster = DepthRasterizer::new();
    let mut buffer = DepthBuffer::new(32, 32);
    let scissor = buffer.scissor();

    let near = [
        ScreenVert::new(0, 0, 1000),
        ScreenVert::new(0, 31, 1000),
        ScreenVert::new(31, 0, 1000),
    ];
    let far_ramp = [
        ScreenVert::new(0, 0, 0),
        ScreenVert::new(0, 31, 3000),
        ScreenVert::new(31, 0, 3000),
    ];

    raster.rasterize_triangle(&mut buffer.target(), scissor, &near, CompareMode::Always);
    let before = buffer.as_slice().to_vec();
    raster.rasterize_triangle(&mut buffer.target(), scissor, &far_ramp, CompareMode::Less);

    for (after, before) in buffer.as_slice().iter().zip(before.iter()) {
        assert!(after <= before);
    }
    // The ramp starts in front of the flat triangle at the origin.
    assert!(buffer.get(0, 0).unwrap() < 1000);
}

#[test]
fn never_rejects_rects_and_follows_policy_on_triangles() {
    let tri = [
        ScreenVert::new(0, 0, 0),
        ScreenVert::new(0, 7, 0),
        ScreenVert::new(7, 0, 0),
    ];

    let reject = DepthRasterizer::with_config(RasterConfig {
        rect_compare: RectCompare::PerPixel,
        triangle_never: TriangleNever::Reject,
        ..RasterConfig::default()
    });
    let mut buffer = DepthBuffer::new(8, 8);
    let scissor = buffer.scissor();
    assert_eq!(reject.fill_rect(&mut buffer.target(), 0, 0, 8, 8, 1, CompareMode::Never), 0);
    assert_eq!(reject.rasterize_triangle(&mut buffer.target(), scissor, &tri, CompareMode::Never), 0);
    assert_eq!(count_cells(&buffer, FAR), 64);

    // Default: NEVER on a triangle writes like ALWAYS whatever the stored depth.
    let raster = DepthRasterizer::new();
    assert_eq!(raster.triangle_never, TriangleNever::Pass);
    let mut buffer = DepthBuffer::new(8, 8);
    buffer.clear(0);
    assert_eq!(raster.fill_rect(&mut buffer.target(), 0, 0, 8, 8, 1, CompareMode::Never), 0);
    let written = raster.rasterize_triangle(&mut buffer.target(), scissor, &tri, CompareMode::Never);
    // x + y <= 7 over an 8x8 grid.
    assert_eq!(written, 36);
    assert_eq!(count_cells(&buffer, 0), 64);

    let mut ramp = DepthBuffer::new(8, 8);
    let ramp_tri = [
        ScreenVert::new(0, 0, 0),
        ScreenVert::new(0, 4, 400),
        ScreenVert::new(4, 0, 0),
    ];
    raster.rasterize_triangle(&mut ramp.target(), scissor, &ramp_tri, CompareMode::Never);
    assert_eq!(ramp.get(0, 4), Some(400));
}

#[test]
fn through_mode_rectangle_uses_raw_coordinates() {
    // Corners (1, 2) and (5, 6); depth 700 on the second vertex.
    let mut data = Vec::new();
    for v in [[1i16, 2, 9], [5, 6, 700]] {
        for c in v {
            data.extend_from_slice(&c.to_le_bytes());
        }
    }
    let layout = DecodedLayout::packed(PositionFormat::S16);
    let draw = DrawCall::new(
        PrimitiveType::Rectangles,
        2,
        VertexType::with_position(PositionFormat::S16).through(true),
    );

    let mut buffer = DepthBuffer::new(8, 8);
    let scissor = buffer.scissor();
    let mut scratch = DrawScratch::with_capacity(16);
    let outcome = rasterize_primitive(
        &mut buffer.target(),
        scissor,
        &mut scratch,
        &data,
        &draw,
        &layout,
        &GpuState::default(),
    )
    .unwrap();

    assert_eq!(outcome.pixels_written(), 16);
    assert_eq!(buffer.get(1, 2), Some(700));
    assert_eq!(buffer.get(4, 5), Some(700));
    assert_eq!(buffer.get(5, 5), Some(FAR));
    assert_eq!(buffer.get(0, 2), Some(FAR));
    assert_eq!(count_cells(&buffer, 700), 16);
}

#[test]
fn caller_slice_with_wider_stride() {
    // 6x3 visible area inside rows of 10.
    let mut data = vec![FAR; 10 * 2 + 6];
    let mut target = DepthTarget::new(&mut data, 10, 6, 3).unwrap();
    let written = fill_rect(&mut target, 0, 0, 100, 100, 5, CompareMode::Always);

    assert_eq!(written, 18);
    assert_eq!(data[0..6], [5; 6]);
    assert_eq!(data[6..10], [FAR; 4]);
    assert_eq!(data[20..26], [5; 6]);
}
