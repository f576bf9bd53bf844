use hwmon_core::Bitmap;
use hwmon_system::MetricSeries;
use hwmon_theme::{Color, GraphStyle};

/// Rasterize `series` into a `size × size` bar chart.
///
/// Column `x` shows `values[x]`, so the rightmost column is the newest
/// sample. Bars taller than the icon are clipped at the top edge.
pub fn render(series: &MetricSeries, style: &GraphStyle, size: u32) -> Bitmap {
    let mut bmp = Bitmap::filled(size, size, style.background.to_rgba8());
    let bar = composite(style.foreground, style.background).to_rgba8();

    for (x, value) in series.values().enumerate().take(size as usize) {
        let height = bar_height(value, series.scale(), size);
        for y in (size - height)..size {
            bmp.set_pixel(x as u32, y, bar);
        }
    }
    bmp
}

/// Height in pixels of the bar for `value`, clipped to `[0, size]`.
pub fn bar_height(value: f64, scale: f64, size: u32) -> u32 {
    if scale.is_nan() || scale <= 0.0 || !value.is_finite() {
        return 0;
    }
    let h = (value / scale * f64::from(size)).round();
    h.clamp(0.0, f64::from(size)) as u32
}

/// Source-over `fg` onto `bg`, both non-premultiplied.
fn composite(fg: Color, bg: Color) -> Color {
    let a = fg.a + bg.a * (1.0 - fg.a);
    if a <= 0.0 {
        return Color::TRANSPARENT;
    }
    let mix = |f: f32, b: f32| (f * fg.a + b * bg.a * (1.0 - fg.a)) / a;
    Color {
        r: mix(fg.r, bg.r),
        g: mix(fg.g, bg.g),
        b: mix(fg.b, bg.b),
        a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: u32 = 22;

    fn style() -> GraphStyle {
        GraphStyle {
            background: Color::from_hex("#00000077").unwrap(),
            foreground: Color::from_hex("#3f3").unwrap(),
        }
    }

    fn column_height(bmp: &Bitmap, x: u32, fg: [u8; 4]) -> u32 {
        (0..bmp.height()).filter(|&y| bmp.pixel(x, y) == Some(fg)).count() as u32
    }

    #[test]
    fn all_zero_series_is_plain_background() {
        let series = MetricSeries::new(SIZE as usize, 100.0);
        let bmp = render(&series, &style(), SIZE);

        let expected = Bitmap::filled(SIZE, SIZE, [0, 0, 0, 0x77]);
        assert_eq!(bmp, expected);
    }

    #[test]
    fn full_scale_newest_sample_fills_rightmost_column() {
        let mut series = MetricSeries::new(SIZE as usize, 100.0);
        series.push(100.0);
        let bmp = render(&series, &style(), SIZE);
        let fg = [0x33, 0xff, 0x33, 0xff];

        assert_eq!(column_height(&bmp, SIZE - 1, fg), SIZE);
        for x in 0..SIZE - 1 {
            assert_eq!(column_height(&bmp, x, fg), 0, "column {x} should be empty");
        }
    }

    #[test]
    fn bars_grow_from_the_bottom() {
        let mut series = MetricSeries::new(4, 40.0);
        series.push(10.0);
        let bmp = render(&series, &style(), 4);
        let fg = [0x33, 0xff, 0x33, 0xff];

        // 10 / 40 * 4 = 1 pixel, on the bottom row only.
        assert_eq!(bmp.pixel(3, 3), Some(fg));
        assert_eq!(bmp.pixel(3, 2), Some([0, 0, 0, 0x77]));
    }

    #[test]
    fn oldest_sample_is_leftmost() {
        let mut series = MetricSeries::new(3, 3.0);
        for v in [3.0, 2.0, 1.0] {
            series.push(v);
        }
        let bmp = render(&series, &style(), 3);
        let fg = [0x33, 0xff, 0x33, 0xff];
        let heights: Vec<u32> = (0..3).map(|x| column_height(&bmp, x, fg)).collect();
        assert_eq!(heights, vec![3, 2, 1]);
    }

    #[test]
    fn overflow_is_clipped_at_top() {
        assert_eq!(bar_height(250.0, 100.0, SIZE), SIZE);
        assert_eq!(bar_height(-5.0, 100.0, SIZE), 0);
        assert_eq!(bar_height(f64::NAN, 100.0, SIZE), 0);
        assert_eq!(bar_height(1.0, 0.0, SIZE), 0);
    }

    #[test]
    fn network_scenario_bar_height() {
        // 10 Mb/s on a 40 Mb/s scale in a 22 px icon: round(5.5) = 6.
        assert_eq!(bar_height(10.0, 40.0, SIZE), 6);
    }

    #[test]
    fn translucent_foreground_blends_over_background() {
        let style = GraphStyle {
            background: Color::from_hex("#000000ff").unwrap(),
            foreground: Color::from_hex("#ffffff80").unwrap(),
        };
        let mut series = MetricSeries::new(1, 1.0);
        series.push(1.0);
        let bmp = render(&series, &style, 1);
        let [r, g, b, a] = bmp.pixel(0, 0).unwrap();
        assert_eq!(a, 255);
        assert!(r == g && g == b && (127..=129).contains(&r));
    }
}
