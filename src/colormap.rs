use egui::Color32;

/// Value range used for color scaling
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    pub vmin: f64,
    pub vmax: f64,
}

impl ColorScale {
    /// Compute the scale over a set of values.
    ///
    /// With `robust` the scale spans the 2nd-98th percentile so a handful
    /// of outliers cannot wash out the rest of the field; otherwise it
    /// spans the full finite value range.
    pub fn from_values<I>(values: I, robust: bool) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut finite: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Self {
                vmin: 0.0,
                vmax: 1.0,
            };
        }
        finite.sort_by(|a, b| a.total_cmp(b));
        let (vmin, vmax) = if robust {
            (percentile(&finite, 0.02), percentile(&finite, 0.98))
        } else {
            (finite[0], finite[finite.len() - 1])
        };
        if vmin == vmax {
            // Flat field; widen so normalization stays defined
            Self {
                vmin: vmin - 0.5,
                vmax: vmax + 0.5,
            }
        } else {
            Self { vmin, vmax }
        }
    }

    fn normalize(&self, value: f64) -> f64 {
        ((value - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0)
    }
}

fn percentile(sorted: &[f64], q: f64) -> f64 {
    let idx = (q * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx]
}

/// Diverging blue-white-red colormap, blue for low values
pub fn diverging(value: f64, scale: &ColorScale) -> Color32 {
    if !value.is_finite() {
        return Color32::from_gray(80);
    }
    let t = scale.normalize(value);
    if t < 0.5 {
        // blue -> white
        let s = t * 2.0;
        channel_mix(0.0, 0.0, 180.0, s)
    } else {
        // white -> red
        let s = (1.0 - t) * 2.0;
        channel_mix(180.0, 0.0, 0.0, s)
    }
}

fn channel_mix(r: f64, g: f64, b: f64, toward_white: f64) -> Color32 {
    let mix = |c: f64| (c + (255.0 - c) * toward_white).round() as u8;
    Color32::from_rgb(mix(r), mix(g), mix(b))
}
