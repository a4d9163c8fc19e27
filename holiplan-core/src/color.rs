//! Distinct color assignment for active calendars.
//!
//! Candidates are spread around the hue circle with the golden angle, with a
//! little saturation/lightness jitter, and then picked greedily so that each new
//! color is as far as possible from those already chosen. Everything is a pure
//! function of the sorted id set and the theme.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HoliplanError;

/// Golden angle in degrees.
const GOLDEN_ANGLE: f64 = 137.508;

/// Never generate fewer candidates than this.
const MIN_CANDIDATES: usize = 24;

/// Below this minimum pairwise distance colors start to look alike.
pub const DEFAULT_DISTINCT_THRESHOLD: f64 = 0.25;

pub const LIGHT_TEXT: &str = "#ffffff";
pub const DARK_TEXT: &str = "#111111";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn params(self) -> &'static ThemeColorParams {
        match self {
            Theme::Light => &LIGHT_PARAMS,
            Theme::Dark => &DARK_PARAMS,
        }
    }
}

impl FromStr for Theme {
    type Err = HoliplanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(HoliplanError::InvalidTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

struct ThemeColorParams {
    saturation: f64,
    lightness: f64,
    saturation_variance: f64,
    lightness_variance: f64,
    min_lightness: f64,
    max_lightness: f64,
}

// Darker colors read better on a white background.
const LIGHT_PARAMS: ThemeColorParams = ThemeColorParams {
    saturation: 70.0,
    lightness: 45.0,
    saturation_variance: 15.0,
    lightness_variance: 8.0,
    min_lightness: 35.0,
    max_lightness: 55.0,
};

const DARK_PARAMS: ThemeColorParams = ThemeColorParams {
    saturation: 65.0,
    lightness: 58.0,
    saturation_variance: 10.0,
    lightness_variance: 6.0,
    min_lightness: 50.0,
    max_lightness: 68.0,
};

/// A color in HSL space: hue in degrees [0, 360), saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Hsl { h, s, l }
    }

    /// Perceptual distance. Hue dominates (weight 2), all components normalized to [0, 1].
    pub fn distance(&self, other: &Hsl) -> f64 {
        let raw = (self.h - other.h).abs();
        let hue = raw.min(360.0 - raw) / 180.0;
        let sat = (self.s - other.s).abs() / 100.0;
        let light = (self.l - other.l).abs() / 100.0;
        (hue * hue * 2.0 + sat * sat + light * light).sqrt()
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match self.h {
            h if (0.0..60.0).contains(&h) => (c, x, 0.0),
            h if (60.0..120.0).contains(&h) => (x, c, 0.0),
            h if (120.0..180.0).contains(&h) => (0.0, c, x),
            h if (180.0..240.0).contains(&h) => (0.0, x, c),
            h if (240.0..300.0).contains(&h) => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
    }

    /// Parse `#rrggbb` (leading `#` optional). Components are rounded to whole units.
    pub fn from_hex(hex: &str) -> Option<Hsl> {
        let [r, g, b] = parse_rgb(hex)?.map(|c| c as f64 / 255.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };
            (h, s)
        };

        Some(Hsl::new(
            (h * 360.0).round(),
            (s * 100.0).round(),
            (l * 100.0).round(),
        ))
    }
}

/// `#rrggbb` (leading `#` optional) as RGB channels.
pub fn parse_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// WCAG 2.0 relative luminance.
fn relative_luminance([r, g, b]: [u8; 3]) -> f64 {
    let linear = |c: u8| {
        let srgb = c as f64 / 255.0;
        if srgb <= 0.03928 {
            srgb / 12.92
        } else {
            ((srgb + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// WCAG 2.0 contrast ratio between two luminances.
pub fn contrast_ratio(lum1: f64, lum2: f64) -> f64 {
    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Text color with the better contrast on `bg_hex`: white or near-black. Ties go to white.
///
/// An unparseable background is treated as mid-gray.
pub fn contrast_text_color(bg_hex: &str) -> &'static str {
    let bg = relative_luminance(parse_rgb(bg_hex).unwrap_or([128, 128, 128]));
    let with_white = contrast_ratio(bg, relative_luminance([255, 255, 255]));
    let with_dark = contrast_ratio(bg, relative_luminance([17, 17, 17]));

    if with_white >= with_dark {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

/// Clamp a color's lightness/saturation so it stays legible on the theme background.
///
/// Light: L <= 55, S >= 50. Dark: L >= 50, S >= 45. Hue is kept.
pub fn ensure_theme_safe_color(hex: &str, theme: Theme) -> String {
    let hsl = Hsl::from_hex(hex).unwrap_or(Hsl::new(0.0, 70.0, 50.0));

    let adjusted = match theme {
        Theme::Light => Hsl::new(hsl.h, hsl.s.max(50.0), hsl.l.min(55.0)),
        Theme::Dark => Hsl::new(hsl.h, hsl.s.max(45.0), hsl.l.max(50.0)),
    };
    adjusted.to_hex()
}

fn generate_candidates(count: usize, theme: Theme) -> Vec<Hsl> {
    let params = theme.params();
    let start_hue = ((count * 31) % 360) as f64;

    (0..count)
        .map(|i| {
            let hue = (start_hue + i as f64 * GOLDEN_ANGLE) % 360.0;

            let sat_step = (i % 3) as f64 - 1.0;
            let light_step = (i % 5) as f64 - 2.0;

            let saturation = (params.saturation + sat_step * params.saturation_variance).clamp(40.0, 90.0);
            let lightness = (params.lightness + light_step * params.lightness_variance * 0.5)
                .clamp(params.min_lightness, params.max_lightness);

            Hsl::new(hue, saturation, lightness)
        })
        .collect()
}

/// Greedy farthest-point selection, seeded with the first candidate.
fn select_distinct(candidates: &[Hsl], count: usize) -> Vec<Hsl> {
    if count == 0 {
        return Vec::new();
    }
    if count >= candidates.len() {
        return candidates.to_vec();
    }

    let mut selected = vec![candidates[0]];
    let mut remaining: Vec<Hsl> = candidates[1..].to_vec();

    while selected.len() < count && !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_min_dist = f64::NEG_INFINITY;

        for (i, candidate) in remaining.iter().enumerate() {
            let min_dist = selected
                .iter()
                .map(|s| candidate.distance(s))
                .fold(f64::INFINITY, f64::min);
            // Strict comparison keeps the earliest candidate on ties.
            if min_dist > best_min_dist {
                best_min_dist = min_dist;
                best_idx = i;
            }
        }

        selected.push(remaining.remove(best_idx));
    }

    selected
}

/// Assign a distinct hex color to every id.
///
/// Ids are sorted first, so the result does not depend on input order.
pub fn assign_colors<I, S>(ids: I, theme: Theme) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = ids.into_iter().map(|id| id.as_ref().to_string()).collect();
    sorted.sort();
    sorted.dedup();

    if sorted.is_empty() {
        return BTreeMap::new();
    }

    let candidate_count = (sorted.len() * 3).max(MIN_CANDIDATES);
    let candidates = generate_candidates(candidate_count, theme);
    let selected = select_distinct(&candidates, sorted.len());

    sorted
        .into_iter()
        .zip(selected)
        .map(|(id, hsl)| (id, hsl.to_hex()))
        .collect()
}

/// Smallest pairwise distance among `colors`; infinite for fewer than two.
///
/// Unparseable colors are skipped.
pub fn minimum_distance<S: AsRef<str>>(colors: &[S]) -> f64 {
    let hsl: Vec<Hsl> = colors
        .iter()
        .filter_map(|c| Hsl::from_hex(c.as_ref()))
        .collect();

    let mut min_dist = f64::INFINITY;
    for (i, a) in hsl.iter().enumerate() {
        for b in &hsl[i + 1..] {
            min_dist = min_dist.min(a.distance(b));
        }
    }
    min_dist
}

pub fn are_colors_distinct<S: AsRef<str>>(colors: &[S], threshold: f64) -> bool {
    minimum_distance(colors) >= threshold
}
