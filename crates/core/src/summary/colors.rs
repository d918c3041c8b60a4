//! Color mapping for net income figures.

use serde::{Deserialize, Serialize};

use crate::constants::{NET_NEGATIVE_COLOR, NET_POSITIVE_COLOR, NET_ZERO_COLOR};
use crate::utils::round_to_cents;

/// Whether a month finished in the black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetIndicator {
    Positive,
    Negative,
}

impl NetIndicator {
    /// Judged on the net as displayed, so sub-cent negatives count as even.
    pub fn for_net(net: f64) -> Self {
        if round_to_cents(net) >= 0.0 {
            NetIndicator::Positive
        } else {
            NetIndicator::Negative
        }
    }
}

/// Hex color for `net`, scaled against the extremes across all months.
///
/// Zero maps to `zero_color`. Positive values move toward emerald in
/// proportion to `net / max_net`, negative values toward rose in proportion
/// to `net / min_net`. An unparseable `zero_color` falls back to the default gray.
pub fn net_amount_gradient_color(net: f64, min_net: f64, max_net: f64, zero_color: &str) -> String {
    let zero = parse_hex(zero_color)
        .or_else(|| parse_hex(NET_ZERO_COLOR))
        .unwrap_or((0xD5, 0xD5, 0xD5));
    if !net.is_finite() || net == 0.0 {
        return to_hex(zero);
    }

    let (target, scale) = if net > 0.0 {
        (NET_POSITIVE_COLOR, max_net)
    } else {
        (NET_NEGATIVE_COLOR, min_net)
    };
    let ratio = if scale.is_finite() && scale != 0.0 && scale.signum() == net.signum() {
        (net / scale).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let target = parse_hex(target).unwrap_or(zero);
    to_hex(mix(zero, target, ratio))
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

fn mix(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    (lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}
