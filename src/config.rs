// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Configuration of a looping shape.
//!
//! A `Configuration` is an immutable value handed to the generation functions.
//! It loads from TOML with camel-case keys:
//!
//! ```toml
//! seed = "hello"
//! numPts = 5
//! order = "cubic"     # or 1, 2, 3
//! duration = 10.0
//!
//! [presentation]
//! color = "yellow"
//! dash = [3, 1]
//! ```
//!
//! Everything except `seed`, `duration` and `presentation` only takes effect
//! after a regeneration, see `Configuration::requires_regeneration`.

use crate::{
    error::{LoopError, LoopResult},
    render::style::Color,
    util::seed_hash,
};
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, str::FromStr};

/// How many control points accompany each anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "OrderRepr", into = "String")]
pub enum CurveOrder {
    #[default]
    Linear,
    Quadratic,
    Cubic,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrderRepr {
    Degree(u8),
    Name(String),
}

impl TryFrom<OrderRepr> for CurveOrder {
    type Error = String;

    fn try_from(r: OrderRepr) -> Result<Self, Self::Error> {
        match r {
            OrderRepr::Degree(d) => CurveOrder::from_degree(d),
            OrderRepr::Name(s) => s.parse(),
        }
    }
}

impl From<CurveOrder> for String {
    fn from(o: CurveOrder) -> String {
        o.to_string()
    }
}

impl CurveOrder {
    pub fn from_degree(d: u8) -> Result<Self, String> {
        match d {
            1 => Ok(CurveOrder::Linear),
            2 => Ok(CurveOrder::Quadratic),
            3 => Ok(CurveOrder::Cubic),
            _ => Err(format!("curve order must be 1, 2 or 3, got {}", d)),
        }
    }

    pub fn degree(self) -> u8 {
        self as u8 + 1
    }

    pub fn control_points(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        match self {
            CurveOrder::Linear => CurveOrder::Quadratic,
            CurveOrder::Quadratic => CurveOrder::Cubic,
            CurveOrder::Cubic => CurveOrder::Linear,
        }
    }
}

impl fmt::Display for CurveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CurveOrder::Linear => "linear",
            CurveOrder::Quadratic => "quadratic",
            CurveOrder::Cubic => "cubic",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CurveOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "1" => Ok(CurveOrder::Linear),
            "quadratic" | "2" => Ok(CurveOrder::Quadratic),
            "cubic" | "3" => Ok(CurveOrder::Cubic),
            other => Err(format!("unknown curve order: {}", other)),
        }
    }
}

/// Shape of the closed path every tracked point travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionStyle {
    /// one bezier leaving the point and coming back to it
    #[default]
    RoundTrip,
    /// out to a nearby point and back, tangent-continuous at the turn
    TwoLeg,
}

impl MotionStyle {
    pub fn toggle(self) -> Self {
        match self {
            MotionStyle::RoundTrip => MotionStyle::TwoLeg,
            MotionStyle::TwoLeg => MotionStyle::RoundTrip,
        }
    }
}

impl fmt::Display for MotionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionStyle::RoundTrip => write!(f, "round_trip"),
            MotionStyle::TwoLeg => write!(f, "two_leg"),
        }
    }
}

impl FromStr for MotionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "round_trip" | "single" => Ok(MotionStyle::RoundTrip),
            "two_leg" | "double" => Ok(MotionStyle::TwoLeg),
            other => Err(format!("unknown motion style: {}", other)),
        }
    }
}

/// Numeric seeds are used as is, text seeds go through a stable hash.
/// Negative numbers (TOML integers are signed) keep their two's complement bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Num(u64),
    Signed(i64),
    Text(String),
}

impl Seed {
    pub fn value(&self) -> u64 {
        match self {
            Seed::Num(n) => *n,
            Seed::Signed(n) => *n as u64,
            Seed::Text(s) => s
                .parse::<u64>()
                .or_else(|_| s.parse::<i64>().map(|n| n as u64))
                .unwrap_or_else(|_| seed_hash(s)),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Text("pixel".to_string())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Num(n) => write!(f, "{}", n),
            Seed::Signed(n) => write!(f, "{}", n),
            Seed::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Seed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Seed::Num(n));
        }
        Ok(match s.parse::<i64>() {
            Ok(n) => Seed::Signed(n),
            Err(_) => Seed::Text(s.to_string()),
        })
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed::Num(n)
    }
}

/// Stroke settings, applied on the next tick without regeneration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Presentation {
    pub color: Color,
    /// fixed stroke symbol, directional line symbols when unset
    pub symbol: Option<char>,
    /// on/off run lengths in cells, solid when empty
    pub dash: Vec<u16>,
    /// mark anchors with 'o' and control points with '+'
    pub show_points: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            color: Color::Cyan,
            symbol: None,
            dash: vec![],
            show_points: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    pub seed: Seed,
    /// seconds per loop
    pub duration: f64,
    pub num_pts: usize,
    /// fraction of the canvas the initial points are spread over
    pub size: f64,
    pub min_curvature: f64,
    pub max_curvature: f64,
    pub order: CurveOrder,
    pub smooth: bool,
    /// bound of the motion-curve control offsets, fraction of max extent
    pub speed: f64,
    /// frames per loop
    pub resolution: usize,
    pub motion: MotionStyle,
    pub width: f64,
    pub height: f64,
    pub presentation: Presentation,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            seed: Seed::default(),
            duration: 10.0,
            num_pts: 10,
            size: 0.5,
            min_curvature: 0.05,
            max_curvature: 0.2,
            order: CurveOrder::Linear,
            smooth: false,
            speed: 0.05,
            resolution: 100,
            motion: MotionStyle::RoundTrip,
            width: 1000.0,
            height: 1000.0,
            presentation: Presentation::default(),
        }
    }
}

impl Configuration {
    pub fn from_toml_str(s: &str) -> LoopResult<Self> {
        let cfg: Configuration = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> LoopResult<Self> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn max_extent(&self) -> f64 {
        self.width.max(self.height)
    }

    /// loop length in milliseconds
    pub fn duration_ms(&self) -> f64 {
        self.duration * 1000.0
    }

    /// Resolution the engine actually uses, never zero
    pub fn frames(&self) -> usize {
        self.resolution.max(1)
    }

    pub fn validate(&self) -> LoopResult<()> {
        let finite = [
            self.duration,
            self.size,
            self.min_curvature,
            self.max_curvature,
            self.speed,
            self.width,
            self.height,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(LoopError::InvalidConfig("non-finite value".to_string()));
        }
        if self.resolution == 0 {
            return Err(LoopError::InvalidConfig("resolution must be positive".to_string()));
        }
        if self.duration <= 0.0 {
            return Err(LoopError::InvalidConfig("duration must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.size) {
            return Err(LoopError::InvalidConfig(format!(
                "size must be within [0, 1], got {}",
                self.size
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LoopError::InvalidConfig("canvas must not be empty".to_string()));
        }
        if self.speed < 0.0 {
            return Err(LoopError::InvalidConfig("speed must not be negative".to_string()));
        }
        Ok(())
    }

    /// True when moving from `self` to `other` invalidates the frame table.
    /// Timing and presentation changes apply to the running animation.
    pub fn requires_regeneration(&self, other: &Configuration) -> bool {
        self.seed != other.seed
            || self.num_pts != other.num_pts
            || self.size != other.size
            || self.min_curvature != other.min_curvature
            || self.max_curvature != other.max_curvature
            || self.order != other.order
            || self.smooth != other.smooth
            || self.speed != other.speed
            || self.resolution != other.resolution
            || self.motion != other.motion
            || self.width != other.width
            || self.height != other.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let cfg = Configuration::from_toml_str(
            r#"
            seed = "hello"
            numPts = 5
            order = "cubic"
            minCurvature = 0.3
            maxCurvature = 0.1
            smooth = true
            motion = "two_leg"

            [presentation]
            color = "yellow"
            dash = [3, 1]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.seed, Seed::Text("hello".to_string()));
        assert_eq!(cfg.num_pts, 5);
        assert_eq!(cfg.order, CurveOrder::Cubic);
        assert!(cfg.smooth);
        assert_eq!(cfg.motion, MotionStyle::TwoLeg);
        assert_eq!(cfg.presentation.color, Color::Yellow);
        assert_eq!(cfg.presentation.dash, vec![3, 1]);
        // untouched fields keep their defaults
        assert_eq!(cfg.resolution, 100);
        assert_eq!(cfg.duration, 10.0);
    }

    #[test]
    fn test_numeric_order_and_seed() {
        let cfg = Configuration::from_toml_str("seed = 42\norder = 2\n").unwrap();
        assert_eq!(cfg.seed, Seed::Num(42));
        assert_eq!(cfg.seed.value(), 42);
        assert_eq!(cfg.order, CurveOrder::Quadratic);
        assert!(Configuration::from_toml_str("order = 4\n").is_err());
    }

    #[test]
    fn test_seed_values() {
        assert_eq!(Seed::from("7").value(), 7);
        assert_eq!(Seed::from("hello").value(), seed_hash("hello"));
        assert_eq!("123".parse::<Seed>().unwrap(), Seed::Num(123));
        assert_eq!("abc".parse::<Seed>().unwrap(), Seed::Text("abc".to_string()));
        assert_eq!("-3".parse::<Seed>().unwrap(), Seed::Signed(-3));
        assert_eq!(Seed::from("-3").value(), Seed::Signed(-3).value());
    }

    #[test]
    fn test_negative_seed_from_toml() {
        let cfg = Configuration::from_toml_str("seed = -3\n").unwrap();
        assert_eq!(cfg.seed, Seed::Signed(-3));
        assert_eq!(cfg.seed.value(), u64::MAX - 2);
        assert_eq!(cfg.seed.to_string(), "-3");
    }

    #[test]
    fn test_validate() {
        assert!(Configuration::from_toml_str("resolution = 0\n").is_err());
        assert!(Configuration::from_toml_str("duration = -1.0\n").is_err());
        assert!(Configuration::from_toml_str("size = 1.5\n").is_err());
        assert!(Configuration::from_toml_str("bad toml =").is_err());
        assert!(Configuration::default().validate().is_ok());
    }

    #[test]
    fn test_requires_regeneration() {
        let a = Configuration::default();
        let mut b = a.clone();
        b.duration = 3.0;
        b.presentation.color = Color::Red;
        assert!(!a.requires_regeneration(&b));
        b.smooth = true;
        assert!(a.requires_regeneration(&b));
    }

    #[test]
    fn test_order_roundtrip_names() {
        for o in [CurveOrder::Linear, CurveOrder::Quadratic, CurveOrder::Cubic] {
            assert_eq!(o.to_string().parse::<CurveOrder>().unwrap(), o);
            assert_eq!(CurveOrder::from_degree(o.degree()).unwrap(), o);
        }
        assert_eq!(CurveOrder::Cubic.control_points(), 2);
        assert_eq!(CurveOrder::Cubic.next(), CurveOrder::Linear);
    }
}
