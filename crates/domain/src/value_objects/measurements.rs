//! Height and weight conversions from API units to imperial display units.

use std::fmt;

use serde::{Deserialize, Serialize};

const INCHES_PER_DECIMETRE: f64 = 3.937;
const POUNDS_PER_HECTOGRAM: f64 = 0.2205;

/// Height as reported by the API, in decimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height(u32);

/// Feet and inches, rendered as `5' 7"`.
///
/// `inches` is the rounded remainder, so it can reach 12 (e.g. 6 dm is
/// `1' 12"`); the display keeps that quirk rather than carrying into feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImperialHeight {
    pub feet: u32,
    pub inches: u32,
}

impl Height {
    pub fn from_decimetres(decimetres: u32) -> Self {
        Self(decimetres)
    }

    pub fn to_imperial(&self) -> ImperialHeight {
        let inches = f64::from(self.0) * INCHES_PER_DECIMETRE;
        ImperialHeight {
            feet: (inches / 12.0).floor() as u32,
            inches: (inches % 12.0).round() as u32,
        }
    }
}

impl fmt::Display for ImperialHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}' {}\"", self.feet, self.inches)
    }
}

/// Weight as reported by the API, in hectograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight(u32);

impl Weight {
    pub fn from_hectograms(hectograms: u32) -> Self {
        Self(hectograms)
    }

    pub fn pounds(&self) -> f64 {
        f64::from(self.0) * POUNDS_PER_HECTOGRAM
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} lbs", self.pounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_decimetres() {
        // 27.559 in: 2 ft, remainder 3.559 rounds up to 4
        let height = Height::from_decimetres(7).to_imperial();
        assert_eq!(height, ImperialHeight { feet: 2, inches: 4 });
        assert_eq!(height.to_string(), "2' 4\"");
    }

    #[test]
    fn test_tall_creature() {
        assert_eq!(Height::from_decimetres(17).to_imperial().to_string(), "5' 7\"");
    }

    #[test]
    fn test_under_a_foot() {
        assert_eq!(Height::from_decimetres(1).to_imperial().to_string(), "0' 4\"");
    }

    #[test]
    fn test_remainder_can_round_to_twelve() {
        // 23.622 in: floor gives 1 ft, remainder 11.622 rounds to 12
        assert_eq!(Height::from_decimetres(6).to_imperial().to_string(), "1' 12\"");
    }

    #[test]
    fn test_weight_one_decimal() {
        assert_eq!(Weight::from_hectograms(69).to_string(), "15.2 lbs");
        assert_eq!(Weight::from_hectograms(905).to_string(), "199.6 lbs");
        assert_eq!(Weight::from_hectograms(0).to_string(), "0.0 lbs");
    }
}
