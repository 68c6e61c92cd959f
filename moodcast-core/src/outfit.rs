//! Outfit recommendation for the dashboard's character illustration.

use serde::Serialize;

/// Deterministic outfit descriptor, fully determined by (temperature,
/// condition label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outfit {
    pub top: &'static str,
    pub top_color: &'static str,
    pub bottom: &'static str,
    pub bottom_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<&'static str>,
    pub label: &'static str,
}

impl Outfit {
    const fn new(
        top: &'static str,
        top_color: &'static str,
        bottom: &'static str,
        bottom_color: &'static str,
        accessory: Option<&'static str>,
        label: &'static str,
    ) -> Self {
        Self { top, top_color, bottom, bottom_color, accessory, label }
    }

    /// Pick an outfit. Precipitation wins over temperature: rain/drizzle
    /// first (raincoat below 10°, windbreaker otherwise), then snow, then
    /// temperature buckets in descending order. Label matching is
    /// case-insensitive.
    pub fn select(temp: f64, weather_label: &str) -> Self {
        let w = weather_label.to_lowercase();

        if w.contains("rain") || w.contains("drizzle") {
            if temp < 10.0 {
                return Self::new(
                    "raincoat",
                    "#4A7C8F",
                    "pants",
                    "#3D4F5F",
                    Some("umbrella"),
                    "Raincoat + Umbrella",
                );
            }
            return Self::new(
                "windbreaker",
                "#5B8FA8",
                "pants",
                "#4A6670",
                Some("umbrella"),
                "Windbreaker + Umbrella",
            );
        }

        if w.contains("snow") {
            return Self::new("padding", "#2C3E6B", "pants", "#1E2A4A", Some("scarf"), "Padding + Scarf");
        }

        if temp >= 28.0 {
            Self::new("tshirt", "#E8A87C", "shorts", "#85C1E9", None, "T-Shirt + Shorts")
        } else if temp >= 23.0 {
            Self::new("tshirt", "#82C4B5", "pants", "#5B7B8A", None, "T-Shirt + Pants")
        } else if temp >= 17.0 {
            Self::new("longsleeve", "#7BA0B5", "pants", "#5A6B7A", None, "Long Sleeve + Pants")
        } else if temp >= 12.0 {
            Self::new("hoodie", "#6A8CAF", "pants", "#4A5E72", None, "Hoodie + Pants")
        } else if temp >= 5.0 {
            Self::new("coat", "#4A5D6B", "pants", "#3A4A55", Some("scarf"), "Coat + Scarf")
        } else {
            Self::new("padding", "#2C3E6B", "pants", "#1E2A4A", Some("scarf"), "Padding + Scarf")
        }
    }
}

/// Short advisory sentence for the same temperature buckets as
/// [`Outfit::select`].
pub fn advice(temp: f64) -> &'static str {
    if temp >= 28.0 {
        "Stay cool and comfortable"
    } else if temp >= 23.0 {
        "Perfect weather for light clothes"
    } else if temp >= 17.0 {
        "A light layer will keep you cozy"
    } else if temp >= 12.0 {
        "Layer up for the cool breeze"
    } else if temp >= 5.0 {
        "Bundle up against the chill"
    } else {
        "Stay warm, it's freezing out!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hot_clear_day_gets_tshirt_and_shorts() {
        let outfit = Outfit::select(30.0, "Clear");
        assert_eq!(outfit.top, "tshirt");
        assert_eq!(outfit.bottom, "shorts");
        assert_eq!(outfit.accessory, None);
    }

    #[test]
    fn snow_gets_padding_and_scarf_regardless_of_temperature() {
        for temp in [2.0, 15.0, -5.0] {
            let outfit = Outfit::select(temp, "Snow");
            assert_eq!(outfit.top, "padding");
            assert_eq!(outfit.accessory, Some("scarf"));
        }
    }

    #[test]
    fn cold_rain_gets_raincoat_with_umbrella() {
        let outfit = Outfit::select(8.0, "Rain");
        assert_eq!(outfit.top, "raincoat");
        assert_eq!(outfit.accessory, Some("umbrella"));
    }

    #[test]
    fn mild_rain_gets_windbreaker_with_umbrella() {
        let outfit = Outfit::select(10.0, "Rain");
        assert_eq!(outfit.top, "windbreaker");
        assert_eq!(outfit.accessory, Some("umbrella"));

        let outfit = Outfit::select(18.0, "light drizzle");
        assert_eq!(outfit.top, "windbreaker");
    }

    #[test]
    fn rain_wins_over_temperature_buckets() {
        assert_eq!(Outfit::select(30.0, "Rain").top, "windbreaker");
    }

    #[test]
    fn temperature_buckets_in_descending_order() {
        assert_eq!(Outfit::select(28.0, "Clear").label, "T-Shirt + Shorts");
        assert_eq!(Outfit::select(23.0, "Clear").label, "T-Shirt + Pants");
        assert_eq!(Outfit::select(17.0, "Clear").label, "Long Sleeve + Pants");
        assert_eq!(Outfit::select(12.0, "Clear").label, "Hoodie + Pants");
        assert_eq!(Outfit::select(5.0, "Clear").label, "Coat + Scarf");
        assert_eq!(Outfit::select(4.9, "Clear").label, "Padding + Scarf");
    }

    #[test]
    fn label_matching_is_case_insensitive() {
        assert_eq!(Outfit::select(20.0, "RAIN").top, "windbreaker");
        assert_eq!(Outfit::select(20.0, "SNOW").top, "padding");
    }

    #[test]
    fn advice_follows_the_same_buckets() {
        assert_eq!(advice(30.0), "Stay cool and comfortable");
        assert_eq!(advice(25.0), "Perfect weather for light clothes");
        assert_eq!(advice(20.0), "A light layer will keep you cozy");
        assert_eq!(advice(14.0), "Layer up for the cool breeze");
        assert_eq!(advice(7.0), "Bundle up against the chill");
        assert_eq!(advice(-3.0), "Stay warm, it's freezing out!");
    }
}
