//! Search-query selection for the weather-matched playlist.

/// Map a canonical condition name and temperature to a video search query.
///
/// Dispatch is exact-match on the vendor's primary condition name (unlike the
/// substring rules in [`crate::classify`]); anything unrecognized gets the
/// generic chill query.
pub fn search_query(condition: &str, temp: f64) -> &'static str {
    match condition {
        "Rain" | "Drizzle" => "rainy day playlist lofi chill",
        "Snow" => "snowy day cozy winter playlist",
        "Thunderstorm" => "thunderstorm ambient music playlist",
        "Clear" if temp > 25.0 => "sunny summer vibes playlist",
        "Clear" => "sunny day happy playlist music",
        "Clouds" | "Mist" | "Fog" | "Haze" => "cloudy day chill playlist music",
        _ => "chill relax playlist music",
    }
}
