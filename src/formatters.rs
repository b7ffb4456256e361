use crate::cities::City;
use crate::models::{Coordinates, ForecastTable};

/// Formats the precipitation table into a human-readable report
pub fn format_rain_summary(
    city: &str,
    coordinates: Coordinates,
    timezone: &str,
    table: &ForecastTable,
) -> String {
    let mut output = format!(
        "Precipitation Forecast (Open-Meteo)\nCity: {}\nLocation: {:.4}, {:.4}\nTimezone: {}\n\n",
        city, coordinates.latitude, coordinates.longitude, timezone
    );

    for row in table.rows() {
        output.push_str(&format!(
            "{}: {:.2} mm ({})\n",
            row.date.format("%Y-%m-%d"),
            row.precipitation,
            if row.is_rainy() { "rain" } else { "dry" }
        ));
    }

    output.push_str(&format!(
        "\nTotal: {:.2} mm over {} days, {} with rain\n",
        table.total(),
        table.len(),
        table.rainy_days()
    ));
    output
}

/// Formats the built-in city table, one city per line
pub fn format_city_list(cities: &[City]) -> String {
    let mut output = String::from("Built-in cities:\n\n");
    for city in cities {
        output.push_str(&format!(
            "{} ({:.4}, {:.4})\n",
            city.name, city.latitude, city.longitude
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::CITIES;
    use crate::models::ForecastRow;
    use chrono::NaiveDate;

    #[test]
    fn test_rain_summary() {
        let table = ForecastTable::new(vec![
            ForecastRow {
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                precipitation: 0.0,
            },
            ForecastRow {
                date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                precipitation: 7.5,
            },
        ]);

        let summary = format_rain_summary(
            "Campinas",
            Coordinates::new(-22.9056, -47.0608),
            "America/Sao_Paulo",
            &table,
        );

        assert!(summary.contains("City: Campinas"));
        assert!(summary.contains("Location: -22.9056, -47.0608"));
        assert!(summary.contains("2024-03-01: 0.00 mm (dry)"));
        assert!(summary.contains("2024-03-02: 7.50 mm (rain)"));
        assert!(summary.contains("Total: 7.50 mm over 2 days, 1 with rain"));
    }

    #[test]
    fn test_city_list() {
        let listing = format_city_list(CITIES);
        assert_eq!(listing.lines().filter(|l| l.contains('(')).count(), 15);
        assert!(listing.contains("São Paulo (-23.5505, -46.6333)"));
        assert!(listing.contains("Bauru (-22.3034, -49.0500)"));
    }
}
