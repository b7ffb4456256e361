use crate::models::Coordinates;

/// A city with fixed coordinates, known without any lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

const fn city(name: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        name,
        latitude,
        longitude,
    }
}

/// Fifteen cities of the state of São Paulo
pub const CITIES: &[City] = &[
    city("São Paulo", -23.5505, -46.6333),
    city("Campinas", -22.9056, -47.0608),
    city("São Bernardo do Campo", -23.6821, -46.5657),
    city("São José dos Campos", -23.2237, -45.9009),
    city("Sorocaba", -23.5012, -47.4875),
    city("Ribeirão Preto", -21.1730, -47.8103),
    city("Santo André", -23.6637, -46.5383),
    city("Osasco", -23.5329, -46.7918),
    city("Diadema", -23.6854, -46.6203),
    city("Bauru", -22.3034, -49.0500),
    city("Piracicaba", -23.7272, -47.6500),
    city("Jundiaí", -23.1856, -46.8978),
    city("Taubaté", -22.9783, -45.5589),
    city("Limeira", -22.5584, -47.4895),
    city("Mauá", -23.6671, -46.4613),
];

/// Looks a city up by its exact, case-sensitive name
pub fn lookup(name: &str) -> Option<Coordinates> {
    CITIES
        .iter()
        .find(|city| city.name == name)
        .map(City::coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_sao_paulo() {
        assert_eq!(
            lookup("São Paulo"),
            Some(Coordinates::new(-23.5505, -46.6333))
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("são paulo"), None);
        assert_eq!(lookup("SAO PAULO"), None);
        assert_eq!(lookup("Sao Paulo"), None);
    }

    #[test]
    fn test_every_entry_resolves_to_itself() {
        for entry in CITIES {
            assert_eq!(lookup(entry.name), Some(entry.coordinates()));
        }
    }

    #[test]
    fn test_table_has_fifteen_unique_names() {
        let names: HashSet<_> = CITIES.iter().map(|c| c.name).collect();
        assert_eq!(CITIES.len(), 15);
        assert_eq!(names.len(), 15);
    }
}
