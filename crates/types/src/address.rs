use serde::Serialize;

/// A street location.
///
/// Addresses carry no identity of their own; two addresses are the same when every
/// field matches. They are embedded by value in whichever record owns them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub postal_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, {}, {} {}",
            self.street, self.number, self.neighborhood, self.city, self.postal_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_compare_structurally() {
        let a = Address::new("Calle 10", "45-20", "El Prado", "Barranquilla", "080001");
        let b = Address::new("Calle 10", "45-20", "El Prado", "Barranquilla", "080001");
        let c = Address::new("Calle 10", "45-21", "El Prado", "Barranquilla", "080001");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_joins_all_fields() {
        let address = Address::new("Carrera 50", "12", "Centro", "Medellín", "050001");
        assert_eq!(address.to_string(), "Carrera 50 12, Centro, Medellín 050001");
    }
}
