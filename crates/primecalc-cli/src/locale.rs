//! Localized console messages.

use clap::ValueEnum;

use primecalc_core::PrimeError;

/// Language of the console messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    /// Spanish.
    #[default]
    Es,
    /// French.
    Fr,
    /// English.
    En,
}

impl Language {
    /// "Computing the first N primes..." banner.
    #[must_use]
    pub fn header(self, count: usize) -> String {
        match self {
            Self::Es => format!("Calculando los primeros {count} números primos..."),
            Self::Fr => format!("Calcul des {count} premiers nombres premiers..."),
            Self::En => format!("Computing the first {count} prime numbers..."),
        }
    }

    /// Title line above the table.
    #[must_use]
    pub fn listing(self, count: usize) -> String {
        match self {
            Self::Es => format!("Los primeros {count} números primos son:"),
            Self::Fr => format!("Les {count} premiers nombres premiers sont :"),
            Self::En => format!("The first {count} prime numbers are:"),
        }
    }

    #[must_use]
    pub fn largest(self, prime: u64) -> String {
        match self {
            Self::Es => format!("El número primo más grande encontrado es: {prime}"),
            Self::Fr => format!("Le plus grand nombre premier trouvé est : {prime}"),
            Self::En => format!("Largest prime found: {prime}"),
        }
    }

    #[must_use]
    pub fn total(self, count: usize) -> String {
        match self {
            Self::Es => format!("Total de números primos calculados: {count}"),
            Self::Fr => format!("Nombre total de nombres premiers calculés : {count}"),
            Self::En => format!("Total primes computed: {count}"),
        }
    }

    #[must_use]
    pub fn elapsed(self, duration: &str) -> String {
        match self {
            Self::Es => format!("Tiempo: {duration}"),
            Self::Fr => format!("Durée : {duration}"),
            Self::En => format!("Elapsed: {duration}"),
        }
    }

    /// Verdict line for a single primality check.
    #[must_use]
    pub fn verdict(self, n: i64, prime: bool) -> String {
        match (self, prime) {
            (Self::Es, true) => format!("{n} es primo"),
            (Self::Es, false) => format!("{n} no es primo"),
            (Self::Fr, true) => format!("{n} est premier"),
            (Self::Fr, false) => format!("{n} n'est pas premier"),
            (Self::En, true) => format!("{n} is prime"),
            (Self::En, false) => format!("{n} is not prime"),
        }
    }

    /// Prefix for error lines.
    #[must_use]
    pub fn error_prefix(self) -> &'static str {
        match self {
            Self::Es | Self::En => "Error:",
            Self::Fr => "Erreur :",
        }
    }

    /// Prefix for errors that do not come from count validation.
    #[must_use]
    pub fn unexpected_prefix(self) -> &'static str {
        match self {
            Self::Es => "Error inesperado:",
            Self::Fr => "Erreur inattendue :",
            Self::En => "Unexpected error:",
        }
    }

    /// Localized message for an enumeration error.
    #[must_use]
    pub fn describe(self, err: &PrimeError) -> String {
        match (self, err) {
            (Self::Es, PrimeError::NonPositiveCount(n)) => {
                format!("n debe ser un entero positivo (recibido {n})")
            }
            (Self::Fr, PrimeError::NonPositiveCount(n)) => {
                format!("n doit être un entier positif (reçu {n})")
            }
            (Self::En, PrimeError::NonPositiveCount(n)) => {
                format!("n must be a positive integer (got {n})")
            }
            (Self::Es, PrimeError::LimitExceeded { limit, .. }) => {
                format!("n no puede superar {limit} por razones de seguridad")
            }
            (Self::Fr, PrimeError::LimitExceeded { limit, .. }) => {
                format!("n ne peut pas dépasser {limit} pour des raisons de sécurité")
            }
            (Self::En, PrimeError::LimitExceeded { limit, .. }) => {
                format!("n cannot exceed {limit} for safety reasons")
            }
            (_, PrimeError::Config(_)) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_spanish() {
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn spanish_messages() {
        let es = Language::Es;
        assert_eq!(es.header(100), "Calculando los primeros 100 números primos...");
        assert_eq!(es.listing(100), "Los primeros 100 números primos son:");
        assert_eq!(
            es.largest(541),
            "El número primo más grande encontrado es: 541"
        );
        assert_eq!(es.total(100), "Total de números primos calculados: 100");
    }

    #[test]
    fn french_validation_messages() {
        let fr = Language::Fr;
        assert!(fr
            .describe(&PrimeError::NonPositiveCount(0))
            .contains("n doit être un entier positif"));
        assert!(fr
            .describe(&PrimeError::LimitExceeded {
                count: 10_001,
                limit: 10_000
            })
            .contains("n ne peut pas dépasser 10000 pour des raisons de sécurité"));
    }

    #[test]
    fn verdicts() {
        assert_eq!(Language::En.verdict(7, true), "7 is prime");
        assert_eq!(Language::Fr.verdict(-7, false), "-7 n'est pas premier");
        assert_eq!(Language::Es.verdict(9, false), "9 no es primo");
    }

    #[test]
    fn config_errors_pass_through() {
        let err = PrimeError::Config("max count must be at least 1".into());
        assert_eq!(Language::Es.describe(&err), err.to_string());
    }

    #[test]
    fn parses_from_cli_value() {
        assert_eq!(Language::from_str("fr", true), Ok(Language::Fr));
        assert!(Language::from_str("de", true).is_err());
    }
}
