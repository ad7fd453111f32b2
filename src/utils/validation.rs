//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos,
//! usadas desde los derives de `validator` y desde el ciclo de vida
//! de alquileres.

use chrono::NaiveDate;
use serde::Serialize;
use validator::ValidationError;

/// Validar que el rango de fechas del alquiler esté ordenado
pub fn validate_date_range(inicio: NaiveDate, fin: NaiveDate) -> Result<(), ValidationError> {
    if fin < inicio {
        let mut error = ValidationError::new("date_range");
        error.add_param("fecha_inicio".into(), &inicio.to_string());
        error.add_param("fecha_fin".into(), &fin.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_ascii_digit()).collect::<String>();
    if clean_phone.len() < 7 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de placa de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_validate_date_range() {
        let inicio = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let fin = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert!(validate_date_range(inicio, fin).is_ok());
        assert!(validate_date_range(inicio, inicio).is_ok());
        assert!(validate_date_range(fin, inicio).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("3012345678").is_ok());
        assert!(validate_phone("+57 301 234 5678").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("ABC-123").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(Decimal::new(100, 2)).is_ok());
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::new(-1, 0)).is_err());
    }
}
