//! Employee identifier generation.

use rand::Rng;

/// Generates an employee id of the form `E` followed by five digits.
///
/// The random source is passed in so callers can use a seeded generator.
///
/// # Examples
///
/// ```
/// use employee_directory::util::generate_employee_id;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let id = generate_employee_id(&mut rng);
/// assert_eq!(id.len(), 6);
/// assert!(id.starts_with('E'));
/// ```
pub fn generate_employee_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("E{:05}", rng.random_range(0..100_000u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_ids_are_zero_padded_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let id = generate_employee_id(&mut rng);
            assert_eq!(id.len(), 6);
            assert!(id[1..].bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_same_seed_gives_same_ids() {
        let mut first = StdRng::seed_from_u64(1);
        let mut second = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_employee_id(&mut first),
            generate_employee_id(&mut second)
        );
    }
}
