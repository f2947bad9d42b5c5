// Lagrange coefficients for interpolation at zero.
use crate::{field::FieldElement, Error};

/// Returns Lagrange coefficients for the given set of x values.
///
/// The i-th Lagrange coefficient is defined as:
/// ```text
///     L_i(0) = \prod_{j=0,j≠i}^n x_j / (x_j - x_i)
/// ```
///
/// Fails with [`Error::NoInverse`] if the x values are not unique.
pub fn coefficients(xs: &[FieldElement]) -> Result<Vec<FieldElement>, Error> {
    (0..xs.len()).map(|i| coefficient(xs, i)).collect()
}

/// Returns i-th Lagrange coefficient for the given set of x values.
///
/// The i-th Lagrange coefficient is defined as:
/// ```text
///     L_i(0) = \prod_{j=0,j≠i}^n x_j / (x_j - x_i)
/// ```
fn coefficient(xs: &[FieldElement], i: usize) -> Result<FieldElement, Error> {
    let field = xs[i].field();
    let mut nom = field.one();
    let mut denom = field.one();
    for j in 0..xs.len() {
        if j == i {
            continue;
        }
        nom = &nom * &xs[j]; // x_j
        denom = &denom * &(&xs[j] - &xs[i]); // (x_j - x_i)
    }

    nom.divide(&denom) // L_i(0) = nom / denom
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        config::mersenne_prime,
        field::{FieldElement, PrimeField},
        poly::Polynomial,
        Error,
    };

    use super::{coefficient, coefficients};

    fn field() -> PrimeField {
        PrimeField::new(mersenne_prime(127)).unwrap()
    }

    fn scalar(value: i64) -> FieldElement {
        field().element_from_i64(value)
    }

    fn scalars(values: &[i64]) -> Vec<FieldElement> {
        values.iter().map(|&w| scalar(w)).collect()
    }

    #[test]
    fn test_coefficients() {
        let cs = coefficients(&scalars(&[1, 2, 3])).unwrap();
        assert_eq!(cs, scalars(&[3, -3, 1]));

        let cs = coefficients(&scalars(&[5])).unwrap();
        assert_eq!(cs, scalars(&[1]));

        let cs = coefficients(&[]).unwrap();
        assert!(cs.is_empty());
    }

    #[test]
    fn test_coefficients_sum_to_one() {
        let field = field();
        let mut rng: StdRng = SeedableRng::from_seed([1u8; 32]);

        for n in 1..10 {
            let xs: Vec<_> = (0..n).map(|_| field.random_nonzero(&mut rng)).collect();
            let sum = coefficients(&xs)
                .unwrap()
                .iter()
                .fold(field.zero(), |acc, c| &acc + c);
            assert_eq!(sum, field.one());
        }
    }

    #[test]
    fn test_coefficient_interpolates() {
        let field = field();
        let mut rng: StdRng = SeedableRng::from_seed([2u8; 32]);
        let p = Polynomial::random(&field, 4, &mut rng);
        let xs = scalars(&[3, 9, 27, 81, 243]);

        let mut secret = field.zero();
        for i in 0..xs.len() {
            let c = coefficient(&xs, i).unwrap();
            secret = &secret + &(&p.eval(&xs[i]) * &c);
        }

        assert_eq!(Some(&secret), p.coefficient(0));
    }

    #[test]
    fn test_duplicate_values() {
        let res = coefficients(&scalars(&[1, 2, 1]));
        assert_eq!(res.unwrap_err(), Error::NoInverse);
    }

    #[test]
    fn test_small_field() {
        let field = PrimeField::new(BigUint::from(7u8)).unwrap();
        let xs: Vec<_> = [1, 2, 3].iter().map(|&x| field.element_from_u64(x)).collect();
        let cs = coefficients(&xs).unwrap();

        let expected: Vec<_> = [3, 4, 1].iter().map(|&c| field.element_from_u64(c)).collect();
        assert_eq!(cs, expected);
    }
}
