//! Root sums of complex logarithms to real logarithms and arctangents.
//!
//! For a term Σ_{a: q(a)=0} a·log(h(a, x)) with q and h real, substitute
//! a = u + iv and split q(u + iv) = C + iD, h(u + iv, x) = A + iB. The
//! non-real roots are the real solutions (u, v ≠ 0) of C = D = 0; each
//! conjugate pair contributes
//!
//! u·log(A² + B²) + v·i·log((A + iB)/(A - iB))
//!
//! and the second part becomes arctangents through [`log_to_atan`]. Real
//! roots of q contribute a·log(h(a, x)) directly.
//!
//! Only roots lying in the coefficient field are used, so every zero test is
//! exact. Whenever the roots found there fall short of the Sturm count the
//! conversion is abandoned and the caller keeps the root sum. When signs
//! cannot be decided (a parameter field) a split into linear factors is
//! still complete.

use std::cmp::Ordering;

use primitiva_poly::algorithms::gcd::poly_gcd;
use primitiva_poly::algorithms::resultant::resultant;
use primitiva_poly::algorithms::roots::{real_roots_in_field, FieldRoots};
use primitiva_poly::algorithms::squarefree::squarefree_part;
use primitiva_poly::algorithms::sturm::count_real_roots;
use primitiva_poly::dense::DensePoly;
use primitiva_rings::traits::{ConstantField, Field};
use tracing::trace;

use crate::error::UncertifiedRootSplit;
use crate::log_to_atan::log_to_atan;
use crate::logpart::LogPartTerm;

/// A polynomial in v whose coefficients are polynomials in u.
type Plane<F> = DensePoly<DensePoly<F>>;

/// The real form of one logarithmic term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RealLogPart<F: Field> {
    /// Terms c·log(p).
    pub logs: Vec<(F, DensePoly<F>)>,
    /// Terms c·atan(p).
    pub atans: Vec<(F, DensePoly<F>)>,
}

impl<F: Field> Default for RealLogPart<F> {
    fn default() -> Self {
        Self {
            logs: Vec::new(),
            atans: Vec::new(),
        }
    }
}

/// Real and imaginary parts of (u + iv)^j for j = 0..=n.
fn powers_of_u_plus_iv<F: ConstantField>(n: usize) -> Vec<(Plane<F>, Plane<F>)> {
    let u: Plane<F> = DensePoly::constant(DensePoly::x());
    let v: Plane<F> = DensePoly::x();

    let mut powers = Vec::with_capacity(n + 1);
    let mut re = Plane::<F>::one();
    let mut im = Plane::<F>::zero();
    for _ in 0..n {
        powers.push((re.clone(), im.clone()));
        let next_re = re.mul(&u).sub(&im.mul(&v));
        let next_im = re.mul(&v).add(&im.mul(&u));
        re = next_re;
        im = next_im;
    }
    powers.push((re, im));
    powers
}

fn scale_plane<F: Field>(p: &Plane<F>, c: &F) -> Plane<F> {
    p.map_coeffs(|inner| inner.scale(c))
}

/// Splits p(u + iv) into real polynomials C, D with p = C + iD.
fn split_complex<F: ConstantField>(p: &DensePoly<F>) -> (Plane<F>, Plane<F>) {
    let powers = powers_of_u_plus_iv::<F>(p.degree());
    let mut c = Plane::<F>::zero();
    let mut d = Plane::<F>::zero();

    for (coeff, (re, im)) in p.coeffs().iter().zip(&powers) {
        let a = coeff.real_part();
        let b = coeff.imag_part();
        c = c.add(&scale_plane(re, &a)).sub(&scale_plane(im, &b));
        d = d.add(&scale_plane(im, &a)).add(&scale_plane(re, &b));
    }
    (c, d)
}

fn at_u<F: Field>(p: &Plane<F>, u: &F) -> DensePoly<F> {
    p.map_coeffs(|inner| inner.eval(u))
}

fn at_point<F: Field>(p: &Plane<F>, u: &F, v: &F) -> F {
    at_u(p, u).eval(v)
}

/// Distinct real roots of `p` in the field, certified complete by a Sturm
/// count.
fn certified_real_roots<F: FieldRoots>(p: &DensePoly<F>) -> Result<Vec<F>, UncertifiedRootSplit> {
    let roots = real_roots_in_field(p);
    let Some(expected) = count_real_roots(p) else {
        if roots.len() == squarefree_part(p).degree() {
            return Ok(roots);
        }
        trace!(found = roots.len(), "real root count undecidable");
        return Err(UncertifiedRootSplit);
    };
    if roots.len() == expected {
        Ok(roots)
    } else {
        trace!(found = roots.len(), expected, "real roots outside the field");
        Err(UncertifiedRootSplit)
    }
}

/// Rewrites Σ_{a: q(a)=0} a·log(h(a, x)) with real logarithms and
/// arctangents.
///
/// Fails when some real root needed for the split does not lie in the
/// field, or when q has non-real coefficients.
pub(crate) fn log_to_real<F: FieldRoots>(
    term: &LogPartTerm<F>,
) -> Result<RealLogPart<F>, UncertifiedRootSplit> {
    let mut out = RealLogPart::default();
    if count_real_roots(&term.annihilator) == Some(term.annihilator.degree()) {
        // every root is real, so there are no conjugate pairs
        return real_root_logs(term, out);
    }

    let (c, d) = split_complex(&term.annihilator);
    let argument_parts: Vec<(Plane<F>, Plane<F>)> =
        term.argument.coeffs().iter().map(split_complex).collect();

    let r = resultant(&c, &d);
    for ru in certified_real_roots(&r)? {
        // Common roots of C(ru, v) and D(ru, v); either may vanish identically
        let slice = poly_gcd(&at_u(&c, &ru), &at_u(&d, &ru));

        // Roots of the slice come as ±v with equal terms; keep one of each
        let mut unsigned: Vec<F> = Vec::new();
        for rv in certified_real_roots(&slice)? {
            match rv.real_sign() {
                Some(Ordering::Greater) => {}
                Some(_) => continue,
                None if unsigned.contains(&-rv.clone()) => continue,
                None => unsigned.push(rv.clone()),
            }
            if !ru.same_field(&rv) {
                return Err(UncertifiedRootSplit);
            }
            trace!(%ru, %rv, "conjugate root pair");

            let a = DensePoly::new(
                argument_parts
                    .iter()
                    .map(|(ak, _)| at_point(ak, &ru, &rv))
                    .collect(),
            );
            let b = DensePoly::new(
                argument_parts
                    .iter()
                    .map(|(_, bk)| at_point(bk, &ru, &rv))
                    .collect(),
            );

            if !ru.is_zero() {
                out.logs.push((ru.clone(), a.mul(&a).add(&b.mul(&b))));
            }
            if !b.is_zero() {
                let coeff = rv.mul_by_scalar(2);
                for arg in log_to_atan(&a, &b).ok_or(UncertifiedRootSplit)? {
                    out.atans.push((coeff.clone(), arg));
                }
            }
        }
    }

    real_root_logs(term, out)
}

/// Appends a·log(h(a, x)) for every real root a of the annihilator.
fn real_root_logs<F: FieldRoots>(
    term: &LogPartTerm<F>,
    mut out: RealLogPart<F>,
) -> Result<RealLogPart<F>, UncertifiedRootSplit> {
    for root in certified_real_roots(&term.annihilator)? {
        if root.is_zero() {
            continue;
        }
        let argument = term.argument_at(&root);
        out.logs.push((root, argument));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logpart::logarithmic_part;
    use primitiva_integers::Rational;
    use primitiva_rational_func::RationalFunction;
    use primitiva_rings::rationals::Q;
    use primitiva_rings::RealQuadratic;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| q(n)).collect())
    }

    fn single_term(f: &[i64], g: &[i64]) -> LogPartTerm<Q> {
        let mut part = logarithmic_part(&poly(f), &poly(g)).unwrap();
        assert_eq!(part.len(), 1);
        part.remove(0)
    }

    #[test]
    fn test_split_complex() {
        // t² + 1/4 at u + iv: C = u² - v² + 1/4, D = 2uv
        let p = DensePoly::new(vec![Q::new(1, 4), q(0), q(1)]);
        let (c, d) = split_complex(&p);

        assert_eq!(
            c,
            DensePoly::new(vec![
                DensePoly::new(vec![Q::new(1, 4), q(0), q(1)]),
                DensePoly::zero(),
                poly(&[-1]),
            ])
        );
        assert_eq!(d, DensePoly::new(vec![DensePoly::zero(), poly(&[0, 2])]));
    }

    #[test]
    fn test_pure_arctangent() {
        // ∫ 1/(x² + 1) = atan(x)
        let real = log_to_real(&single_term(&[1], &[1, 0, 1])).unwrap();

        assert!(real.logs.is_empty());
        assert_eq!(real.atans, vec![(q(1), poly(&[0, 1]))]);
    }

    #[test]
    fn test_real_roots_only() {
        // ∫ 12/(x² - x - 2) = -4 log(x + 1) + 4 log(x - 2)
        let real = log_to_real(&single_term(&[12], &[-2, -1, 1])).unwrap();

        assert!(real.atans.is_empty());
        assert_eq!(
            real.logs,
            vec![(q(-4), poly(&[1, 1])), (q(4), poly(&[-2, 1]))]
        );
    }

    #[test]
    fn test_log_and_arctangent() {
        // ∫ x/(x² + 2x + 2) = 1/2 log(x² + 2x + 2) - atan(x + 1)
        let real = log_to_real(&single_term(&[0, 1], &[2, 2, 1])).unwrap();

        assert_eq!(real.logs, vec![(Q::new(1, 2), poly(&[2, 2, 1]))]);
        assert_eq!(real.atans, vec![(q(1), poly(&[-1, -1]))]);
    }

    #[test]
    fn test_irrational_roots_are_uncertified() {
        // t² - 1/8 has roots ±√2/4
        assert_eq!(
            log_to_real(&single_term(&[1], &[-2, 0, 1])),
            Err(UncertifiedRootSplit)
        );
    }

    #[test]
    fn test_linear_annihilator() {
        // ∫ 3/(x - 5) = 3 log(x - 5)
        let real = log_to_real(&single_term(&[3], &[-5, 1])).unwrap();

        assert!(real.atans.is_empty());
        assert_eq!(real.logs, vec![(q(3), poly(&[-5, 1]))]);
    }

    /// d/dx of Σ c·log(p) + Σ c·atan(p).
    fn derivative_of<F: Field>(real: &RealLogPart<F>) -> RationalFunction<F> {
        let logs = real.logs.iter().map(|(c, p)| RationalFunction::new(p.derivative(), p.clone()).scale(c));
        let atans = real.atans.iter().map(|(c, p)| {
            RationalFunction::new(p.derivative(), DensePoly::<F>::one().add(&p.mul(p))).scale(c)
        });
        logs.chain(atans)
            .fold(RationalFunction::zero(), |acc, d| acc.add_ref(&d))
    }

    fn to_radical(p: &DensePoly<Q>) -> DensePoly<RealQuadratic> {
        p.map_coeffs(|c| RealQuadratic::rational(c.0.clone()))
    }

    fn radical_term(term: &LogPartTerm<Q>) -> LogPartTerm<RealQuadratic> {
        LogPartTerm {
            argument: term.argument.map_coeffs(to_radical),
            annihilator: to_radical(&term.annihilator),
        }
    }

    #[test]
    fn test_real_part_of_slice_vanishes() {
        // (3x² - 2x + 1)/(x³ + x): residues 1 and 1 ± i, so C(1, v) = 0
        let f = poly(&[1, -2, 3]);
        let g = poly(&[0, 1, 0, 1]);
        let real = log_to_real(&single_term(&[1, -2, 3], &[0, 1, 0, 1])).unwrap();

        assert_eq!(real.logs.len(), 2);
        assert!(!real.atans.is_empty());
        assert!(real.atans.iter().all(|(c, _)| *c == q(2)));
        assert_eq!(derivative_of(&real), RationalFunction::new(f, g));
    }

    #[test]
    fn test_zero_root_and_zero_real_part() {
        // Σ_{t³ + t = 0} t·log(x + t): t = 0 drops out, t = ±i give 2·atan(x)
        let term = LogPartTerm {
            argument: DensePoly::new(vec![poly(&[0, 1]), poly(&[1])]),
            annihilator: poly(&[0, 1, 0, 1]),
        };
        let real = log_to_real(&term).unwrap();

        assert!(real.logs.is_empty());
        assert_eq!(real.atans, vec![(q(2), poly(&[0, 1]))]);
    }

    #[test]
    fn test_irrational_imaginary_part() {
        // ∫ x/(x² + 2x + 3): residues 1/2 ± i·√2/4
        let term = single_term(&[0, 1], &[3, 2, 1]);
        assert_eq!(log_to_real(&term), Err(UncertifiedRootSplit));

        let real = log_to_real(&radical_term(&term)).unwrap();
        let half = RealQuadratic::rational(Rational::from_i64(1, 2));
        assert_eq!(real.logs.len(), 1);
        assert_eq!(real.logs[0].0, half);
        assert_eq!(
            real.atans.iter().map(|(c, _)| c.clone()).collect::<Vec<_>>(),
            vec![RealQuadratic::new(Rational::from(0), Rational::from_i64(1, 2), 2.into())]
        );
        assert_eq!(
            derivative_of(&real),
            RationalFunction::new(to_radical(&poly(&[0, 1])), to_radical(&poly(&[3, 2, 1])))
        );
    }

    #[test]
    fn test_quartic_over_radicals() {
        // ∫ 1/(x⁴ + 1) needs √2 for both the logarithms and the arctangents
        let term = single_term(&[1], &[1, 0, 0, 0, 1]);
        assert_eq!(log_to_real(&term), Err(UncertifiedRootSplit));

        let real = log_to_real(&radical_term(&term)).unwrap();
        assert_eq!(real.logs.len(), 2);
        assert!(!real.atans.is_empty());
        assert_eq!(
            derivative_of(&real),
            RationalFunction::new(to_radical(&poly(&[1])), to_radical(&poly(&[1, 0, 0, 0, 1])))
        );
    }

    #[test]
    fn test_shifted_pair() {
        // ∫ (2x + 1)/(x² + 2x + 2) = log(x² + 2x + 2) - atan(x + 1)
        let f = poly(&[1, 2]);
        let g = poly(&[2, 2, 1]);
        let real = log_to_real(&single_term(&[1, 2], &[2, 2, 1])).unwrap();
        assert_eq!(real.logs, vec![(q(1), g.clone())]);
        assert_eq!(derivative_of(&real), RationalFunction::new(f, g));
    }
}
