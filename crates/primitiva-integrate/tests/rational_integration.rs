use primitiva_core::{ExprArena, ExprHandle, ExprNode};
use primitiva_integrate::{
    integrate_rational, integrate_rational_expr, integrate_rational_function, IntegrationError,
    RationalIntegrationOptions, TranscendentalTerm,
};
use primitiva_poly::DensePoly;
use primitiva_rational_func::RationalFunction;
use primitiva_rings::rationals::Q;

/// Builds c0 + c1*x + c2*x^2 + ... in the arena.
fn poly_expr(arena: &mut ExprArena, x: ExprHandle, coeffs: &[i64]) -> ExprHandle {
    let mut terms = Vec::new();
    for (k, &c) in coeffs.iter().enumerate().rev() {
        if c == 0 {
            continue;
        }
        let c = arena.integer(c);
        let term = match k {
            0 => c,
            1 => arena.mul([c, x].as_slice()),
            _ => {
                let k = arena.integer(k as i64);
                let xk = arena.pow(x, k);
                arena.mul([c, xk].as_slice())
            }
        };
        terms.push(term);
    }
    arena.add(terms.as_slice())
}

fn integrate_str(numerator: &[i64], denominator: &[i64]) -> String {
    let mut arena = ExprArena::new();
    let x = arena.symbol("x");
    let p = poly_expr(&mut arena, x, numerator);
    let q = poly_expr(&mut arena, x, denominator);
    let result = integrate_rational(&mut arena, p, q, x, &RationalIntegrationOptions::default())
        .expect("integration failed");
    arena.display(result).to_string()
}

fn poly(coeffs: &[i64]) -> DensePoly<Q> {
    DensePoly::new(coeffs.iter().map(|&c| Q::from_integer(c)).collect())
}

#[test]
fn test_hermite_example() {
    // 36/(x^5 - 2x^4 - 2x^3 + 4x^2 + x - 2)
    assert_eq!(
        integrate_str(&[36], &[-2, 1, 4, -2, -2, 1]),
        "(12*x + 6)/(x^2 - 1) - 4*log(x + 1) + 4*log(x - 2)"
    );
}

#[test]
fn test_arctangent_and_logarithm() {
    assert_eq!(integrate_str(&[1], &[1, 0, 1]), "atan(x)");
    assert_eq!(
        integrate_str(&[0, 1], &[2, 2, 1]),
        "1/2*log(x^2 + 2*x + 2) + atan(-x - 1)"
    );
}

#[test]
fn test_polynomial_part() {
    // (x^2 + 1)/(x - 1) = x + 1 + 2/(x - 1)
    assert_eq!(integrate_str(&[1, 0, 1], &[-1, 1]), "1/2*x^2 + x + 2*log(x - 1)");
}

#[test]
fn test_cubic_residues_stay_root_sum() {
    assert_eq!(
        integrate_str(&[1], &[-2, 0, 0, 1]),
        "RootSum(t^3 - 1/108, Lambda(t, t*log(x - 6*t)))"
    );
}

#[test]
fn test_quadratic_residues_use_square_roots() {
    assert_eq!(
        integrate_str(&[1], &[-2, 0, 1]),
        "-1/4*sqrt(2)*log(x + sqrt(2)) + 1/4*sqrt(2)*log(x - sqrt(2))"
    );
    assert_eq!(integrate_str(&[1], &[2, 0, 1]), "1/2*sqrt(2)*atan(1/2*sqrt(2)*x)");
}

#[test]
fn test_negative_power_expression() {
    let mut arena = ExprArena::new();
    let x = arena.symbol("x");
    let den = poly_expr(&mut arena, x, &[-1, 0, 1]);
    let minus_one = arena.integer(-1);
    let f = arena.pow(den, minus_one);

    let result =
        integrate_rational_expr(&mut arena, f, x, &RationalIntegrationOptions::default()).unwrap();
    assert_eq!(
        arena.display(result).to_string(),
        "-1/2*log(x + 1) + 1/2*log(x - 1)"
    );
}

#[test]
fn test_gaussian_coefficients() {
    // 2*I*x/(x^2 + 1) = I*(2x/(x^2 + 1))
    let mut arena = ExprArena::new();
    let x = arena.symbol("x");
    let two = arena.integer(2);
    let i = arena.imaginary_unit();
    let num = arena.mul([two, i, x].as_slice());
    let den = poly_expr(&mut arena, x, &[1, 0, 1]);

    let result =
        integrate_rational(&mut arena, num, den, x, &RationalIntegrationOptions::default()).unwrap();
    assert_eq!(arena.display(result).to_string(), "I*log(x^2 + 1)");
}

#[test]
fn test_real_option_off_keeps_root_sum() {
    let mut arena = ExprArena::new();
    let x = arena.symbol("x");
    let one = arena.integer(1);
    let den = poly_expr(&mut arena, x, &[1, 0, 1]);

    let options = RationalIntegrationOptions::default().with_real(false);
    let result = integrate_rational(&mut arena, one, den, x, &options).unwrap();
    assert!(matches!(arena.get(result), ExprNode::RootSum { .. }));
}

#[test]
fn test_same_input_same_handle() {
    let mut arena = ExprArena::new();
    let x = arena.symbol("x");
    let one = arena.integer(1);
    let den = poly_expr(&mut arena, x, &[1, 0, 0, 1]);
    let options = RationalIntegrationOptions::default();

    let first = integrate_rational(&mut arena, one, den, x, &options).unwrap();
    let second = integrate_rational(&mut arena, one, den, x, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_errors() {
    let mut arena = ExprArena::new();
    let x = arena.symbol("x");
    let y = arena.symbol("y");
    let z = arena.symbol("z");
    let w = arena.symbol("w");
    let one = arena.integer(1);
    let zero = arena.integer(0);
    let log_x = arena.log(x);
    let yzw = arena.mul([y, z, w].as_slice());
    let options = RationalIntegrationOptions::default();

    assert_eq!(
        integrate_rational(&mut arena, one, zero, x, &options),
        Err(IntegrationError::ZeroDenominator)
    );
    assert_eq!(
        integrate_rational_expr(&mut arena, x, one, &options),
        Err(IntegrationError::NotASymbol)
    );
    assert_eq!(
        integrate_rational(&mut arena, one, yzw, x, &options),
        Err(IntegrationError::TooManyParameters(3))
    );
    assert!(matches!(
        integrate_rational_expr(&mut arena, log_x, x, &options),
        Err(IntegrationError::NonPolynomial(_))
    ));
}

#[test]
fn test_derivative_recovers_integrand() {
    let cases: &[(&[i64], &[i64])] = &[
        (&[1], &[0, 0, 1]),
        (&[3, 0, 1], &[1, 0, 2, 0, 1]),
        (&[0, 0, 0, 0, 1], &[-1, 0, 0, 0, 1]),
        (&[1, 2, 3], &[0, -1, 0, 1]),
        (&[5, -1], &[4, -4, 1]),
        (&[1], &[1, 2, 2, 2, 1]),
    ];
    for &(p, q) in cases {
        let (p, q) = (poly(p), poly(q));
        let r = integrate_rational_function(&p, &q, &RationalIntegrationOptions::default()).unwrap();
        assert!(r.is_elementary(), "{p:?}/{q:?}");
        assert_eq!(r.derivative(), Some(RationalFunction::new(p, q)));
    }
}

#[test]
fn test_term_kinds() {
    // 1/(x^4 - 1) = 1/4*(1/(x - 1) - 1/(x + 1)) - 1/2 * 1/(x^2 + 1)
    let r = integrate_rational_function(&poly(&[1]), &poly(&[-1, 0, 0, 0, 1]), &Default::default())
        .unwrap();
    let logs = r
        .terms
        .iter()
        .filter(|t| matches!(t, TranscendentalTerm::Log { .. }))
        .count();
    let atans = r
        .terms
        .iter()
        .filter(|t| matches!(t, TranscendentalTerm::Atan { .. }))
        .count();
    assert_eq!((logs, atans), (2, 1));
}
