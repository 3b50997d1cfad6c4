//! Conversion between expressions and polynomials.
//!
//! The integrator works on `DensePoly<F>`; callers hand in and get back
//! `ExprHandle`s. [`ExprConverter`] reads polynomials and fractions in the
//! integration variable out of an arena and writes polynomials, bivariate
//! log arguments and rational functions back into it.
//!
//! Symbols other than the variable are read as parameters when the
//! converter is told about them; the constant field then has to be a field of
//! rational functions in those parameters.

use primitiva_core::{ExprArena, ExprHandle, ExprNode, SymbolId};
use primitiva_integers::Rational;
use primitiva_poly::algorithms::roots::FieldRoots;
use primitiva_poly::dense::DensePoly;
use primitiva_rational_func::RationalFunction;
use primitiva_rings::traits::ConstantField;
use primitiva_rings::{GaussianRational, RealQuadratic, Q};
use smallvec::SmallVec;

use crate::error::IntegrationError;
use crate::logpart::Bivariate;

/// Largest exponent accepted when reading x^n.
pub const MAX_EXPONENT: u32 = 10_000;

/// Constant fields the expression layer can read and write.
pub trait ExprConstant: FieldRoots {
    /// Symbolic parameters adjoined to Q or Q(i).
    const PARAMETERS: usize = 0;

    /// Builds the expression for this constant. `parameters[k]` is the
    /// symbol standing for parameter k.
    fn to_expr(&self, arena: &mut ExprArena, parameters: &[ExprHandle]) -> ExprHandle;

    /// The imaginary unit, if the field contains it.
    fn imaginary_unit() -> Option<Self>;

    /// Parameter k as a field element.
    fn parameter(_k: usize) -> Option<Self> {
        None
    }
}

impl ExprConstant for Q {
    fn to_expr(&self, arena: &mut ExprArena, _parameters: &[ExprHandle]) -> ExprHandle {
        arena.number(self.0.clone())
    }

    fn imaginary_unit() -> Option<Self> {
        None
    }
}

impl ExprConstant for GaussianRational {
    fn to_expr(&self, arena: &mut ExprArena, _parameters: &[ExprHandle]) -> ExprHandle {
        let re = arena.number(self.re.clone());
        if self.is_real() {
            return re;
        }
        let i = arena.imaginary_unit();
        let im = arena.number(self.im.clone());
        let im = arena.mul([im, i].as_slice());
        arena.add([re, im].as_slice())
    }

    fn imaginary_unit() -> Option<Self> {
        Some(GaussianRational::i())
    }
}

impl ExprConstant for RealQuadratic {
    fn to_expr(&self, arena: &mut ExprArena, _parameters: &[ExprHandle]) -> ExprHandle {
        let a = arena.number(self.rational_part().clone());
        let Some(d) = self.radicand() else {
            return a;
        };
        let d = arena.number(Rational::from(d.clone()));
        let root = arena.sqrt(d);
        let b = arena.number(self.radical_part().clone());
        let radical = arena.mul([b, root].as_slice());
        arena.add([a, radical].as_slice())
    }

    fn imaginary_unit() -> Option<Self> {
        None
    }
}

impl<K: ExprConstant> ExprConstant for RationalFunction<K> {
    const PARAMETERS: usize = K::PARAMETERS + 1;

    fn to_expr(&self, arena: &mut ExprArena, parameters: &[ExprHandle]) -> ExprHandle {
        let inner = &parameters[..K::PARAMETERS.min(parameters.len())];
        let var = match parameters.get(K::PARAMETERS) {
            Some(&var) => var,
            None => arena.dummy("a", K::PARAMETERS as u32),
        };

        let num = self.numerator();
        let den = self.denominator();
        if den.is_constant() {
            let terms = monomial_terms(arena, inner, num, var);
            return arena.add(terms);
        }

        let terms = monomial_terms(arena, inner, den, var);
        let den_expr = arena.add(terms);
        let rational_num = if num.is_constant() {
            num.leading_coeff().to_rational()
        } else {
            None
        };
        if let Some(r) = rational_num {
            // r/den as n/(m·den)
            let n = arena.number(Rational::from(r.numerator().abs()));
            let m = arena.number(Rational::from(r.denominator()));
            let den_expr = arena.mul([m, den_expr].as_slice());
            let frac = arena.div(n, den_expr);
            if !r.is_negative() {
                return frac;
            }
            let minus_one = arena.integer(-1);
            return arena.mul([minus_one, frac].as_slice());
        }

        let terms = monomial_terms(arena, inner, num, var);
        let num_expr = arena.add(terms);
        arena.div(num_expr, den_expr)
    }

    fn imaginary_unit() -> Option<Self> {
        K::imaginary_unit().map(RationalFunction::constant)
    }

    fn parameter(k: usize) -> Option<Self> {
        match k.cmp(&K::PARAMETERS) {
            std::cmp::Ordering::Less => K::parameter(k).map(RationalFunction::constant),
            std::cmp::Ordering::Equal => Some(RationalFunction::from_poly(DensePoly::x())),
            std::cmp::Ordering::Greater => None,
        }
    }
}

/// c · factors, splicing a product-valued constant into one product.
fn scaled_product<F: ExprConstant>(
    arena: &mut ExprArena,
    parameters: &[ExprHandle],
    c: &F,
    factors: &[ExprHandle],
) -> ExprHandle {
    let c_expr = c.to_expr(arena, parameters);
    let mut args: SmallVec<[ExprHandle; 4]> = match arena.get(c_expr) {
        ExprNode::Mul(inner) => inner.clone(),
        _ => smallvec::smallvec![c_expr],
    };
    args.extend_from_slice(factors);
    arena.mul(args)
}

fn power_of(arena: &mut ExprArena, base: ExprHandle, k: usize) -> Option<ExprHandle> {
    match k {
        0 => None,
        1 => Some(base),
        _ => {
            let exp = arena.integer(k as i64);
            Some(arena.pow(base, exp))
        }
    }
}

/// The nonzero terms of `p` in `var`, highest degree first.
fn monomial_terms<F: ExprConstant>(
    arena: &mut ExprArena,
    parameters: &[ExprHandle],
    p: &DensePoly<F>,
    var: ExprHandle,
) -> SmallVec<[ExprHandle; 4]> {
    let mut terms = SmallVec::new();
    for (k, c) in p.coeffs().iter().enumerate().rev() {
        if c.is_zero() {
            continue;
        }
        let factors: SmallVec<[ExprHandle; 1]> = power_of(arena, var, k).into_iter().collect();
        terms.push(scaled_product(arena, parameters, c, &factors));
    }
    terms
}

/// A fraction read from an expression, before any cancellation.
type Fraction<F> = (DensePoly<F>, DensePoly<F>);

/// Bidirectional converter between expressions and polynomials in one
/// variable.
pub struct ExprConverter<'a> {
    arena: &'a mut ExprArena,
    variable: SymbolId,
    var_handle: ExprHandle,
    parameters: Vec<(SymbolId, ExprHandle)>,
}

impl<'a> ExprConverter<'a> {
    /// Creates a converter for the symbol `var_handle`.
    ///
    /// # Errors
    ///
    /// `NotASymbol` if `var_handle` is not a `Symbol` node.
    pub fn new(arena: &'a mut ExprArena, var_handle: ExprHandle) -> Result<Self, IntegrationError> {
        let variable = match arena.get(var_handle) {
            ExprNode::Symbol(id) => *id,
            _ => return Err(IntegrationError::NotASymbol),
        };
        Ok(Self {
            arena,
            variable,
            var_handle,
            parameters: Vec::new(),
        })
    }

    /// Reads and writes the symbols in `parameters` as the field's
    /// parameters, in order.
    ///
    /// # Errors
    ///
    /// `NotASymbol` if a parameter is not a `Symbol` node.
    pub fn with_parameters(mut self, parameters: &[ExprHandle]) -> Result<Self, IntegrationError> {
        self.parameters = parameters
            .iter()
            .map(|&h| match self.arena.get(h) {
                ExprNode::Symbol(id) => Ok((*id, h)),
                _ => Err(IntegrationError::NotASymbol),
            })
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    fn parameter_handles(&self) -> SmallVec<[ExprHandle; 2]> {
        self.parameters.iter().map(|&(_, h)| h).collect()
    }

    /// The arena being converted into.
    pub fn arena(&mut self) -> &mut ExprArena {
        &mut *self.arena
    }

    fn non_polynomial(&self, expr: ExprHandle) -> IntegrationError {
        IntegrationError::NonPolynomial(self.arena.display(expr).to_string())
    }

    fn integer_exponent(&self, exp: ExprHandle) -> Option<i64> {
        self.arena
            .get(exp)
            .as_number()
            .and_then(Rational::to_integer)
            .and_then(|n| n.to_i64())
            .filter(|n| n.unsigned_abs() <= u64::from(MAX_EXPONENT))
    }

    // === ExprHandle -> Backend Types ===

    /// Reads a polynomial in the variable.
    ///
    /// Accepts numbers, the variable, the imaginary unit (when `F` has one),
    /// parameters, sums, products, negations, nonnegative integer powers up
    /// to [`MAX_EXPONENT`] and division by a nonzero constant.
    ///
    /// # Errors
    ///
    /// `NonPolynomial` naming the offending subexpression.
    pub fn to_polynomial<F: ExprConstant>(&self, expr: ExprHandle) -> Result<DensePoly<F>, IntegrationError> {
        match self.arena.get(expr) {
            ExprNode::Number(r) => Ok(DensePoly::constant(F::from_rational(r.clone()))),

            ExprNode::Symbol(id) if *id == self.variable => Ok(DensePoly::x()),

            ExprNode::Symbol(id) => self
                .parameters
                .iter()
                .position(|(p, _)| p == id)
                .and_then(F::parameter)
                .map(DensePoly::constant)
                .ok_or_else(|| self.non_polynomial(expr)),

            ExprNode::ImaginaryUnit => F::imaginary_unit()
                .map(DensePoly::constant)
                .ok_or_else(|| self.non_polynomial(expr)),

            ExprNode::Add(args) => args.iter().try_fold(DensePoly::<F>::zero(), |acc, arg| {
                Ok(acc.add(&self.to_polynomial(*arg)?))
            }),

            ExprNode::Mul(args) => args.iter().try_fold(DensePoly::<F>::one(), |acc, arg| {
                Ok(acc.mul(&self.to_polynomial(*arg)?))
            }),

            ExprNode::Pow { base, exp } => {
                let n = self
                    .integer_exponent(*exp)
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| self.non_polynomial(expr))?;
                Ok(self.to_polynomial::<F>(*base)?.pow(n))
            }

            ExprNode::Neg(arg) => Ok(self.to_polynomial::<F>(*arg)?.neg()),

            ExprNode::Div { num, den } => {
                let den_poly = self.to_polynomial::<F>(*den)?;
                if !den_poly.is_constant() {
                    return Err(self.non_polynomial(expr));
                }
                let inv = den_poly
                    .leading_coeff()
                    .inv()
                    .ok_or(IntegrationError::ZeroDenominator)?;
                Ok(self.to_polynomial::<F>(*num)?.scale(&inv))
            }

            ExprNode::Dummy { .. }
            | ExprNode::Function { .. }
            | ExprNode::RootSum { .. } => Err(self.non_polynomial(expr)),
        }
    }

    /// Reads a fraction of polynomials in the variable.
    ///
    /// Like [`to_polynomial`](Self::to_polynomial) but also accepts
    /// arbitrary division and negative integer powers. No common factors
    /// are cancelled.
    ///
    /// # Errors
    ///
    /// `NonPolynomial` for anything else, `ZeroDenominator` when a divisor
    /// is identically zero.
    pub fn to_fraction<F: ExprConstant>(&self, expr: ExprHandle) -> Result<Fraction<F>, IntegrationError> {
        match self.arena.get(expr) {
            ExprNode::Add(args) => args.iter().try_fold(
                (DensePoly::<F>::zero(), DensePoly::<F>::one()),
                |(a, b), arg| {
                    let (c, d) = self.to_fraction::<F>(*arg)?;
                    Ok((a.mul(&d).add(&c.mul(&b)), b.mul(&d)))
                },
            ),

            ExprNode::Mul(args) => args.iter().try_fold(
                (DensePoly::<F>::one(), DensePoly::<F>::one()),
                |(a, b), arg| {
                    let (c, d) = self.to_fraction::<F>(*arg)?;
                    Ok((a.mul(&c), b.mul(&d)))
                },
            ),

            ExprNode::Neg(arg) => {
                let (a, b) = self.to_fraction::<F>(*arg)?;
                Ok((a.neg(), b))
            }

            ExprNode::Div { num, den } => {
                let (a, b) = self.to_fraction::<F>(*num)?;
                let (c, d) = self.to_fraction::<F>(*den)?;
                if c.is_zero() {
                    return Err(IntegrationError::ZeroDenominator);
                }
                Ok((a.mul(&d), b.mul(&c)))
            }

            ExprNode::Pow { base, exp } => {
                let n = self
                    .integer_exponent(*exp)
                    .ok_or_else(|| self.non_polynomial(expr))?;
                let k = u32::try_from(n.unsigned_abs()).map_err(|_| self.non_polynomial(expr))?;
                let (a, b) = self.to_fraction::<F>(*base)?;
                if n >= 0 {
                    Ok((a.pow(k), b.pow(k)))
                } else if a.is_zero() {
                    Err(IntegrationError::ZeroDenominator)
                } else {
                    Ok((b.pow(k), a.pow(k)))
                }
            }

            _ => Ok((self.to_polynomial(expr)?, DensePoly::one())),
        }
    }

    // === Backend Types -> ExprHandle ===

    /// Writes a polynomial in `var`, highest degree first.
    pub fn poly_to_expr<F: ExprConstant>(&mut self, p: &DensePoly<F>, var: ExprHandle) -> ExprHandle {
        let parameters = self.parameter_handles();
        let terms = monomial_terms(self.arena, &parameters, p, var);
        self.arena.add(terms)
    }

    /// Writes a polynomial in the integration variable.
    pub fn from_polynomial<F: ExprConstant>(&mut self, p: &DensePoly<F>) -> ExprHandle {
        self.poly_to_expr(p, self.var_handle)
    }

    /// The summands of a polynomial in the integration variable.
    pub fn polynomial_terms<F: ExprConstant>(&mut self, p: &DensePoly<F>) -> SmallVec<[ExprHandle; 4]> {
        let parameters = self.parameter_handles();
        monomial_terms(self.arena, &parameters, p, self.var_handle)
    }

    /// Writes a polynomial in x with coefficients in F[t], where `t` is the
    /// bound variable.
    pub fn bivariate_to_expr<F: ExprConstant>(&mut self, p: &Bivariate<F>, t: ExprHandle) -> ExprHandle {
        let parameters = self.parameter_handles();
        let mut terms: SmallVec<[ExprHandle; 4]> = SmallVec::new();
        for (k, coeff) in p.coeffs().iter().enumerate().rev() {
            let x_power = power_of(self.arena, self.var_handle, k);
            for (j, c) in coeff.coeffs().iter().enumerate().rev() {
                if c.is_zero() {
                    continue;
                }
                let factors: SmallVec<[ExprHandle; 2]> =
                    power_of(self.arena, t, j).into_iter().chain(x_power).collect();
                terms.push(scaled_product(self.arena, &parameters, c, &factors));
            }
        }
        self.arena.add(terms)
    }

    /// Writes a rational function; a unit denominator is omitted.
    pub fn from_rational_function<F: ExprConstant>(&mut self, rf: &RationalFunction<F>) -> ExprHandle {
        let num = self.from_polynomial(rf.numerator());
        if rf.is_polynomial() {
            return num;
        }
        let den = self.from_polynomial(rf.denominator());
        self.arena.div(num, den)
    }

    /// c · f(arg) for a named unary function.
    pub fn scaled_call<F: ExprConstant>(&mut self, c: &F, call: ExprHandle) -> ExprHandle {
        let parameters = self.parameter_handles();
        scaled_product(self.arena, &parameters, c, &[call])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| q(n)).collect())
    }

    #[test]
    fn test_polynomial_round_trip_display() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let mut conv = ExprConverter::new(&mut arena, x).unwrap();

        let p = poly(&[6, 12]);
        let e = conv.from_polynomial(&p);
        assert_eq!(conv.to_polynomial::<Q>(e).unwrap(), p);
        assert_eq!(arena.display(e).to_string(), "12*x + 6");
    }

    #[test]
    fn test_reads_powers_and_constant_division() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let one = arena.integer(1);
        let two = arena.integer(2);
        let base = arena.add([x, one].as_slice());
        let sq = arena.pow(base, two);
        let half = arena.div(sq, two);

        let conv = ExprConverter::new(&mut arena, x).unwrap();
        assert_eq!(
            conv.to_polynomial::<Q>(half).unwrap(),
            DensePoly::new(vec![Q::new(1, 2), q(1), Q::new(1, 2)])
        );
    }

    #[test]
    fn test_rejects_other_symbols() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let y = arena.symbol("y");
        let sum = arena.add([x, y].as_slice());

        let conv = ExprConverter::new(&mut arena, x).unwrap();
        assert_eq!(
            conv.to_polynomial::<Q>(sum),
            Err(IntegrationError::NonPolynomial("y".into()))
        );
    }

    #[test]
    fn test_variable_must_be_symbol() {
        let mut arena = ExprArena::new();
        let two = arena.integer(2);
        assert!(matches!(
            ExprConverter::new(&mut arena, two),
            Err(IntegrationError::NotASymbol)
        ));
    }

    #[test]
    fn test_imaginary_unit_needs_gaussian_field() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let i = arena.imaginary_unit();
        let e = arena.add([x, i].as_slice());

        let conv = ExprConverter::new(&mut arena, x).unwrap();
        assert!(conv.to_polynomial::<Q>(e).is_err());
        let p = conv.to_polynomial::<GaussianRational>(e).unwrap();
        assert_eq!(p.coeff(0), GaussianRational::i());
    }

    #[test]
    fn test_fraction_with_negative_power() {
        // 1/x + x^-1 = 2/x
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let one = arena.integer(1);
        let minus_one = arena.integer(-1);
        let recip = arena.div(one, x);
        let inv = arena.pow(x, minus_one);
        let sum = arena.add([recip, inv].as_slice());

        let conv = ExprConverter::new(&mut arena, x).unwrap();
        let (num, den) = conv.to_fraction::<Q>(sum).unwrap();
        assert_eq!(
            RationalFunction::new(num, den),
            RationalFunction::new(poly(&[2]), poly(&[0, 1]))
        );
    }

    #[test]
    fn test_zero_divisor() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let zero = arena.integer(0);
        let e = arena.div(x, zero);

        let conv = ExprConverter::new(&mut arena, x).unwrap();
        assert_eq!(conv.to_fraction::<Q>(e), Err(IntegrationError::ZeroDenominator));
    }

    #[test]
    fn test_bivariate_display() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let t = arena.dummy("t", 0);
        let mut conv = ExprConverter::new(&mut arena, x).unwrap();

        // x - 3/8 t - 1/2
        let h: Bivariate<Q> = DensePoly::new(vec![
            DensePoly::new(vec![Q::new(-1, 2), Q::new(-3, 8)]),
            poly(&[1]),
        ]);
        let e = conv.bivariate_to_expr(&h, t);
        assert_eq!(arena.display(e).to_string(), "x - 3/8*t - 1/2");
    }

    #[test]
    fn test_gaussian_coefficients() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let mut conv = ExprConverter::new(&mut arena, x).unwrap();

        // -i·x + (1 + i)
        let p = DensePoly::new(vec![
            GaussianRational::from_i64((1, 1), (1, 1)),
            GaussianRational::from_i64((0, 1), (-1, 1)),
        ]);
        let e = conv.from_polynomial(&p);
        assert_eq!(arena.display(e).to_string(), "-I*x + 1 + I");
    }

    #[test]
    fn test_exponent_cap() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let big = arena.integer(i64::from(MAX_EXPONENT) + 1);
        let minus_big = arena.integer(-i64::from(MAX_EXPONENT) - 1);
        let three = arena.integer(3);
        let huge = arena.pow(x, big);
        let tiny = arena.pow(x, minus_big);
        let cube = arena.pow(x, three);

        let conv = ExprConverter::new(&mut arena, x).unwrap();
        assert_eq!(
            conv.to_polynomial::<Q>(huge),
            Err(IntegrationError::NonPolynomial("x^10001".into()))
        );
        assert!(matches!(
            conv.to_fraction::<Q>(tiny),
            Err(IntegrationError::NonPolynomial(_))
        ));
        assert_eq!(conv.to_polynomial::<Q>(cube).unwrap(), poly(&[0, 0, 0, 1]));
    }

    #[test]
    fn test_radical_coefficients() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let mut conv = ExprConverter::new(&mut arena, x).unwrap();

        let half_root_two = RealQuadratic::new(Rational::from(0), Rational::from_i64(1, 2), 2.into());
        let call = conv.arena().atan(x);
        let e = conv.scaled_call(&half_root_two, call);
        assert_eq!(conv.arena().display(e).to_string(), "1/2*sqrt(2)*atan(x)");

        let one_minus_root_two = RealQuadratic::new(Rational::from(1), Rational::from(-1), 2.into());
        let call = conv.arena().log(x);
        let e = conv.scaled_call(&one_minus_root_two, call);
        assert_eq!(conv.arena().display(e).to_string(), "(1 - sqrt(2))*log(x)");

        // √3·x - 1
        let p = DensePoly::new(vec![
            RealQuadratic::rational(Rational::from(-1)),
            RealQuadratic::new(Rational::from(0), Rational::from(1), 3.into()),
        ]);
        let e = conv.from_polynomial(&p);
        assert_eq!(arena.display(e).to_string(), "sqrt(3)*x - 1");
    }

    #[test]
    fn test_parameters_read_and_written() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let a = arena.symbol("a");
        let two = arena.integer(2);
        let x2 = arena.pow(x, two);
        let ax = arena.mul([a, x].as_slice());
        let e = arena.add([x2, ax].as_slice());

        let conv = ExprConverter::new(&mut arena, x).unwrap();
        assert!(conv.to_polynomial::<Q>(e).is_err());

        let mut conv = ExprConverter::new(&mut arena, x).unwrap().with_parameters(&[a]).unwrap();
        let p = conv.to_polynomial::<RationalFunction<Q>>(e).unwrap();
        let a_rf = RationalFunction::from_poly(poly(&[0, 1]));
        assert_eq!(
            p,
            DensePoly::new(vec![RationalFunction::zero(), a_rf, RationalFunction::one()])
        );

        // 1/(4a), -1/(4a) and (a + 1)/(a - 2)
        let quarter_over_a = RationalFunction::new(poly(&[1]), poly(&[0, 4]));
        let written = conv.from_polynomial(&DensePoly::constant(quarter_over_a.clone()));
        assert_eq!(conv.arena().display(written).to_string(), "1/(4*a)");
        let written = conv.from_polynomial(&DensePoly::constant(quarter_over_a.neg()));
        assert_eq!(conv.arena().display(written).to_string(), "-1/(4*a)");
        let ratio = RationalFunction::new(poly(&[1, 1]), poly(&[-2, 1]));
        let written = conv.from_polynomial(&DensePoly::constant(ratio));
        assert_eq!(arena.display(written).to_string(), "(a + 1)/(a - 2)");
    }

    #[test]
    fn test_parameter_must_be_symbol() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let two = arena.integer(2);
        let conv = ExprConverter::new(&mut arena, x).unwrap();
        assert!(matches!(
            conv.with_parameters(&[two]),
            Err(IntegrationError::NotASymbol)
        ));
    }
}
