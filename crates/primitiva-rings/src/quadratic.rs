//! Real quadratic numbers a + b·√d.
//!
//! An element carries its own radicand, so one type covers every real
//! quadratic field Q(√d). The integrator lifts a logarithmic part into this
//! type when its real roots are irrational but of degree two.
//!
//! Arithmetic between two irrational elements requires a common radicand.
//! Comparison does not: the ordering is the real ordering of the numbers and
//! is decided exactly by comparing squares.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use primitiva_integers::{Integer, Rational};

use crate::traits::{
    CommutativeRing, ConstantField, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring,
};

/// Trial divisions spent on squarefree parts of radicands.
pub const RADICAND_TRIALS: u64 = 100_000;

/// A real number a + b·√d with a, b rational.
///
/// Invariant: either b = 0 and d = 1, or b ≠ 0 and d > 1 is squarefree.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RealQuadratic {
    a: Rational,
    b: Rational,
    d: Integer,
}

impl RealQuadratic {
    /// Creates a + b·√d.
    ///
    /// `d` must be squarefree; it is ignored when `b` is zero.
    ///
    /// # Panics
    ///
    /// Panics if `b` is nonzero and `d` is not greater than one.
    #[must_use]
    pub fn new(a: Rational, b: Rational, d: Integer) -> Self {
        if b.is_zero() {
            return Self::rational(a);
        }
        assert!(d > Integer::one(), "radicand must be greater than one");
        Self { a, b, d }
    }

    /// Embeds a rational number.
    #[must_use]
    pub fn rational(a: Rational) -> Self {
        Self { a, b: Rational::zero(), d: Integer::one() }
    }

    /// The square root of a nonnegative rational.
    ///
    /// Returns `None` for negative input or when the squarefree part of the
    /// radicand cannot be determined within [`RADICAND_TRIALS`].
    #[must_use]
    pub fn sqrt_rational(r: &Rational) -> Option<Self> {
        if r.is_negative() {
            return None;
        }
        if r.is_zero() {
            return Some(Self::zero());
        }
        // √(n/m) = √(n·m)/m
        let m = r.denominator();
        let (s, d) = (r.numerator() * &m).square_split(RADICAND_TRIALS)?;
        let b = Rational::new(s, m);
        if d.is_one() {
            Some(Self::rational(b))
        } else {
            Some(Self::new(Rational::zero(), b, d))
        }
    }

    /// The rational part a.
    #[must_use]
    pub fn rational_part(&self) -> &Rational {
        &self.a
    }

    /// The coefficient b of √d.
    #[must_use]
    pub fn radical_part(&self) -> &Rational {
        &self.b
    }

    /// The radicand d, or `None` for a rational element.
    #[must_use]
    pub fn radicand(&self) -> Option<&Integer> {
        (!self.b.is_zero()).then_some(&self.d)
    }

    /// The conjugate a - b·√d.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self { a: self.a.clone(), b: -&self.b, d: self.d.clone() }
    }

    /// The norm a² - b²·d.
    #[must_use]
    pub fn norm(&self) -> Rational {
        &self.a * &self.a - &self.b * &self.b * &Rational::from(self.d.clone())
    }

    /// A square root in the same quadratic field, if there is one.
    #[must_use]
    pub fn sqrt(&self) -> Option<Self> {
        if self.b.is_zero() {
            return Self::sqrt_rational(&self.a);
        }
        // (x + y√d)² = a + b√d needs x² = (a ± √norm)/2 and y = b/(2x)
        let r = Self::sqrt_rational(&self.norm())?.to_rational()?;
        let two = Rational::from(2);
        for half in [(&self.a + &r) / &two, (&self.a - &r) / &two] {
            let Some(x) = Self::sqrt_rational(&half).and_then(|x| x.to_rational()) else {
                continue;
            };
            if x.is_zero() {
                continue;
            }
            let y = &self.b / &(&two * &x);
            let candidate = Self::new(x, y, self.d.clone());
            if candidate.signum() > 0 {
                return Some(candidate);
            }
            return Some(-candidate);
        }
        None
    }

    fn radicand_with(&self, other: &Self) -> Integer {
        match (self.radicand(), other.radicand()) {
            (Some(d), Some(e)) => {
                assert_eq!(d, e, "mixed quadratic radicands");
                d.clone()
            }
            (Some(d), None) | (None, Some(d)) => d.clone(),
            (None, None) => Integer::one(),
        }
    }

    fn normalized(a: Rational, b: Rational, d: Integer) -> Self {
        if b.is_zero() {
            Self::rational(a)
        } else {
            Self { a, b, d }
        }
    }
}

/// The sign of p + m·√e for e ≥ 0.
fn sign_with_root(p: &Rational, m: &Rational, e: &Integer) -> Ordering {
    let sp = p.signum().cmp(&0);
    let sm = if e.is_zero() { Ordering::Equal } else { m.signum().cmp(&0) };
    if sm == Ordering::Equal {
        return sp;
    }
    if sp == Ordering::Equal || sp == sm {
        return sm;
    }
    let e = Rational::from(e.clone());
    match (p * p).cmp(&(m * m * &e)) {
        Ordering::Greater => sp,
        Ordering::Less => sm,
        Ordering::Equal => Ordering::Equal,
    }
}

/// The sign of p + m·√e + n·√f for e, f ≥ 0.
fn sign_with_two_roots(p: &Rational, m: &Rational, e: &Integer, n: &Rational, f: &Integer) -> Ordering {
    let e_q = Rational::from(e.clone());
    let f_q = Rational::from(f.clone());
    // sign of s = m√e + n√f
    let sm = if e.is_zero() { Ordering::Equal } else { m.signum().cmp(&0) };
    let sn = if f.is_zero() { Ordering::Equal } else { n.signum().cmp(&0) };
    let ss = match (sm, sn) {
        (Ordering::Equal, s) | (s, Ordering::Equal) => s,
        (s, t) if s == t => s,
        (s, t) => match (m * m * &e_q).cmp(&(n * n * &f_q)) {
            Ordering::Greater => s,
            Ordering::Less => t,
            Ordering::Equal => Ordering::Equal,
        },
    };
    let sp = p.signum().cmp(&0);
    if ss == Ordering::Equal {
        return sp;
    }
    if sp == Ordering::Equal || sp == ss {
        return ss;
    }
    // p² - s² = (p² - m²e - n²f) - 2mn√(ef)
    let rest = p * p - m * m * &e_q - n * n * &f_q;
    let cross = -(Rational::from(2) * m * n);
    match sign_with_root(&rest, &cross, &(e * f)) {
        Ordering::Greater => sp,
        Ordering::Less => ss,
        Ordering::Equal => Ordering::Equal,
    }
}

impl Ord for RealQuadratic {
    fn cmp(&self, other: &Self) -> Ordering {
        let p = &self.a - &other.a;
        if self.d == other.d {
            return sign_with_root(&p, &(&self.b - &other.b), &self.d);
        }
        sign_with_two_roots(&p, &self.b, &self.d, &-&other.b, &other.d)
    }
}

impl PartialOrd for RealQuadratic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for RealQuadratic {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ring for RealQuadratic {
    fn zero() -> Self {
        Self::rational(Rational::zero())
    }

    fn one() -> Self {
        Self::rational(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    fn is_one(&self) -> bool {
        self.a.is_one() && self.b.is_zero()
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        let n = Rational::from(n);
        Self::normalized(&self.a * &n, &self.b * &n, self.d.clone())
    }
}

impl CommutativeRing for RealQuadratic {}
impl IntegralDomain for RealQuadratic {}

impl EuclideanDomain for RealQuadratic {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (self.field_div(other), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        match (self.inv(), other.inv()) {
            (Some(inv), _) => (Self::one(), inv, Self::zero()),
            (None, Some(inv)) => (Self::one(), Self::zero(), inv),
            (None, None) => (Self::zero(), Self::zero(), Self::zero()),
        }
    }
}

impl Field for RealQuadratic {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // d is not a square, so the norm of a nonzero element is nonzero
        let n = self.norm();
        Some(Self::normalized(&self.a / &n, -(&self.b / &n), self.d.clone()))
    }
}

impl OrderedRing for RealQuadratic {
    fn abs(&self) -> Self {
        if self.signum() < 0 {
            -self.clone()
        } else {
            self.clone()
        }
    }

    fn signum(&self) -> i8 {
        match sign_with_root(&self.a, &self.b, &self.d) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl ConstantField for RealQuadratic {
    fn from_rational(r: Rational) -> Self {
        Self::rational(r)
    }

    fn real_part(&self) -> Self {
        self.clone()
    }

    fn imag_part(&self) -> Self {
        Self::zero()
    }

    fn real_sign(&self) -> Option<Ordering> {
        Some(self.signum().cmp(&0))
    }

    fn to_rational(&self) -> Option<Rational> {
        self.b.is_zero().then(|| self.a.clone())
    }
}

impl Add for RealQuadratic {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let d = self.radicand_with(&rhs);
        Self::normalized(self.a + rhs.a, self.b + rhs.b, d)
    }
}

impl Sub for RealQuadratic {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let d = self.radicand_with(&rhs);
        Self::normalized(self.a - rhs.a, self.b - rhs.b, d)
    }
}

impl Mul for RealQuadratic {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let d = self.radicand_with(&rhs);
        let dq = Rational::from(d.clone());
        let a = &self.a * &rhs.a + &self.b * &rhs.b * &dq;
        let b = &self.a * &rhs.b + &self.b * &rhs.a;
        Self::normalized(a, b, d)
    }
}

impl Neg for RealQuadratic {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { a: -self.a, b: -self.b, d: self.d }
    }
}

impl From<Rational> for RealQuadratic {
    fn from(value: Rational) -> Self {
        Self::rational(value)
    }
}

impl fmt::Debug for RealQuadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RealQuadratic({self})")
    }
}

impl fmt::Display for RealQuadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.b.is_zero() {
            return write!(f, "{}", self.a);
        }
        let radical = if self.b.abs().is_one() {
            format!("sqrt({})", self.d)
        } else {
            format!("{}*sqrt({})", self.b.abs(), self.d)
        };
        match (self.a.is_zero(), self.b.is_negative()) {
            (true, false) => write!(f, "{radical}"),
            (true, true) => write!(f, "-{radical}"),
            (false, false) => write!(f, "({} + {radical})", self.a),
            (false, true) => write!(f, "({} - {radical})", self.a),
        }
    }
}
