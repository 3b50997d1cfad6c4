//! Per-call integration state.
//!
//! Everything an integration call allocates (Hermite unknowns, the real or
//! complex output mode) lives here and dies with the call, so repeated or
//! nested integrations never observe each other's unknowns.

use primitiva_linalg::UnknownPool;
use primitiva_poly::dense::DensePoly;
use primitiva_rings::traits::ConstantField;

use crate::options::RationalIntegrationOptions;

/// Whether transcendental terms are expressed over the reals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Real logarithms and arctangents where they can be certified.
    Real,
    /// Formal root sums of complex logarithms.
    Complex,
}

impl Mode {
    /// Decides the mode once per call.
    ///
    /// An explicit `options.real` wins; otherwise the output is real iff
    /// every coefficient of `p` and `q` is real.
    pub fn decide<F: ConstantField>(
        options: &RationalIntegrationOptions,
        p: &DensePoly<F>,
        q: &DensePoly<F>,
    ) -> Self {
        let real = options.real.unwrap_or_else(|| {
            p.coeffs()
                .iter()
                .chain(q.coeffs())
                .all(ConstantField::is_real)
        });
        if real {
            Mode::Real
        } else {
            Mode::Complex
        }
    }
}

/// State owned by one top-level integration call.
#[derive(Debug)]
pub struct IntegrationContext {
    unknowns: UnknownPool,
    mode: Mode,
}

impl IntegrationContext {
    /// Creates the context for a fresh call.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            unknowns: UnknownPool::new(),
            mode,
        }
    }

    /// The output mode decided for this call.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Source of linear-system unknowns for this call.
    pub fn unknowns(&mut self) -> &mut UnknownPool {
        &mut self.unknowns
    }
}
