//! Options for rational integration.

/// Options for rational integration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalIntegrationOptions {
    /// Display name of the bound variable in root sums.
    pub symbol_name: String,
    /// Force a real (`Some(true)`) or complex (`Some(false)`) result.
    ///
    /// When unset, the result is real iff every coefficient of the input is
    /// real.
    pub real: Option<bool>,
}

impl Default for RationalIntegrationOptions {
    fn default() -> Self {
        Self {
            symbol_name: "t".to_string(),
            real: None,
        }
    }
}

impl RationalIntegrationOptions {
    /// Sets the bound-variable name.
    #[must_use]
    pub fn with_symbol_name(mut self, name: impl Into<String>) -> Self {
        self.symbol_name = name.into();
        self
    }

    /// Forces real or complex output.
    #[must_use]
    pub fn with_real(mut self, real: bool) -> Self {
        self.real = Some(real);
        self
    }
}
