/// microns per centimetre. a wavenumber in cm⁻¹ and a wavelength in µm are
/// related by λ = WVN_TO_MICRONS / ν̃ in both directions
pub const WVN_TO_MICRONS: f64 = 1e6 * 1e-2;

/// units used for wavelengths in the table and on the chart axis
pub const UNITS: &str = "microns";

/// default highest harmonic order for the overtone series
pub const DEFAULT_MAX_ORDER: usize = 2;

/// bar width on the chart is the wavelength divided by this factor
pub(crate) const BAR_WIDTH_DIVISOR: f64 = 150.0;
