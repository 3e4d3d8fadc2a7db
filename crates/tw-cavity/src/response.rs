//! Impulse response bundle returned by the cavity model.

use tw_core::numeric::Real;

/// Cavity impulse responses towards the beam and towards the generator for an
/// I,Q signal demodulated at `omega_c`.
///
/// The induced voltage follows from the current by convolution,
///
/// ```text
/// | V_I |   | h_s  -h_c |   | I_I |
/// |     | = |           | * |     |
/// | V_Q |   | h_c   h_s |   | I_Q |
/// ```
///
/// where `h_c` vanishes on resonance. All arrays are aligned with the time
/// grid the response was computed on. Units are Ohm/s.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpulseResponse {
    /// Carrier angular frequency [rad/s].
    pub omega_c: Real,
    /// `omega_c - omega_r` [rad/s].
    pub d_omega: Real,
    /// Shunt impedance towards the beam [Ohm].
    pub r_beam: Real,
    /// Shunt impedance towards the generator [Ohm].
    pub r_gen: Real,
    /// Beam-side time axis, starting at zero [s].
    pub t_beam: Vec<Real>,
    /// Generator-side time axis, starting at minus half the filling time [s].
    pub t_gen: Vec<Real>,
    /// In-phase response towards the beam.
    pub hs_beam: Vec<Real>,
    /// Quadrature response towards the beam; `None` on resonance.
    pub hc_beam: Option<Vec<Real>>,
    /// In-phase response towards the generator.
    pub hs_gen: Vec<Real>,
    /// Quadrature response towards the generator; `None` on resonance.
    pub hc_gen: Option<Vec<Real>>,
    /// Cavity-to-beam wake, `2 hs_beam cos(omega_r t_beam)` before rotation.
    pub w_beam: Vec<Real>,
    /// Cavity-to-generator wake, `2 hs_gen cos(omega_r t_gen)` before rotation.
    pub w_gen: Vec<Real>,
}

impl ImpulseResponse {
    /// True when the carrier is detuned and quadrature terms are present.
    pub fn is_detuned(&self) -> bool {
        self.hc_beam.is_some()
    }

    /// Number of samples in every array.
    pub fn len(&self) -> usize {
        self.hs_beam.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hs_beam.is_empty()
    }

    /// Largest |h_s| towards the beam.
    pub fn peak_beam(&self) -> Real {
        peak_abs(&self.hs_beam)
    }

    /// Largest |h_s| towards the generator.
    pub fn peak_gen(&self) -> Real {
        peak_abs(&self.hs_gen)
    }

    /// Largest |h_c| towards the beam, if the carrier is detuned.
    pub fn peak_quadrature_beam(&self) -> Option<Real> {
        self.hc_beam.as_deref().map(peak_abs)
    }

    /// Largest |h_c| towards the generator, if the carrier is detuned.
    pub fn peak_quadrature_gen(&self) -> Option<Real> {
        self.hc_gen.as_deref().map(peak_abs)
    }
}

fn peak_abs(y: &[Real]) -> Real {
    y.iter().fold(0.0, |acc: Real, v| acc.max(v.abs()))
}
