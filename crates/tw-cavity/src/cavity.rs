//! Travelling wave cavity model.

use crate::common::{
    DETUNING_EPSILON, MAX_CARRIER_OFFSET, check_finite, check_positive, grid_spacing,
};
use crate::error::{CavityError, CavityResult};
use crate::response::ImpulseResponse;
use crate::traits::WakeSource;
use crate::window::{rectangle, triangle};
use tracing::debug;
use tw_core::numeric::{Real, relative_offset};
use tw_core::units::{
    AngularVelocity, Length, Ratio, Resistance, Time, constants, m, ohm, s, unitless,
};

/// Impulse responses of a travelling wave cavity.
///
/// For the **cavity-to-beam** response, with series impedance `rho`,
/// interaction length `l` and filling time `tau`:
///
/// ```text
/// R_b    = rho l^2 / 8
/// W_b(t) = 4 R_b / tau * tri(t/tau) cos(omega_r t)
/// h_s,b  = 2 R_b / tau * tri(t/tau) cos((omega_c - omega_r) t)
/// h_c,b  = 2 R_b / tau * tri(t/tau) sin((omega_c - omega_r) t)
/// ```
///
/// For the **cavity-to-generator** response, with `Z_0` the impedance of the
/// generator current measurement (50 Ohm):
///
/// ```text
/// R_g    = l sqrt(rho Z_0 / 2)
/// W_g(t) = 2 R_g / tau * rect(t/tau) cos(omega_r t)
/// h_s,g  = R_g / tau * rect(t/tau) cos((omega_c - omega_r) t)
/// h_c,g  = R_g / tau * rect(t/tau) sin((omega_c - omega_r) t)
/// ```
///
/// The model is immutable once built; every call to
/// [`impulse_response`](Self::impulse_response) returns a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub struct TravellingWaveCavity {
    cell_length: Length,
    n_cells: u32,
    /// Series impedance [Ohm/m^2]
    series_impedance: Real,
    group_velocity: Ratio,
    omega_r: AngularVelocity,

    // Derived
    cavity_length: Length,
    filling_time: Time,
    r_beam: Resistance,
    r_gen: Resistance,
}

impl TravellingWaveCavity {
    /// Build a cavity from its geometry.
    ///
    /// # Arguments
    ///
    /// * `cell_length` - Length of one accelerating cell
    /// * `n_cells` - Number of interacting cells
    /// * `series_impedance` - Series impedance [Ohm/m^2]
    /// * `group_velocity` - Group velocity as a fraction of c, in (0, 1)
    /// * `omega_r` - Central (resonance) angular frequency
    pub fn new(
        cell_length: Length,
        n_cells: u32,
        series_impedance: Real,
        group_velocity: Real,
        omega_r: AngularVelocity,
    ) -> CavityResult<Self> {
        if !(group_velocity > 0.0 && group_velocity < 1.0) {
            return Err(CavityError::InvalidGroupVelocity {
                value: group_velocity,
            });
        }
        check_positive(cell_length.value, "cell length")?;
        check_positive(series_impedance, "series impedance")?;
        check_positive(omega_r.value, "central angular frequency")?;
        if n_cells == 0 {
            return Err(CavityError::NonPhysical {
                what: "number of cells",
            });
        }

        let l_cav = cell_length.value * Real::from(n_cells);
        // The wave travels against the beam, hence (1 + v_g).
        let tau = l_cav / (group_velocity * constants::C_MPS) * (1.0 + group_velocity);
        let r_beam = 0.125 * series_impedance * l_cav * l_cav;
        let r_gen = l_cav * (0.5 * series_impedance * constants::Z0_OHM).sqrt();
        check_finite(tau, "filling time")?;

        debug!(
            cavity_length_m = l_cav,
            filling_time_s = tau,
            r_beam_ohm = r_beam,
            r_gen_ohm = r_gen,
            "travelling wave cavity initialized"
        );

        Ok(Self {
            cell_length,
            n_cells,
            series_impedance,
            group_velocity: unitless(group_velocity),
            omega_r,
            cavity_length: m(l_cav),
            filling_time: s(tau),
            r_beam: ohm(r_beam),
            r_gen: ohm(r_gen),
        })
    }

    pub fn cell_length(&self) -> Length {
        self.cell_length
    }

    pub fn n_cells(&self) -> u32 {
        self.n_cells
    }

    /// Series impedance [Ohm/m^2].
    pub fn series_impedance(&self) -> Real {
        self.series_impedance
    }

    pub fn group_velocity(&self) -> Ratio {
        self.group_velocity
    }

    pub fn omega_r(&self) -> AngularVelocity {
        self.omega_r
    }

    /// Length of the interaction region.
    pub fn cavity_length(&self) -> Length {
        self.cavity_length
    }

    pub fn filling_time(&self) -> Time {
        self.filling_time
    }

    /// Impedance of the generator current measurement.
    pub fn reference_impedance(&self) -> Resistance {
        constants::z0()
    }

    /// Shunt impedance towards the beam, `rho l^2 / 8`.
    pub fn r_beam(&self) -> Resistance {
        self.r_beam
    }

    /// Shunt impedance towards the generator, `l sqrt(rho Z_0 / 2)`.
    pub fn r_gen(&self) -> Resistance {
        self.r_gen
    }

    /// Impulse response towards the beam and the generator for a signal I,Q
    /// demodulated at carrier `omega_c` [rad/s], sampled on `time` [s].
    ///
    /// The formulae assume `omega_c` close to `omega_r` and a low-pass
    /// filtered signal; offsets above 10% are rejected. `time` must be
    /// ascending and uniformly spaced.
    pub fn impulse_response(&self, omega_c: Real, time: &[Real]) -> CavityResult<ImpulseResponse> {
        check_finite(omega_c, "carrier frequency")?;
        let omega_r = self.omega_r.value;
        let offset = relative_offset(omega_c, omega_r);
        if offset.abs() > MAX_CARRIER_OFFSET {
            return Err(CavityError::CarrierOutOfRange {
                relative_offset: offset,
            });
        }
        grid_spacing(time)?;

        let tau = self.filling_time.value;
        let d_omega = omega_c - omega_r;

        let t0 = time[0];
        let t_beam: Vec<Real> = time.iter().map(|t| t - t0).collect();
        let t_gen: Vec<Real> = time.iter().map(|t| t - t0 - 0.5 * tau).collect();

        let r_beam = self.r_beam.value;
        let r_gen = self.r_gen.value;

        // On-carrier responses
        let beam_scale = 2.0 * r_beam / tau;
        let mut hs_beam = triangle(&t_beam, tau)?;
        hs_beam.iter_mut().for_each(|h| *h *= beam_scale);
        let gen_scale = r_gen / tau;
        let mut hs_gen = rectangle(&t_gen, tau)?;
        hs_gen.iter_mut().for_each(|h| *h *= gen_scale);

        let w_beam = modulate(&hs_beam, &t_beam, omega_r);
        let w_gen = modulate(&hs_gen, &t_gen, omega_r);

        let (hc_beam, hc_gen) = if offset.abs() > DETUNING_EPSILON {
            debug!(d_omega, "rotating impulse response into quadrature");
            (
                Some(rotate(&mut hs_beam, &t_beam, d_omega)),
                Some(rotate(&mut hs_gen, &t_gen, d_omega)),
            )
        } else {
            (None, None)
        };

        Ok(ImpulseResponse {
            omega_c,
            d_omega,
            r_beam,
            r_gen,
            t_beam,
            t_gen,
            hs_beam,
            hc_beam,
            hs_gen,
            hc_gen,
            w_beam,
            w_gen,
        })
    }
}

impl WakeSource for TravellingWaveCavity {
    fn filling_time(&self) -> Time {
        self.filling_time
    }

    fn omega_r(&self) -> AngularVelocity {
        self.omega_r
    }

    fn impulse_response(&self, omega_c: Real, time: &[Real]) -> CavityResult<ImpulseResponse> {
        TravellingWaveCavity::impulse_response(self, omega_c, time)
    }
}

/// `2 h(t) cos(omega t)`
fn modulate(h: &[Real], t: &[Real], omega: Real) -> Vec<Real> {
    h.iter()
        .zip(t)
        .map(|(h, t)| 2.0 * h * (omega * t).cos())
        .collect()
}

/// Rotate `hs` by `d_omega t` in place and return the quadrature part.
fn rotate(hs: &mut [Real], t: &[Real], d_omega: Real) -> Vec<Real> {
    hs.iter_mut()
        .zip(t)
        .map(|(h, t)| {
            let (sin, cos) = (d_omega * t).sin_cos();
            let hc = *h * sin;
            *h *= cos;
            hc
        })
        .collect()
}
