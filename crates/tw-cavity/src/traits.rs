//! Core traits for wake models.

use crate::error::CavityResult;
use crate::response::ImpulseResponse;
use tw_core::numeric::Real;
use tw_core::units::{AngularVelocity, Time};

/// Anything that can supply an impulse response to an induced-voltage
/// calculation.
///
/// Implementations are deterministic functions of their parameters and the
/// requested carrier/grid, suitable for concurrent evaluation.
pub trait WakeSource: Send + Sync {
    /// Time after which the response has decayed to zero.
    fn filling_time(&self) -> Time;

    /// Central (resonance) angular frequency.
    fn omega_r(&self) -> AngularVelocity;

    /// Impulse response for a signal I,Q demodulated at `omega_c` [rad/s],
    /// sampled on the ascending uniform grid `time` [s].
    fn impulse_response(&self, omega_c: Real, time: &[Real]) -> CavityResult<ImpulseResponse>;

    /// Impulse response with the carrier sitting on the central frequency.
    fn impulse_response_on_resonance(&self, time: &[Real]) -> CavityResult<ImpulseResponse> {
        self.impulse_response(self.omega_r().value, time)
    }
}
