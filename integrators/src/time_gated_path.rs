//! Time-Gated Path Tracer

use lightgate_core::base::*;
use lightgate_core::bsdf::BsdfFlags;
use lightgate_core::geometry::*;
use lightgate_core::integrator::Integrator;
use lightgate_core::interaction::Hit;
use lightgate_core::light::DirectionSample;
use lightgate_core::sampler::Sampler;
use lightgate_core::scene::Scene;
use lightgate_core::spectrum::Spectrum;
use std::str::FromStr;
use std::sync::Arc;

/// Conversion factor from scene distance units to picoseconds of light
/// travel time (1e12 / 3e8).
pub const PS_PER_UNIT: Float = 3333.333;

/// Shape of the temporal importance function applied to path contributions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GateKind {
    /// Unit weight inside a window of width `delta_tau` centered on `tau`.
    Rect,

    /// Unit weight for all arrival times strictly before `tau`.
    Step,
}

impl FromStr for GateKind {
    type Err = String;

    /// Parses a gate kind from its configuration name. Unrecognized names
    /// are rejected so a misconfigured gate cannot silently render garbage.
    ///
    /// * `s` - The configuration string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" => Ok(Self::Rect),
            "step" => Ok(Self::Step),
            _ => Err(format!("Unknown gate kind '{}'. Expected 'rect' or 'step'.", s)),
        }
    }
}

/// Combines two sampling densities into a power-heuristic weight for
/// multiple importance sampling. Degenerate cases that would divide zero by
/// zero produce a weight of zero.
///
/// * `pdf_a` - The density of the strategy being scored.
/// * `pdf_b` - The density of the competing strategy.
pub fn mis_weight(pdf_a: Float, pdf_b: Float) -> Float {
    let a2 = pdf_a * pdf_a;
    let w = a2 / (a2 + pdf_b * pdf_b);
    if w.is_finite() {
        w
    } else {
        0.0
    }
}

/// Mutable record threaded through one path's random walk.
struct PathState {
    /// The ray being traced.
    ray: Ray,

    /// Product of sampling weights accumulated so far.
    throughput: Spectrum,

    /// Accumulated radiance estimate.
    result: Spectrum,

    /// Accumulated geometric distance traveled by the path.
    path_length: Float,

    /// Accumulated relative index-of-refraction product.
    eta: Float,

    /// Number of completed bounces.
    depth: u32,

    /// Whether the path has scattered off real geometry or may see a
    /// directly visible emitter.
    valid_ray: bool,

    /// Interaction at the previous bounce, kept so the emitter-direction
    /// density there can be evaluated retroactively for MIS.
    prev_hit: Hit,

    /// Density of the direction sampled at the previous bounce.
    prev_bsdf_pdf: Float,

    /// Whether the previous bounce sampled a degenerate lobe, which
    /// disables MIS with light sampling at this vertex.
    prev_bsdf_delta: bool,
}

impl PathState {
    /// Returns the state for a fresh path starting on a camera ray.
    ///
    /// * `ray`       - The camera ray.
    /// * `valid_ray` - Initial validity of the path.
    fn new(ray: Ray, valid_ray: bool) -> Self {
        Self {
            ray,
            throughput: Spectrum::ONE,
            result: Spectrum::ZERO,
            path_length: 0.0,
            eta: 1.0,
            depth: 0,
            valid_ray,
            prev_hit: Hit::default(),
            prev_bsdf_pdf: 1.0,
            prev_bsdf_delta: true,
        }
    }
}

/// Implements a unidirectional path tracer with next-event estimation where
/// every contribution is additionally weighted by the optical travel time of
/// the path that produced it. Only light arriving inside the configured time
/// gate survives, which models a pulsed-illumination, time-gated sensor.
pub struct TimeGatedPathIntegrator {
    /// Hard cap on bounce count. Zero disables tracing entirely.
    max_depth: u32,

    /// Depth at which Russian roulette termination starts.
    rr_depth: u32,

    /// Whether directly visible emitters are suppressed.
    hide_emitters: bool,

    /// Target arrival time the gate is centered on, in picoseconds.
    tau_ps: Float,

    /// Full width of the rectangular gate, in picoseconds.
    delta_tau_ps: Float,

    /// Shape of the gate.
    gate_kind: GateKind,
}

impl TimeGatedPathIntegrator {
    /// Creates a new `TimeGatedPathIntegrator`, validating the configuration
    /// before any path is traced.
    ///
    /// * `max_depth`     - Hard cap on bounce count. Zero disables tracing.
    /// * `rr_depth`      - Depth at which Russian roulette starts. Must be
    ///                     at least 1.
    /// * `hide_emitters` - Whether directly visible emitters are suppressed.
    /// * `tau_ps`        - Target arrival time in picoseconds.
    /// * `delta_tau_ps`  - Full width of the rectangular gate in picoseconds.
    /// * `gate_kind`     - Shape of the gate.
    pub fn new(
        max_depth: u32,
        rr_depth: u32,
        hide_emitters: bool,
        tau_ps: Float,
        delta_tau_ps: Float,
        gate_kind: GateKind,
    ) -> Result<Self, String> {
        if rr_depth == 0 {
            return Err("rr_depth must be at least 1".to_string());
        }
        if !tau_ps.is_finite() {
            return Err(format!("tau must be finite, got {}", tau_ps));
        }
        if !(delta_tau_ps.is_finite() && delta_tau_ps >= 0.0) {
            return Err(format!("delta_tau must be finite and non-negative, got {}", delta_tau_ps));
        }

        debug!(
            "TimeGatedPathIntegrator: max_depth={}, rr_depth={}, hide_emitters={}, \
             tau={}ps, delta_tau={}ps, gate={:?}",
            max_depth, rr_depth, hide_emitters, tau_ps, delta_tau_ps, gate_kind
        );

        Ok(Self {
            max_depth,
            rr_depth,
            hide_emitters,
            tau_ps,
            delta_tau_ps,
            gate_kind,
        })
    }

    /// Returns the temporal importance weight for a path of the given
    /// accumulated length. Both gate shapes use strict comparisons, so an
    /// arrival time exactly on the boundary is rejected.
    ///
    /// * `path_length` - Accumulated path length in scene units.
    pub fn gate_weight(&self, path_length: Float) -> Float {
        let path_time_ps = path_length * PS_PER_UNIT;
        let inside = match self.gate_kind {
            GateKind::Step => path_time_ps < self.tau_ps,
            GateKind::Rect => abs(path_time_ps - self.tau_ps) < 0.5 * self.delta_tau_ps,
        };
        if inside {
            1.0
        } else {
            0.0
        }
    }
}

impl Integrator for TimeGatedPathIntegrator {
    fn sample(&self, scene: &Scene, sampler: &mut dyn Sampler, ray: &Ray) -> (Spectrum, bool) {
        if self.max_depth == 0 {
            return (Spectrum::ZERO, false);
        }

        let mut state = PathState::new(
            ray.clone(),
            !self.hide_emitters && scene.environment().is_some(),
        );

        loop {
            let si = scene.intersect(&state.ray);

            // Distance traveled this segment. Escaped rays add nothing.
            if let Some(si) = si.as_ref() {
                state.path_length += si.hit.t;
            }

            // ---------------------- Direct emission ----------------------
            // Score emission found by the previous bounce's continuation
            // ray, MIS-weighted against the light-sampling strategy that
            // could have produced the same direction.
            let emission = match si.as_ref() {
                Some(si) => si
                    .light
                    .as_ref()
                    .map(|light| (light.l(&si.hit, &si.hit.wo), Arc::clone(light), si.hit.t)),
                None => scene
                    .environment()
                    .map(|env| (env.le(&state.ray), Arc::clone(env), INFINITY)),
            };

            if let Some((emitted, light, dist)) = emission {
                if !emitted.is_black() {
                    // Delta lobes cannot be reached by light sampling.
                    let em_pdf = if state.prev_bsdf_delta {
                        0.0
                    } else {
                        let ds = DirectionSample {
                            p: si.as_ref().map_or(state.ray.o + state.ray.d, |si| si.hit.p),
                            n: si.as_ref().map_or(Normal3f::new(0.0, 0.0, 0.0), |si| si.hit.n),
                            d: state.ray.d,
                            dist,
                            pdf: 0.0,
                            delta: false,
                            light: Some(light),
                        };
                        scene.pdf_emitter_direction(&state.prev_hit, &ds)
                    };

                    let mis = mis_weight(state.prev_bsdf_pdf, em_pdf);
                    let gate = self.gate_weight(state.path_length);
                    state.result = state
                        .throughput
                        .mul_add(&(emitted * (mis * gate)), &state.result);
                }
            }

            // ------------------ Continuation eligibility ------------------
            let si = match si {
                Some(si) if state.depth + 1 < self.max_depth => si,
                _ => break,
            };
            let bsdf = match si.bsdf.as_ref() {
                Some(bsdf) => Arc::clone(bsdf),
                None => break,
            };

            // --------------------- Emitter sampling ---------------------
            if bsdf.flags().intersects(BsdfFlags::SMOOTH) {
                let u = sampler.get_2d();
                if let Some((ds, em_weight)) = scene.sample_emitter_direction(&si.hit, &u, true) {
                    if !em_weight.is_black() {
                        let wo = si.to_local(&ds.d);
                        let (bsdf_val, bsdf_pdf) = bsdf.eval_pdf(&si, &wo);
                        if !bsdf_val.is_black() {
                            // Delta lights admit only the one strategy.
                            let mis = if ds.delta { 1.0 } else { mis_weight(ds.pdf, bsdf_pdf) };

                            // The connection adds the segment to the light,
                            // so the gate sees the extended path.
                            let gate = self.gate_weight(state.path_length + ds.dist);
                            state.result = state
                                .throughput
                                .mul_add(&(bsdf_val * em_weight * (mis * gate)), &state.result);
                        }
                    }
                }
            }

            // ---------------------- BSDF sampling ----------------------
            let u1 = sampler.get_1d();
            let u2 = sampler.get_2d();
            let (bs, bsdf_weight) = match bsdf.sample(&si, u1, &u2) {
                Some(sample) => sample,
                None => break,
            };
            state.ray = si.spawn_ray(&si.to_world(&bs.wo));

            // ----------------------- State update -----------------------
            state.throughput *= bsdf_weight;
            state.eta *= bs.eta;
            state.valid_ray = state.valid_ray || !bs.flags.intersects(BsdfFlags::NULL);

            state.prev_hit = si.hit;
            state.prev_bsdf_pdf = bs.pdf;
            state.prev_bsdf_delta = bs.flags.intersects(BsdfFlags::DELTA);
            state.depth += 1;

            // --------------------- Russian roulette ---------------------
            let throughput_max = state.throughput.max_component_value();
            if throughput_max == 0.0 {
                break;
            }
            if state.depth >= self.rr_depth {
                let rr_prob = min(throughput_max * state.eta * state.eta, 0.95);
                if sampler.get_1d() >= rr_prob {
                    break;
                }
                // Rescale the survivors to keep the estimator unbiased.
                state.throughput /= rr_prob;
            }
        }

        if state.valid_ray {
            (state.result, true)
        } else {
            (Spectrum::ZERO, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    fn integrator(tau_ps: Float, delta_tau_ps: Float, gate_kind: GateKind) -> TimeGatedPathIntegrator {
        TimeGatedPathIntegrator::new(8, 5, false, tau_ps, delta_tau_ps, gate_kind).unwrap()
    }

    #[test]
    fn gate_kind_parses_known_names() {
        assert_eq!("rect".parse::<GateKind>().unwrap(), GateKind::Rect);
        assert_eq!("step".parse::<GateKind>().unwrap(), GateKind::Step);
        assert!("gaussian".parse::<GateKind>().is_err());
        assert!("Rect".parse::<GateKind>().is_err());
    }

    #[test]
    fn construction_rejects_invalid_configuration() {
        assert!(TimeGatedPathIntegrator::new(8, 0, false, 0.0, 0.0, GateKind::Rect).is_err());
        assert!(TimeGatedPathIntegrator::new(8, 5, false, Float::NAN, 0.0, GateKind::Rect).is_err());
        assert!(TimeGatedPathIntegrator::new(8, 5, false, 0.0, -1.0, GateKind::Rect).is_err());
        assert!(TimeGatedPathIntegrator::new(8, 5, false, 0.0, Float::INFINITY, GateKind::Rect).is_err());
        assert!(TimeGatedPathIntegrator::new(0, 5, false, 0.0, 0.0, GateKind::Step).is_ok());
    }

    #[test]
    fn step_gate_is_strict_at_the_boundary() {
        let i = integrator(PS_PER_UNIT, 0.0, GateKind::Step);
        assert_eq!(i.gate_weight(0.0), 1.0);
        assert_eq!(i.gate_weight(0.5), 1.0);
        assert_eq!(i.gate_weight(1.0), 0.0); // arrival exactly at tau
        assert_eq!(i.gate_weight(2.0), 0.0);
    }

    #[test]
    fn rect_gate_covers_the_window() {
        let i = integrator(2.0 * PS_PER_UNIT, PS_PER_UNIT, GateKind::Rect);
        assert_eq!(i.gate_weight(2.0), 1.0); // center
        assert_eq!(i.gate_weight(1.8), 1.0);
        assert_eq!(i.gate_weight(2.2), 1.0);
        assert_eq!(i.gate_weight(1.0), 0.0);
        assert_eq!(i.gate_weight(3.0), 0.0);
        assert_eq!(i.gate_weight(0.0), 0.0);
    }

    #[test]
    fn zero_width_rect_gate_rejects_everything() {
        let i = integrator(PS_PER_UNIT, 0.0, GateKind::Rect);
        assert_eq!(i.gate_weight(0.0), 0.0);
        assert_eq!(i.gate_weight(1.0), 0.0);
        assert_eq!(i.gate_weight(2.0), 0.0);
    }

    #[test]
    fn mis_weight_degenerate_cases() {
        assert_eq!(mis_weight(0.0, 0.0), 0.0);
        assert_eq!(mis_weight(1.0, 0.0), 1.0);
        assert!(approx_eq!(Float, mis_weight(3.0, 3.0), 0.5, epsilon = 1e-6));
        assert_eq!(mis_weight(Float::INFINITY, Float::INFINITY), 0.0);
    }

    proptest! {
        #[test]
        fn mis_weight_stays_in_unit_interval(pdf_a in 0.0f32..1e8, pdf_b in 0.0f32..1e8) {
            let w = mis_weight(pdf_a, pdf_b);
            prop_assert!(w.is_finite());
            prop_assert!((0.0..=1.0).contains(&w));
        }

        #[test]
        fn mis_weights_of_complementary_strategies_sum_to_one(
            pdf_a in 1e-3f32..1e3,
            pdf_b in 1e-3f32..1e3,
        ) {
            let sum = mis_weight(pdf_a, pdf_b) + mis_weight(pdf_b, pdf_a);
            prop_assert!((sum - 1.0).abs() < 1e-4);
        }

        #[test]
        fn step_gate_matches_strict_comparison(length in 0.0f32..100.0, tau in 0.0f32..400_000.0) {
            let i = TimeGatedPathIntegrator::new(8, 5, false, tau, 0.0, GateKind::Step).unwrap();
            let expected = if length * PS_PER_UNIT < tau { 1.0 } else { 0.0 };
            prop_assert_eq!(i.gate_weight(length), expected);
        }
    }
}
