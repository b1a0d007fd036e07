use super::{HillToAttRef, HillToAttRefConfig, SchedulerError, SysModule, TaskScheduler};
use crate::guidance::{AttitudeBounds, BaseAttitudeSource, GainMatrix, GuidanceError, Mrp};
use crate::logger::LogLevel;
use crate::messaging::{AttRefPayload, HillRelStatePayload, Message, NavAttPayload, Recorder};
use chrono::TimeDelta;

const TEST_GAIN: [[f64; 6]; 3] = [
    [0.0, 0.0, 0.0, 0.5, 0.0, 0.0],
    [0.0, 0.2, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, -0.1],
];
const TEST_HILL: HillRelStatePayload = HillRelStatePayload {
    r_dc_h: [0.01, 0.3, 0.0],
    v_dc_h: [-0.2, 0.1, 1.0],
};
/// `TEST_GAIN * TEST_HILL`
const TEST_REL_ATT: [f64; 3] = [-0.1, 0.06, -0.1];
/// `TEST_REL_ATT` composed onto a base of `[0.1, 0, 0]`
const TEST_SIGMA_RN: [f64; 3] = [
    -0.001_333_024_907_962_471_6,
    0.077_825_130_656_044_3,
    -0.085_274_387_494_658_11,
];

fn assert_close(actual: &[f64; 3], expected: &[f64; 3]) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-9, "got {actual:?}, expected {expected:?}");
    }
}

fn test_config() -> HillToAttRefConfig {
    HillToAttRefConfig::new(GainMatrix::new(TEST_GAIN)).with_log_level(LogLevel::Debug)
}

fn written<T: Copy + Default>(payload: T) -> Message<T> {
    let mut msg = Message::new();
    msg.write(payload, TimeDelta::zero());
    msg
}

fn nav_att(sigma_bn: [f64; 3]) -> NavAttPayload {
    NavAttPayload {
        sigma_bn,
        ..NavAttPayload::default()
    }
}

fn att_ref(sigma_rn: [f64; 3]) -> AttRefPayload {
    AttRefPayload {
        sigma_rn,
        ..AttRefPayload::default()
    }
}

#[test]
fn test_nominal_update_from_nav_attitude() {
    let hill_msg = written(TEST_HILL);
    let nav_msg = written(nav_att([0.1, 0.0, 0.0]));
    let mut module = HillToAttRef::new(test_config());
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);
    let out = module.att_ref_out().subscriber();

    module.reset(TimeDelta::zero());
    assert_eq!(module.base_source(), Some(BaseAttitudeSource::NavAttitude));
    assert_eq!(module.config_fault(), None);

    module.update_state(TimeDelta::milliseconds(500));
    let reference = out.read();
    assert_close(&reference.sigma_rn, &TEST_SIGMA_RN);
    assert_eq!(reference.omega_rn_n, [0.0; 3]);
    assert_eq!(reference.domega_rn_n, [0.0; 3]);
    assert_eq!(out.header().written_at, TimeDelta::milliseconds(500));
    assert_eq!(module.output_buffer_count(), 1);
    assert_eq!(module.logger().count(LogLevel::Warning), 0);
    assert_eq!(module.logger().count(LogLevel::Error), 0);
}

#[test]
fn test_att_ref_chain_takes_precedence() {
    let hill_msg = written(TEST_HILL);
    let nav_msg = written(nav_att([0.1, 0.0, 0.0]));
    let chain_msg = written(att_ref([0.0, 0.0, 0.0]));
    let mut module = HillToAttRef::new(test_config());
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);
    module.att_ref_in.subscribe_to(&chain_msg);
    let out = module.att_ref_out().subscriber();

    module.reset(TimeDelta::zero());
    assert_eq!(module.base_source(), Some(BaseAttitudeSource::AttRefChain));
    module.update_state(TimeDelta::zero());

    let reference = out.read();
    assert_close(&reference.sigma_rn, &TEST_REL_ATT);
    assert!((reference.sigma_rn[0] - TEST_SIGMA_RN[0]).abs() > 1e-3);
}

#[test]
fn test_missing_hill_state_gives_zero_default() {
    let hill_msg = Message::<HillRelStatePayload>::new();
    let nav_msg = written(nav_att([0.2, -0.1, 0.0]));
    let mut module = HillToAttRef::new(test_config());
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);
    let out = module.att_ref_out().subscriber();

    module.reset(TimeDelta::zero());
    module.update_state(TimeDelta::seconds(1));

    assert_eq!(out.read(), AttRefPayload::default());
    assert_eq!(out.header().write_count, 1);
    assert_eq!(module.logger().count(LogLevel::Warning), 1);
    let last = module.logger().last().unwrap();
    assert_eq!(last.level(), LogLevel::Warning);
    assert!(last.message().contains("hillStateInMsg was never written"));
}

#[test]
fn test_missing_hill_state_holds_previous_output() {
    let hill_msg = written(TEST_HILL);
    let nav_msg = written(nav_att([0.1, 0.0, 0.0]));
    let mut module = HillToAttRef::new(test_config());
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);
    let out = module.att_ref_out().subscriber();

    module.reset(TimeDelta::zero());
    module.update_state(TimeDelta::seconds(1));
    let valid = out.read();

    // the producer is swapped for one that has not written yet
    let fresh_msg = Message::<HillRelStatePayload>::new();
    module.hill_state_in.subscribe_to(&fresh_msg);
    module.update_state(TimeDelta::seconds(2));
    module.update_state(TimeDelta::seconds(3));

    assert_eq!(out.read(), valid);
    assert_eq!(out.header().written_at, TimeDelta::seconds(3));
    assert_eq!(module.output_buffer_count(), 3);
    assert_eq!(module.logger().count(LogLevel::Warning), 2);
}

#[test]
fn test_unlinked_hill_state_is_reported() {
    let nav_msg = written(nav_att([0.0; 3]));
    let mut module = HillToAttRef::new(test_config());
    module.att_state_in.subscribe_to(&nav_msg);

    module.reset(TimeDelta::zero());
    assert_eq!(module.logger().count(LogLevel::Error), 1);
    module.update_state(TimeDelta::zero());
    assert_eq!(module.att_ref_out().read(), AttRefPayload::default());
    assert!(
        module
            .logger()
            .last()
            .is_some_and(|rec| rec.message().contains("hillStateInMsg is not linked"))
    );
}

#[test]
fn test_no_base_attitude_is_config_error() {
    let hill_msg = written(TEST_HILL);
    let mut module = HillToAttRef::new(test_config());
    module.hill_state_in.subscribe_to(&hill_msg);

    module.reset(TimeDelta::zero());
    assert_eq!(module.config_fault(), Some(GuidanceError::NoBaseAttitude));
    assert_eq!(module.base_source(), None);
    assert_eq!(module.logger().count(LogLevel::Error), 1);

    for i in 0..3 {
        module.update_state(TimeDelta::seconds(i));
    }
    assert_eq!(module.att_ref_out().read(), AttRefPayload::default());
    assert_eq!(module.output_buffer_count(), 3);
    // the fault is reported once at reset, updates only trace it
    assert_eq!(module.logger().count(LogLevel::Error), 1);
    assert_eq!(module.logger().count(LogLevel::Debug), 3);
}

#[test]
fn test_inverted_bounds_are_config_error() {
    let hill_msg = written(TEST_HILL);
    let nav_msg = written(nav_att([0.1, 0.0, 0.0]));
    let config = test_config().with_bounds(AttitudeBounds::new(0.4, 0.2));
    let mut module = HillToAttRef::new(config);
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);

    module.reset(TimeDelta::zero());
    assert_eq!(module.config_fault(), Some(GuidanceError::BoundsInverted { min: 0.4, max: 0.2 }));
    module.update_state(TimeDelta::zero());
    assert_eq!(module.att_ref_out().read(), AttRefPayload::default());
}

#[test]
fn test_reset_runs_full_config_validation() {
    let hill_msg = written(TEST_HILL);
    let nav_msg = written(nav_att([0.1, 0.0, 0.0]));
    let config = test_config().with_bounds(AttitudeBounds::new(0.0, -0.5));
    let mut module = HillToAttRef::new(config);
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);
    assert_eq!(module.config().bounds, config.bounds);
    assert_eq!(module.config().validate(), Err(GuidanceError::NegativeMaxBound { max: -0.5 }));

    module.reset(TimeDelta::zero());
    assert_eq!(module.config_fault(), Some(GuidanceError::NegativeMaxBound { max: -0.5 }));
    assert_eq!(module.base_source(), None);
    module.update_state(TimeDelta::zero());
    assert_eq!(module.att_ref_out().read(), AttRefPayload::default());

    let mut gain = TEST_GAIN;
    gain[1][4] = f64::NAN;
    let mut module = HillToAttRef::new(HillToAttRefConfig::new(GainMatrix::new(gain)));
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);
    module.reset(TimeDelta::zero());
    assert_eq!(module.config_fault(), Some(GuidanceError::GainNotFinite));
}

#[test]
fn test_update_before_reset_holds_output() {
    let hill_msg = written(TEST_HILL);
    let nav_msg = written(nav_att([0.1, 0.0, 0.0]));
    let mut module = HillToAttRef::new(test_config());
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);

    module.update_state(TimeDelta::zero());
    assert_eq!(module.att_ref_out().read(), AttRefPayload::default());
    assert_eq!(module.logger().count(LogLevel::Error), 1);

    module.reset(TimeDelta::zero());
    module.update_state(TimeDelta::seconds(1));
    assert_close(&module.att_ref_out().read().sigma_rn, &TEST_SIGMA_RN);
}

#[test]
fn test_reset_clears_output_count() {
    let hill_msg = written(TEST_HILL);
    let nav_msg = written(nav_att([0.0; 3]));
    let mut module = HillToAttRef::new(test_config());
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);

    module.reset(TimeDelta::zero());
    module.update_state(TimeDelta::zero());
    module.update_state(TimeDelta::seconds(1));
    assert_eq!(module.output_buffer_count(), 2);
    module.reset(TimeDelta::seconds(2));
    assert_eq!(module.output_buffer_count(), 0);
}

#[test]
fn test_output_switches_to_shadow_set() {
    // the gain maps the along-track velocity straight onto the first MRP component
    let mut gain = [[0.0; 6]; 3];
    gain[0][4] = 1.0;
    let hill_msg = written(HillRelStatePayload {
        r_dc_h: [0.0; 3],
        v_dc_h: [0.0, 0.6, 0.0],
    });
    let nav_msg = written(nav_att([0.6, 0.0, 0.0]));
    let mut module = HillToAttRef::new(HillToAttRefConfig::new(GainMatrix::new(gain)));
    module.hill_state_in.subscribe_to(&hill_msg);
    module.att_state_in.subscribe_to(&nav_msg);

    module.reset(TimeDelta::zero());
    module.update_state(TimeDelta::zero());

    let sigma_rn = Mrp::from(module.att_ref_out().read().sigma_rn);
    assert_close(sigma_rn.as_array(), &[-0.533_333_333_333_333_3, 0.0, 0.0]);
    assert!(sigma_rn.norm_squared() <= 1.0);
    assert_eq!(module.logger().count(LogLevel::Warning), 0);
    assert_eq!(module.logger().count(LogLevel::Error), 0);
}

#[test]
fn test_relative_to_inertial_applies_bounds() {
    let module = HillToAttRef::new(test_config().with_bounds(AttitudeBounds::symmetric(0.05)));
    let reference = module.relative_to_inertial_mrp(TEST_REL_ATT, [0.0; 3]);
    assert_close(&reference.sigma_rn, &[-0.05, 0.05, -0.05]);
}

/// Publishes a Hill state that drifts along-track by a fixed amount every tick.
struct DriftingHillState {
    out: Message<HillRelStatePayload>,
    state: HillRelStatePayload,
    drift: f64,
}

impl SysModule for DriftingHillState {
    fn type_name(&self) -> &'static str { "driftingHillState" }

    fn reset(&mut self, _now: TimeDelta) {}

    fn update_state(&mut self, now: TimeDelta) {
        self.out.write(self.state, now);
        self.state.r_dc_h[1] += self.drift;
    }
}

#[test]
fn test_scheduler_drives_pipeline() {
    let source = DriftingHillState {
        out: Message::new(),
        state: HillRelStatePayload::default(),
        drift: 1.0,
    };
    // along-track offset drives the second MRP component
    let mut gain = [[0.0; 6]; 3];
    gain[1][1] = 0.01;
    let config = HillToAttRefConfig::new(GainMatrix::new(gain)).with_bounds(AttitudeBounds::symmetric(0.025));
    let mut module = HillToAttRef::new(config);
    module.hill_state_in.subscribe_to(&source.out);
    let nav_msg = written(nav_att([0.0; 3]));
    module.att_state_in.subscribe_to(&nav_msg);
    let mut recorder = Recorder::new(module.att_ref_out());

    let mut task = TaskScheduler::new(TimeDelta::milliseconds(100)).unwrap();
    task.add_module(Box::new(module), 1);
    task.add_module(Box::new(source), 10);
    assert_eq!(task.module_names(), vec!["driftingHillState", "hillToAttRef"]);

    task.initialize();
    task.run_until(TimeDelta::milliseconds(400), |_| {
        recorder.sample();
    });

    assert_eq!(task.current_time(), TimeDelta::milliseconds(500));
    assert_eq!(recorder.len(), 5);
    let times: Vec<_> = recorder.samples().iter().map(|(header, _)| header.written_at).collect();
    assert_eq!(times, (0..5).map(|i| TimeDelta::milliseconds(i * 100)).collect::<Vec<_>>());
    let second: Vec<f64> = recorder.payloads().map(|payload| payload.sigma_rn[1]).collect();
    let expected = [0.0, 0.01, 0.02, 0.025, 0.025];
    for (actual, expected) in second.iter().zip(expected.iter()) {
        assert!((actual - expected).abs() < 1e-12, "got {second:?}");
    }
}

#[test]
fn test_scheduler_rejects_non_positive_period() {
    assert!(matches!(
        TaskScheduler::new(TimeDelta::zero()),
        Err(SchedulerError::NonPositivePeriod { .. })
    ));
    assert!(TaskScheduler::new(TimeDelta::milliseconds(-10)).is_err());
}

#[test]
fn test_config_from_gain_rows() {
    let rows: Vec<Vec<f64>> = TEST_GAIN.iter().map(|row| row.to_vec()).collect();
    let config = HillToAttRefConfig::from_gain_rows(&rows).unwrap();
    assert_eq!(config.gain_matrix, GainMatrix::new(TEST_GAIN));
    assert!(config.validate().is_ok());
    assert_eq!(
        HillToAttRefConfig::from_gain_rows(&rows[..1]),
        Err(GuidanceError::GainShape { rows: 1, cols: 6 })
    );
}
