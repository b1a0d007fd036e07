use crate::{
    guidance::{
        AttitudeBounds, BaseAttitudeSource, GainController, GuidanceError, Mrp, RelAttVector,
        compose_reference, relative_to_inertial_mrp,
    },
    logger::{LogLevel, ModuleLogger},
    messaging::{AttRefPayload, HillRelStatePayload, InPort, Message, NavAttPayload},
    module_control::{config::HillToAttRefConfig, sys_module::SysModule},
};
use chrono::TimeDelta;

/// Validation outcome of the latest reset.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Readiness {
    NotReset,
    Ready(BaseAttitudeSource),
    Faulted(GuidanceError),
}

/// Hill state to attitude reference module for differential-drag formation control.
///
/// Each update maps the deputy's Hill relative state through the configured gain matrix onto a
/// relative MRP attitude, bounds it and composes it onto the base attitude taken from
/// `att_ref_in` (if linked) or `att_state_in`. The resulting inertial reference is written to
/// the output message once per tick. Whenever this is not possible the previous output is
/// republished instead.
#[derive(Debug)]
pub struct HillToAttRef {
    /// Mandatory relative state of the deputy w.r.t. the chief
    pub hill_state_in: InPort<HillRelStatePayload>,
    /// Optional navigation attitude used as base attitude
    pub att_state_in: InPort<NavAttPayload>,
    /// Optional upstream attitude reference, takes precedence over `att_state_in`
    pub att_ref_in: InPort<AttRefPayload>,
    att_ref_out: Message<AttRefPayload>,
    gain_controller: GainController,
    config: HillToAttRefConfig,
    logger: ModuleLogger,
    output_buffer_count: u64,
    held_output: AttRefPayload,
    readiness: Readiness,
}

impl HillToAttRef {
    const TYPE_NAME: &'static str = "hillToAttRef";

    pub fn new(config: HillToAttRefConfig) -> Self {
        Self {
            hill_state_in: InPort::new(),
            att_state_in: InPort::new(),
            att_ref_in: InPort::new(),
            att_ref_out: Message::new(),
            gain_controller: GainController::new(config.gain_matrix),
            config,
            logger: ModuleLogger::new(Self::TYPE_NAME, config.log_level),
            output_buffer_count: 0,
            held_output: AttRefPayload::default(),
            readiness: Readiness::NotReset,
        }
    }

    pub fn att_ref_out(&self) -> &Message<AttRefPayload> { &self.att_ref_out }

    pub fn logger(&self) -> &ModuleLogger { &self.logger }

    pub fn config(&self) -> &HillToAttRefConfig { &self.config }

    pub fn bounds(&self) -> &AttitudeBounds { &self.config.bounds }

    pub fn gain_controller(&self) -> &GainController { &self.gain_controller }

    pub fn output_buffer_count(&self) -> u64 { self.output_buffer_count }

    /// Base attitude source selected by the last successful reset.
    pub fn base_source(&self) -> Option<BaseAttitudeSource> {
        match self.readiness {
            Readiness::Ready(source) => Some(source),
            Readiness::NotReset | Readiness::Faulted(_) => None,
        }
    }

    /// Configuration error found by the last reset, if any.
    pub fn config_fault(&self) -> Option<GuidanceError> {
        match self.readiness {
            Readiness::Faulted(err) => Some(err),
            Readiness::NotReset | Readiness::Ready(_) => None,
        }
    }

    /// Bounds `relative_att` with the configured limits and composes it onto `sigma_xn`.
    pub fn relative_to_inertial_mrp(&self, relative_att: [f64; 3], sigma_xn: [f64; 3]) -> AttRefPayload {
        relative_to_inertial_mrp(RelAttVector::new(relative_att), Mrp::from(sigma_xn), &self.config.bounds)
    }

    fn validate(&self) -> Result<BaseAttitudeSource, GuidanceError> {
        self.config.validate()?;
        BaseAttitudeSource::select(self.att_ref_in.is_linked(), self.att_state_in.is_linked())
    }

    fn base_attitude(&self, source: BaseAttitudeSource) -> Mrp {
        match source {
            BaseAttitudeSource::AttRefChain => Mrp::from(self.att_ref_in.read().sigma_rn),
            BaseAttitudeSource::NavAttitude => Mrp::from(self.att_state_in.read().sigma_bn),
        }
    }

    fn compute_reference(&self) -> Result<AttRefPayload, GuidanceError> {
        let source = match self.readiness {
            Readiness::Ready(source) => source,
            Readiness::NotReset => return Err(GuidanceError::NotReset),
            Readiness::Faulted(err) => return Err(err),
        };
        if !self.hill_state_in.is_linked() {
            return Err(GuidanceError::HillStateNotLinked);
        }
        if !self.hill_state_in.is_written() {
            return Err(GuidanceError::HillStateNotWritten);
        }

        let hill_state = self.hill_state_in.read().to_state_vector();
        let sigma_xn = self.base_attitude(source);
        let rel_att = self.gain_controller.relative_attitude(&hill_state);
        let bounded_rel_att = self.config.bounds.apply(rel_att);
        Ok(compose_reference(bounded_rel_att, sigma_xn))
    }
}

impl SysModule for HillToAttRef {
    fn type_name(&self) -> &'static str { Self::TYPE_NAME }

    fn reset(&mut self, now: TimeDelta) {
        self.output_buffer_count = 0;
        self.held_output = AttRefPayload::default();
        if !self.hill_state_in.is_linked() {
            self.logger.emit(LogLevel::Error, GuidanceError::HillStateNotLinked.to_string());
        }
        self.readiness = match self.validate() {
            Ok(source) => {
                self.logger.emit(
                    LogLevel::Debug,
                    format!("reset at {now}: base attitude from {source}, bounds {}", self.config.bounds.mode()),
                );
                Readiness::Ready(source)
            }
            Err(err) => {
                self.logger.emit(LogLevel::Error, format!("configuration error at reset: {err}"));
                Readiness::Faulted(err)
            }
        };
    }

    fn update_state(&mut self, now: TimeDelta) {
        let output = match self.compute_reference() {
            Ok(reference) => {
                self.held_output = reference;
                reference
            }
            Err(err) => {
                let level = match err {
                    // already reported by reset
                    GuidanceError::GainShape { .. }
                    | GuidanceError::GainNotFinite
                    | GuidanceError::BoundsInverted { .. }
                    | GuidanceError::NegativeMaxBound { .. }
                    | GuidanceError::NoBaseAttitude => LogLevel::Debug,
                    GuidanceError::HillStateNotLinked | GuidanceError::HillStateNotWritten => {
                        LogLevel::Warning
                    }
                    GuidanceError::NotReset => LogLevel::Error,
                };
                self.logger.emit(level, format!("holding previous output at {now}: {err}"));
                self.held_output
            }
        };
        self.att_ref_out.write(output, now);
        self.output_buffer_count += 1;
    }
}
