use crate::module_control::sys_module::SysModule;
use chrono::TimeDelta;
use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    #[strum(to_string = "task period must be positive, got {period}")]
    NonPositivePeriod { period: TimeDelta },
}

impl std::error::Error for SchedulerError {}

struct ScheduledModule {
    priority: i32,
    module: Box<dyn SysModule>,
}

/// Fixed rate task ticking its modules in priority order.
///
/// Higher priorities run first; modules of equal priority keep their insertion order, so
/// producers should be added with a higher priority than their consumers.
pub struct TaskScheduler {
    task_period: TimeDelta,
    current_time: TimeDelta,
    modules: Vec<ScheduledModule>,
}

impl TaskScheduler {
    pub fn new(task_period: TimeDelta) -> Result<Self, SchedulerError> {
        if task_period <= TimeDelta::zero() {
            return Err(SchedulerError::NonPositivePeriod { period: task_period });
        }
        Ok(Self {
            task_period,
            current_time: TimeDelta::zero(),
            modules: Vec::new(),
        })
    }

    pub fn add_module(&mut self, module: Box<dyn SysModule>, priority: i32) {
        let pos = self.modules.partition_point(|sched| sched.priority >= priority);
        self.modules.insert(pos, ScheduledModule { priority, module });
    }

    pub fn task_period(&self) -> TimeDelta { self.task_period }

    pub fn current_time(&self) -> TimeDelta { self.current_time }

    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|sched| sched.module.type_name()).collect()
    }

    /// Rewinds simulation time to zero and resets every module.
    pub fn initialize(&mut self) {
        self.current_time = TimeDelta::zero();
        crate::info!("Initializing task with {} modules", self.modules.len());
        for sched in &mut self.modules {
            sched.module.reset(self.current_time);
        }
    }

    /// Ticks every module once at the current time, then advances by one task period.
    ///
    /// # Returns
    /// - The simulation time the modules were ticked at.
    pub fn step(&mut self) -> TimeDelta {
        let now = self.current_time;
        for sched in &mut self.modules {
            sched.module.update_state(now);
        }
        crate::event!("Ticked {} modules at {now}", self.modules.len());
        self.current_time += self.task_period;
        now
    }

    /// Steps until the tick at `stop` (inclusive) has run, calling `on_tick` after every step.
    pub fn run_until<F: FnMut(TimeDelta)>(&mut self, stop: TimeDelta, mut on_tick: F) {
        while self.current_time <= stop {
            let now = self.step();
            on_tick(now);
        }
    }
}
