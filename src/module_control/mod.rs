mod config;
mod hill_to_att_ref;
mod sys_module;
mod task_scheduler;
#[cfg(test)]
mod tests;

pub use config::HillToAttRefConfig;
pub use hill_to_att_ref::HillToAttRef;
pub use sys_module::SysModule;
pub use task_scheduler::{SchedulerError, TaskScheduler};
