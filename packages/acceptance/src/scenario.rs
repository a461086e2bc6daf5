//! Per-scenario state and lifecycle.
//!
//! A fresh [`ScenarioState`] is created for every scenario and dropped when it
//! ends, so nothing a step records can leak into the next scenario.

use std::fmt;

use kbase_client::ResponseSnapshot;

use crate::error::{HarnessError, Result};
use crate::params::Validity;

/// Where a scenario is in its Given/When/Then lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    GivenPreconditionsSet,
    ActionPerformed,
    AssertionsChecked,
    Done,
}

impl Phase {
    /// Whether a step of kind `next` may follow a step that left the scenario in `self`.
    pub fn can_advance_to(self, next: Phase) -> bool {
        use Phase::*;
        match next {
            NotStarted => false,
            GivenPreconditionsSet => matches!(self, NotStarted | GivenPreconditionsSet),
            ActionPerformed => self != Done,
            AssertionsChecked => matches!(self, ActionPerformed | AssertionsChecked),
            Done => true,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::GivenPreconditionsSet => "preconditions set",
            Phase::ActionPerformed => "action performed",
            Phase::AssertionsChecked => "assertions checked",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// What one scenario has done so far.
#[derive(Debug, Clone)]
pub struct ScenarioState {
    phase: Phase,
    last_response: Option<ResponseSnapshot>,
    last_status: Option<u16>,
    last_validity: Option<Validity>,
    pub username: Option<String>,
    pub organization: Option<String>,
    pub team: Option<String>,
}

impl Default for ScenarioState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioState {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            last_response: None,
            last_status: None,
            last_validity: None,
            username: None,
            organization: None,
            team: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn advance(&mut self, next: Phase) -> Result<()> {
        if !self.phase.can_advance_to(next) {
            return Err(HarnessError::PhaseViolation {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        Ok(())
    }

    /// Record that a precondition step ran.
    pub fn begin_given(&mut self) -> Result<()> {
        self.advance(Phase::GivenPreconditionsSet)
    }

    /// Record an action that produced only a status code.
    pub fn record_status(&mut self, status: u16, validity: Option<Validity>) -> Result<()> {
        self.advance(Phase::ActionPerformed)?;
        self.last_status = Some(status);
        self.last_response = None;
        self.last_validity = validity;
        Ok(())
    }

    /// Record an action whose full response later steps inspect.
    pub fn record_response(
        &mut self,
        response: ResponseSnapshot,
        validity: Option<Validity>,
    ) -> Result<()> {
        self.advance(Phase::ActionPerformed)?;
        self.last_status = Some(response.status());
        self.last_response = Some(response);
        self.last_validity = validity;
        Ok(())
    }

    /// Record an action step that made no request.
    pub fn record_noop_action(&mut self) -> Result<()> {
        self.advance(Phase::ActionPerformed)
    }

    /// Enter the assertion phase. Fails if no action has run yet.
    pub fn begin_then(&mut self) -> Result<()> {
        self.advance(Phase::AssertionsChecked)
    }

    pub fn finish(&mut self) {
        self.phase = Phase::Done;
    }

    pub fn last_status(&self) -> Result<u16> {
        self.last_status
            .ok_or(HarnessError::MissingState("status code"))
    }

    pub fn last_response(&self) -> Result<&ResponseSnapshot> {
        self.last_response
            .as_ref()
            .ok_or(HarnessError::MissingState("response"))
    }

    pub fn last_validity(&self) -> Result<Validity> {
        self.last_validity
            .ok_or(HarnessError::MissingState("fixture validity"))
    }

    pub fn organization(&self) -> Result<&str> {
        self.organization
            .as_deref()
            .ok_or(HarnessError::MissingState("organization name"))
    }
}
