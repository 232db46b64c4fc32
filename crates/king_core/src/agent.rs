//! Runs an [`Agent`] off the caller's thread.
//!
//! A render or input loop cannot block while a search runs. `BackgroundAgent`
//! hands the agent and a copy of the state to a worker thread and gets both
//! back over a single-slot channel. The caller polls (or waits) for the
//! answer instead of reading shared flags.
//!
//! Lifecycle: `Idle -> Pending -> Resolved -> Idle` (via [`BackgroundAgent::take`]).

use std::thread;

use crossbeam_channel::{Receiver, TryRecvError, bounded};
use tracing::debug;

use crate::{Agent, GameState, KingError, KingResult, MoveChoice};

type Reply = (Box<dyn Agent>, KingResult<MoveChoice>);

/// Where a [`BackgroundAgent`] is in its request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStatus {
    Idle,
    Pending,
    Resolved,
}

enum Slot {
    Idle,
    Pending(Receiver<Reply>),
    Resolved(KingResult<MoveChoice>),
}

pub struct BackgroundAgent {
    /// `None` while the worker holds the agent, or after the worker died.
    agent: Option<Box<dyn Agent>>,
    name: String,
    slot: Slot,
}

impl BackgroundAgent {
    pub fn new(agent: Box<dyn Agent>) -> Self {
        Self {
            name: agent.name().to_string(),
            agent: Some(agent),
            slot: Slot::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start thinking about `state`. Only valid while idle.
    pub fn request(&mut self, state: &GameState) -> KingResult<()> {
        if !matches!(self.slot, Slot::Idle) {
            return Err(KingError::AgentBusy);
        }
        let mut agent = self.agent.take().ok_or(KingError::AgentDisconnected)?;
        let state = state.clone();
        let (tx, rx) = bounded::<Reply>(1);

        debug!(agent = %self.name, ply = state.ply(), "move requested");
        let spawned = thread::Builder::new()
            .name(format!("agent-{}", self.name))
            .spawn(move || {
                let result = agent.choose_move(&state);
                // Receiver gone means the owner was dropped; nothing to report to.
                let _ = tx.send((agent, result));
            });

        match spawned {
            Ok(_) => {
                self.slot = Slot::Pending(rx);
                Ok(())
            }
            Err(e) => Err(KingError::Io(e.to_string())),
        }
    }

    /// Non-blocking check for an answer.
    pub fn poll(&mut self) -> AgentStatus {
        if let Slot::Pending(rx) = &self.slot {
            match rx.try_recv() {
                Ok(reply) => self.resolve(reply),
                Err(TryRecvError::Empty) => return AgentStatus::Pending,
                Err(TryRecvError::Disconnected) => {
                    self.slot = Slot::Resolved(Err(KingError::AgentDisconnected));
                }
            }
        }
        self.status()
    }

    /// Block until the pending request resolves, then take the answer.
    pub fn wait(&mut self) -> KingResult<MoveChoice> {
        if let Slot::Pending(rx) = &self.slot {
            match rx.recv() {
                Ok(reply) => self.resolve(reply),
                Err(_) => self.slot = Slot::Resolved(Err(KingError::AgentDisconnected)),
            }
        }
        self.take()
    }

    /// Take a resolved answer and return to idle.
    pub fn take(&mut self) -> KingResult<MoveChoice> {
        match std::mem::replace(&mut self.slot, Slot::Idle) {
            Slot::Resolved(result) => result,
            Slot::Pending(rx) => {
                self.slot = Slot::Pending(rx);
                Err(KingError::AgentBusy)
            }
            Slot::Idle => Err(KingError::AgentIdle),
        }
    }

    pub fn status(&self) -> AgentStatus {
        match self.slot {
            Slot::Idle => AgentStatus::Idle,
            Slot::Pending(_) => AgentStatus::Pending,
            Slot::Resolved(_) => AgentStatus::Resolved,
        }
    }

    fn resolve(&mut self, (agent, result): Reply) {
        debug!(agent = %self.name, ?result, "move resolved");
        self.agent = Some(agent);
        self.slot = Slot::Resolved(result);
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod agent_tests;
