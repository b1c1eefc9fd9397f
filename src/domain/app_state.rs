#![allow(dead_code)]

use std::fmt::Display;

use tracing::debug;

use super::entities::{Skip, SkipId};

/// Issued when a fetch starts; only the latest ticket may apply its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was started; the result was dropped.
    Stale,
}

/// Skip list, selection and load status of the selection step.
#[derive(Clone, Debug, PartialEq)]
pub struct SkipState {
    /// Available skips, ascending by size.
    pub skips: Vec<Skip>,
    pub selected: Option<Skip>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for SkipState {
    fn default() -> Self {
        Self {
            skips: Vec::new(),
            selected: None,
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl SkipState {
    pub fn begin_request(&mut self) -> RequestTicket {
        self.generation += 1;
        self.loading = true;
        RequestTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a fetch result unless a newer request superseded it.
    ///
    /// On failure the list is left as it was and the error message is stored.
    pub fn complete<E: Display>(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Skip>, E>,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded skip response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(skips) => {
                self.skips = skips;
                self.error = None;
                self.reconcile_selection();
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
        FetchOutcome::Applied
    }

    /// Selects a skip; disabled skips are ignored.
    pub fn select(&mut self, skip: &Skip) -> bool {
        if skip.is_disabled() {
            return false;
        }
        debug!(skip_id = skip.id, size = skip.size, "skip selected");
        self.selected = Some(skip.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, id: SkipId) -> bool {
        self.selected.as_ref().map(|s| s.id == id).unwrap_or(false)
    }

    /// Drops everything except the generation counter so in-flight tickets stay stale.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
    }

    fn reconcile_selection(&mut self) {
        let Some(current) = self.selected.take() else {
            return;
        };
        match self.skips.iter().find(|skip| skip.id == current.id) {
            Some(fresh) if !fresh.is_disabled() => self.selected = Some(fresh.clone()),
            _ => debug!(skip_id = current.id, "selected skip no longer offered; clearing"),
        }
    }
}
