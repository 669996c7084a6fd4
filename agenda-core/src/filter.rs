//! Compound filters over record collections.
//!
//! Each dimension is either unconstrained (`Filter::All`) or pinned to one
//! value. A record passes when it satisfies all three dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AgendaResult;
use crate::record::{Area, Label, Scheduled, Status};

/// Words accepted as "no constraint" when parsing user input
const MATCH_ALL_WORDS: [&str; 4] = ["todos", "todas", "all", "*"];

/// One filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Filter::Only(_))
    }
}

impl<T: Label> Filter<T> {
    /// Parse a label, or one of the match-all words ("Todos", "all"...).
    pub fn parse(input: &str) -> AgendaResult<Self> {
        let trimmed = input.trim();
        if MATCH_ALL_WORDS
            .iter()
            .any(|w| w.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Filter::All);
        }
        T::parse_label(trimmed).map(Filter::Only)
    }

    /// Parse an optional CLI value; absent means unconstrained.
    pub fn parse_opt(input: Option<&str>) -> AgendaResult<Self> {
        input.map_or(Ok(Filter::All), Self::parse)
    }
}

impl<T: Label> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "Todos"),
            Filter::Only(value) => write!(f, "{}", value.label()),
        }
    }
}

/// Filters applied to a record view: category, area and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection<C> {
    pub category: Filter<C>,
    pub area: Filter<Area>,
    pub status: Filter<Status>,
}

impl<C> Default for FilterSelection<C> {
    fn default() -> Self {
        FilterSelection {
            category: Filter::All,
            area: Filter::All,
            status: Filter::All,
        }
    }
}

impl<C: Label> FilterSelection<C> {
    /// No constraint on any dimension
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: C) -> Self {
        self.category = Filter::Only(category);
        self
    }

    pub fn with_area(mut self, area: Area) -> Self {
        self.area = Filter::Only(area);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Filter::Only(status);
        self
    }

    pub fn matches<R: Scheduled<Category = C>>(&self, record: &R) -> bool {
        self.category.matches(&record.category())
            && self.area.matches(&record.area())
            && self.status.matches(&record.status())
    }

    /// Records passing every dimension, in input order.
    pub fn apply<'a, R, I>(&self, records: I) -> Vec<&'a R>
    where
        R: Scheduled<Category = C> + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let kept: Vec<&'a R> = records.into_iter().filter(|r| self.matches(*r)).collect();
        tracing::debug!(filters = %self, kept = kept.len(), "applied filters");
        kept
    }

    /// Whether any dimension is constrained
    pub fn has_active_filters(&self) -> bool {
        self.category.is_active() || self.area.is_active() || self.status.is_active()
    }

    /// Reset every dimension to unconstrained.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl<C: Label> fmt::Display for FilterSelection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tipo={} área={} status={}",
            self.category, self.area, self.status
        )
    }
}
