//! Literal Parser
//!
//! Turns `kind:value` text into a boxed value of the matching payload type.
//! Used by front ends that receive values as strings.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta};

use crate::boxed::BoxedValue;
use crate::error::{PmvError, PmvResult};
use crate::types::{ConnectionTethering, ConnectionType, Stage};

/// Payload kinds accepted by [`parse_literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Bool,
    Int,
    Uint,
    Double,
    String,
    Time,
    Duration,
    Connection,
    Connections,
    Tethering,
    Stage,
}

impl LiteralKind {
    pub fn name(self) -> &'static str {
        match self {
            LiteralKind::Bool => "bool",
            LiteralKind::Int => "int",
            LiteralKind::Uint => "uint",
            LiteralKind::Double => "double",
            LiteralKind::String => "string",
            LiteralKind::Time => "time",
            LiteralKind::Duration => "duration",
            LiteralKind::Connection => "connection",
            LiteralKind::Connections => "connections",
            LiteralKind::Tethering => "tethering",
            LiteralKind::Stage => "stage",
        }
    }

    /// Parse `input` as a value of this kind.
    pub fn parse(self, input: &str) -> PmvResult<BoxedValue> {
        let invalid = || PmvError::InvalidLiteral {
            kind: self.name(),
            input: input.to_string(),
        };
        let text = input.trim();

        let boxed = match self {
            LiteralKind::Bool => BoxedValue::new(text.parse::<bool>().map_err(|_| invalid())?),
            LiteralKind::Int => BoxedValue::new(text.parse::<i64>().map_err(|_| invalid())?),
            LiteralKind::Uint => BoxedValue::new(text.parse::<u64>().map_err(|_| invalid())?),
            LiteralKind::Double => BoxedValue::new(text.parse::<f64>().map_err(|_| invalid())?),
            // strings are taken verbatim, surrounding whitespace included
            LiteralKind::String => BoxedValue::new(input.to_string()),
            LiteralKind::Time => {
                let secs = text.parse::<i64>().map_err(|_| invalid())?;
                BoxedValue::new(DateTime::from_timestamp(secs, 0).ok_or_else(invalid)?)
            }
            LiteralKind::Duration => {
                let secs = text.parse::<i64>().map_err(|_| invalid())?;
                BoxedValue::new(TimeDelta::try_seconds(secs).ok_or_else(invalid)?)
            }
            LiteralKind::Connection => BoxedValue::new(ConnectionType::from_name(text)),
            LiteralKind::Connections => {
                let set: BTreeSet<ConnectionType> = text
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(ConnectionType::from_name)
                    .collect();
                BoxedValue::new(set)
            }
            LiteralKind::Tethering => BoxedValue::new(ConnectionTethering::from_name(text)),
            LiteralKind::Stage => BoxedValue::new(Stage::from_name(text).ok_or_else(invalid)?),
        };
        Ok(boxed)
    }
}

impl FromStr for LiteralKind {
    type Err = PmvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "bool" => LiteralKind::Bool,
            "int" => LiteralKind::Int,
            "uint" => LiteralKind::Uint,
            "double" => LiteralKind::Double,
            "string" => LiteralKind::String,
            "time" => LiteralKind::Time,
            "duration" => LiteralKind::Duration,
            "connection" => LiteralKind::Connection,
            "connections" => LiteralKind::Connections,
            "tethering" => LiteralKind::Tethering,
            "stage" => LiteralKind::Stage,
            _ => return Err(PmvError::UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}

/// Parse `kind:value` into a boxed value.
pub fn parse_literal(literal: &str) -> PmvResult<BoxedValue> {
    let (kind, value) = literal
        .split_once(':')
        .ok_or_else(|| PmvError::UnknownKind(literal.to_string()))?;
    kind.parse::<LiteralKind>()?.parse(value)
}
