use crate::utils::error::{Result, SeatingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id!(
    /// Identifies a cinema hall aggregate.
    HallId
);
uuid_id!(
    /// Identifies a single row inside a hall.
    RowId
);
uuid_id!(
    /// Identifies a reservation; the duplicate-submission guard keys on it.
    ReservationId
);

/// A seat addressed by row number and seat number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatPosition {
    row: u32,
    number: u32,
}

impl SeatPosition {
    pub const MIN_ROW: u32 = 1;
    pub const MAX_ROW: u32 = 9;

    pub fn new(row: u32, number: u32) -> Result<Self> {
        if !(Self::MIN_ROW..=Self::MAX_ROW).contains(&row) {
            return Err(SeatingError::rule(format!(
                "Row number must be between {} and {} inclusive.",
                Self::MIN_ROW,
                Self::MAX_ROW
            )));
        }

        Ok(Self { row, number })
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    id: RowId,
    number: u32,
    seats: u32,
}

impl Row {
    pub fn new(number: u32, seats: u32) -> Self {
        Self {
            id: RowId::new(),
            number,
            seats,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }
}
