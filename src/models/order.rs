use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Listing order requested by a caller.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Order {
    #[default]
    Newest,
    Oldest,
    #[value(name = "mostliked")]
    MostLiked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Hearts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Order {
    pub fn sort(self) -> Sort {
        match self {
            Order::Newest => Sort {
                field: SortField::CreatedAt,
                direction: Direction::Descending,
            },
            Order::Oldest => Sort {
                field: SortField::CreatedAt,
                direction: Direction::Ascending,
            },
            Order::MostLiked => Sort {
                field: SortField::Hearts,
                direction: Direction::Descending,
            },
        }
    }
}
