//! Domain — systems sharing terminology, models or business purpose.

use serde::{Deserialize, Serialize};

use super::{KindSpec, KIND_DOMAIN};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainSpec {
    pub owner: String,
}

impl KindSpec for DomainSpec {
    const KIND: &'static str = KIND_DOMAIN;
}
