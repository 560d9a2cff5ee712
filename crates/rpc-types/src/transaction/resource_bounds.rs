use serde::{Deserialize, Serialize};
use starknet_client_common::Number;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBound {
    pub max_amount: Number,
    pub max_price_per_unit: Number,
}

/// Per-resource fee bounds of a V3 transaction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBounds {
    pub l1_gas: ResourceBound,
    pub l2_gas: ResourceBound,
}
