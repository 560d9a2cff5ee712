//! Status and mode enumerations reported by the node.
use crate::macros::wire_enum;

wire_enum! {
    /// How irreversibly a transaction or block has been committed.
    FinalityStatus, "finality status", decode_unknown = false {
        Unknown => "UNKNOWN",
        Pending => "PENDING",
        AcceptedOnL2 => "ACCEPTED_ON_L2",
        AcceptedOnL1 => "ACCEPTED_ON_L1",
        Rejected => "REJECTED",
    }
}

wire_enum! {
    /// Outcome of executing a transaction.
    ExecutionStatus, "execution status", decode_unknown = false {
        Unknown => "UNKNOWN",
        Succeeded => "SUCCEEDED",
        Reverted => "REVERTED",
    }
}

wire_enum! {
    /// Unit in which a fee is denominated.
    FeeUnit, "fee unit", decode_unknown = false {
        Unknown => "unknown",
        Wei => "WEI",
        Fri => "FRI",
    }
}

wire_enum! {
    /// Block level data availability mode.
    ///
    /// Uses a different vocabulary from [TxDaMode] for the same two states.
    BlockDaMode, "block DA mode", decode_unknown = false {
        Unknown => "UNKNOWN",
        /// Data posted to L1 as blobs.
        L1 => "BLOB",
        /// Data posted to L1 as calldata.
        L2 => "CALLDATA",
    }
}

wire_enum! {
    /// Transaction level data availability mode.
    TxDaMode, "transaction DA mode", decode_unknown = false {
        Unknown => "UNKNOWN",
        L1 => "L1",
        L2 => "L2",
    }
}
