use crate::parsing::blocks::types::Table;

impl Table {
    /// Table syntax is reserved but not recognised: never matches.
    pub fn matches(_candidate: &str) -> bool {
        false
    }
}
