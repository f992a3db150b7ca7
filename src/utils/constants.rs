use crate::utils;

pub const DEFAULT_FORCE_CONSTANTS: utils::ForceConstants = utils::ForceConstants {
    coefficient: 10.0,
};
